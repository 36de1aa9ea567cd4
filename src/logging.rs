//! 日志初始化
//!
//! 终端由 UI 占用，应用日志只写文件。

use std::fs::{self, File};
use std::io;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, TestLogger, WriteLogger};

/// 创建日志文件，父目录不存在时一并创建
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

/// 将日志写入指定文件
///
/// 返回的错误由调用方展示给用户，应用照常运行。
pub fn initialize(level: LevelFilter, path: &Path) -> io::Result<()> {
    let file = open_log_file(path)?;
    let _ = WriteLogger::init(level, build_config(), file);
    Ok(())
}

/// 测试日志，输出交给 test harness 捕获；已初始化时什么都不做
pub fn initialize_for_tests() {
    let _ = TestLogger::init(LevelFilter::Debug, build_config());
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
