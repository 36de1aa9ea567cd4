use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use leaselens::config::{data_dir, default_config_path, load_config};
use leaselens::error::AppError;
use leaselens::logging;
use leaselens::terminal::TerminalGuard;
use leaselens::ui::{self, App, render};

fn main() -> Result<(), AppError> {
    // 配置文件 (~/.config/leaselens/config.toml)
    let config_path = default_config_path()?;
    let config = load_config(&config_path)?;

    // 创建应用状态
    let mut app = App::new(config.document.sample_text.clone());

    // 日志文件 (~/.local/share/leaselens/leaselens.log)
    let log_path = match &config.logging.file {
        Some(path) => path.clone(),
        None => data_dir()?.join("leaselens.log"),
    };
    match logging::initialize(config.logging.level_filter()?, &log_path) {
        Ok(()) => log::info!("config loaded from {}", config_path.display()),
        // 终端进入备用屏幕后 stderr 不可见，改为显示在状态栏
        Err(err) => {
            app.message = Some(format!(
                "Logging disabled: {}: {}",
                log_path.display(),
                err
            ))
        }
    }

    // 设置终端，guard drop 时恢复
    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    drop(terminal);
    drop(guard);

    log::info!("exiting after {} checks", app.ui.history.len());
    result.map_err(AppError::from)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key.code) {
                break;
            }
        }
    }
    Ok(())
}
