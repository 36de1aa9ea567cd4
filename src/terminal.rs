//! 终端模式切换
//!
//! `TerminalGuard` 存活期间终端处于 raw mode + 备用屏幕，drop 时无论成功与否都会恢复

use std::io::{self, Write};

use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// 离开备用屏幕并恢复光标
pub fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// 进入 raw mode 和备用屏幕，中途失败也会由 drop 恢复
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // 两步互不依赖，任何一步失败都不影响另一步
        if let Err(err) = disable_raw_mode() {
            log::error!("failed to disable raw mode: {}", err);
        }
        if let Err(err) = leave_screen(&mut io::stdout()) {
            log::error!("failed to leave alternate screen: {}", err);
        }
    }
}
