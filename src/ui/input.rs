//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::KeyCode;

use super::actions::Action;
use super::commands::Command;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('s') => Some(Action::Run(Command::Summarize)),
            KeyCode::Char('r') => Some(Action::Run(Command::CheckRisks)),
            KeyCode::Char('x') => Some(Action::Run(Command::ExplainClause)),
            KeyCode::Char('i') | KeyCode::Enter => Some(Action::StartEditDocument),
            KeyCode::Char('c') => Some(Action::ClearDocument),
            _ => None,
        },
        AppMode::EditingDocument => match key {
            KeyCode::Esc => Some(Action::FinishEditDocument),
            KeyCode::Enter => Some(Action::NewLine),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(app.mode, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
