//! App 状态定义 (Model)
//!
//! `UiState` 是交给每个命令处理函数的显式上下文，`App` 在其外包了一层交互状态

use super::commands::CommandRegistry;
use crate::models::{History, ResultDisplay};

/// 命令处理函数可见的全部状态：文档、结果显示区、历史记录
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub document_text: String,
    pub result: ResultDisplay,
    pub history: History,
}

impl UiState {
    pub fn new(document_text: impl Into<String>) -> Self {
        Self {
            document_text: document_text.into(),
            ..Self::default()
        }
    }
}

/// 应用状态
pub struct App {
    pub ui: UiState,
    pub mode: AppMode,
    pub message: Option<String>,
    pub commands: CommandRegistry,
}

/// 应用模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    EditingDocument,
}

impl App {
    /// 创建新的应用实例，注册默认命令
    pub fn new(document_text: impl Into<String>) -> Self {
        Self {
            ui: UiState::new(document_text),
            mode: AppMode::Normal,
            message: None,
            commands: CommandRegistry::with_defaults(),
        }
    }
}
