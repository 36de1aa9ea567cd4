//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use super::commands::Command;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 文档命令
    Run(Command),

    // 文档输入框
    StartEditDocument,
    FinishEditDocument,
    ClearDocument,
    Input(char), // 输入字符
    NewLine,     // Enter
    DeleteChar,  // Backspace
}
