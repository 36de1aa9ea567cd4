//! 文档命令 (UIController)
//!
//! 三个按钮各对应一个具名事件和一个处理函数，处理函数只修改传入的 `UiState`

use std::collections::HashMap;
use std::fmt;

use super::state::UiState;
use crate::models::{CLAUSE_TEXT, HistoryEntry, RISKS_TEXT, SUMMARY_TEXT};

/// 命令处理函数
pub type Handler = fn(&mut UiState);

/// 具名 UI 事件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Summarize,
    CheckRisks,
    ExplainClause,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::Summarize, Command::CheckRisks, Command::ExplainClause];

    /// 事件名
    pub fn event_name(self) -> &'static str {
        match self {
            Command::Summarize => "summarize",
            Command::CheckRisks => "check_risks",
            Command::ExplainClause => "explain_clause",
        }
    }

    /// 写入历史记录时使用的标签
    pub fn label(self) -> &'static str {
        match self {
            Command::Summarize => "Summary",
            Command::CheckRisks => "Risks",
            Command::ExplainClause => "Explain Clause",
        }
    }

    /// 该命令写入结果区的固定文本
    pub fn result_text(self) -> &'static str {
        match self {
            Command::Summarize => SUMMARY_TEXT,
            Command::CheckRisks => RISKS_TEXT,
            Command::ExplainClause => CLAUSE_TEXT,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// 事件 -> 处理函数，每个事件只有一个处理函数
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    handlers: HashMap<Command, Handler>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册三个默认处理函数
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Command::Summarize, summarize);
        registry.register(Command::CheckRisks, check_risks);
        registry.register(Command::ExplainClause, explain_clause);
        registry
    }

    /// 注册处理函数，返回被替换掉的旧处理函数
    pub fn register(&mut self, command: Command, handler: Handler) -> Option<Handler> {
        self.handlers.insert(command, handler)
    }

    /// 同步执行命令，未注册时返回 false
    pub fn run(&self, command: Command, state: &mut UiState) -> bool {
        match self.handlers.get(&command) {
            Some(handler) => {
                log::info!("running `{}`", command);
                handler(state);
                true
            }
            None => {
                log::warn!("no handler registered for `{}`", command);
                false
            }
        }
    }
}

/// 摘要
pub fn summarize(state: &mut UiState) {
    let text = &state.document_text;
    log::debug!("summarize: document has {} chars", text.chars().count());
    state.result.set(SUMMARY_TEXT);
    save_history(state, Command::Summarize.label());
}

/// 风险检查
pub fn check_risks(state: &mut UiState) {
    let text = &state.document_text;
    log::debug!("check_risks: document has {} chars", text.chars().count());
    state.result.set(RISKS_TEXT);
    save_history(state, Command::CheckRisks.label());
}

/// 条款解释（不读取文档）
pub fn explain_clause(state: &mut UiState) {
    state.result.set(CLAUSE_TEXT);
    save_history(state, Command::ExplainClause.label());
}

/// 追加一条 "<label> checked" 历史记录
pub fn save_history(state: &mut UiState, label: &str) {
    let entry = HistoryEntry::new(label);
    log::debug!("history += {:?}", entry.text);
    state.history.push(entry);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_event_name() {
        let names: Vec<String> = Command::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["summarize", "check_risks", "explain_clause"]);
    }

    #[test]
    fn unregistered_command_is_not_run() {
        let registry = CommandRegistry::new();
        let mut state = UiState::new("lease");
        assert!(!registry.run(Command::Summarize, &mut state));
        assert!(state.result.is_empty());
        assert!(state.history.is_empty());
    }

    #[test]
    fn register_replaces_previous_handler() {
        let mut registry = CommandRegistry::with_defaults();
        let previous = registry.register(Command::Summarize, explain_clause);
        assert!(previous.is_some());

        let mut state = UiState::default();
        registry.run(Command::Summarize, &mut state);
        assert_eq!(state.result.text(), CLAUSE_TEXT);
    }
}
