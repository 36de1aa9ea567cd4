//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): UiState 与 App
//! - View (view/): 纯函数，将 State 映射为 UI
//! - Intent (actions.rs): 用户交互转化为明确的语义化 Action
//! - commands.rs: 三个文档命令及其注册表

pub mod actions;
pub mod commands;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

pub use actions::Action;
pub use commands::{
    Command, CommandRegistry, Handler, check_risks, explain_clause, save_history, summarize,
};
pub use input::{get_action, handle_key_event};
pub use state::{App, AppMode, UiState};
pub use view::render;
