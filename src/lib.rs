//! LeaseLens: 租约助手终端界面
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod ui;
