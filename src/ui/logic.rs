//! 业务逻辑处理 (Update/Dispatch)
//!
//! 每个 Action 同步执行完毕后才处理下一个

use super::actions::Action;
use super::commands::Command;
use super::state::{App, AppMode};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Run(command) => self.run_command(command),

            Action::StartEditDocument => self.start_edit_document(),
            Action::FinishEditDocument => self.finish_edit_document(),
            Action::ClearDocument => self.clear_document(),

            Action::Input(c) => {
                if self.mode == AppMode::EditingDocument {
                    self.ui.document_text.push(c);
                }
            }
            Action::NewLine => {
                if self.mode == AppMode::EditingDocument {
                    self.ui.document_text.push('\n');
                }
            }
            Action::DeleteChar => {
                if self.mode == AppMode::EditingDocument {
                    self.ui.document_text.pop();
                }
            }
        }
        false
    }

    /// 执行文档命令
    pub fn run_command(&mut self, command: Command) {
        self.commands.run(command, &mut self.ui);
    }

    // ============ 文档输入框 ============

    pub fn start_edit_document(&mut self) {
        self.mode = AppMode::EditingDocument;
        self.message = None;
    }

    pub fn finish_edit_document(&mut self) {
        self.mode = AppMode::Normal;
        self.message = Some(format!(
            "Document: {} chars",
            self.ui.document_text.chars().count()
        ));
    }

    pub fn clear_document(&mut self) {
        self.ui.document_text.clear();
        self.message = Some("Document cleared".to_string());
        log::info!("document cleared");
    }
}
