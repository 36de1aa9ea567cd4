//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::commands::Command;
use super::state::{App, AppMode};
use components::{render_input_widget, render_text_panel};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(10),   // 主体
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(body[1]);

    render_title(frame, chunks[0]);
    render_document(frame, app, body[0]);
    render_text_panel(
        frame,
        right[0],
        "Result",
        app.ui.result.text(),
        "Press [s], [r] or [x] to analyse the document",
    );
    render_history(frame, app, right[1]);
    render_help(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("⚖️ LeaseLens: rental agreement helper")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_document(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.mode == AppMode::EditingDocument;
    let title = if editing {
        "Document (editing)"
    } else {
        "Document"
    };
    render_input_widget(
        frame,
        area,
        title,
        &app.ui.document_text,
        editing,
        Color::Yellow,
    );
}

fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let entries = app.ui.history.entries();
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.recorded_at.format("%H:%M:%S  ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.text.clone(), Style::default().fg(Color::Green)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!("History ({})", entries.len()))
            .borders(Borders::ALL),
    );

    // 始终滚动到最新一条
    let mut state = ListState::default();
    state.select(entries.len().checked_sub(1));

    frame.render_stateful_widget(list, area, &mut state);
}

fn help_text(mode: AppMode) -> String {
    match mode {
        AppMode::Normal => {
            let commands: Vec<String> = Command::ALL
                .iter()
                .map(|command| {
                    let (key, name) = command_button(*command);
                    format!("[{}] {}", key, name)
                })
                .collect();
            format!("{}  [i] Edit  [c] Clear  [q] Quit", commands.join("  "))
        }
        AppMode::EditingDocument => "Type to edit  [Enter] New line  [Esc] Done".to_string(),
    }
}

/// 按键与按钮文字，需与 input.rs 中的映射保持一致
fn command_button(command: Command) -> (char, &'static str) {
    match command {
        Command::Summarize => ('s', "Summarize"),
        Command::CheckRisks => ('r', "Check Risks"),
        Command::ExplainClause => ('x', "Explain Clause"),
    }
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = help_text(app.mode);
    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
