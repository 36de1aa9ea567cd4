//! 通用 UI 组件
//!
//! 输入框、文本面板等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// [组件] 带有标题和样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) {
    let style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    // 编辑时在末尾显示光标
    let value = if is_focused {
        format!("{}▏", value)
    } else {
        value.to_string()
    };

    let input = Paragraph::new(value)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);
}

/// [组件] 只读文本面板，内容为空时显示灰色提示
pub fn render_text_panel(frame: &mut Frame, area: Rect, title: &str, text: &str, placeholder: &str) {
    let paragraph = if text.is_empty() {
        Paragraph::new(placeholder.to_string()).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(text.to_string())
    };

    let panel = paragraph
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(panel, area);
}
