//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据是否在编辑生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 进行中的请求
    if app.in_flight > 0 {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("⟳ {}", app.in_flight),
            Style::default().fg(Color::Cyan),
        ));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.board.editing().is_some() {
        vec![
            ("Tab", "Field"),
            ("←→", "Change"),
            ("Enter", "Save"),
            ("Ctrl+r", "Discard"),
            ("Alt+d", "Delete"),
            ("Esc", "Close"),
        ]
    } else {
        vec![
            ("↑↓", "Select"),
            ("Enter", "Edit"),
            ("f", "Favorite"),
            ("s", "Sort"),
            ("1-4", "Filter"),
            ("Alt+d", "Delete"),
            ("q", "Quit"),
        ]
    }
}
