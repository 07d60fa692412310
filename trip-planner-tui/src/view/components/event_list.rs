//! 事件列表

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use trip_planner_core::presenter::Node;

use super::{event_form, event_row};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染事件列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(message) = app.board.empty_message() {
        render_empty(message, frame, area);
    } else {
        render_list(app, frame, area);
    }
}

/// 渲染空状态
fn render_empty(message: &'static str, frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(colors().muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 按 presenter 顺序渲染每个可见节点
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let surface = app.board.target();
    let reference = app.board.reference();
    let now = Instant::now();

    let items: Vec<ListItem> = app
        .board
        .presenters()
        .iter()
        .map(|presenter| {
            let node_id = presenter.visible_node();
            let offset = surface.shake_offset(node_id, now).unwrap_or(0);

            let text = match surface.node(node_id) {
                Some(Node::View(view)) => Text::from(event_row::line(view, offset)),
                Some(Node::Edit { form, status }) => Text::from(event_form::lines(
                    form,
                    *status,
                    &app.cursor,
                    reference,
                    offset,
                )),
                None => {
                    tracing::warn!("Presenter {} has no node on the surface", presenter.id());
                    Text::from("")
                }
            };
            ListItem::new(text)
        })
        .collect();

    // 表单打开时不高亮整块
    let highlight = if app.board.editing().is_some() {
        Style::default()
    } else {
        Styles::selected()
    };

    let list = List::new(items).highlight_style(highlight);

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
