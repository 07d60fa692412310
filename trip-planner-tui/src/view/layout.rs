//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use trip_planner_core::types::SortType;
use trip_planner_core::utils::datetime::format_day;

use super::components;
use super::theme::{colors, Styles};

use crate::model::App;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 工具栏 + 事件列表 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Length(1), // 工具栏
            Constraint::Min(1),    // 事件列表
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_toolbar(app, frame, main_layout[1]);
    render_content(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);
}

/// 渲染标题栏：整个行程的路线、日期和总花费（不受过滤器影响）
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let text = match app.board.summary() {
        Some(summary) => format!(
            " Trip Planner │ {} │ {} — {} │ Total: {}",
            summary.route,
            format_day(summary.date_from),
            format_day(summary.date_to),
            components::money(summary.total_cost),
        ),
        None => " Trip Planner".to_string(),
    };

    let title = Paragraph::new(text).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染工具栏：过滤器和排序
fn render_toolbar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let active_style = Style::default()
        .fg(c.highlight)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let mut spans = vec![Span::styled(" Filter ", Style::default().fg(c.muted))];
    for (i, (filter, enabled)) in app.board.available_filters().into_iter().enumerate() {
        let style = if filter == app.board.filter() {
            active_style
        } else if enabled {
            Style::default().fg(c.fg)
        } else {
            Styles::disabled()
        };
        spans.push(Span::styled(format!("{}:{}", i + 1, filter.label()), style));
        spans.push(Span::raw("  "));
    }

    spans.push(Span::styled("│ Sort ", Style::default().fg(c.muted)));
    for sort in SortType::ALL {
        let style = if sort == app.board.sort() {
            active_style
        } else {
            Style::default().fg(c.fg)
        };
        spans.push(Span::styled(sort.label(), style));
        spans.push(Span::raw("  "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 渲染事件列表区域
fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let border_style = if app.board.editing().is_some() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(format!(" Events ({}) ", app.board.presenters().len()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    components::event_list::render(app, frame, inner_area);
}
