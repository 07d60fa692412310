//! 事件行（折叠状态）

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use trip_planner_core::presenter::PointView;
use trip_planner_core::utils::datetime::{format_day, format_duration, format_time};

use super::{fit, money};
use crate::view::theme::colors;

/// 类型列宽度
const TYPE_WIDTH: usize = 12;
/// 目的地列宽度
const DESTINATION_WIDTH: usize = 14;

/// 构建一行事件
pub fn line(view: &PointView, offset: u16) -> Line<'static> {
    let c = colors();
    let event = &view.event;

    let mut spans = vec![
        Span::raw(" ".repeat(usize::from(offset))),
        Span::styled(
            format!("{:<7}", format_day(event.date_from)),
            Style::default().fg(c.muted),
        ),
        Span::styled(fit(event.event_type.label(), TYPE_WIDTH), Style::default().fg(c.fg)),
        Span::styled(
            fit(&view.destination_name, DESTINATION_WIDTH),
            Style::default().fg(c.fg),
        ),
        Span::raw(format!(
            "{} — {}  ",
            format_time(event.date_from),
            format_time(event.date_to)
        )),
        Span::styled(
            format!("{:<12}", format_duration(view.duration())),
            Style::default().fg(c.muted),
        ),
        Span::styled(
            format!("{:>6}", money(event.base_price)),
            Style::default().fg(c.success),
        ),
        Span::styled(
            if event.is_favorite { "  ★" } else { "  ☆" },
            Style::default().fg(if event.is_favorite { c.favorite } else { c.muted }),
        ),
    ];

    for offer in &view.offers {
        spans.push(Span::styled(
            format!("  + {} {}", offer.title, money(offer.price)),
            Style::default().fg(c.muted),
        ));
    }

    Line::from(spans)
}
