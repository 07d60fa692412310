//! 编辑表单（展开状态）

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use trip_planner_core::presenter::{EditStatus, PointForm, ReferenceData};
use trip_planner_core::utils::datetime::{format_day, format_time};

use super::{fit, money};
use crate::model::{FormCursor, FormField};
use crate::view::theme::{colors, Styles};

/// 字段名列宽度
const LABEL_WIDTH: usize = 13;

/// 构建表单的所有行
pub fn lines(
    form: &PointForm,
    status: EditStatus,
    cursor: &FormCursor,
    reference: &ReferenceData,
    offset: u16,
) -> Vec<Line<'static>> {
    let c = colors();
    let indent = " ".repeat(usize::from(offset));
    let draft = form.draft();

    let mut lines = vec![header(form, status, &indent)];

    for field in FormField::ALL {
        if field == FormField::Offers {
            continue;
        }
        let value = match field {
            FormField::Type => format!("◀ {} ▶", draft.event_type.label()),
            FormField::Destination => {
                if cursor.field == field && !cursor.destination_input.is_empty() {
                    format!("{}_", cursor.destination_input)
                } else {
                    reference.destination_name(&draft.destination)
                }
            }
            FormField::Start => datetime(draft.date_from),
            FormField::End => datetime(draft.date_to),
            FormField::Price => money(draft.base_price),
            FormField::Offers => String::new(),
        };
        lines.push(field_line(field, value, cursor, status, &indent));
    }

    // 附加服务
    let offers = reference.offers.offers_for(draft.event_type);
    let focused = cursor.field == FormField::Offers;
    lines.push(Line::from(vec![
        Span::raw(indent.clone()),
        Span::styled(
            format!("{} {}", marker(focused), fit(FormField::Offers.label(), LABEL_WIDTH)),
            label_style(focused, status),
        ),
        Span::styled(
            if offers.is_empty() { "—" } else { "" },
            Style::default().fg(c.muted),
        ),
    ]));
    for (i, offer) in offers.iter().enumerate() {
        let checked = draft.offers.contains(&offer.id);
        let style = if focused && i == cursor.offer_index && !status.is_disabled() {
            Styles::selected()
        } else if status.is_disabled() {
            Styles::disabled()
        } else {
            Style::default().fg(c.fg)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{indent}    ")),
            Span::styled(
                format!(
                    "[{}] {} +{}",
                    if checked { "x" } else { " " },
                    offer.title,
                    money(offer.price)
                ),
                style,
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines
}

fn header(form: &PointForm, status: EditStatus, indent: &str) -> Line<'static> {
    let c = colors();
    let draft = form.draft();
    let dirty = if form.is_dirty() { " *" } else { "" };

    let (badge, badge_style) = match status {
        EditStatus::Idle => (String::new(), Style::default()),
        EditStatus::Saving => (" Saving...".to_string(), Style::default().fg(c.warning)),
        EditStatus::Deleting => (" Deleting...".to_string(), Style::default().fg(c.warning)),
        EditStatus::Aborting => (" Rejected".to_string(), Styles::shaking()),
    };

    Line::from(vec![
        Span::raw(indent.to_string()),
        Span::styled(
            format!("┌ Edit #{}{dirty}", draft.id),
            Style::default()
                .fg(c.border_focused)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(badge, badge_style),
    ])
}

fn field_line(
    field: FormField,
    value: String,
    cursor: &FormCursor,
    status: EditStatus,
    indent: &str,
) -> Line<'static> {
    let focused = cursor.field == field;
    let value_style = if status.is_disabled() {
        Styles::disabled()
    } else if focused {
        Styles::selected()
    } else {
        Style::default().fg(colors().fg)
    };

    Line::from(vec![
        Span::raw(indent.to_string()),
        Span::styled(
            format!("{} {}", marker(focused), fit(field.label(), LABEL_WIDTH)),
            label_style(focused, status),
        ),
        Span::styled(value, value_style),
    ])
}

fn marker(focused: bool) -> &'static str {
    if focused {
        "│▸"
    } else {
        "│ "
    }
}

fn label_style(focused: bool, status: EditStatus) -> Style {
    let c = colors();
    if focused && !status.is_disabled() {
        Style::default()
            .fg(c.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    }
}

fn datetime(dt: chrono::DateTime<chrono::Utc>) -> String {
    format!("◀ {} {} ▶", format_day(dt), format_time(dt))
}
