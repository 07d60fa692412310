//! 编辑表单更新逻辑
//!
//! 草稿的每一次修改都经过 board.edit_form()，
//! 表单锁定（保存中、删除中、抖动中）时修改会被拒绝。

use chrono::TimeDelta;
use trip_planner_core::types::EventId;

use crate::message::FormMessage;
use crate::model::{App, FormField};

use super::report;

/// 价格的大步长
const PRICE_STEP_LARGE: u32 = 100;

/// 处理编辑表单消息
pub fn update(app: &mut App, msg: FormMessage) {
    let Some(id) = app.editing_id() else {
        return;
    };

    match msg {
        FormMessage::NextField => {
            if commit_destination(app, &id) {
                app.cursor.field = app.cursor.field.next();
                app.cursor.offer_index = 0;
            }
        }

        FormMessage::PrevField => {
            if commit_destination(app, &id) {
                app.cursor.field = app.cursor.field.prev();
                app.cursor.offer_index = 0;
            }
        }

        FormMessage::Prev => step(app, &id, false, false),
        FormMessage::Next => step(app, &id, true, false),
        FormMessage::PrevLarge => step(app, &id, false, true),
        FormMessage::NextLarge => step(app, &id, true, true),

        FormMessage::Input(ch) => input(app, &id, ch),

        FormMessage::Backspace => backspace(app, &id),

        FormMessage::ToggleOffer => toggle_offer(app, &id),

        FormMessage::Submit => {
            if !commit_destination(app, &id) {
                return;
            }
            match app.board.begin_submit(&id) {
                Ok(change) => {
                    app.enqueue(change);
                    app.set_status("Saving...");
                }
                Err(e) => report(app, "Cannot save", &e),
            }
        }

        FormMessage::Reset => {
            if let Err(e) = app.board.reset_view(&id) {
                report(app, "Cannot close form", &e);
                return;
            }
            app.cursor.reset();
            app.clear_status();
        }

        FormMessage::Delete => match app.board.begin_delete(&id) {
            Ok(change) => {
                app.enqueue(change);
                app.set_status("Deleting...");
            }
            Err(e) => report(app, "Cannot delete", &e),
        },
    }
}

/// 把输入中的目的地名称写入草稿，失败时保留输入
fn commit_destination(app: &mut App, id: &EventId) -> bool {
    if app.cursor.destination_input.is_empty() {
        return true;
    }

    let name = std::mem::take(&mut app.cursor.destination_input);
    let result = app.board.edit_form(id, |form, reference| {
        form.set_destination_by_name(&name, reference.destinations.as_ref())
    });

    match result {
        Ok(()) => true,
        Err(e) => {
            report(app, "Invalid destination", &e);
            app.cursor.destination_input = name;
            false
        }
    }
}

/// 切换当前字段的值
fn step(app: &mut App, id: &EventId, forward: bool, large: bool) {
    let result = match app.cursor.field {
        FormField::Type => {
            app.cursor.offer_index = 0;
            app.board.edit_form(id, |form, _| {
                let current = form.draft().event_type;
                form.set_type(if forward {
                    current.next()
                } else {
                    current.previous()
                });
                Ok(())
            })
        }

        FormField::Destination => {
            app.cursor.destination_input.clear();
            app.board.edit_form(id, |form, reference| {
                let all = reference.destinations.all();
                if all.is_empty() {
                    return Ok(());
                }
                let len = all.len();
                let next = match all.iter().position(|d| d.id == form.draft().destination) {
                    Some(i) if forward => (i + 1) % len,
                    Some(i) => (i + len - 1) % len,
                    None => 0,
                };
                form.set_destination(all[next].id.clone());
                Ok(())
            })
        }

        FormField::Start | FormField::End => {
            let unit = if large {
                TimeDelta::days(1)
            } else {
                TimeDelta::hours(1)
            };
            let delta = if forward { unit } else { -unit };
            let start = app.cursor.field == FormField::Start;
            app.board.edit_form(id, |form, _| {
                if start {
                    form.shift_start(delta);
                } else {
                    form.shift_end(delta);
                }
                Ok(())
            })
        }

        FormField::Price => {
            let amount = if large { PRICE_STEP_LARGE } else { 1 };
            app.board.edit_form(id, |form, _| {
                let price = form.draft().base_price;
                form.set_price(if forward {
                    price.saturating_add(amount)
                } else {
                    price.saturating_sub(amount)
                });
                Ok(())
            })
        }

        FormField::Offers => {
            let count = offer_count(app, id);
            if count > 0 {
                let index = app.cursor.offer_index.min(count - 1);
                app.cursor.offer_index = if forward {
                    (index + 1) % count
                } else {
                    (index + count - 1) % count
                };
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        report(app, "Form is locked", &e);
    }
}

/// 字符输入：目的地名称或价格数字
fn input(app: &mut App, id: &EventId, ch: char) {
    match app.cursor.field {
        FormField::Destination => {
            if !ch.is_control() {
                app.cursor.destination_input.push(ch);
            }
        }

        FormField::Price => {
            let Some(digit) = ch.to_digit(10) else {
                return;
            };
            let result = app.board.edit_form(id, |form, _| {
                let price = form.draft().base_price;
                form.set_price(price.saturating_mul(10).saturating_add(digit));
                Ok(())
            });
            if let Err(e) = result {
                report(app, "Form is locked", &e);
            }
        }

        _ => {}
    }
}

fn backspace(app: &mut App, id: &EventId) {
    match app.cursor.field {
        FormField::Destination => {
            app.cursor.destination_input.pop();
        }

        FormField::Price => {
            let result = app.board.edit_form(id, |form, _| {
                let price = form.draft().base_price;
                form.set_price(price / 10);
                Ok(())
            });
            if let Err(e) = result {
                report(app, "Form is locked", &e);
            }
        }

        _ => {}
    }
}

/// 勾选或取消光标处的附加服务
fn toggle_offer(app: &mut App, id: &EventId) {
    let Some(presenter) = app.board.presenter(id) else {
        return;
    };
    let event_type = presenter.form().draft().event_type;
    let Some(offer) = app
        .board
        .reference()
        .offers
        .offers_for(event_type)
        .get(app.cursor.offer_index)
    else {
        return;
    };

    let offer_id = offer.id.clone();
    let result = app
        .board
        .edit_form(id, |form, reference| form.toggle_offer(&offer_id, reference.offers.as_ref()));
    if let Err(e) = result {
        report(app, "Cannot select offer", &e);
    }
}

/// 草稿类型下可选的附加服务数量
fn offer_count(app: &App, id: &EventId) -> usize {
    app.board.presenter(id).map_or(0, |p| {
        app.board
            .reference()
            .offers
            .offers_for(p.form().draft().event_type)
            .len()
    })
}
