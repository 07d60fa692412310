//! 存储结果处理

use trip_planner_core::types::ChangeSource;

use crate::backend::StoreReply;
use crate::model::App;

use super::report;

/// 把存储返回的结果交给 board
pub fn apply_reply(app: &mut App, reply: StoreReply) {
    app.in_flight = app.in_flight.saturating_sub(1);

    let StoreReply { change, outcome } = reply;
    let source = change.source;
    let selected = app.selected_id();

    match app.board.complete(change, outcome) {
        Ok(scope) => {
            tracing::debug!("Applied {source:?} change with {scope:?} refresh");
            app.set_status(match source {
                ChangeSource::Form => "Saved",
                ChangeSource::Delete => "Deleted",
                ChangeSource::Favorite => "Favorite updated",
            });
        }
        Err(e) => report(app, "Request failed", &e),
    }

    // 表单已关闭（保存成功或整表重建），光标回到初始位置
    if app.board.editing().is_none() {
        app.cursor.reset();
    }

    // 选中项跟随原来的事件；它被删除时停在原位置
    match selected {
        Some(id) => app.select_id(&id),
        None => app.clamp_selection(),
    }
}
