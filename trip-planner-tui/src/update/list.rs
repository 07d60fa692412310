//! 列表更新逻辑

use crate::message::ListMessage;
use crate::model::App;

use super::report;

/// 处理列表消息
pub fn update(app: &mut App, msg: ListMessage) {
    match msg {
        ListMessage::SelectPrevious => {
            app.selected = app.selected.saturating_sub(1);
        }

        ListMessage::SelectNext => {
            if app.selected + 1 < app.board.presenters().len() {
                app.selected += 1;
            }
        }

        ListMessage::SelectFirst => {
            app.selected = 0;
        }

        ListMessage::SelectLast => {
            app.selected = app.board.presenters().len().saturating_sub(1);
        }

        ListMessage::Edit => {
            let Some(id) = app.selected_id() else {
                return;
            };
            match app.board.switch_to_edit(&id) {
                Ok(()) => {
                    app.cursor.reset();
                    app.clear_status();
                }
                Err(e) => report(app, "Cannot edit", &e),
            }
        }

        ListMessage::ToggleFavorite => {
            let Some(id) = app.selected_id() else {
                return;
            };
            match app.board.begin_toggle_favorite(&id) {
                Ok(change) => app.enqueue(change),
                Err(e) => report(app, "Cannot update favorite", &e),
            }
        }

        ListMessage::Delete => {
            let Some(id) = app.selected_id() else {
                return;
            };
            match app.board.begin_delete(&id) {
                Ok(change) => {
                    app.enqueue(change);
                    app.set_status("Deleting...");
                }
                Err(e) => report(app, "Cannot delete", &e),
            }
        }

        ListMessage::NextSort => {
            let selected = app.selected_id();
            let sort = app.board.sort().next();
            app.board.set_sort(sort);
            // 排序后选中项跟随原来的事件
            if let Some(id) = selected {
                app.select_id(&id);
            }
            app.set_status(format!("Sorted by {}", sort.label()));
        }

        ListMessage::SelectFilter(filter) => {
            let available = app
                .board
                .available_filters()
                .into_iter()
                .any(|(f, enabled)| f == filter && enabled);
            if !available {
                app.set_status(filter.empty_message());
                return;
            }
            app.board.set_filter(filter);
            app.selected = 0;
            app.clear_status();
        }
    }
}
