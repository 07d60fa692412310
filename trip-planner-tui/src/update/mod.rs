//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;           // 编辑表单子消息处理
//!         mod list;           // 列表子消息处理
//!         mod store;          // 存储结果处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 存储请求的往返
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     1. 表单提交 / 删除 / 收藏时，board.begin_*() 锁定表单并返回 PendingChange
//!     2. Update 层把它放进 app.outbox
//!     3. 主循环把 outbox 交给 StoreBridge，在 tokio 运行时上执行
//!     4. 结果作为 AppMessage::StoreReply 回到这里，由 store.rs 交给 board.complete()
//!
//!     被拒绝时，board 让表单抖动并进入 Aborting；
//!     抖动结束后主循环发出 AppMessage::ShakeFinished，表单恢复可编辑。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod form;
mod list;
mod store;

use trip_planner_core::CoreError;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Cancel => {
            // 取消信号交给当前持有者（正在编辑的表单）
            if app.board.cancel() {
                app.cursor.reset();
                app.clear_status();
            }
        }

        AppMessage::List(list_msg) => {
            list::update(app, list_msg);
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::StoreReply(reply) => {
            store::apply_reply(app, reply);
        }

        AppMessage::ShakeFinished(id) => {
            app.board.finish_aborting(&id);
        }

        AppMessage::Noop => {}
    }
}

/// 记录错误并显示在状态栏
fn report(app: &mut App, context: &str, err: &CoreError) {
    if err.is_expected() {
        tracing::warn!("{context}: {err}");
    } else {
        tracing::error!("{context}: {err}");
    }
    app.set_status(format!("{context}: {err}"));
}
