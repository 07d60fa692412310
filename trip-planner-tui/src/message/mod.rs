//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁，
//! 所有的用户操作和异步结果都通过 Message 来表达。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // 主消息
//!         mod form;       // 编辑表单子消息
//!         mod list;       // 列表子消息
//!
//!
//!     消息来源有三种：
//!         - event/handler.rs 把按键翻译成消息
//!         - 主循环把 StoreBridge 返回的结果包装成 AppMessage::StoreReply
//!         - 主循环把结束的抖动动画包装成 AppMessage::ShakeFinished
//!
//!     它们最终都交给 update::update(app, msg) 处理。
//!

mod app;
mod form;
mod list;

pub use app::AppMessage;
pub use form::FormMessage;
pub use list::ListMessage;
