//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 "唯一真相来源"。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod form;           // 编辑表单光标
//!         mod surface;        // 终端渲染面（RenderTarget）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,                          // 退出标志
//!             pub board: EventBoard<TerminalSurface>,         // 事件列表
//!             pub selected: usize,                            // 选中行
//!             pub cursor: FormCursor,                         // 表单光标
//!             pub status_message: Option<String>,             // 状态栏消息
//!             pub outbox: Vec<PendingChange>,                 // 待发送的存储请求
//!             pub in_flight: usize,                           // 进行中的请求数
//!         }
//!
//!     board 来自 trip-planner-core，它保证同一时间最多只有一个事件处于编辑状态。
//!     Update 层只通过 board 的方法切换模式，从不直接修改 presenter。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、渲染面（TerminalSurface）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     presenter 调用 attach / replace / detach / update / shake，
//!     TerminalSurface 记录下每个节点的当前内容和抖动开始时间。
//!
//!     View 层按 board.presenters() 的顺序，取出每个 presenter 当前可见的节点渲染。
//!
//!     抖动结束后，主循环调用 finished_shakes()，
//!     由 Update 层通知 board 把表单恢复为可编辑状态。
//!

mod app;
mod form;
mod surface;

pub use app::App;
pub use form::{FormCursor, FormField};
pub use surface::{TerminalSurface, SHAKE_DURATION};
