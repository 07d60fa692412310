//!
//! src/backend/mod.rs
//! Backend 层：存储与配置
//!
//! Backend 层与 UI 完全解耦，负责数据的持久化和异步请求。
//! 展示逻辑（presenter、列表协调）来自 trip-planner-core 库。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（JSON 文件）
//!         mod demo;               // 演示数据
//!         mod event_store;        // 事件存储（JSON 文件）
//!         mod store_bridge;       // 异步存储请求桥接
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、事件存储（JsonEventStore）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     实现 trip-planner-core 的 DataStore trait。
//!     事件、目的地、附加服务保存在同一个 JSON 文件中。
//!
//!         存储位置：~/.config/trip-planner-tui/events.json（可在配置中修改）
//!
//!     文件不存在时写入演示数据，因此首次启动就有可操作的行程。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、存储桥接（StoreBridge）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     主循环是同步的，不能在其中 await。
//!
//!     用户提交表单
//!         ↓
//!     Update 层调用 board.begin_submit()，得到 PendingChange，放入 app.outbox
//!         ↓
//!     主循环把 outbox 交给 StoreBridge::submit()，在 tokio 上执行
//!         ↓
//!     结果经 channel 返回，主循环取出后生成 AppMessage::StoreReply
//!         ↓
//!     Update 层调用 board.complete()，View 层重新渲染
//!
//!     请求进行中时，其他事件仍然可以正常编辑。
//!

mod config_service;
mod demo;
mod event_store;
mod store_bridge;

pub use config_service::{get_config_dir, AppConfig, ConfigService, LocalConfigService};
pub use demo::demo_data;
pub use event_store::{JsonEventStore, TripData};
pub use store_bridge::{StoreBridge, StoreReply};
