//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     当接收到键盘事件时，转入 handle_key_event()
//!     判断：
//!         - Ctrl+C 直接退出
//!         - Esc 始终是取消信号（AppMessage::Cancel），由 board 交给当前持有者
//!         - 有打开的表单时，调用 handle_form_keys 处理
//!         - 否则调用 handle_list_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 列表按键
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!             ↑/↓ k/j     → 选择上一项 / 下一项
//!             Enter       → 打开编辑表单
//!             f           → 切换收藏
//!             s           → 切换排序（Day → Time → Price）
//!             1-4         → 过滤器（Everything / Future / Present / Past）
//!             Alt+d       → 删除
//!             q           → 退出
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 表单按键
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!             Tab / ↓         → 下一个字段
//!             Shift+Tab / ↑   → 上一个字段
//!             ←/→             → 切换值（类型、目的地、时间 ±1 小时、附加服务光标）
//!             Shift+←/→       → 时间 ±1 天，价格 ±100
//!             Space           → 勾选附加服务（仅在附加服务字段）
//!             字符输入         → 目的地名称、价格
//!             Enter           → 保存
//!             Ctrl+r          → 放弃修改
//!             Alt+d           → 删除
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
