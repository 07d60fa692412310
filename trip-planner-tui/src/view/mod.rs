//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 可复用组件（事件行、编辑表单、状态栏）
//!         mod layout;         // 主布局
//!         pub mod theme;      // 主题颜色
//!
//!         pub use layout::render;
//!
//!
//!     布局：
//!         ┌──────────────────────────────────────────────┐
//!         │ 标题栏：路线、日期、总花费                    │
//!         │ 工具栏：过滤器 1-4、排序                      │
//!         ├──────────────────────────────────────────────┤
//!         │ 事件列表（按 board.presenters() 的顺序）       │
//!         │   每个 presenter 显示它当前可见的节点：        │
//!         │     Node::View  → 一行                        │
//!         │     Node::Edit  → 展开的编辑表单               │
//!         ├──────────────────────────────────────────────┤
//!         │ 状态栏：快捷键提示、状态消息、进行中的请求     │
//!         └──────────────────────────────────────────────┘
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
