//! 应用主消息枚举

use trip_planner_core::types::EventId;

use super::{FormMessage, ListMessage};
use crate::backend::StoreReply;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 取消信号（Esc）：关闭正在编辑的表单
    Cancel,

    /// 列表相关消息
    List(ListMessage),

    /// 编辑表单相关消息
    Form(FormMessage),

    /// 存储请求返回
    StoreReply(StoreReply),

    /// 抖动动画结束
    ShakeFinished(EventId),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
