//! 列表消息
//!
//! 没有打开的表单时，按键作用于事件列表

use trip_planner_core::types::FilterType;

/// 列表消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== 事件操作 ==========
    /// 打开选中事件的编辑表单
    Edit,
    /// 切换收藏
    ToggleFavorite,
    /// 删除选中事件
    Delete,

    // ========== 排序与过滤 ==========
    /// 切换到下一种排序
    NextSort,
    /// 选择过滤器
    SelectFilter(FilterType),
}
