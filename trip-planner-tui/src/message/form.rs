//! 编辑表单消息

/// 编辑表单消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 下一个字段
    NextField,
    /// 上一个字段
    PrevField,
    /// 当前字段的上一个值
    Prev,
    /// 当前字段的下一个值
    Next,
    /// 当前字段的值大幅后退（日期按天调整）
    PrevLarge,
    /// 当前字段的值大幅前进
    NextLarge,
    /// 字符输入
    Input(char),
    /// 删除字符
    Backspace,
    /// 勾选或取消光标处的附加服务
    ToggleOffer,
    /// 提交
    Submit,
    /// 放弃修改，回到列表
    Reset,
    /// 删除事件
    Delete,
}
