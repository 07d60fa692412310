//! 编辑表单的光标状态
//!
//! 草稿内容保存在 core 的 PointForm 中，这里只记录 TUI 的输入位置。

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Type,
    Destination,
    Start,
    End,
    Price,
    Offers,
}

impl FormField {
    pub const ALL: [Self; 6] = [
        Self::Type,
        Self::Destination,
        Self::Start,
        Self::End,
        Self::Price,
        Self::Offers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Type => "Type",
            Self::Destination => "Destination",
            Self::Start => "From",
            Self::End => "To",
            Self::Price => "Price",
            Self::Offers => "Offers",
        }
    }

    /// 下一个字段（循环）
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// 上一个字段（循环）
    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// 表单输入光标
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormCursor {
    /// 当前字段
    pub field: FormField,
    /// 附加服务列表中的光标位置
    pub offer_index: usize,
    /// 正在输入的目的地名称，离开字段或提交时生效
    pub destination_input: String,
}

impl FormCursor {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_wrap_around() {
        assert_eq!(FormField::Offers.next(), FormField::Type);
        assert_eq!(FormField::Type.prev(), FormField::Offers);
        assert_eq!(FormField::Start.next().prev(), FormField::Start);
    }
}
