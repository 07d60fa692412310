//! 可复用 UI 组件

pub mod event_form;
pub mod event_list;
pub mod event_row;
pub mod statusbar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 按显示宽度截断或补齐到 `width` 列，超出时以 `…` 结尾
pub fn fit(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let full = UnicodeWidthStr::width(text);
    if full <= width {
        return format!("{text}{}", " ".repeat(width - full));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width - used));
    out
}

/// 价格显示
pub fn money(amount: impl std::fmt::Display) -> String {
    format!("€{amount}")
}
