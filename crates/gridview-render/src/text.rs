//! Display-width aware text helpers.

use gridview::Align;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal display width of `s`.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Truncates `s` to at most `max_width` columns, ending in `…` when cut.
///
/// # Example
///
/// ```rust
/// use gridview_render::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // Reserve 1 column for the ellipsis
    let limit = max_width - 1;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Pads `s` to `width` columns according to `align`.
///
/// Text wider than `width` is returned unchanged.
pub fn pad(s: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(s.width());
    let (left, right) = match align {
        Align::Start => (0, gap),
        Align::End => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    };
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// Truncates then pads: `s` occupies exactly `width` columns.
pub fn fit(s: &str, width: usize, align: Align) -> String {
    pad(&truncate_to_width(s, width), width, align)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_respects_wide_chars() {
        assert_eq!(truncate_to_width("日本語", 4), "日…");
        assert_eq!(truncate_to_width("abc", 0), "");
        assert_eq!(truncate_to_width("abc", 1), "…");
    }

    #[test]
    fn pad_by_alignment() {
        assert_eq!(pad("ab", 6, Align::Start), "ab    ");
        assert_eq!(pad("ab", 6, Align::End), "    ab");
        assert_eq!(pad("ab", 5, Align::Center), " ab  ");
        assert_eq!(pad("abcdef", 3, Align::Start), "abcdef");
    }

    #[test]
    fn fit_is_exact_width() {
        assert_eq!(fit("Kathmandu Valley", 8, Align::Start), "Kathman…");
        assert_eq!(display_width(&fit("日本語", 5, Align::End)), 5);
    }
}
