//! Display-width helpers for labels.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string to fit within a maximum display width, adding an
/// ellipsis if needed.
///
/// Widths are terminal columns, so Hangul and other wide characters count
/// as two.
///
/// ```rust
/// use etf_mts_view::truncate_to_width;
///
/// assert_eq!(truncate_to_width("KODEX", 10), "KODEX");
/// assert_eq!(truncate_to_width("KODEX 200", 6), "KODEX…");
/// assert_eq!(truncate_to_width("코스피", 5), "코스…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // One column is reserved for the ellipsis.
    let limit = max_width.saturating_sub(1);

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
