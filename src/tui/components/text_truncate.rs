//! Display-width truncation for terminal rows.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates text to the provided display width and appends an ellipsis.
///
/// Width is measured in terminal columns, not Unicode scalar count. Widths of
/// three or fewer columns fall back to dots only.
pub(crate) fn truncate_to_display_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut current_width = 0;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        truncated.push(ch);
        current_width += char_width;
    }
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::truncate_to_display_width;

    #[rstest]
    #[case::fits("Margarita", 20, "Margarita")]
    #[case::exact("Margarita", 9, "Margarita")]
    #[case::ellipsis("A very long comment body", 10, "A very ...")]
    #[case::zero("anything", 0, "")]
    #[case::tiny("anything", 2, "..")]
    #[case::wide_characters("カクテル最高", 7, "カク...")]
    fn truncates_by_columns(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(truncate_to_display_width(text, width), expected);
    }
}
