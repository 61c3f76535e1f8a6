use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(super) const PROMPT: &str = "> ";
pub(super) const NO_MATCH: &str = "No matching suggestions";

pub(super) fn input_line(query: &str, placeholder: &str, theme: &Theme) -> SpanLine {
    let mut line = vec![Span::styled(PROMPT, theme.prompt)];
    if query.is_empty() {
        line.push(Span::styled(placeholder, theme.placeholder));
    } else {
        line.push(Span::new(query));
    }
    line
}

pub(super) fn suggestion_line(
    text: &str,
    highlighted: bool,
    width: u16,
    theme: &Theme,
) -> SpanLine {
    let style = if highlighted {
        theme.highlighted
    } else {
        theme.suggestion
    };
    vec![Span::styled(pad_to_width(&format!(" {text}"), width), style)]
}

pub(super) fn no_match_line(width: u16, theme: &Theme) -> SpanLine {
    vec![Span::styled(
        pad_to_width(&format!(" {NO_MATCH}"), width),
        theme.no_match,
    )]
}

/// Clips or right-pads `text` to exactly `width` display cells.
pub(super) fn pad_to_width(text: &str, width: u16) -> String {
    let width = usize::from(width);
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

/// Display column of the char-indexed `cursor` within `query`.
pub(super) fn cursor_column(query: &str, cursor: usize) -> u16 {
    let prefix: String = query.chars().take(cursor).collect();
    let col = UnicodeWidthStr::width(PROMPT) + UnicodeWidthStr::width(prefix.as_str());
    u16::try_from(col).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::{cursor_column, pad_to_width};

    #[test]
    fn pad_fills_and_clips() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 3), "abc");
        assert_eq!(pad_to_width("日本", 3), "日 ");
    }

    #[test]
    fn cursor_column_counts_display_width() {
        assert_eq!(cursor_column("", 0), 2);
        assert_eq!(cursor_column("ag", 2), 4);
        assert_eq!(cursor_column("日本", 1), 4);
    }
}
