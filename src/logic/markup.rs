//! Highlight-markup handling for formatted backend fields.
//!
//! The backend wraps query matches in `<em>` tags inside the `_formatted`
//! variants of a hit. Display code turns those ranges into accent-styled
//! spans; everything else tag-shaped is dropped.

use ratatui::style::Style;
use ratatui::text::Span;

/// Remove every `<...>` tag from the input, keeping the text between tags.
///
/// An unterminated `<` swallows the rest of the string, which matches how
/// a browser would refuse to render a broken tag.
#[must_use]
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Split highlighted text into styled spans: text inside `<em>`/`<mark>`
/// gets `accent`, everything else gets `base`, unknown tags are dropped.
#[must_use]
pub fn highlight_spans(input: &str, base: Style, accent: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut highlighted = false;
    let mut rest = input;
    let flush = |text: &str, on: bool, spans: &mut Vec<Span<'static>>| {
        if !text.is_empty() {
            spans.push(Span::styled(
                text.to_string(),
                if on { accent } else { base },
            ));
        }
    };
    while let Some(open) = rest.find('<') {
        flush(&rest[..open], highlighted, &mut spans);
        let Some(close) = rest[open..].find('>') else {
            return spans;
        };
        let tag = rest[open + 1..open + close].trim().to_ascii_lowercase();
        match tag.as_str() {
            "em" | "mark" => highlighted = true,
            "/em" | "/mark" => highlighted = false,
            _ => {}
        }
        rest = &rest[open + close + 1..];
    }
    flush(rest, highlighted, &mut spans);
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    /// What: Tags of any kind are removed, text preserved.
    #[test]
    fn strip_markup_removes_tags() {
        assert_eq!(strip_markup("<em>gmail</em> login"), "gmail login");
        assert_eq!(strip_markup("plain"), "plain");
        assert_eq!(strip_markup("<a href=\"x\">link</a>"), "link");
        assert_eq!(strip_markup("broken <tag"), "broken ");
        assert_eq!(strip_markup(""), "");
    }

    /// What: `<em>` ranges map to the accent style; other tags are dropped
    /// without affecting styling.
    ///
    /// - Input: "try <em>gmail</em> <b>now</b>"
    /// - Output: base("try "), accent("gmail"), base(" "), base("now")
    #[test]
    fn highlight_spans_styles_matches() {
        let base = Style::default();
        let accent = Style::default().fg(Color::Yellow);
        let spans = highlight_spans("try <em>gmail</em> <b>now</b>", base, accent);
        let parts: Vec<(&str, bool)> = spans
            .iter()
            .map(|s| (s.content.as_ref(), s.style == accent))
            .collect();
        assert_eq!(
            parts,
            [("try ", false), ("gmail", true), (" ", false), ("now", false)]
        );
    }

    /// What: Unclosed highlight extends to the end of the string.
    #[test]
    fn highlight_spans_unclosed_em() {
        let base = Style::default();
        let accent = Style::default().fg(Color::Yellow);
        let spans = highlight_spans("<em>tail", base, accent);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content.as_ref(), "tail");
        assert_eq!(spans[0].style, accent);
    }
}
