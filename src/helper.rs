use pulldown_cmark::{Event, Parser, TagEnd};

/// Renders a Markdown fragment down to its plain text.
///
/// Text and code events are kept; soft and hard breaks become spaces and
/// block boundaries become newlines. Markup-only input (e.g. an empty
/// emphasis span or a bare image) renders to an empty string, which is what
/// save-time validation checks for.
pub fn plain_text(markdown: &str) -> String {
    let mut out = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }

    out.trim().to_string()
}

/// Generates a content preview for displaying brief list rows
pub fn preview(content: &str, max_len: usize) -> String {
    let text = plain_text(content);

    // Get first non-empty line
    let first_line = text
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("")
        .trim();

    if first_line.chars().count() <= max_len {
        first_line.to_string()
    } else {
        let cut: String = first_line.chars().take(max_len).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_strips_markup() {
        assert_eq!(plain_text("# Hello *world*"), "Hello world");
        assert_eq!(plain_text("a\nb"), "a b");
        assert_eq!(plain_text("`code` here"), "code here");
    }

    #[test]
    fn plain_text_of_markup_only_content_is_empty() {
        assert_eq!(plain_text("****"), "");
        assert_eq!(plain_text(""), "");
        assert_eq!(plain_text("   \n  "), "");
    }

    #[test]
    fn preview_truncates_on_char_boundaries() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("0123456789abc", 10), "0123456789...");
        // Multi-byte characters must not be split
        assert_eq!(preview("ééééé", 3), "ééé...");
    }

    #[test]
    fn preview_uses_first_non_empty_line() {
        assert_eq!(preview("first\n\nsecond", 5), "first");
    }
}
