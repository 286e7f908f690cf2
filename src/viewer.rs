//! Read-only text panels for large cell values (payloads, stack traces).

use serde::Serialize;

/// Shown in place of empty content.
pub const EMPTY_CONTENT: &str = "No content available";

/// Characters kept in a table cell preview.
pub const PREVIEW_CHARS: usize = 80;

/// A scrollable text panel opened from a table cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextPanel {
    /// DOM id of the dialog, unique per page.
    pub id: String,
    pub title: String,
    pub content: String,
    pub preview: String,
    pub empty: bool,
}

impl TextPanel {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: Option<&str>) -> Self {
        let content = content.map(str::trim).unwrap_or_default();
        let empty = content.is_empty();
        let content = if empty {
            EMPTY_CONTENT.to_string()
        } else {
            content.to_string()
        };

        Self {
            id: id.into(),
            title: title.into(),
            preview: preview(&content, PREVIEW_CHARS),
            content,
            empty,
        }
    }
}

/// First line of `text`, cut to `max_chars` characters with an ellipsis.
pub fn preview(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    let mut chars = first_line.chars();
    let head: String = chars.by_ref().take(max_chars).collect();

    if chars.next().is_some() || first_line.len() < text.trim_end().len() {
        format!("{head}…")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_uses_placeholder() {
        let panel = TextPanel::new("payload-1", "Payload", Some("   "));
        assert!(panel.empty);
        assert_eq!(panel.content, EMPTY_CONTENT);

        let panel = TextPanel::new("payload-2", "Payload", None);
        assert!(panel.empty);
    }

    #[test]
    fn preview_is_char_safe() {
        assert_eq!(preview("ошибка загрузки", 6), "ошибка…");
        assert_eq!(preview("short", 10), "short");
    }

    #[test]
    fn preview_marks_multiline_content() {
        let trace = "java.lang.IllegalStateException: boom\n\tat Foo.bar(Foo.java:1)";
        let panel = TextPanel::new("trace-1", "Stacktrace", Some(trace));

        assert_eq!(panel.preview, "java.lang.IllegalStateException: boom…");
        assert_eq!(panel.content, trace);
    }
}
