use arboard::Clipboard;

/// Seam over the host clipboard so commands can be driven without a real
/// windowing system. The system implementation reads the OS clipboard; tests
/// inject a fake.
pub trait ClipboardSource {
    /// Current clipboard text, or `None` when the clipboard is empty or
    /// unavailable.
    fn read_text(&mut self) -> Option<String>;
}

/// OS clipboard via `arboard`. Any access error is treated the same as an
/// empty clipboard.
pub struct SystemClipboard;

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Option<String> {
        match Clipboard::new().and_then(|mut c| c.get_text()) {
            Ok(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Sanitize clipboard text before storing it in a note: drop trailing line
/// endings and control characters other than tab and newline.
pub fn sanitize_text(text: &str) -> String {
    let trimmed = text.trim_end_matches('\n').trim_end_matches('\r');

    trimmed
        .chars()
        .filter(|c| *c == '\t' || *c == '\n' || *c >= ' ')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_trailing_newlines() {
        assert_eq!(sanitize_text("hello\n"), "hello");
        assert_eq!(sanitize_text("hello\r\n"), "hello");
    }

    #[test]
    fn test_sanitize_keeps_interior_structure() {
        assert_eq!(sanitize_text("a\nb\tc"), "a\nb\tc");
    }

    #[test]
    fn test_sanitize_drops_control_characters() {
        assert_eq!(sanitize_text("he\0llo\x07"), "hello");
    }
}
