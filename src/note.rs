use serde::{Deserialize, Serialize};

use crate::config::NotePrefs;
use crate::format::format_note;
use crate::text_buffers::TextBufferStore;

/// What the collapsed panel should render for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteView {
    /// Neither inline text nor a buffer reference is set: show the input form.
    Empty,
    /// Show the wrapped note content.
    HasContent,
}

/// The note node's property values. The host's own document format persists
/// these with the rest of the node graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteNode {
    /// Inline text. If set it overrides the buffer reference.
    pub text: String,
    /// Name of an external text buffer to show. Empty means unset.
    pub text_source: String,
    /// Node width in layout units; the wrap width is derived from it.
    pub width: u32,
    pub color: [f32; 3],
    pub use_custom_color: bool,
}

impl NoteNode {
    /// Build a fresh note the way the "add note" command does: default
    /// width and color come from the injected preferences.
    pub fn with_prefs(prefs: &NotePrefs) -> Self {
        Self {
            text: String::new(),
            text_source: String::new(),
            width: prefs.default_width,
            color: prefs.note_color,
            use_custom_color: true,
        }
    }

    pub fn view_state(&self) -> NoteView {
        if self.text.is_empty() && self.text_source.is_empty() {
            NoteView::Empty
        } else {
            NoteView::HasContent
        }
    }

    /// Reset both content fields. Idempotent.
    pub fn clear(&mut self) {
        self.text.clear();
        self.text_source.clear();
    }

    /// Resolve the content source and wrap it for display. A buffer
    /// reference that no longer resolves renders as empty output.
    pub fn formatted_lines(&self, buffers: &TextBufferStore) -> Vec<String> {
        if self.text.is_empty() && !self.text_source.is_empty() {
            match buffers.get(&self.text_source) {
                Some(buffer) => format_note("", Some(buffer.lines()), self.width),
                None => Vec::new(),
            }
        } else {
            format_note(&self.text, None, self.width)
        }
    }
}
