use log::debug;

use crate::clipboard::{ClipboardSource, sanitize_text};
use crate::config::NotePrefs;
use crate::note::NoteNode;
use crate::text_buffers::TextBufferStore;

/// Name of the buffer the export command writes into.
pub const EXPORT_BUFFER_NAME: &str = "Generic Note Text";

/// Command outcomes are two-valued: `Ok` is a success notice, `Err` is an
/// informational notice for a command that declined to run. Neither is a
/// hard failure; the host shows both in its status area.
pub type CommandResult = Result<String, String>;

/// Instantiate a new note with preference-derived defaults. Invoked through
/// the registered node factory when the menu entry fires.
pub fn add_note(prefs: &NotePrefs) -> NoteNode {
    debug!("adding note node (width {})", prefs.default_width);
    NoteNode::with_prefs(prefs)
}

/// Reset the note's text and buffer reference. Idempotent.
pub fn clear_note(note: &mut NoteNode) -> CommandResult {
    note.clear();
    Ok("Note cleared".to_string())
}

/// Overwrite the note's text with the clipboard content. An empty or
/// unavailable clipboard leaves the note untouched.
pub fn import_from_clipboard(
    note: &mut NoteNode,
    clipboard: &mut dyn ClipboardSource,
) -> CommandResult {
    let text = match clipboard.read_text() {
        Some(text) => sanitize_text(&text),
        None => return Err("No text in clipboard".to_string()),
    };
    if text.is_empty() {
        return Err("No text in clipboard".to_string());
    }

    debug!("importing {} bytes from clipboard", text.len());
    let bytes = text.len();
    note.text = text;
    Ok(format!("{bytes} bytes imported"))
}

/// Write the note's text into the well-known export buffer, creating it if
/// absent and overwriting it otherwise.
pub fn export_to_buffer(note: &NoteNode, buffers: &mut TextBufferStore) -> CommandResult {
    if note.text.is_empty() {
        return Err("No text in note".to_string());
    }

    debug!("exporting note to buffer {EXPORT_BUFFER_NAME:?}");
    buffers.set_content(EXPORT_BUFFER_NAME, &note.text);
    Ok(format!("Exported to text buffer \"{EXPORT_BUFFER_NAME}\""))
}
