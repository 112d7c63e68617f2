/// The note node's user-invokable commands. The string ids are what the
/// host's command registry and menu entries bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteCommand {
    /// Add a fresh note node to the graph.
    AddNote,
    /// Reset the note's text and buffer reference.
    ClearNote,
    /// Overwrite the note's text with the clipboard content.
    FromClipboard,
    /// Write the note's text into the well-known export buffer.
    ToTextBuffer,
}

impl NoteCommand {
    pub const ALL: [NoteCommand; 4] = [
        NoteCommand::AddNote,
        NoteCommand::ClearNote,
        NoteCommand::FromClipboard,
        NoteCommand::ToTextBuffer,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            NoteCommand::AddNote => "note.add_note",
            NoteCommand::ClearNote => "note.clear",
            NoteCommand::FromClipboard => "note.from_clipboard",
            NoteCommand::ToTextBuffer => "note.to_text_buffer",
        }
    }

    /// Caption for buttons and menu entries bound to this command.
    pub const fn caption(self) -> &'static str {
        match self {
            NoteCommand::AddNote => "Generic Note",
            NoteCommand::ClearNote => "Clear",
            NoteCommand::FromClipboard => "From clipboard",
            NoteCommand::ToTextBuffer => "To text editor",
        }
    }

    pub fn from_id(id: &str) -> Option<NoteCommand> {
        NoteCommand::ALL.into_iter().find(|c| c.id() == id)
    }
}
