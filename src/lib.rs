//! A free-text "comment" node for a node-graph editor.
//!
//! The note shows inline text or the content of a named text buffer,
//! word-wrapped to the node's width, and ships four commands: add note,
//! clear, import from clipboard, export to a text buffer. `register` /
//! `unregister` plug the node type, commands, and menu entry into the
//! host's registries.

pub mod clipboard;
pub mod command;
pub mod config;
pub mod format;
pub mod note;
pub mod note_commands;
pub mod panel;
pub mod registry;
pub mod text_buffers;

pub use command::NoteCommand;
pub use config::{NotePrefs, PrefsLoader};
pub use note::{NoteNode, NoteView};
pub use registry::{Registrar, register, unregister};
pub use text_buffers::{TextBuffer, TextBufferStore};
