use crate::command::NoteCommand;
use crate::note::{NoteNode, NoteView};
use crate::text_buffers::TextBufferStore;

/// Note properties the panel's input widgets bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteProperty {
    Text,
    TextSource,
}

/// One widget in the node panel. The host walks the list and lays the
/// widgets out; this crate only decides what appears and in which order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelItem {
    Label(String),
    TextField {
        property: NoteProperty,
        caption: &'static str,
    },
    /// Searchable picker over the named text buffers.
    BufferPicker {
        property: NoteProperty,
        caption: &'static str,
    },
    Button {
        command: NoteCommand,
    },
}

fn input_form() -> Vec<PanelItem> {
    vec![
        PanelItem::TextField {
            property: NoteProperty::Text,
            caption: "Text",
        },
        PanelItem::BufferPicker {
            property: NoteProperty::TextSource,
            caption: "Text buffer",
        },
        PanelItem::Button {
            command: NoteCommand::FromClipboard,
        },
    ]
}

/// The collapsed node body. An empty note shows the input form; a note with
/// content shows its wrapped lines, skipping the blank paragraph separators.
pub fn collapsed_panel(note: &NoteNode, buffers: &TextBufferStore) -> Vec<PanelItem> {
    match note.view_state() {
        NoteView::Empty => input_form(),
        NoteView::HasContent => note
            .formatted_lines(buffers)
            .into_iter()
            .filter(|line| !line.is_empty())
            .map(PanelItem::Label)
            .collect(),
    }
}

/// The expanded side panel: always the full input form plus the export and
/// clear buttons, regardless of content.
pub fn expanded_panel() -> Vec<PanelItem> {
    let mut items = input_form();
    items.push(PanelItem::Button {
        command: NoteCommand::ToTextBuffer,
    });
    items.push(PanelItem::Button {
        command: NoteCommand::ClearNote,
    });
    items
}
