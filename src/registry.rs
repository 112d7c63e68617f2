use log::debug;

use crate::command::NoteCommand;
use crate::config::NotePrefs;
use crate::note::NoteNode;

pub const NODE_TYPE_ID: &str = "GenericNoteNode";

/// Metadata the host's type registry needs to offer the note node: a stable
/// id, display label, icon name, and a factory for new instances.
#[derive(Debug, Clone)]
pub struct NodeTypeSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    build: fn(&NotePrefs) -> NoteNode,
}

impl NodeTypeSpec {
    pub fn build(&self, prefs: &NotePrefs) -> NoteNode {
        (self.build)(prefs)
    }
}

pub fn note_node_type() -> NodeTypeSpec {
    NodeTypeSpec {
        id: NODE_TYPE_ID,
        label: "Comment",
        icon: "note",
        build: NoteNode::with_prefs,
    }
}

/// A command id and caption for the host's command registry. The host binds
/// the id back to this crate's handler when the command is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: &'static str,
    pub caption: &'static str,
}

impl From<NoteCommand> for CommandSpec {
    fn from(command: NoteCommand) -> Self {
        Self {
            id: command.id(),
            caption: command.caption(),
        }
    }
}

/// An "add node" menu entry bound to a command id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub command_id: &'static str,
}

/// The slice of the host's registries this widget plugs into. Duplicate
/// registration and unknown unregistration are host errors, reported as
/// notices rather than panics.
pub trait Registrar {
    fn register_node_type(&mut self, spec: NodeTypeSpec) -> Result<(), String>;
    fn unregister_node_type(&mut self, id: &str) -> Result<(), String>;
    fn register_command(&mut self, spec: CommandSpec) -> Result<(), String>;
    fn unregister_command(&mut self, id: &str) -> Result<(), String>;
    fn append_menu_entry(&mut self, entry: MenuEntry) -> Result<(), String>;
    fn remove_menu_entry(&mut self, label: &str) -> Result<(), String>;
}

/// Menu entry that creates a new note node.
pub fn add_note_menu_entry() -> MenuEntry {
    MenuEntry {
        label: NoteCommand::AddNote.caption(),
        command_id: NoteCommand::AddNote.id(),
    }
}

/// Plugin activation: register the node type, then the commands, then the
/// menu entry that creates notes.
pub fn register(host: &mut dyn Registrar) -> Result<(), String> {
    host.register_node_type(note_node_type())?;
    for command in NoteCommand::ALL {
        host.register_command(CommandSpec::from(command))?;
    }
    host.append_menu_entry(add_note_menu_entry())?;
    debug!("registered node type {NODE_TYPE_ID:?} and {} commands", NoteCommand::ALL.len());
    Ok(())
}

/// Plugin deactivation: the exact inverse of [`register`], in reverse
/// order. The menu entry goes first so no menu item outlives its command.
pub fn unregister(host: &mut dyn Registrar) -> Result<(), String> {
    host.remove_menu_entry(NoteCommand::AddNote.caption())?;
    for command in NoteCommand::ALL.iter().rev() {
        host.unregister_command(command.id())?;
    }
    host.unregister_node_type(NODE_TYPE_ID)?;
    debug!("unregistered node type {NODE_TYPE_ID:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory stand-in for the host registries, recording every
    /// registration event in order.
    #[derive(Default)]
    struct RecordingRegistrar {
        node_types: Vec<NodeTypeSpec>,
        commands: Vec<CommandSpec>,
        menu: Vec<MenuEntry>,
        events: Vec<String>,
    }

    impl Registrar for RecordingRegistrar {
        fn register_node_type(&mut self, spec: NodeTypeSpec) -> Result<(), String> {
            if self.node_types.iter().any(|t| t.id == spec.id) {
                return Err(format!("node type {} already registered", spec.id));
            }
            self.events.push(format!("+type {}", spec.id));
            self.node_types.push(spec);
            Ok(())
        }

        fn unregister_node_type(&mut self, id: &str) -> Result<(), String> {
            match self.node_types.iter().position(|t| t.id == id) {
                Some(index) => {
                    self.node_types.remove(index);
                    self.events.push(format!("-type {id}"));
                    Ok(())
                }
                None => Err(format!("node type {id} not registered")),
            }
        }

        fn register_command(&mut self, spec: CommandSpec) -> Result<(), String> {
            if self.commands.iter().any(|c| c.id == spec.id) {
                return Err(format!("command {} already registered", spec.id));
            }
            self.events.push(format!("+command {}", spec.id));
            self.commands.push(spec);
            Ok(())
        }

        fn unregister_command(&mut self, id: &str) -> Result<(), String> {
            match self.commands.iter().position(|c| c.id == id) {
                Some(index) => {
                    self.commands.remove(index);
                    self.events.push(format!("-command {id}"));
                    Ok(())
                }
                None => Err(format!("command {id} not registered")),
            }
        }

        fn append_menu_entry(&mut self, entry: MenuEntry) -> Result<(), String> {
            self.events.push(format!("+menu {}", entry.label));
            self.menu.push(entry);
            Ok(())
        }

        fn remove_menu_entry(&mut self, label: &str) -> Result<(), String> {
            match self.menu.iter().position(|e| e.label == label) {
                Some(index) => {
                    self.menu.remove(index);
                    self.events.push(format!("-menu {label}"));
                    Ok(())
                }
                None => Err(format!("menu entry {label} not found")),
            }
        }
    }

    #[test]
    fn test_register_binds_type_commands_and_menu() {
        let mut host = RecordingRegistrar::default();
        register(&mut host).unwrap();

        assert_eq!(host.node_types.len(), 1);
        assert_eq!(host.node_types[0].id, NODE_TYPE_ID);
        assert_eq!(host.commands.len(), 4);
        assert_eq!(host.menu.len(), 1);
        assert_eq!(host.menu[0].command_id, NoteCommand::AddNote.id());

        // Type first, then commands, then the menu entry.
        assert!(host.events.first().unwrap().starts_with("+type"));
        assert!(host.events.last().unwrap().starts_with("+menu"));
    }

    #[test]
    fn test_unregister_is_the_exact_inverse_in_reverse_order() {
        let mut host = RecordingRegistrar::default();
        register(&mut host).unwrap();
        let registered: Vec<String> = host.events.clone();

        unregister(&mut host).unwrap();

        assert!(host.node_types.is_empty());
        assert!(host.commands.is_empty());
        assert!(host.menu.is_empty());

        let removed: Vec<String> = host.events[registered.len()..]
            .iter()
            .map(|e| e.replace('-', "+"))
            .collect();
        let mut expected = registered;
        expected.reverse();
        assert_eq!(removed, expected);
    }

    #[test]
    fn test_double_register_is_rejected() {
        let mut host = RecordingRegistrar::default();
        register(&mut host).unwrap();

        let err = register(&mut host).unwrap_err();
        assert!(err.contains("already registered"));
    }

    #[test]
    fn test_unregister_without_register_is_an_error() {
        let mut host = RecordingRegistrar::default();
        assert!(unregister(&mut host).is_err());
    }

    #[test]
    fn test_menu_entry_builds_note_through_the_registered_type() {
        let mut host = RecordingRegistrar::default();
        register(&mut host).unwrap();

        // Simulate the host handling a click on the add-note menu entry:
        // resolve the command, then instantiate the registered type.
        let entry = host.menu[0];
        assert_eq!(NoteCommand::from_id(entry.command_id), Some(NoteCommand::AddNote));

        let prefs = NotePrefs {
            default_width: 240,
            note_color: [0.5, 0.4, 0.1],
        };
        let note = host.node_types[0].build(&prefs);
        assert_eq!(note.width, 240);
        assert_eq!(note.color, [0.5, 0.4, 0.1]);
        assert!(note.text.is_empty());
    }
}
