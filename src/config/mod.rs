/// Preferences subsystem.
///
/// The host passes a [`NotePrefs`] value into node creation and
/// registration; embedders can fill one from a `.noterc` file via
/// [`PrefsLoader`] or just use the defaults.

pub mod rc;

pub use rc::{NotePrefs, PrefsLoader};
