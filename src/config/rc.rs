use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Preferences a new note inherits: the default node width and the custom
/// node color. Injected explicitly wherever they are needed; never read
/// from a global.
#[derive(Debug, Clone, PartialEq)]
pub struct NotePrefs {
    pub default_width: u32,
    pub note_color: [f32; 3],
}

impl Default for NotePrefs {
    fn default() -> Self {
        Self {
            default_width: 200,
            note_color: [0.72, 0.66, 0.32],
        }
    }
}

pub struct PrefsLoader;

impl PrefsLoader {
    /// Get the path to the RC file
    /// Looks for .noterc in:
    /// 1. Current directory
    /// 2. Home directory (~/.noterc)
    pub fn rc_path() -> Option<PathBuf> {
        let current_rc = Path::new(".noterc");
        if current_rc.exists() {
            return Some(current_rc.to_path_buf());
        }

        if let Ok(home) = env::var("HOME") {
            let home_rc = Path::new(&home).join(".noterc");
            if home_rc.exists() {
                return Some(home_rc);
            }
        }

        None
    }

    /// Load preferences from the RC file, falling back to defaults when no
    /// file exists or it cannot be read.
    pub fn load_config() -> NotePrefs {
        match Self::rc_path() {
            Some(rc_path) => Self::load_from(&rc_path),
            None => NotePrefs::default(),
        }
    }

    pub fn load_from(path: &Path) -> NotePrefs {
        let mut prefs = NotePrefs::default();
        if let Ok(content) = fs::read_to_string(path) {
            Self::parse_config_content(&content, &mut prefs);
        }
        prefs
    }

    fn parse_config_content(content: &str, prefs: &mut NotePrefs) {
        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            Self::parse_config_line(line, prefs);
        }
    }

    fn parse_config_line(line: &str, prefs: &mut NotePrefs) {
        // Remove inline comments
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();

            match key {
                "width" | "default_width" => {
                    if let Ok(width) = value.parse::<u32>() {
                        if (16..=2000).contains(&width) {
                            prefs.default_width = width;
                        }
                    }
                }
                "color" | "note_color" => {
                    if let Some(color) = Self::parse_hex_color(value) {
                        prefs.note_color = color;
                    }
                }
                _ => {} // Unknown setting, ignore
            }
        }
    }

    fn parse_hex_color(value: &str) -> Option<[f32; 3]> {
        let hex = value.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some([
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        ])
    }

    /// Generate a sample RC file content
    pub fn generate_sample_rc() -> String {
        r#"# generic-note preferences (.noterc)
# Lines starting with # are comments

# Default width of a freshly added note node, in layout units
width=200

# Custom color applied to note nodes
color=#b8a852
"#
        .to_string()
    }
}
