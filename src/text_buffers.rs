/// A named, in-memory text buffer: an ordered sequence of lines. Stands in
/// for the host's text-editor documents, which notes reference by name.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    name: String,
    lines: Vec<String>,
}

impl TextBuffer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            lines: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replace the buffer's content: clear, then write the text line by line.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.lines().map(str::to_string).collect();
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The collection of named text buffers, looked up by the note's
/// `text_source` reference and written by the export command.
pub struct TextBufferStore {
    buffers: Vec<TextBuffer>,
}

impl TextBufferStore {
    pub fn new() -> Self {
        Self {
            buffers: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&TextBuffer> {
        self.buffers.iter().find(|b| b.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TextBuffer> {
        self.buffers.iter_mut().find(|b| b.name == name)
    }

    pub fn get_or_create(&mut self, name: &str) -> &mut TextBuffer {
        if let Some(index) = self.buffers.iter().position(|b| b.name == name) {
            &mut self.buffers[index]
        } else {
            self.buffers.push(TextBuffer::new(name));
            self.buffers.last_mut().unwrap()
        }
    }

    /// Write `text` into the named buffer, creating it if absent and
    /// overwriting its content otherwise.
    pub fn set_content(&mut self, name: &str, text: &str) {
        self.get_or_create(name).set_text(text);
    }

    pub fn remove(&mut self, name: &str) -> bool {
        match self.buffers.iter().position(|b| b.name == name) {
            Some(index) => {
                self.buffers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.buffers.iter().map(|b| b.name.as_str()).collect()
    }

    /// Case-insensitive substring match over buffer names, for the
    /// searchable buffer-reference field.
    pub fn matching_names(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        self.buffers
            .iter()
            .filter(|b| b.name.to_lowercase().contains(&query))
            .map(|b| b.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}

impl Default for TextBufferStore {
    fn default() -> Self {
        Self::new()
    }
}
