use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of display columns available for one wrapped line, derived from
/// the node's width in layout units. Assumes an average glyph is 8 units
/// wide. Clamped so tiny nodes still wrap one column at a time instead of
/// producing a zero-width wrapper.
pub fn wrap_limit(width_units: u32) -> usize {
    ((width_units / 8) as usize).max(1)
}

/// Greedily word-wrap a single logical line to at most `limit` display
/// columns. Breaks on whitespace; a word wider than `limit` starts on a
/// fresh line and is chunked at the width boundary, no hyphenation. A
/// whitespace-only line wraps to nothing.
pub fn wrap_line(line: &str, limit: usize) -> Vec<String> {
    let mut wrapped = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in line.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);

        if !current.is_empty() {
            if current_width + 1 + word_width <= limit {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }
            wrapped.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= limit {
            current.push_str(word);
            current_width = word_width;
        } else {
            current_width = break_long_word(word, limit, &mut wrapped, &mut current);
        }
    }

    if !current.is_empty() {
        wrapped.push(current);
    }
    wrapped
}

/// Chunk an over-wide word at the column boundary. Full chunks are pushed
/// to `wrapped`; the tail chunk is left in `current` so following words can
/// join it. Returns the tail's width.
fn break_long_word(word: &str, limit: usize, wrapped: &mut Vec<String>, current: &mut String) -> usize {
    let mut chunk_width = 0usize;
    for ch in word.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        // Always keep at least one char per chunk so a double-width glyph
        // under a limit of 1 still makes progress.
        if !current.is_empty() && chunk_width + ch_width > limit {
            wrapped.push(std::mem::take(current));
            chunk_width = 0;
        }
        current.push(ch);
        chunk_width += ch_width;
    }
    chunk_width
}

/// Format note content into the line list the panel renders.
///
/// Source selection: non-empty `text` is split on newline boundaries;
/// otherwise the resolved external buffer lines are used; otherwise the
/// output is empty. Each logical line contributes its wrapped sub-lines
/// followed by one empty string as a paragraph separator.
pub fn format_note(text: &str, buffer_lines: Option<&[String]>, width_units: u32) -> Vec<String> {
    let limit = wrap_limit(width_units);
    let mut out = Vec::new();

    if !text.is_empty() {
        for line in text.lines() {
            out.extend(wrap_line(line, limit));
            out.push(String::new());
        }
    } else if let Some(lines) = buffer_lines {
        for line in lines {
            out.extend(wrap_line(line, limit));
            out.push(String::new());
        }
    }

    out
}
