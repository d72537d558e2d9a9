//! Document model - the text buffer the outline is extracted from

use ropey::Rope;
use std::borrow::Cow;
use std::path::PathBuf;

use crate::outline::LineSource;

/// A change reported by the host editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEdit {
    /// Insert text at a char offset
    Insert { char_idx: usize, text: String },
    /// Delete the char range `start..end`
    Delete { start: usize, end: usize },
    /// Replace the whole buffer (e.g. reload from disk)
    ReplaceAll(String),
}

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for new/unsaved files)
    pub file_path: Option<PathBuf>,
    /// Document revision counter (incremented on each edit)
    /// Used for staleness checking of debounced outline refreshes
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            buffer: Rope::from(""),
            file_path: None,
            revision: 0,
        }
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            file_path: None,
            revision: 0,
        }
    }

    /// Get the display name for this document.
    /// Returns the filename if saved, or "Untitled" as fallback.
    pub fn display_name(&self) -> String {
        if let Some(path) = &self.file_path {
            if let Some(name) = path.file_name() {
                return name.to_string_lossy().to_string();
            }
        }
        "Untitled".to_string()
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Get line content as Cow<str>, avoiding allocation when possible
    ///
    /// Returns Cow::Borrowed if the line is stored contiguously in a single chunk,
    /// otherwise returns Cow::Owned with the line as a String.
    /// Also trims the trailing newline.
    #[inline]
    pub fn get_line_cow(&self, line_idx: usize) -> Option<Cow<'_, str>> {
        if line_idx >= self.buffer.len_lines() {
            return None;
        }

        let line = self.buffer.line(line_idx);
        let len = line.len_chars();

        // Calculate trim length (remove trailing newline)
        let trim_len = if len > 0 && line.char(len - 1) == '\n' {
            if len > 1 && line.char(len - 2) == '\r' {
                2 // CRLF
            } else {
                1 // LF
            }
        } else {
            0
        };

        let trimmed = line.slice(..len - trim_len);

        // Try to get as a contiguous slice (zero allocation)
        if let Some(s) = trimmed.as_str() {
            Some(Cow::Borrowed(s))
        } else {
            // Falls back to allocation only when line spans multiple chunks
            Some(Cow::Owned(trimmed.to_string()))
        }
    }

    /// Get the length of a line (excluding newline characters)
    pub fn line_length(&self, line_idx: usize) -> usize {
        self.get_line_cow(line_idx)
            .map(|line| line.chars().count())
            .unwrap_or(0)
    }

    /// Apply a host edit and bump the revision.
    ///
    /// Offsets are clamped to the buffer so a late edit never panics.
    pub fn apply_edit(&mut self, edit: &DocumentEdit) {
        let len = self.buffer.len_chars();
        match edit {
            DocumentEdit::Insert { char_idx, text } => {
                self.buffer.insert((*char_idx).min(len), text);
            }
            DocumentEdit::Delete { start, end } => {
                let start = (*start).min(len);
                let end = (*end).clamp(start, len);
                self.buffer.remove(start..end);
            }
            DocumentEdit::ReplaceAll(text) => {
                self.buffer = Rope::from(text.as_str());
            }
        }
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for Document {
    fn line_count(&self) -> usize {
        Document::line_count(self)
    }

    fn line_at(&self, idx: usize) -> Option<Cow<'_, str>> {
        self.get_line_cow(idx)
    }

    fn line_len(&self, idx: usize) -> usize {
        self.line_length(idx)
    }
}
