//! Note File Entity
//!
//! The document entity the bridge holds a reference to. Content, path and
//! metadata are owned by the application's file layer; the bridge only reads.

use std::path::PathBuf;

/// A note file open in the editor.
///
/// The bridge receives this behind `Arc` and treats it as read-only. It may
/// also receive no file at all; every bridge operation tolerates that.
#[derive(Debug, Clone)]
pub struct NoteFile {
    /// Display name of the note
    pub name: String,
    /// On-disk location, if the note has been saved
    pub path: Option<PathBuf>,
    /// Full markdown content
    pub content: String,
}

impl NoteFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        NoteFile {
            name: name.into(),
            path: None,
            content: content.into(),
        }
    }
}
