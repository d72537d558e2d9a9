//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::config::OutlineConfig;
use crate::model::{Document, DocumentEdit};

/// Host document notifications
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// The active document changed (None when no editor is focused)
    Activated(Option<Document>),
    /// The active document's content changed
    Edited(DocumentEdit),
}

/// Outline extraction and panel messages
#[derive(Debug, Clone)]
pub enum OutlineMsg {
    /// Debounce delay elapsed for `revision`
    RefreshReady { revision: u64 },
    /// Rebuild immediately, bypassing the debounce
    Rebuild,
    /// Move the caret to a symbol
    JumpToSymbol { line: usize, column: usize },
    /// Toggle a node found by line+name
    ToggleNode { line: usize, name: String },
    SelectPrevious,
    SelectNext,
    ExpandSelected,
    CollapseSelected,
    /// Jump to the selected node
    OpenSelected,
    /// Scroll the panel (positive = down)
    Scroll { lines: i32 },
    ClickRow {
        index: usize,
        click_count: u32,
        on_chevron: bool,
    },
    /// The host panel was resized to show this many rows
    SetVisibleRows(usize),
}

/// Configuration messages
#[derive(Debug, Clone)]
pub enum ConfigMsg {
    /// Replace the active configuration and rebuild
    Reload(OutlineConfig),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Document(DocumentMsg),
    Outline(OutlineMsg),
    Config(ConfigMsg),
}
