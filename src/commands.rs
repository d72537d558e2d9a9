//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after an update.

use crate::outline::OutlinePosition;

/// How the host should scroll a revealed position into view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealMode {
    #[default]
    Center,
    /// Scroll only if the position is off-screen
    Minimal,
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Panel state changed (selection, scroll, collapse); redraw the panel
    Redraw,
    /// The outline was replaced; the tree view must refresh from the root
    RefreshOutlineView,
    /// Start debounce timer for outline extraction
    /// After delay_ms, send OutlineMsg::RefreshReady { revision }
    DebouncedOutlineRefresh { revision: u64, delay_ms: u64 },
    /// Move the caret to `position` and scroll it into view
    RevealPosition {
        position: OutlinePosition,
        mode: RevealMode,
    },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires the panel to be redrawn
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::RefreshOutlineView => true,
            // The timer fires RefreshReady, which triggers the refresh
            Cmd::DebouncedOutlineRefresh { .. } => false,
            // Selection highlight follows the caret
            Cmd::RevealPosition { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Whether the outline data itself changed
    pub fn refreshes_outline(&self) -> bool {
        match self {
            Cmd::RefreshOutlineView => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.refreshes_outline()),
            _ => false,
        }
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
