//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod config;
mod document;
mod outline;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::messages::DocumentMsg;
#[cfg(debug_assertions)]
use crate::tracing::OutlineSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use config::update_config;
pub use document::{schedule_outline_refresh, update_document, OUTLINE_DEBOUNCE_MS};
pub use outline::update_outline;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Document(m) => document::update_document(model, m),
        Msg::Outline(m) => outline::update_outline(model, m),
        Msg::Config(m) => config::update_config(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Logs each message and the outline revision/node count it left behind.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    debug!(target: "message", msg = %msg_name, "processing");

    let before = OutlineSnapshot::from_outline(&model.outline);
    let result = update_inner(model, msg);
    let after = OutlineSnapshot::from_outline(&model.outline);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "outline", %diff, "outline replaced");
    } else if result.as_ref().is_some_and(Cmd::refreshes_outline) {
        debug!(target: "outline", revision = after.revision, "outline rebuilt unchanged");
    }

    result
}

/// Get a display name for a message type
///
/// Documents are summarized instead of dumping the whole buffer.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Document(DocumentMsg::Activated(Some(doc))) => {
            format!("Document::Activated({})", doc.display_name())
        }
        Msg::Document(DocumentMsg::Activated(None)) => "Document::Activated(None)".to_string(),
        Msg::Document(DocumentMsg::Edited(_)) => "Document::Edited".to_string(),
        Msg::Outline(m) => format!("Outline::{:?}", m),
        Msg::Config(m) => format!("Config::{:?}", m),
    }
}
