//! Document update handlers
//!
//! Activation replaces the outline synchronously; edits are debounced.

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Debounce delay in milliseconds
/// Kept short since the previous outline stays visible during the wait
pub const OUTLINE_DEBOUNCE_MS: u64 = 30;

/// Handle host document notifications
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::Activated(document) => {
            match &document {
                Some(doc) => tracing::debug!(
                    "update_document: activated {} ({} lines, rev {})",
                    doc.display_name(),
                    doc.line_count(),
                    doc.revision
                ),
                None => tracing::debug!("update_document: no active document"),
            }

            model.document = document;
            model.caret = None;
            model.outline_panel.reset();
            model.rebuild_outline();
            Some(Cmd::RefreshOutlineView)
        }

        DocumentMsg::Edited(edit) => {
            let Some(doc) = model.document.as_mut() else {
                tracing::warn!("update_document: edit received with no active document");
                return None;
            };
            doc.apply_edit(&edit);
            schedule_outline_refresh(model)
        }
    }
}

/// Schedule extraction for the active document's current revision.
///
/// With a zero debounce the outline is rebuilt right away.
pub fn schedule_outline_refresh(model: &mut AppModel) -> Option<Cmd> {
    let revision = model.document.as_ref()?.revision;

    if model.config.debounce_ms == 0 {
        model.rebuild_outline();
        return Some(Cmd::RefreshOutlineView);
    }

    Some(Cmd::DebouncedOutlineRefresh {
        revision,
        delay_ms: model.config.debounce_ms,
    })
}
