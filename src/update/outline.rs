//! Outline panel update handlers

use crate::commands::{Cmd, RevealMode};
use crate::messages::OutlineMsg;
use crate::model::AppModel;
use crate::outline::OutlinePosition;

/// Clamp selection and scroll after the visible row count may have changed
fn clamp_panel(model: &mut AppModel) {
    let total = model.outline_panel.visible_count(&model.outline.roots);
    model.outline_panel.clamp_to(total);
}

/// Move the caret to a position and ask the host to reveal it
fn reveal(model: &mut AppModel, position: OutlinePosition) -> Option<Cmd> {
    let position = model.jump_to(position)?;
    Some(Cmd::RevealPosition {
        position,
        mode: RevealMode::Center,
    })
}

/// Handle outline panel messages
pub fn update_outline(model: &mut AppModel, msg: OutlineMsg) -> Option<Cmd> {
    match msg {
        OutlineMsg::RefreshReady { revision } => {
            let doc = match model.document() {
                Some(d) => d,
                None => {
                    tracing::debug!("update_outline: no active document for RefreshReady");
                    return None;
                }
            };

            // Skip if document has been edited since debounce started
            if doc.revision != revision {
                tracing::debug!(
                    "Skipping stale outline refresh: doc revision {} != request revision {}",
                    doc.revision,
                    revision
                );
                return None;
            }

            model.rebuild_outline();
            Some(Cmd::RefreshOutlineView)
        }

        OutlineMsg::Rebuild => {
            model.rebuild_outline();
            Some(Cmd::RefreshOutlineView)
        }

        OutlineMsg::JumpToSymbol { line, column } => {
            reveal(model, OutlinePosition::new(line, column))
        }

        OutlineMsg::ToggleNode { line, name } => {
            if let Some(node) = model.outline.find(line, &name) {
                model.outline_panel.toggle_collapsed(node);
            }
            clamp_panel(model);
            Some(Cmd::Redraw)
        }

        OutlineMsg::SelectPrevious => {
            if let Some(idx) = model.outline_panel.selected_index {
                if idx > 0 {
                    model.outline_panel.selected_index = Some(idx - 1);
                }
            } else {
                model.outline_panel.selected_index = Some(0);
            }
            clamp_panel(model);
            Some(Cmd::Redraw)
        }

        OutlineMsg::SelectNext => {
            let total = model.outline_panel.visible_count(&model.outline.roots);
            if total > 0 {
                if let Some(idx) = model.outline_panel.selected_index {
                    if idx + 1 < total {
                        model.outline_panel.selected_index = Some(idx + 1);
                    }
                } else {
                    model.outline_panel.selected_index = Some(0);
                }
            }
            Some(Cmd::Redraw)
        }

        OutlineMsg::ExpandSelected => {
            set_selected_collapsed(model, false);
            Some(Cmd::Redraw)
        }

        OutlineMsg::CollapseSelected => {
            set_selected_collapsed(model, true);
            Some(Cmd::Redraw)
        }

        OutlineMsg::OpenSelected => {
            let position = model
                .outline_panel
                .selected_index
                .and_then(|idx| model.node_at_row(idx))
                .map(|node| node.position())?;
            reveal(model, position)
        }

        OutlineMsg::Scroll { lines } => {
            let offset = model.outline_panel.scroll_offset;
            if lines < 0 {
                model.outline_panel.scroll_offset = offset.saturating_sub(lines.unsigned_abs() as usize);
            } else {
                model.outline_panel.scroll_offset = offset + lines as usize;
            }
            clamp_panel(model);
            Some(Cmd::Redraw)
        }

        OutlineMsg::ClickRow {
            index,
            click_count,
            on_chevron,
        } => {
            let Some(node) = model.outline_panel.node_at(&model.outline.roots, index) else {
                return None;
            };
            model.outline_panel.selected_index = Some(index);

            if on_chevron && node.is_collapsible() {
                model.outline_panel.toggle_collapsed(node);
                clamp_panel(model);
            } else if click_count >= 2 {
                let position = node.position();
                return reveal(model, position);
            }
            Some(Cmd::Redraw)
        }

        OutlineMsg::SetVisibleRows(rows) => {
            model.outline_panel.visible_capacity = rows;
            clamp_panel(model);
            Some(Cmd::Redraw)
        }
    }
}

fn set_selected_collapsed(model: &mut AppModel, collapsed: bool) {
    let Some(idx) = model.outline_panel.selected_index else {
        return;
    };
    if let Some(node) = model.outline_panel.node_at(&model.outline.roots, idx) {
        if node.is_collapsible() {
            model.outline_panel.set_collapsed(node, collapsed);
        }
    }
    clamp_panel(model);
}
