//! Application model - the complete state of the outline view
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod outline_panel;

pub use document::{Document, DocumentEdit};
pub use outline_panel::{NodeKey, OutlinePanelState, OutlineRow};

use crate::config::OutlineConfig;
use crate::outline::{navigate, OutlineBuilder, OutlineData, OutlineNode, OutlinePosition};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Active document, None when the host has no focused editor
    pub document: Option<Document>,
    /// Outline of the active document's latest extracted revision
    pub outline: OutlineData,
    pub outline_panel: OutlinePanelState,
    pub config: OutlineConfig,
    /// Last caret position requested from the host
    pub caret: Option<OutlinePosition>,
    builder: OutlineBuilder,
}

impl AppModel {
    pub fn new(config: OutlineConfig) -> Self {
        Self {
            document: None,
            outline: OutlineData::empty(0),
            outline_panel: OutlinePanelState::new(config.collapse_by_default),
            builder: OutlineBuilder::from_config(&config),
            config,
            caret: None,
        }
    }

    /// Model with an active document and its outline already built
    pub fn with_document(config: OutlineConfig, document: Document) -> Self {
        let mut model = Self::new(config);
        model.document = Some(document);
        model.rebuild_outline();
        model
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Replace the configuration; the next rebuild uses the new policies
    pub fn set_config(&mut self, config: OutlineConfig) {
        self.builder = OutlineBuilder::from_config(&config);
        self.outline_panel.collapse_by_default = config.collapse_by_default;
        self.config = config;
    }

    /// Re-extract the outline from the active document and swap it in.
    ///
    /// With no active document the outline becomes empty.
    pub fn rebuild_outline(&mut self) {
        self.outline = match &self.document {
            Some(doc) => self.builder.build_source(doc, doc.revision),
            None => OutlineData::empty(0),
        };
        self.outline_panel.retain_present(&self.outline.roots);
        let total = self.outline_panel.visible_count(&self.outline.roots);
        self.outline_panel.clamp_to(total);
    }

    /// Visible rows for the host tree view
    pub fn visible_rows(&self) -> Vec<OutlineRow> {
        self.outline_panel.rows(&self.outline.roots)
    }

    /// Node at a flattened visible row index
    pub fn node_at_row(&self, index: usize) -> Option<&OutlineNode> {
        self.outline_panel.node_at(&self.outline.roots, index)
    }

    /// Clamp `position` to the active document and record it as the caret.
    ///
    /// Returns None when there is no document to navigate in.
    pub fn jump_to(&mut self, position: OutlinePosition) -> Option<OutlinePosition> {
        let doc = self.document.as_ref()?;
        let target = navigate::clamp(position, doc);
        self.caret = Some(target);
        Some(target)
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(OutlineConfig::default())
    }
}
