//! Outline state dump for development diagnostics
//!
//! Serializes a snapshot of the model to JSON: the active document summary,
//! the extracted tree, the visible panel rows and the last caret request.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::model::{AppModel, OutlineRow};
use crate::outline::{OutlineData, OutlinePosition};

#[derive(Debug, Serialize)]
pub struct StateDump {
    pub timestamp: u64,
    pub document: Option<DocumentDump>,
    pub outline: OutlineData,
    pub panel: PanelDump,
    pub caret: Option<OutlinePosition>,
}

#[derive(Debug, Serialize)]
pub struct DocumentDump {
    pub file_path: Option<String>,
    pub display_name: String,
    pub revision: u64,
    pub line_count: usize,
    pub char_count: usize,
}

#[derive(Debug, Serialize)]
pub struct PanelDump {
    pub selected_index: Option<usize>,
    pub scroll_offset: usize,
    pub visible_capacity: usize,
    pub collapse_by_default: bool,
    pub rows: Vec<OutlineRow>,
}

impl StateDump {
    pub fn from_model(model: &AppModel) -> Self {
        let document = model.document().map(|doc| DocumentDump {
            file_path: doc.file_path.as_ref().map(|p| p.display().to_string()),
            display_name: doc.display_name(),
            revision: doc.revision,
            line_count: doc.line_count(),
            char_count: doc.buffer.len_chars(),
        });

        let panel = &model.outline_panel;
        Self {
            timestamp: unix_timestamp(),
            document,
            outline: model.outline.clone(),
            panel: PanelDump {
                selected_index: panel.selected_index,
                scroll_offset: panel.scroll_offset,
                visible_capacity: panel.visible_capacity,
                collapse_by_default: panel.collapse_by_default,
                rows: model.visible_rows(),
            },
            caret: model.caret,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    /// Write the dump into `dir`, creating it if needed. Returns the file path.
    pub fn save_to_dir(&self, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}-outline-dump.json", self.timestamp));
        std::fs::write(&path, self.to_json())?;
        Ok(path)
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutlineConfig;
    use crate::model::Document;

    #[test]
    fn test_dump_without_document() {
        let model = AppModel::default();
        let dump = StateDump::from_model(&model);
        assert!(dump.document.is_none());
        assert!(dump.panel.rows.is_empty());

        let json: serde_json::Value = serde_json::from_str(&dump.to_json()).unwrap();
        assert!(json["document"].is_null());
        assert_eq!(json["outline"]["roots"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_dump_contains_tree_and_rows() {
        let doc = Document::with_text("class Foo {\n  bar() {\n  }\n}\n");
        let model = AppModel::with_document(OutlineConfig::default(), doc);
        let json: serde_json::Value =
            serde_json::from_str(&StateDump::from_model(&model).to_json()).unwrap();

        assert_eq!(json["outline"]["roots"][0]["name"], "Foo");
        assert_eq!(json["outline"]["roots"][0]["kind"], "class");
        assert_eq!(json["outline"]["roots"][0]["children"][0]["name"], "bar");
        // Collapsed by default, so only the class row is visible
        assert_eq!(json["panel"]["rows"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["document"]["line_count"], 5);
    }

    #[test]
    fn test_save_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let dump = StateDump::from_model(&AppModel::default());
        let path = dump.save_to_dir(&dir.path().join("dumps")).unwrap();
        assert!(path.exists());
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("\"outline\""));
    }
}
