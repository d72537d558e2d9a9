//! Outliner - Elm-style document outline extraction
//!
//! This crate scans source text line by line, classifies declarations with an
//! ordered regex rule set, and nests them into a symbol tree for a host's
//! outline view. State changes follow the Elm Architecture pattern.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod outline;
pub mod outline_dump;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::OutlineConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use outline::{extract_outline, OutlineBuilder, OutlineData, OutlineKind, OutlineNode, OutlinePosition};
