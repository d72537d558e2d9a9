//! Outline configuration persistence
//!
//! Stores extraction preferences in `~/.config/outliner/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How scopes are closed while building the outline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NestingStrategy {
    /// Count `{`/`}` across every line; tolerant of inconsistent indentation
    #[default]
    BraceDepth,
    /// Close a scope on a `}` line indented like its declaration; no per-char scan
    Indentation,
}

/// What to do when a sibling list already holds a node with the same name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    #[default]
    Keep,
    /// The second occurrence is dropped and never opens a scope
    DropRepeated,
}

/// Which column a node records as its navigation target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnPolicy {
    /// Match start for functions and variables, first non-whitespace otherwise
    #[default]
    MatchStart,
    FirstNonWhitespace,
    Fixed(usize),
    /// Record no column; navigation lands at the start of the line
    Omit,
}

/// Outline configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineConfig {
    #[serde(default)]
    pub nesting: NestingStrategy,
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
    #[serde(default)]
    pub column: ColumnPolicy,
    /// Delay between an edit and the rebuild it triggers; 0 rebuilds on every edit
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Whether nodes with children start collapsed in the panel
    #[serde(default = "default_collapse_by_default")]
    pub collapse_by_default: bool,
}

fn default_debounce_ms() -> u64 {
    crate::update::OUTLINE_DEBOUNCE_MS
}

fn default_collapse_by_default() -> bool {
    true
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            nesting: NestingStrategy::default(),
            duplicates: DuplicatePolicy::default(),
            column: ColumnPolicy::default(),
            debounce_ms: default_debounce_ms(),
            collapse_by_default: default_collapse_by_default(),
        }
    }
}

impl OutlineConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
