//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! extraction and refresh issues.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=outline=debug,message=debug` - scoped filtering
//! - `RUST_LOG=outliner::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/outliner/logs/outliner.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::outline::OutlineData;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering.
/// File logging writes to `~/.config/outliner/logs/outliner.log` with daily rotation.
pub fn init() {
    let logs_dir = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    if let Err(e) = init_with_logs_dir(logs_dir) {
        eprintln!("Warning: Could not install tracing subscriber: {:#}", e);
    }
}

/// Install the subscriber, writing log files to `logs_dir` when given.
///
/// Fails if a global subscriber is already installed.
pub fn init_with_logs_dir(logs_dir: Option<PathBuf>) -> Result<()> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = logs_dir.map(|dir| {
        let file_appender = tracing_appender::rolling::daily(dir, "outliner.log");
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new("debug"))
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;
    Ok(())
}

/// Lightweight snapshot of an outline for diffing between rebuilds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineSnapshot {
    pub revision: u64,
    pub node_count: usize,
    pub roots: Vec<String>,
}

impl OutlineSnapshot {
    pub fn from_outline(outline: &OutlineData) -> Self {
        Self {
            revision: outline.revision,
            node_count: outline.node_count(),
            roots: outline.roots.iter().map(|n| n.name.clone()).collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &OutlineSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.revision != other.revision {
            changes.push(format!("revision: {} → {}", self.revision, other.revision));
        }
        if self.node_count != other.node_count {
            changes.push(format!("nodes: {} → {}", self.node_count, other.node_count));
        }

        let added: Vec<&str> = other
            .roots
            .iter()
            .filter(|name| !self.roots.contains(name))
            .map(String::as_str)
            .collect();
        let removed: Vec<&str> = self
            .roots
            .iter()
            .filter(|name| !other.roots.contains(name))
            .map(String::as_str)
            .collect();
        if !added.is_empty() {
            changes.push(format!("+roots [{}]", added.join(", ")));
        }
        if !removed.is_empty() {
            changes.push(format!("-roots [{}]", removed.join(", ")));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::OutlineBuilder;

    #[test]
    fn test_snapshot_diff() {
        let builder = OutlineBuilder::new();
        let before = OutlineSnapshot::from_outline(&builder.build(["const a = 1;", "const b = 2;"]));
        let after = OutlineSnapshot::from_outline(&builder.build(["const a = 1;", "const c = 3;"]));

        assert_eq!(before.diff(&before), None);
        assert_eq!(before.diff(&after).as_deref(), Some("+roots [c]; -roots [b]"));
    }

    #[test]
    fn test_snapshot_counts_nested_nodes() {
        let outline = OutlineBuilder::new().build(["class A {", "  x = 1;", "}"]);
        let snapshot = OutlineSnapshot::from_outline(&outline);
        assert_eq!(snapshot.node_count, 2);
        assert_eq!(snapshot.roots, vec!["A".to_string()]);
    }
}
