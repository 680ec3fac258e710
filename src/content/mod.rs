//! Topic content store
//!
//! Immutable key -> (title, body) table backing the detail modal. The
//! built-in table is embedded from `topics.toml` and parsed once; a user
//! file named by `content_path` in the config replaces it wholesale.

use crate::config::DashboardConfig;
use crate::errors::{DashboardError, Result};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const BUILTIN_TOPICS: &str = include_str!("topics.toml");

static BUILTIN: OnceCell<ContentStore> = OnceCell::new();

/// A single informational topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub key: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Deserialize)]
struct TopicTable {
    #[serde(default)]
    topics: Vec<ContentEntry>,
}

/// Topic table in declaration order with a key index
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    entries: Vec<ContentEntry>,
    index: HashMap<String, usize>,
}

impl ContentStore {
    /// Parse and validate a TOML topic table
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: TopicTable = toml::from_str(source)?;
        Self::from_entries(table.topics)
    }

    /// Build a store, rejecting blank keys/titles and duplicate keys
    pub fn from_entries(entries: Vec<ContentEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if entry.key.trim().is_empty() {
                return Err(DashboardError::EmptyField {
                    key: format!("#{i}"),
                    field: "key",
                });
            }
            if entry.title.trim().is_empty() {
                return Err(DashboardError::EmptyField {
                    key: entry.key.clone(),
                    field: "title",
                });
            }
            if index.insert(entry.key.clone(), i).is_some() {
                return Err(DashboardError::DuplicateTopic(entry.key.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    /// The embedded topic table, parsed on first use
    pub fn builtin() -> Result<&'static Self> {
        BUILTIN.get_or_try_init(|| Self::from_toml_str(BUILTIN_TOPICS))
    }

    /// Resolve the table for this run: the configured override file, or the built-in one
    pub fn load(config: &DashboardConfig) -> Result<Self> {
        match &config.content_path {
            Some(path) => {
                let source = std::fs::read_to_string(path)?;
                let store = Self::from_toml_str(&source)?;
                if store.is_empty() {
                    tracing::warn!(path = ?path, "Content override defines no topics");
                }
                tracing::info!(path = ?path, topics = store.len(), "Loaded content override");
                Ok(store)
            }
            None => Self::builtin().cloned(),
        }
    }

    /// Look up a topic; a miss means a list item points at a topic that was never defined
    pub fn lookup(&self, key: &str) -> Result<&ContentEntry> {
        self.get(key)
            .ok_or_else(|| DashboardError::UnknownTopic(key.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<&ContentEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fail if any of `keys` is missing from the table
    pub fn ensure_covers<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Result<()> {
        for key in keys {
            self.lookup(key)?;
        }
        Ok(())
    }
}
