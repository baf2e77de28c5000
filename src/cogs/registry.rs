//! Cog registry - the authoritative record of which cogs are active

use super::trait_def::Cog;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Load state of a cog; the record itself persists for the process lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CogState {
    Unloaded,
    Loaded,
}

/// One entry per discovered cog, created once and never removed
struct CogRecord {
    cog: Arc<dyn Cog>,
    state: CogState,
}

/// Tracks the loaded/unloaded state of every known cog
///
/// State transitions are idempotent at this layer; the lifecycle manager
/// decides whether a redundant transition is surfaced to the owner.
#[derive(Default)]
pub struct CogRegistry {
    records: HashMap<String, CogRecord>,
}

impl CogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a set of discovered cogs, all initially unloaded
    pub fn discover(cogs: Vec<Arc<dyn Cog>>) -> Self {
        let mut registry = Self::new();
        for cog in cogs {
            let name = cog.name().to_string();
            if registry.records.contains_key(&name) {
                tracing::warn!("Duplicate cog name '{}' ignored", name);
                continue;
            }
            registry.records.insert(
                name,
                CogRecord {
                    cog,
                    state: CogState::Unloaded,
                },
            );
        }
        registry
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// False if the name is unknown or the cog is unloaded
    pub fn is_loaded(&self, name: &str) -> bool {
        self.records
            .get(name)
            .map(|r| r.state == CogState::Loaded)
            .unwrap_or(false)
    }

    pub fn mark_loaded(&mut self, name: &str) {
        if let Some(record) = self.records.get_mut(name) {
            record.state = CogState::Loaded;
        }
    }

    pub fn mark_unloaded(&mut self, name: &str) {
        if let Some(record) = self.records.get_mut(name) {
            record.state = CogState::Unloaded;
        }
    }

    /// Get a cog instance by name regardless of its state
    pub fn cog(&self, name: &str) -> Option<Arc<dyn Cog>> {
        self.records.get(name).map(|r| r.cog.clone())
    }

    /// Names of every discovered cog
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.records.keys().cloned().collect();
        names.sort();
        names
    }

    /// Names of currently loaded cogs
    pub fn loaded_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .records
            .iter()
            .filter(|(_, r)| r.state == CogState::Loaded)
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Find the loaded cog serving the given command, if any
    pub fn handler_for(&self, command: &str) -> Option<Arc<dyn Cog>> {
        self.records
            .values()
            .find(|r| r.state == CogState::Loaded && r.cog.commands().iter().any(|c| *c == command))
            .map(|r| r.cog.clone())
    }
}

/// Thread-safe handle shared between the lifecycle manager and dispatcher
pub type SharedRegistry = Arc<Mutex<CogRegistry>>;
