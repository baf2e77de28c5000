//! Cog lifecycle manager - load, unload and reload against the registry
//!
//! Holds no state of its own; all cog state lives in the registry. The
//! registry lock is held for the whole invocation, so two lifecycle
//! commands never interleave their mutations.

use crate::cogs::registry::{CogRegistry, SharedRegistry};
use crate::domain::entities::{LifecycleOp, LifecycleOutcome, OutcomeKind};
use tracing::{info, warn};

#[derive(Clone)]
pub struct LifecycleManager {
    registry: SharedRegistry,
}

impl LifecycleManager {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> SharedRegistry {
        self.registry.clone()
    }

    /// Apply one operation to each named cog in order
    ///
    /// Outcomes are independent: a failure for one name never aborts the
    /// rest. An empty name list is a no-op and yields an empty result.
    pub async fn execute(&self, op: LifecycleOp, names: &[String]) -> Vec<LifecycleOutcome> {
        let mut registry = self.registry.lock().await;
        let mut outcomes = Vec::with_capacity(names.len());

        for name in names {
            let kind = match op {
                LifecycleOp::Load => Self::load_one(&mut registry, name).await,
                LifecycleOp::Unload => Self::unload_one(&mut registry, name).await,
                LifecycleOp::Reload => Self::reload_one(&mut registry, name).await,
            };
            match &kind {
                OutcomeKind::Success => info!("{} cog: {}", op.done_verb(), name),
                other => warn!("{} {}: {}", op, name, other.describe(op)),
            }
            outcomes.push(LifecycleOutcome::new(name.clone(), kind));
        }

        outcomes
    }

    /// Unload every loaded cog, used on shutdown
    pub async fn unload_all(&self) -> Vec<LifecycleOutcome> {
        let names = self.registry.lock().await.loaded_names();
        self.execute(LifecycleOp::Unload, &names).await
    }

    async fn load_one(registry: &mut CogRegistry, name: &str) -> OutcomeKind {
        let Some(cog) = registry.cog(name) else {
            return OutcomeKind::NotFound;
        };
        if registry.is_loaded(name) {
            return OutcomeKind::AlreadyInState;
        }
        match cog.setup().await {
            Ok(()) => {
                registry.mark_loaded(name);
                OutcomeKind::Success
            }
            Err(e) => OutcomeKind::Error(e.to_string()),
        }
    }

    async fn unload_one(registry: &mut CogRegistry, name: &str) -> OutcomeKind {
        let Some(cog) = registry.cog(name) else {
            return OutcomeKind::NotFound;
        };
        if !registry.is_loaded(name) {
            return OutcomeKind::AlreadyInState;
        }
        match cog.teardown().await {
            Ok(()) => {
                registry.mark_unloaded(name);
                OutcomeKind::Success
            }
            Err(e) => OutcomeKind::Error(e.to_string()),
        }
    }

    /// Teardown followed by setup, observable as a single outcome
    ///
    /// Reload presupposes a prior load: a cog that is unknown or not
    /// currently loaded reports NotFound. On failure the registry keeps
    /// the cog marked loaded.
    async fn reload_one(registry: &mut CogRegistry, name: &str) -> OutcomeKind {
        if !registry.is_loaded(name) {
            return OutcomeKind::NotFound;
        }
        // is_loaded above implies the record exists
        let Some(cog) = registry.cog(name) else {
            return OutcomeKind::NotFound;
        };
        if let Err(e) = cog.teardown().await {
            return OutcomeKind::Error(e.to_string());
        }
        match cog.setup().await {
            Ok(()) => OutcomeKind::Success,
            Err(e) => OutcomeKind::Error(e.to_string()),
        }
    }
}
