//! Per-cog results of lifecycle commands

use std::fmt;

/// Lifecycle operation requested by the owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleOp {
    Load,
    Unload,
    Reload,
}

impl LifecycleOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleOp::Load => "load",
            LifecycleOp::Unload => "unload",
            LifecycleOp::Reload => "reload",
        }
    }

    /// Past-tense verb for response messages ("alpha: loaded")
    pub fn done_verb(&self) -> &'static str {
        match self {
            LifecycleOp::Load => "loaded",
            LifecycleOp::Unload => "unloaded",
            LifecycleOp::Reload => "reloaded",
        }
    }
}

impl fmt::Display for LifecycleOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a lifecycle operation on a single cog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The operation completed and the registry was updated
    Success,
    /// The cog was already in the requested state; nothing changed
    AlreadyInState,
    /// No cog with that name exists (or reload of a never-loaded cog)
    NotFound,
    /// The cog's own setup/teardown failed; the registry was left unchanged
    Error(String),
}

impl OutcomeKind {
    /// Human-readable result line fragment, phrased for the given operation
    pub fn describe(&self, op: LifecycleOp) -> String {
        match self {
            OutcomeKind::Success => op.done_verb().to_string(),
            OutcomeKind::AlreadyInState => match op {
                LifecycleOp::Unload => "already unloaded".to_string(),
                _ => "already loaded".to_string(),
            },
            OutcomeKind::NotFound => "not found".to_string(),
            OutcomeKind::Error(reason) => format!("error: {}", reason),
        }
    }
}

/// One per requested cog name; aggregated into a single response message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleOutcome {
    pub cog: String,
    pub kind: OutcomeKind,
}

impl LifecycleOutcome {
    pub fn new(cog: impl Into<String>, kind: OutcomeKind) -> Self {
        Self {
            cog: cog.into(),
            kind,
        }
    }
}
