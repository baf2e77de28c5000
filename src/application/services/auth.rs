//! Owner authorization gate
//!
//! Every lifecycle and process-control command passes through this gate
//! before any privileged work happens. The owner id is configured once at
//! process start and never changes.

/// Checks whether an invoker is the configured bot owner
#[derive(Debug, Clone)]
pub struct OwnerGate {
    owner_id: String,
}

impl OwnerGate {
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
        }
    }

    /// True iff the invoker is the owner; no side effects
    pub fn authorize(&self, invoker_id: &str) -> bool {
        !self.owner_id.is_empty() && invoker_id == self.owner_id
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_owner_is_authorized() {
        let gate = OwnerGate::new("1234");
        assert!(gate.authorize("1234"));
        assert!(!gate.authorize("5678"));
        assert!(!gate.authorize(""));
    }

    #[test]
    fn empty_owner_id_authorizes_nobody() {
        let gate = OwnerGate::new("");
        assert!(!gate.authorize(""));
        assert!(!gate.authorize("anyone"));
    }
}
