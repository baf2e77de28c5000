//! Process controller - orderly stop and restart signalling
//!
//! The controller owns a one-shot shutdown signal. The run loop watches it,
//! unloads cogs within the grace period, closes the platform connection and
//! storage, then exits; on Restart the entry point re-execs the process.

use std::time::Duration;
use tokio::sync::watch;

/// What to do after the orderly shutdown completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownIntent {
    /// Terminate the process
    Stop,
    /// Re-exec the process from its entry point
    Restart,
}

/// Receiving side of the shutdown signal, held by the run loop
pub type ShutdownSignal = watch::Receiver<Option<ShutdownIntent>>;

pub struct ProcessController {
    tx: watch::Sender<Option<ShutdownIntent>>,
    grace: Duration,
}

impl ProcessController {
    pub fn new(grace: Duration) -> (Self, ShutdownSignal) {
        let (tx, rx) = watch::channel(None);
        (Self { tx, grace }, rx)
    }

    /// Initiate an orderly shutdown; returns false if one is already underway
    pub fn stop(&self) -> bool {
        self.signal(ShutdownIntent::Stop)
    }

    /// Initiate an orderly shutdown followed by re-exec
    pub fn restart(&self) -> bool {
        self.signal(ShutdownIntent::Restart)
    }

    pub fn is_shutting_down(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Bound on how long shutdown waits for in-flight cog work
    pub fn grace_period(&self) -> Duration {
        self.grace
    }

    // First signal wins; later calls are no-ops
    fn signal(&self, intent: ShutdownIntent) -> bool {
        let mut accepted = false;
        self.tx.send_if_modified(|current| {
            if current.is_none() {
                *current = Some(intent);
                accepted = true;
                true
            } else {
                false
            }
        });
        if accepted {
            tracing::info!("Shutdown requested: {:?}", intent);
        }
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_signal_wins() {
        let (controller, rx) = ProcessController::new(Duration::from_secs(5));
        assert!(!controller.is_shutting_down());

        assert!(controller.stop());
        assert!(controller.is_shutting_down());
        assert_eq!(*rx.borrow(), Some(ShutdownIntent::Stop));

        // Second call is a no-op, intent unchanged
        assert!(!controller.restart());
        assert_eq!(*rx.borrow(), Some(ShutdownIntent::Stop));
    }

    #[test]
    fn restart_carries_its_intent() {
        let (controller, rx) = ProcessController::new(Duration::from_secs(5));
        assert!(controller.restart());
        assert_eq!(*rx.borrow(), Some(ShutdownIntent::Restart));
    }
}
