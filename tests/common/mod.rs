//! Shared test fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use cogbot::application::errors::CogError;
use cogbot::cogs::{Cog, CogRegistry, SharedRegistry};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

pub fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// Instrumented cog recording setup/teardown calls
pub struct TestCog {
    name: &'static str,
    fail_setup: bool,
    pub setups: Arc<AtomicUsize>,
    pub teardowns: Arc<AtomicUsize>,
}

impl TestCog {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fail_setup: false,
            setups: Arc::new(AtomicUsize::new(0)),
            teardowns: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A cog whose own setup code fails
    pub fn failing(name: &'static str) -> Self {
        Self {
            fail_setup: true,
            ..Self::new(name)
        }
    }

    pub fn counters(&self) -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
        (self.setups.clone(), self.teardowns.clone())
    }
}

#[async_trait]
impl Cog for TestCog {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "test cog"
    }

    fn commands(&self) -> Vec<&'static str> {
        vec![self.name]
    }

    async fn setup(&self) -> Result<(), CogError> {
        if self.fail_setup {
            return Err(CogError::Setup("deliberate failure".to_string()));
        }
        self.setups.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn teardown(&self) -> Result<(), CogError> {
        self.teardowns.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn handle(&self, command: &str, _args: &[String]) -> Result<String, CogError> {
        Ok(format!("{} handled", command))
    }
}

/// Cog whose teardown blocks long enough to exceed any test grace period
pub struct SlowCog;

#[async_trait]
impl Cog for SlowCog {
    fn name(&self) -> &str {
        "slow"
    }

    fn description(&self) -> &str {
        "slow teardown cog"
    }

    fn commands(&self) -> Vec<&'static str> {
        vec!["slow"]
    }

    async fn teardown(&self) -> Result<(), CogError> {
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        Ok(())
    }

    async fn handle(&self, command: &str, _args: &[String]) -> Result<String, CogError> {
        Ok(format!("{} handled", command))
    }
}

pub fn registry_of(cogs: Vec<Arc<dyn Cog>>) -> SharedRegistry {
    Arc::new(tokio::sync::Mutex::new(CogRegistry::discover(cogs)))
}
