//! Application services - Business logic orchestration

pub mod auth;
pub mod lifecycle;
pub mod process;

pub use auth::OwnerGate;
pub use lifecycle::LifecycleManager;
pub use process::{ProcessController, ShutdownIntent, ShutdownSignal};
