//! Domain entities - Core business objects with no external dependencies

pub mod message;
pub mod outcome;
pub mod user;

pub use message::{Content, Message};
pub use outcome::{LifecycleOp, LifecycleOutcome, OutcomeKind};
pub use user::User;
