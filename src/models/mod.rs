pub mod failover_entry;
pub mod learner;

// Re-export core models for easy access
pub use failover_entry::FailoverEntry;
pub use learner::{Learner, LearnerResponse};
