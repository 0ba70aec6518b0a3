//! # Store Capability Contracts
//!
//! Defines the traits that backing-store collaborators implement so the
//! resolution core can be exercised without any concrete data access. The
//! core composes these through trait objects; implementations own all
//! transport, persistence, retry, and timeout concerns.

use crate::error::ResolutionResult;
use crate::models::{FailoverEntry, Learner, LearnerResponse};
use async_trait::async_trait;

/// Long-term store holding archived learner records
#[async_trait]
pub trait ArchivedLearnerStore: Send + Sync {
    /// Fetch an archived learner by ID
    ///
    /// # Returns
    ///
    /// * `Ok(Some(learner))` - The archived record
    /// * `Ok(None)` - No archived record exists for this ID
    /// * `Err` - Any collaborator fault
    async fn get_archived_learner(&self, learner_id: i64) -> ResolutionResult<Option<Learner>>;
}

/// Primary store consulted while the system is healthy
#[async_trait]
pub trait PrimaryLearnerStore: Send + Sync {
    /// Load the learner envelope for an ID from the primary store
    async fn load_learner(&self, learner_id: i64) -> ResolutionResult<Option<LearnerResponse>>;
}

/// Secondary store consulted while failover mode is active
#[async_trait]
pub trait FailoverLearnerStore: Send + Sync {
    /// Load the learner envelope for an ID from the failover store
    async fn get_learner_by_id(&self, learner_id: i64)
        -> ResolutionResult<Option<LearnerResponse>>;
}

/// Repository of failed-request records used by the health evaluation
#[async_trait]
pub trait FailoverRepository: Send + Sync {
    /// Fetch the current failed-request records.
    ///
    /// `Ok(None)` models a collection the collaborator could not produce and
    /// is treated as a fault by the health evaluation; an empty `Vec` is a
    /// healthy system with no recorded failures.
    async fn get_failover_entries(&self) -> ResolutionResult<Option<Vec<FailoverEntry>>>;
}
