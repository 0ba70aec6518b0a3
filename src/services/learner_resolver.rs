//! # Learner Resolver
//!
//! Resolves a learner by ID from one of three backing stores, selecting the
//! store from the archival flag and the failover health signal, and
//! normalizing every failure mode into a single reported error kind.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{LearnerResolutionError, ResolutionResult};
use crate::models::Learner;
use crate::resilience::FailoverDetector;
use crate::stores::{ArchivedLearnerStore, FailoverLearnerStore, PrimaryLearnerStore};

/// Service for archive-aware and failover-aware learner resolution
///
/// Composes the injected store capabilities with the failover health
/// evaluation. Each call is an independent, request-scoped decision with no
/// state shared between calls.
pub struct LearnerResolver {
    archive_store: Arc<dyn ArchivedLearnerStore>,
    primary_store: Arc<dyn PrimaryLearnerStore>,
    failover_store: Arc<dyn FailoverLearnerStore>,
    failover_detector: FailoverDetector,
}

impl LearnerResolver {
    /// Create a new resolver over the injected stores and health detector
    pub fn new(
        archive_store: Arc<dyn ArchivedLearnerStore>,
        primary_store: Arc<dyn PrimaryLearnerStore>,
        failover_store: Arc<dyn FailoverLearnerStore>,
        failover_detector: FailoverDetector,
    ) -> Self {
        Self {
            archive_store,
            primary_store,
            failover_store,
            failover_detector,
        }
    }

    /// Resolve a learner by ID.
    ///
    /// Selection criteria:
    /// 1. `learner_id` must be positive; violations fail immediately with
    ///    `InvalidLearnerId`, before any store is touched, and are never
    ///    wrapped
    /// 2. Archived learners are fetched from the archive store only
    /// 3. Otherwise the failover health signal picks exactly one of the
    ///    primary or failover stores
    /// 4. A response flagged as archived triggers a re-fetch from the
    ///    archive store, ignoring the embedded learner
    ///
    /// Every other fault is wrapped into `RetrievalFailed`, retaining the
    /// original error as its cause.
    pub async fn get_learner(
        &self,
        learner_id: i64,
        is_archived: bool,
    ) -> ResolutionResult<Learner> {
        if learner_id <= 0 {
            warn!(learner_id, "Rejected learner resolution for non-positive ID");
            return Err(LearnerResolutionError::invalid_learner_id(learner_id));
        }

        match self.resolve(learner_id, is_archived).await {
            Ok(learner) => {
                info!(learner_id, name = %learner.name, "Resolved learner");
                Ok(learner)
            }
            Err(err) => {
                warn!(learner_id, error = %err, "Learner resolution failed");
                Err(LearnerResolutionError::retrieval_failed(err))
            }
        }
    }

    async fn resolve(&self, learner_id: i64, is_archived: bool) -> ResolutionResult<Learner> {
        if is_archived {
            debug!(learner_id, store = "archive", "Fetching archived learner");
            return self
                .archive_store
                .get_archived_learner(learner_id)
                .await?
                .ok_or_else(|| {
                    LearnerResolutionError::not_found(format!(
                        "Archived learner with ID {learner_id} not found."
                    ))
                });
        }

        let response = if self.failover_detector.is_failover_active().await? {
            debug!(learner_id, store = "failover", "Failover mode active");
            self.failover_store
                .get_learner_by_id(learner_id)
                .await?
                .ok_or_else(|| {
                    LearnerResolutionError::not_found(format!(
                        "Learner with ID {learner_id} not found in failover mode."
                    ))
                })?
        } else {
            debug!(learner_id, store = "primary", "Primary store selected");
            self.primary_store
                .load_learner(learner_id)
                .await?
                .ok_or_else(|| {
                    LearnerResolutionError::not_found(format!(
                        "Learner with ID {learner_id} not found."
                    ))
                })?
        };

        // An archived response is informational only; the canonical record
        // lives in the archive store
        let learner = if response.is_archived {
            self.archive_store.get_archived_learner(learner_id).await?
        } else {
            response.learner
        };

        learner.ok_or_else(|| {
            LearnerResolutionError::not_found(format!(
                "Learner with ID {learner_id} could not be retrieved."
            ))
        })
    }
}
