//! Mock store implementations for testing
//!
//! Hand-rolled mocks for the store capability contracts, each tracking its
//! call count so tests can assert which collaborators a resolution path
//! touched and which it left alone.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::{Arc, Mutex};

use learner_core::error::{LearnerResolutionError, ResolutionResult};
use learner_core::models::{FailoverEntry, Learner, LearnerResponse};
use learner_core::stores::{
    ArchivedLearnerStore, FailoverLearnerStore, FailoverRepository, PrimaryLearnerStore,
};

/// Build a learner value for assertions
pub fn learner(id: i64, name: &str) -> Learner {
    Learner {
        id,
        name: name.to_string(),
    }
}

/// Build `count` failover entries stamped within the rolling window
pub fn recent_entries(count: usize) -> Vec<FailoverEntry> {
    let now = Utc::now();
    (0..count)
        .map(|_| FailoverEntry::at(now - Duration::seconds(30)))
        .collect()
}

/// Mock archive store with a fixed response and call tracking
pub struct MockArchiveStore {
    learner: Option<Learner>,
    fail_with: Option<String>,
    calls: Mutex<u32>,
}

impl MockArchiveStore {
    pub fn returning(learner: Option<Learner>) -> Arc<Self> {
        Arc::new(Self {
            learner,
            fail_with: None,
            calls: Mutex::new(0),
        })
    }

    pub fn failing(message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            learner: None,
            fail_with: Some(message.into()),
            calls: Mutex::new(0),
        })
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl ArchivedLearnerStore for MockArchiveStore {
    async fn get_archived_learner(&self, _learner_id: i64) -> ResolutionResult<Option<Learner>> {
        *self.calls.lock().unwrap() += 1;
        match &self.fail_with {
            Some(message) => Err(LearnerResolutionError::store(message.clone())),
            None => Ok(self.learner.clone()),
        }
    }
}

/// Mock primary store with a fixed response and call tracking
pub struct MockPrimaryStore {
    response: Option<LearnerResponse>,
    fail_with: Option<String>,
    calls: Mutex<u32>,
}

impl MockPrimaryStore {
    pub fn returning(response: Option<LearnerResponse>) -> Arc<Self> {
        Arc::new(Self {
            response,
            fail_with: None,
            calls: Mutex::new(0),
        })
    }

    pub fn failing(message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            response: None,
            fail_with: Some(message.into()),
            calls: Mutex::new(0),
        })
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl PrimaryLearnerStore for MockPrimaryStore {
    async fn load_learner(&self, _learner_id: i64) -> ResolutionResult<Option<LearnerResponse>> {
        *self.calls.lock().unwrap() += 1;
        match &self.fail_with {
            Some(message) => Err(LearnerResolutionError::store(message.clone())),
            None => Ok(self.response.clone()),
        }
    }
}

/// Mock failover store with a fixed response and call tracking
pub struct MockFailoverStore {
    response: Option<LearnerResponse>,
    calls: Mutex<u32>,
}

impl MockFailoverStore {
    pub fn returning(response: Option<LearnerResponse>) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: Mutex::new(0),
        })
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl FailoverLearnerStore for MockFailoverStore {
    async fn get_learner_by_id(
        &self,
        _learner_id: i64,
    ) -> ResolutionResult<Option<LearnerResponse>> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.response.clone())
    }
}

/// Mock failed-request history with call tracking
pub struct MockFailoverRepository {
    entries: Option<Vec<FailoverEntry>>,
    calls: Mutex<u32>,
}

impl MockFailoverRepository {
    pub fn returning(entries: Vec<FailoverEntry>) -> Arc<Self> {
        Arc::new(Self {
            entries: Some(entries),
            calls: Mutex::new(0),
        })
    }

    /// A collaborator that cannot produce the collection at all
    pub fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            entries: None,
            calls: Mutex::new(0),
        })
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl FailoverRepository for MockFailoverRepository {
    async fn get_failover_entries(&self) -> ResolutionResult<Option<Vec<FailoverEntry>>> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.entries.clone())
    }
}
