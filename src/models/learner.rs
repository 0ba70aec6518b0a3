use serde::{Deserialize, Serialize};

/// Learner represents the resolved entity returned to callers.
/// Immutable value owned by whichever store produced it; the resolver
/// never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Learner {
    pub id: i64, // positive
    pub name: String,
}

/// Envelope produced by the primary and failover stores.
///
/// When `is_archived` is true the embedded learner is informational only;
/// the resolver re-fetches the canonical record from the archive store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerResponse {
    pub is_archived: bool,
    pub learner: Option<Learner>,
}
