use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// FailoverEntry records a single failed request, produced by an external
/// subsystem. The resolution core only reads its timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailoverEntry {
    pub occurred_at: DateTime<Utc>,
}

impl FailoverEntry {
    /// Create an entry stamped at the given instant
    pub fn at(occurred_at: DateTime<Utc>) -> Self {
        Self { occurred_at }
    }
}
