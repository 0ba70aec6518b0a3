//! # Failover Health Evaluation
//!
//! Decides whether failover mode is active by counting failed requests
//! recorded inside a rolling 10-minute window and comparing the count
//! against a configured threshold, gated by a configured enable flag.
//! Stateless between calls; every evaluation re-reads the collaborators.

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::debug;

use crate::config::ConfigReader;
use crate::constants::{config_keys, FAILOVER_WINDOW_MINUTES};
use crate::error::{LearnerResolutionError, ResolutionResult};
use crate::models::FailoverEntry;
use crate::stores::FailoverRepository;

/// Count entries whose timestamp falls inside the rolling failure window
/// ending at `now` (strict comparison against the window start)
pub fn count_recent_failures(entries: &[FailoverEntry], now: DateTime<Utc>) -> i64 {
    let window_start = now - Duration::minutes(FAILOVER_WINDOW_MINUTES);
    entries
        .iter()
        .filter(|entry| entry.occurred_at > window_start)
        .count() as i64
}

/// Evaluates failover health from the failed-request history and
/// configuration
pub struct FailoverDetector {
    failover_repository: Arc<dyn FailoverRepository>,
    config: Arc<dyn ConfigReader>,
}

impl FailoverDetector {
    /// Create a new detector over the given history and configuration
    pub fn new(failover_repository: Arc<dyn FailoverRepository>, config: Arc<dyn ConfigReader>) -> Self {
        Self {
            failover_repository,
            config,
        }
    }

    /// Evaluate failover health at the current wall-clock instant
    pub async fn is_failover_active(&self) -> ResolutionResult<bool> {
        self.evaluate_at(Utc::now()).await
    }

    /// Evaluate failover health at an explicit instant.
    ///
    /// Failover is active iff the count of entries within the last
    /// 10 minutes strictly exceeds `FailoverThreshold` AND
    /// `IsFailoverModeEnabled` is `"true"` (case-insensitive). Both
    /// configuration values are mandatory. Any fault raised while reading
    /// the history or configuration is wrapped into `FailoverCheckFailed`.
    pub async fn evaluate_at(&self, now: DateTime<Utc>) -> ResolutionResult<bool> {
        self.check(now)
            .await
            .map_err(LearnerResolutionError::failover_check_failed)
    }

    async fn check(&self, now: DateTime<Utc>) -> ResolutionResult<bool> {
        let entries = self
            .failover_repository
            .get_failover_entries()
            .await?
            .ok_or_else(|| LearnerResolutionError::store("Failover entries data is null."))?;

        let failed_requests = count_recent_failures(&entries, now);

        let is_failover_enabled = self
            .read_setting(config_keys::IS_FAILOVER_MODE_ENABLED)?
            .eq_ignore_ascii_case("true");

        let threshold: i64 = self
            .read_setting(config_keys::FAILOVER_THRESHOLD)?
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| {
                LearnerResolutionError::configuration(config_keys::FAILOVER_THRESHOLD, e.to_string())
            })?;

        let active = failed_requests > threshold && is_failover_enabled;

        debug!(
            failed_requests,
            threshold, is_failover_enabled, active, "Evaluated failover health"
        );

        Ok(active)
    }

    fn read_setting(&self, key: &str) -> ResolutionResult<String> {
        self.config
            .get(key)
            .ok_or_else(|| LearnerResolutionError::configuration(key, "value is not set"))
    }
}
