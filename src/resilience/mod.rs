//! # Resilience Module
//!
//! Houses the failover health evaluation that decides whether learner
//! lookups should be routed away from the primary store. The decision is a
//! pure function of externally-owned state: the rolling count of recent
//! failed requests and two mandatory configuration values.

pub mod failover_detector;

pub use failover_detector::{count_recent_failures, FailoverDetector};
