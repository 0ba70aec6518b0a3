#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Learner Core Rust
//!
//! Rust implementation of the learner resolution core: fetch a single
//! learner by ID from one of several backing stores, selecting the store
//! from the learner's archival status and a rolling failure-rate health
//! signal.
//!
//! ## Overview
//!
//! The crate owns no persistence, transport, or caching. The concrete data
//! sources (archive service, primary data access, failover data access, and
//! the failed-request history) are injected behind trait contracts, together
//! with a keyed configuration reader. What remains in this crate is
//! the decision procedure itself: validate the request, branch on the
//! archival flag, evaluate failover health, consult exactly one store, and
//! normalize every failure mode into a single reported error kind with its
//! cause chain intact.
//!
//! ## Module Organization
//!
//! - [`models`] - `Learner`, `LearnerResponse`, and `FailoverEntry` values
//! - [`stores`] - capability contracts implemented by backing stores
//! - [`config`] - injected configuration access
//! - [`resilience`] - failover health evaluation
//! - [`services`] - the learner resolver
//! - [`error`] - structured error handling
//! - [`constants`] - configuration keys and the failure window
//! - [`logging`] - opt-in structured logging for embedders
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use learner_core::config::InMemoryConfigReader;
//! use learner_core::resilience::FailoverDetector;
//! use learner_core::services::LearnerResolver;
//! use std::sync::Arc;
//!
//! # async fn example(
//! #     archive: Arc<dyn learner_core::stores::ArchivedLearnerStore>,
//! #     primary: Arc<dyn learner_core::stores::PrimaryLearnerStore>,
//! #     failover: Arc<dyn learner_core::stores::FailoverLearnerStore>,
//! #     history: Arc<dyn learner_core::stores::FailoverRepository>,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! let config = Arc::new(
//!     InMemoryConfigReader::new()
//!         .with("IsFailoverModeEnabled", "true")
//!         .with("FailoverThreshold", "100"),
//! );
//!
//! let resolver = LearnerResolver::new(
//!     archive,
//!     primary,
//!     failover,
//!     FailoverDetector::new(history, config),
//! );
//!
//! let learner = resolver.get_learner(42, false).await?;
//! println!("Resolved learner {}", learner.name);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod resilience;
pub mod services;
pub mod stores;

pub use config::{ConfigReader, EnvConfigReader, InMemoryConfigReader};
pub use error::{LearnerResolutionError, ResolutionResult};
pub use models::{FailoverEntry, Learner, LearnerResponse};
pub use resilience::FailoverDetector;
pub use services::LearnerResolver;
pub use stores::{
    ArchivedLearnerStore, FailoverLearnerStore, FailoverRepository, PrimaryLearnerStore,
};
