#![allow(dead_code)]

pub mod mock_stores;

use std::sync::Arc;

use learner_core::config::InMemoryConfigReader;
use learner_core::constants::config_keys;
use learner_core::resilience::FailoverDetector;
use learner_core::services::LearnerResolver;

use self::mock_stores::{
    MockArchiveStore, MockFailoverRepository, MockFailoverStore, MockPrimaryStore,
};

/// Build a resolver over the given mocks with explicit failover settings
pub fn resolver_with(
    archive: &Arc<MockArchiveStore>,
    primary: &Arc<MockPrimaryStore>,
    failover: &Arc<MockFailoverStore>,
    history: &Arc<MockFailoverRepository>,
    enabled: &str,
    threshold: &str,
) -> LearnerResolver {
    let config = Arc::new(
        InMemoryConfigReader::new()
            .with(config_keys::IS_FAILOVER_MODE_ENABLED, enabled)
            .with(config_keys::FAILOVER_THRESHOLD, threshold),
    );

    LearnerResolver::new(
        archive.clone(),
        primary.clone(),
        failover.clone(),
        FailoverDetector::new(history.clone(), config),
    )
}
