//! # Configuration Access
//!
//! Keyed string lookup behind an injected trait so the resolution core never
//! reads process-global state directly and tests can supply deterministic
//! values. Both recognized keys are mandatory: missing or unparseable
//! values surface as faults at the point of use, never as silent defaults.

use std::collections::HashMap;

/// Keyed string configuration lookup
pub trait ConfigReader: Send + Sync {
    /// Fetch the raw string value for a key, `None` when the key is not set
    fn get(&self, key: &str) -> Option<String>;
}

/// `HashMap`-backed reader for tests and embedders with precomputed settings
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigReader {
    values: HashMap<String, String>,
}

impl InMemoryConfigReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key/value pair, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigReader for InMemoryConfigReader {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Reader resolving keys from process environment variables, for deployments
/// that carry operational settings in the environment
#[derive(Debug, Clone, Default)]
pub struct EnvConfigReader;

impl EnvConfigReader {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigReader for EnvConfigReader {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
