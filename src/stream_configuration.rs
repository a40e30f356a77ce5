//! Configuration types for the collecting terminals

use serde::{Deserialize, Serialize};

use crate::error::{StreamError, StreamResult};

/// How `to_map_with` treats a key that has already been collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// Later value overwrites the earlier one, like `HashMap::insert`
    #[default]
    LastWriteWins,
    FirstWriteWins,
    /// Fail with [`StreamError::DuplicateKey`]
    Reject,
}

/// Collection configuration for `to_vec_with` and `to_map_with`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectConfig {
    /// Capacity reserved before the first element is pulled
    pub initial_capacity: usize,
    /// Upper bound accepted for `initial_capacity`
    pub max_initial_capacity: usize,
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            max_initial_capacity: 1024 * 1024,
            duplicate_keys: DuplicateKeyPolicy::default(),
        }
    }
}

impl CollectConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }

    pub fn validate(&self) -> StreamResult<()> {
        if self.initial_capacity > self.max_initial_capacity {
            return Err(StreamError::InvalidConfig(format!(
                "initial_capacity {} exceeds max_initial_capacity {}",
                self.initial_capacity, self.max_initial_capacity
            )));
        }
        Ok(())
    }
}
