//! Execution context threaded through executor hooks.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Per-run context handed to every executor hook.
///
/// The executor core itself only threads this through; the data bag exists
/// so automation sequences can share state across steps.
#[derive(Debug, Clone)]
pub struct Ctx {
    /// Correlation id for tracing a run across steps.
    pub run_id: String,

    /// Additional context data.
    pub data: HashMap<String, serde_json::Value>,
}

impl Ctx {
    pub fn new() -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            data: HashMap::new(),
        }
    }

    /// Get a typed value from the context data.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.data
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Set a value in the context data.
    pub fn set<T: Serialize>(&mut self, key: impl Into<String>, value: T) {
        if let Ok(v) = serde_json::to_value(value) {
            self.data.insert(key.into(), v);
        }
    }
}

impl Default for Ctx {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "ctx_tests.rs"]
mod tests;
