//! Usage samples recorded by the monitoring dashboard

use crate::store::{Result, Store, StorePath};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default location of usage samples
pub const SAMPLES_PATH: &str = "usage/samples";

/// Resource usage over one billing window
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageSnapshot {
    pub database_storage_gb: f64,
    pub database_download_gb: f64,
    pub firestore_reads: u64,
    pub firestore_writes: u64,
    pub firestore_deletes: u64,
    pub function_invocations: u64,
}

/// Reads and writes usage samples in a [`Store`].
///
/// Reads never fail: errors are logged and the caller gets an empty result,
/// so a dashboard panel degrades to "no data". Writes return the error.
pub struct UsageClient<S> {
    store: S,
    path: StorePath,
}

impl<S: Store> UsageClient<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            path: StorePath::parse(SAMPLES_PATH).unwrap_or_default(),
        }
    }

    /// Keep samples under a different path
    pub fn with_path(mut self, path: StorePath) -> Self {
        self.path = path;
        self
    }

    pub fn path(&self) -> &StorePath {
        &self.path
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Append a sample, returning its key
    pub fn record(&mut self, snapshot: &UsageSnapshot) -> Result<String> {
        let value = serde_json::to_value(snapshot)?;
        let key = self.store.push(&self.path, value)?;
        tracing::debug!("recorded usage sample {} under {}", key, self.path);
        Ok(key)
    }

    /// Newest sample
    pub fn latest(&self) -> Option<UsageSnapshot> {
        self.recent(1).pop()
    }

    /// Newest `n` samples, oldest first
    pub fn recent(&self, n: usize) -> Vec<UsageSnapshot> {
        match self.store.last_n(&self.path, n) {
            Ok(samples) => samples
                .into_iter()
                .filter_map(|(key, value)| decode(&key, value))
                .collect(),
            Err(err) => {
                tracing::warn!("failed to read usage samples from {}: {}", self.path, err);
                Vec::new()
            }
        }
    }
}

fn decode(key: &str, value: Value) -> Option<UsageSnapshot> {
    match serde_json::from_value(value) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            tracing::warn!("skipping malformed usage sample {}: {}", key, err);
            None
        }
    }
}
