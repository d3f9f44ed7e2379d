//! Single-slot transfer of an analysis result from the submission flow to the
//! results flow.
//!
//! The two flows never share memory: the submitter writes the result under a
//! fixed key of a [`SessionStore`] and the results view reads it back. The
//! slot holds at most one value; every `store` overwrites it and nothing
//! clears it on read, so re-opening the results shows the last result again.

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use varseq_core::errors::AnalysisError;

use super::consts::ANALYSIS_RESULTS_KEY;
use super::store::SessionStore;

pub struct ResultHandoff<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> ResultHandoff<S> {
    pub fn new(store: S) -> Self {
        ResultHandoff { store }
    }

    /// Serialize `value` into the slot, replacing whatever was there.
    pub fn store<T: Serialize>(&mut self, value: &T) -> Result<(), AnalysisError> {
        let json = serde_json::to_string(value)
            .map_err(|e| AnalysisError::Storage(format!("can't serialize result: {}", e)))?;
        self.store.set(ANALYSIS_RESULTS_KEY, &json)?;
        debug!("Stored {} bytes under {}", json.len(), ANALYSIS_RESULTS_KEY);
        Ok(())
    }

    /// Read the slot. Absent, unreadable and corrupt values all read as `None`.
    pub fn load<T: DeserializeOwned>(&self) -> Option<T> {
        match self.inspect() {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring stored analysis result: {}", e);
                None
            }
        }
    }

    /// Read the slot, telling an empty slot (`Ok(None)`) apart from one
    /// holding something that does not deserialize into `T`.
    pub fn inspect<T: DeserializeOwned>(&self) -> Result<Option<T>, AnalysisError> {
        let Some(json) = self.load_raw()? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| AnalysisError::MalformedResult(e.to_string()))
    }

    /// The stored string, verbatim.
    pub fn load_raw(&self) -> Result<Option<String>, AnalysisError> {
        self.store.get(ANALYSIS_RESULTS_KEY)
    }

    pub fn clear(&mut self) -> Result<(), AnalysisError> {
        self.store.clear(ANALYSIS_RESULTS_KEY)
    }

    pub fn store_ref(&self) -> &S {
        &self.store
    }
}
