use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The flat record of numeric training knobs.
///
/// Field declaration order is the canonical key order in the JSON file.
/// Unknown or missing keys are rejected on load so a typo in a
/// hyperparameter file fails loudly instead of silently training with a
/// default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hyperparameters {
    pub lr: f32,
    pub alpha: f32,
    pub beta: f32,
    pub max_step: usize,
    pub max_grad_norm: f32,
    pub batch_size: usize,
    pub iterations: usize,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            lr: 2e-3,
            alpha: 1.0,
            beta: 1e-4,
            max_step: 5,
            max_grad_norm: 2.0,
            batch_size: 32,
            iterations: 100_000,
        }
    }
}

/// Owns one [`Hyperparameters`] record and moves it to and from disk.
///
/// Values are not range-checked; a negative learning rate is accepted as-is.
pub struct HyperparameterStore {
    record: Hyperparameters,
}

impl HyperparameterStore {
    /// Create a store holding the default record.
    pub fn new() -> Self {
        Self {
            record: Hyperparameters::default(),
        }
    }

    /// Read-only view of the current record.
    pub fn get(&self) -> &Hyperparameters {
        &self.record
    }

    /// Replace the record with the contents of a JSON file.
    ///
    /// The file must contain exactly the seven recognized fields; on any
    /// parse failure the current record is left untouched.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let content = fs::read_to_string(path)?;
        self.record = serde_json::from_str(&content)?;
        Ok(())
    }

    /// Write the record as indented JSON with stable key order.
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut json = serde_json::to_string_pretty(&self.record)?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }
}

impl Default for HyperparameterStore {
    fn default() -> Self {
        Self::new()
    }
}
