use std::collections::HashMap;

use crate::core::errors::ParameterError;

/// Alice's modulation variance, in shot-noise units.
pub const VA: &str = "Va";
/// Channel transmittance.
pub const T: &str = "T";
/// Excess noise referred to the channel input, in shot-noise units.
pub const XI: &str = "xi";
/// Detector efficiency.
pub const ETA: &str = "eta";
/// Detector electronic noise, in shot-noise units.
pub const VEL: &str = "Vel";
/// Reconciliation efficiency.
pub const BETA: &str = "beta";

/// Named physical parameters handed to a calculator.
///
/// Parameter estimation typically produces one bundle that is routed to
/// several calculators, so a bundle may hold more entries than any single
/// scenario reads. Required parameters have no defaults: an absent entry is
/// reported as [`ParameterError::Missing`] by the calculator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parameters {
    values: HashMap<String, f64>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.values.insert(name.to_owned(), value);
        self
    }

    pub fn insert(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_owned(), value);
    }

    /// Looks up a required parameter.
    pub fn get(&self, name: &str) -> Result<f64, ParameterError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| ParameterError::Missing(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

impl From<HashMap<String, f64>> for Parameters {
    fn from(values: HashMap<String, f64>) -> Self {
        Self { values }
    }
}

impl FromIterator<(String, f64)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
