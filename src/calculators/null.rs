use crate::calculators::{Parameters, SkrCalculator};
use crate::core::errors::SkrError;

/// Placeholder calculator used when no real scenario is configured.
///
/// Reads nothing, accepts any input (including an empty bundle) and always
/// reports a zero rate.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCalculator;

impl SkrCalculator for NullCalculator {
    fn required_parameters(&self) -> &'static [&'static str] {
        &[]
    }

    fn compute_rate(&self, _parameters: &Parameters) -> Result<f64, SkrError> {
        Ok(0.0)
    }
}
