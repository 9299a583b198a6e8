//! Secret key rate calculators.
//!
//! Each calculator covers one combination of detection scheme (homodyne or
//! heterodyne) and detector trust model (trusted or untrusted) and exposes the
//! same entry point through [`SkrCalculator`], so a single upstream parameter
//! bundle can be routed to any scenario.

pub mod gaussian;
mod null;
mod parameters;

pub use null::NullCalculator;
pub use parameters::{BETA, ETA, Parameters, T, VA, VEL, XI};

use crate::core::errors::SkrError;

/// Computes a secret key rate from named physical parameters.
///
/// Implementations are pure functions of their input: same parameters, same
/// rate. Every calculator factors the rate as `β·I_AB - χ_BE` so the mutual
/// information and the Holevo bound can be checked independently against
/// published values.
pub trait SkrCalculator {
    /// Names of the parameters this calculator reads.
    ///
    /// Entries of the input bundle outside this set are ignored; a missing
    /// entry makes [`Self::compute_rate`] fail before any computation.
    fn required_parameters(&self) -> &'static [&'static str];

    /// Secret key rate in bits per symbol.
    ///
    /// The raw Devetak-Winter value is returned as-is: a negative rate means
    /// no key is extractable, and the caller decides how to treat it.
    fn compute_rate(&self, parameters: &Parameters) -> Result<f64, SkrError>;
}

#[cfg(test)]
mod tests {
    use super::gaussian::{
        TrustedHeterodyneAsymptotic, TrustedHomodyneAsymptotic, UntrustedHomodyneAsymptotic,
    };
    use super::*;

    #[test]
    fn one_bundle_routes_to_every_calculator() {
        // A full upstream bundle is a superset of every required set.
        let bundle = Parameters::new()
            .with(VA, 5.0)
            .with(T, 0.5)
            .with(XI, 0.05)
            .with(ETA, 0.8)
            .with(VEL, 0.1)
            .with(BETA, 0.95)
            .with("frequency", 100e6);

        let calculators: [&dyn SkrCalculator; 4] = [
            &UntrustedHomodyneAsymptotic,
            &TrustedHomodyneAsymptotic,
            &TrustedHeterodyneAsymptotic,
            &NullCalculator,
        ];
        for calculator in calculators {
            let rate = calculator.compute_rate(&bundle).unwrap();
            assert!(rate.is_finite());
        }
    }

    #[test]
    fn compute_rate_is_deterministic() {
        let bundle = Parameters::new()
            .with(VA, 5.0)
            .with(T, 0.5)
            .with(XI, 0.05)
            .with(ETA, 0.8)
            .with(VEL, 0.1)
            .with(BETA, 0.95);

        let first = TrustedHomodyneAsymptotic.compute_rate(&bundle).unwrap();
        let second = TrustedHomodyneAsymptotic.compute_rate(&bundle).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
