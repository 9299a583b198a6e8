use crate::calculators::gaussian::channel_output;
use crate::calculators::{BETA, ETA, Parameters, SkrCalculator, T, VA, VEL, XI};
use crate::core::covariance::{
    symplectic_from_invariants, two_mode_standard_form, two_mode_symplectic_eigenvalues,
};
use crate::core::entropy::total_entropy;
use crate::core::errors::SkrError;

/// Gaussian modulation, trusted detector, homodyne detection, asymptotic
/// regime.
///
/// The detector's efficiency `η` and electronic noise `Vel` are calibrated
/// and inaccessible to the eavesdropper: they degrade the mutual information
/// but are carved out of the conditional state entering the Holevo bound,
/// which is modelled by purifying the detection noise `χ_hom = (1+Vel)/η - 1`
/// on an ancillary mode.
///
/// Reference: J. Lodewyck et al., Phys. Rev. A 76, 042305 (2007).
#[derive(Clone, Copy, Debug, Default)]
pub struct TrustedHomodyneAsymptotic;

impl TrustedHomodyneAsymptotic {
    /// Mutual information between Alice and Bob, in bits per symbol.
    pub fn mutual_information(va: f64, t: f64, xi: f64, eta: f64, vel: f64) -> f64 {
        0.5 * (1.0 + eta * t * va / (1.0 + vel + eta * t * xi)).log2()
    }

    /// Holevo bound on the information accessible to the eavesdropper.
    pub fn holevo_bound(
        va: f64,
        t: f64,
        xi: f64,
        eta: f64,
        vel: f64,
    ) -> Result<f64, SkrError> {
        let v = va + 1.0;
        let (b, c_sq) = channel_output(v, t, xi);

        let gamma = two_mode_standard_form(v, b, c_sq.sqrt());
        let joint = two_mode_symplectic_eigenvalues(&gamma)?;

        // Invariants of the (Alice, detection ancilla) state conditioned on
        // Bob's homodyne outcome, in the same division-free variables.
        let chi_hom = (1.0 + vel) / eta - 1.0;
        let delta = v * v + b * b - 2.0 * c_sq;
        let sqrt_det = v * b - c_sq;
        let denominator = b + chi_hom;
        let conditional_delta = (v * sqrt_det + b + delta * chi_hom) / denominator;
        let conditional_det = sqrt_det * (v + sqrt_det * chi_hom) / denominator;
        let conditional = symplectic_from_invariants(conditional_delta, conditional_det)?;

        Ok(total_entropy(&joint)? - total_entropy(&conditional)?)
    }
}

impl SkrCalculator for TrustedHomodyneAsymptotic {
    fn required_parameters(&self) -> &'static [&'static str] {
        &[VA, T, XI, ETA, VEL, BETA]
    }

    fn compute_rate(&self, parameters: &Parameters) -> Result<f64, SkrError> {
        let va = parameters.get(VA)?;
        let t = parameters.get(T)?;
        let xi = parameters.get(XI)?;
        let eta = parameters.get(ETA)?;
        let vel = parameters.get(VEL)?;
        let beta = parameters.get(BETA)?;

        let mutual_information = Self::mutual_information(va, t, xi, eta, vel);
        let holevo_bound = Self::holevo_bound(va, t, xi, eta, vel)?;
        Ok(beta * mutual_information - holevo_bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ParameterError;

    fn parameters() -> Parameters {
        Parameters::new()
            .with(VA, 5.0)
            .with(T, 0.5)
            .with(XI, 0.05)
            .with(ETA, 0.8)
            .with(VEL, 0.1)
            .with(BETA, 0.95)
    }

    #[test]
    fn matches_the_published_formula() {
        // Independently evaluated from the Lodewyck et al. expressions.
        let iab = TrustedHomodyneAsymptotic::mutual_information(5.0, 0.5, 0.05, 0.8, 0.1);
        let holevo =
            TrustedHomodyneAsymptotic::holevo_bound(5.0, 0.5, 0.05, 0.8, 0.1).unwrap();
        let rate = TrustedHomodyneAsymptotic.compute_rate(&parameters()).unwrap();
        assert!((iab - 0.739_023_648_402_322_2).abs() < 1e-9);
        assert!((holevo - 0.551_080_142_939_222_6).abs() < 1e-9);
        assert!((rate - 0.150_992_323_042_983_4).abs() < 1e-9);
    }

    #[test]
    fn ideal_chain_gives_eve_nothing() {
        let holevo = TrustedHomodyneAsymptotic::holevo_bound(4.0, 1.0, 0.0, 1.0, 0.0).unwrap();
        assert!(holevo.abs() < 1e-5);
        let iab = TrustedHomodyneAsymptotic::mutual_information(4.0, 1.0, 0.0, 1.0, 0.0);
        assert!((iab - (1.0f64 + 4.0).log2() * 0.5).abs() < 1e-12);
    }

    #[test]
    fn missing_electronic_noise_is_an_error() {
        let incomplete = Parameters::new()
            .with(VA, 5.0)
            .with(T, 0.5)
            .with(XI, 0.05)
            .with(ETA, 0.8)
            .with(BETA, 0.95);
        assert_eq!(
            TrustedHomodyneAsymptotic.compute_rate(&incomplete),
            Err(SkrError::Parameter(ParameterError::Missing(
                "Vel".to_owned()
            )))
        );
    }

    #[test]
    fn extra_parameters_are_ignored() {
        let superset = parameters().with("repetition_rate", 1e9);
        assert!(TrustedHomodyneAsymptotic.compute_rate(&superset).is_ok());
    }

    #[test]
    fn excess_noise_lowers_the_rate() {
        let quiet = TrustedHomodyneAsymptotic
            .compute_rate(&parameters().with(XI, 0.01))
            .unwrap();
        let noisy = TrustedHomodyneAsymptotic
            .compute_rate(&parameters().with(XI, 0.1))
            .unwrap();
        assert!(noisy < quiet);
    }

    #[test]
    fn electronic_noise_lowers_the_mutual_information() {
        let quiet = TrustedHomodyneAsymptotic::mutual_information(5.0, 0.5, 0.05, 0.8, 0.0);
        let noisy = TrustedHomodyneAsymptotic::mutual_information(5.0, 0.5, 0.05, 0.8, 0.5);
        assert!(noisy < quiet);
    }

    #[test]
    fn fully_lossy_channel_carries_no_information() {
        let rate = TrustedHomodyneAsymptotic
            .compute_rate(&parameters().with(T, 0.0))
            .unwrap();
        assert!(rate.abs() < 1e-9);
    }
}
