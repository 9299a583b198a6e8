use crate::calculators::gaussian::channel_output;
use crate::calculators::{BETA, ETA, Parameters, SkrCalculator, T, VA, VEL, XI};
use crate::core::covariance::{
    symplectic_from_invariants, two_mode_standard_form, two_mode_symplectic_eigenvalues,
};
use crate::core::entropy::total_entropy;
use crate::core::errors::SkrError;

/// Gaussian modulation, trusted detector, heterodyne detection, asymptotic
/// regime.
///
/// Bob measures both quadratures, which doubles the mutual-information term
/// at the cost of the extra vacuum unit injected by the heterodyne
/// beamsplitter: the detection noise is `χ_het = (2 - η + 2·Vel)/η`. As in
/// the homodyne trusted case the detector noise is purified on ancillary
/// modes that Eve cannot access; the beamsplitter vacuum ancilla stays in
/// the conditional spectrum with `ν = 1`.
///
/// Reference: S. Fossier et al., J. Phys. B 42, 114014 (2009).
#[derive(Clone, Copy, Debug, Default)]
pub struct TrustedHeterodyneAsymptotic;

impl TrustedHeterodyneAsymptotic {
    /// Mutual information between Alice and Bob over both quadratures, in
    /// bits per symbol.
    pub fn mutual_information(va: f64, t: f64, xi: f64, eta: f64, vel: f64) -> f64 {
        let chi_het = (2.0 - eta + 2.0 * vel) / eta;
        // log2((V + χ_tot)/(1 + χ_tot)) with numerator and denominator
        // multiplied through by T.
        ((1.0 + t * (va + xi) + chi_het) / (1.0 + t * xi + chi_het)).log2()
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

        // Invariants of the state conditioned on Bob's double-quadrature
        // measurement.
        let chi_het = (2.0 - eta + 2.0 * vel) / eta;
        let delta = v * v + b * b - 2.0 * c_sq;
        let sqrt_det = v * b - c_sq;
        let denominator = b + chi_het;
        let conditional_delta = (delta * chi_het * chi_het
            + sqrt_det * sqrt_det
            + 1.0
            + 2.0 * chi_het * (v * sqrt_det + b)
            + 2.0 * c_sq)
            / (denominator * denominator);
        let conditional_det =
            ((v + sqrt_det * chi_het) / denominator) * ((v + sqrt_det * chi_het) / denominator);
        let [nu_3, nu_4] = symplectic_from_invariants(conditional_delta, conditional_det)?;

        // The heterodyne beamsplitter ancilla is left in the vacuum.
        Ok(total_entropy(&joint)? - total_entropy(&[nu_3, nu_4, 1.0])?)
    }
}

impl SkrCalculator for TrustedHeterodyneAsymptotic {
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
