use nalgebra::Matrix2;

use crate::calculators::gaussian::channel_output;
use crate::calculators::{BETA, ETA, Parameters, SkrCalculator, T, VA, XI};
use crate::core::covariance::{
    single_mode_symplectic_eigenvalue, two_mode_standard_form, two_mode_symplectic_eigenvalues,
};
use crate::core::entropy::total_entropy;
use crate::core::errors::SkrError;

/// Gaussian modulation, untrusted detector, homodyne detection, asymptotic
/// regime.
///
/// The detector belongs to the eavesdropper's domain: its efficiency `η`
/// folds into the effective transmittance `η·T` seen by both Bob and Eve,
/// and its electronic noise is by convention absorbed into the excess-noise
/// estimate upstream, so `Vel` is not a parameter here.
///
/// References: R. García-Patrón & N. J. Cerf, Phys. Rev. Lett. 97, 190503
/// (2006); M. Navascués, F. Grosshans & A. Acín, Phys. Rev. Lett. 97, 190502
/// (2006).
#[derive(Clone, Copy, Debug, Default)]
pub struct UntrustedHomodyneAsymptotic;

impl UntrustedHomodyneAsymptotic {
    /// Mutual information between Alice and Bob, in bits per symbol.
    pub fn mutual_information(va: f64, t: f64, xi: f64, eta: f64) -> f64 {
        let t_eff = eta * t;
        0.5 * (1.0 + t_eff * va / (1.0 + t_eff * xi)).log2()
    }

    /// Holevo bound on the information accessible to the eavesdropper.
    pub fn holevo_bound(va: f64, t: f64, xi: f64, eta: f64) -> Result<f64, SkrError> {
        let v = va + 1.0;
        let (b, c_sq) = channel_output(v, eta * t, xi);

        let gamma = two_mode_standard_form(v, b, c_sq.sqrt());
        let joint = two_mode_symplectic_eigenvalues(&gamma)?;

        // Alice's mode after Bob's x-quadrature homodyne measurement.
        let conditional = Matrix2::new(v - c_sq / b, 0.0, 0.0, v);
        let nu_conditional = single_mode_symplectic_eigenvalue(&conditional)?;

        Ok(total_entropy(&joint)? - total_entropy(&[nu_conditional])?)
    }
}

impl SkrCalculator for UntrustedHomodyneAsymptotic {
    fn required_parameters(&self) -> &'static [&'static str] {
        &[VA, T, XI, ETA, BETA]
    }

    fn compute_rate(&self, parameters: &Parameters) -> Result<f64, SkrError> {
        let va = parameters.get(VA)?;
        let t = parameters.get(T)?;
        let xi = parameters.get(XI)?;
        let eta = parameters.get(ETA)?;
        let beta = parameters.get(BETA)?;

        let mutual_information = Self::mutual_information(va, t, xi, eta);
        let holevo_bound = Self::holevo_bound(va, t, xi, eta)?;
        Ok(beta * mutual_information - holevo_bound)
    }
}
