//! Gaussian-modulation calculators in the asymptotic regime.
//!
//! Alice prepares coherent states with modulation variance `Va` (total
//! variance `V = Va + 1` in shot-noise units); the channel applies
//! transmittance `T` and excess noise `ξ`. The security analysis follows the
//! standard covariance-matrix treatment: the Holevo bound is an entropy
//! difference between the joint Gaussian state and the state conditioned on
//! Bob's measurement outcome.

mod trusted_heterodyne;
mod trusted_homodyne;
mod untrusted_homodyne;

pub use trusted_heterodyne::TrustedHeterodyneAsymptotic;
pub use trusted_homodyne::TrustedHomodyneAsymptotic;
pub use untrusted_homodyne::UntrustedHomodyneAsymptotic;

/// Bob-mode variance `b` and squared correlation `c²` of the channel output
/// state shared by Alice and Bob.
///
/// `b = T(V + χ_line)` expanded to `1 + T(V - 1 + ξ)` so the expression stays
/// finite over the whole domain, including `T = 0`.
pub(super) fn channel_output(v: f64, t: f64, xi: f64) -> (f64, f64) {
    let b = 1.0 + t * (v - 1.0 + xi);
    let c_sq = t * (v * v - 1.0);
    (b, c_sq)
}
