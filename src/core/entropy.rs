//! Von Neumann entropy of Gaussian states.
//!
//! The entropy of a Gaussian state is a function of its symplectic spectrum
//! only: each eigenvalue `ν` contributes
//!
//! `g(ν) = ((ν+1)/2)·log2((ν+1)/2) - ((ν-1)/2)·log2((ν-1)/2)`
//!
//! with `g(1) = 0` for a vacuum mode.

use crate::core::errors::CovarianceError;

/// Half-width of the window around `ν = 1` treated as exact vacuum.
///
/// Inside the window the `0·log2(0)` singularity of `g` is removable and the
/// entropy is returned as exactly `0.0`; below it the eigenvalue violates the
/// uncertainty principle and the input is rejected.
pub const VACUUM_TOLERANCE: f64 = 1e-12;

/// Entropy contribution `g(ν)` of one symplectic eigenvalue, in bits.
pub fn von_neumann_entropy(nu: f64) -> Result<f64, CovarianceError> {
    if nu < 1.0 - VACUUM_TOLERANCE {
        return Err(CovarianceError::BelowVacuum(nu));
    }
    if nu <= 1.0 + VACUUM_TOLERANCE {
        return Ok(0.0);
    }
    let plus = (nu + 1.0) / 2.0;
    let minus = (nu - 1.0) / 2.0;
    Ok(plus * plus.log2() - minus * minus.log2())
}

/// Total entropy of a Gaussian state from its symplectic spectrum.
pub fn total_entropy(spectrum: &[f64]) -> Result<f64, CovarianceError> {
    spectrum
        .iter()
        .try_fold(0.0, |acc, &nu| Ok(acc + von_neumann_entropy(nu)?))
}
