//! Covariance-matrix primitives for Gaussian states.
//!
//! This module contains the symplectic-invariant computations shared by all
//! secret key rate calculators:
//! - Construction of two-mode covariance matrices in standard block form.
//! - Symplectic eigenvalues of one- and two-mode Gaussian states.
//!
//! Quadratures are expressed in shot-noise units, so the vacuum covariance
//! matrix is the identity and every symplectic eigenvalue of a physical state
//! is at least 1.

use nalgebra::{Matrix2, Matrix4};

use crate::core::errors::CovarianceError;

/// Relative tolerance on the symplectic discriminant `Δ² - 4 det γ`.
///
/// Physical states at the vacuum boundary (lossless, noiseless channel) land
/// exactly on a zero discriminant, so floating-point round-off can push it
/// slightly negative. Values below `-SYMPLECTIC_TOLERANCE` (scaled by `Δ²`)
/// indicate genuinely inconsistent input parameters.
pub const SYMPLECTIC_TOLERANCE: f64 = 1e-9;

/// Builds a two-mode covariance matrix in standard form.
///
/// The matrix has diagonal blocks `a·I₂` and `b·I₂` and off-diagonal block
/// `c·σ_z`, which covers every bipartite state appearing in Gaussian CV-QKD
/// security analysis (the channel output shared by Alice and Bob).
pub fn two_mode_standard_form(a: f64, b: f64, c: f64) -> Matrix4<f64> {
    Matrix4::new(
        a, 0.0, c, 0.0, //
        0.0, a, 0.0, -c, //
        c, 0.0, b, 0.0, //
        0.0, -c, 0.0, b,
    )
}

/// Computes the two symplectic eigenvalues of a two-mode covariance matrix.
///
/// Uses the symplectic invariants `Δ = det A + det B + 2 det C` (sums of the
/// 2×2 sub-block determinants) and `det γ`:
///
/// `ν± = sqrt((Δ ± sqrt(Δ² - 4 det γ)) / 2)`
///
/// The matrix must be symmetric; positivity is checked through the
/// discriminant.
pub fn two_mode_symplectic_eigenvalues(
    gamma: &Matrix4<f64>,
) -> Result<[f64; 2], CovarianceError> {
    let det_a = gamma.fixed_view::<2, 2>(0, 0).determinant();
    let det_b = gamma.fixed_view::<2, 2>(2, 2).determinant();
    let det_c = gamma.fixed_view::<2, 2>(0, 2).determinant();
    let delta = det_a + det_b + 2.0 * det_c;
    symplectic_from_invariants(delta, gamma.determinant())
}

/// Computes two-mode symplectic eigenvalues directly from the invariants
/// `Δ` and `det γ`.
///
/// Conditional states in the trusted-detector scenarios have closed-form
/// invariants in the literature, so this entry point avoids rebuilding the
/// full matrix when only `Δ` and the determinant are known.
pub fn symplectic_from_invariants(
    delta: f64,
    det: f64,
) -> Result<[f64; 2], CovarianceError> {
    let disc = delta * delta - 4.0 * det;
    if disc < -SYMPLECTIC_TOLERANCE * (delta * delta).max(1.0) {
        return Err(CovarianceError::NegativeDiscriminant(disc));
    }
    let root = disc.max(0.0).sqrt();
    let nu_plus = ((delta + root) / 2.0).sqrt();
    let nu_minus = ((delta - root).max(0.0) / 2.0).sqrt();
    Ok([nu_plus, nu_minus])
}

/// Symplectic eigenvalue of a single-mode covariance matrix, `sqrt(det γ)`.
pub fn single_mode_symplectic_eigenvalue(
    gamma: &Matrix2<f64>,
) -> Result<f64, CovarianceError> {
    let det = gamma.determinant();
    if det <= 0.0 {
        return Err(CovarianceError::NotPositiveDefinite);
    }
    Ok(det.sqrt())
}
