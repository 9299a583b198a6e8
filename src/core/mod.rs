pub mod covariance;
pub mod entropy;
pub mod errors;

pub use covariance::{
    single_mode_symplectic_eigenvalue, symplectic_from_invariants, two_mode_standard_form,
    two_mode_symplectic_eigenvalues,
};
pub use entropy::{total_entropy, von_neumann_entropy};
