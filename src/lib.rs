pub mod calculators;
mod core;

pub use crate::calculators::gaussian::{
    TrustedHeterodyneAsymptotic, TrustedHomodyneAsymptotic, UntrustedHomodyneAsymptotic,
};
pub use crate::calculators::{NullCalculator, Parameters, SkrCalculator};
pub use crate::core::{covariance, entropy, errors};
