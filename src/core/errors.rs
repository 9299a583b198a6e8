use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Missing required parameter: {0}")]
    Missing(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CovarianceError {
    #[error("Symplectic discriminant is negative: {0}")]
    NegativeDiscriminant(f64),

    #[error("Symplectic eigenvalue below the vacuum limit: {0}")]
    BelowVacuum(f64),

    #[error("Covariance matrix is not positive-definite")]
    NotPositiveDefinite,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkrError {
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    #[error("Covariance error: {0}")]
    Covariance(#[from] CovarianceError),
}
