use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquationError {
    #[error("no coefficients given")]
    NoCoefficients,

    #[error("unsupported degree: {coefficients} coefficients given, at most 3 are supported")]
    UnsupportedDegree { coefficients: usize },
}

pub type EquationResult<T> = Result<T, EquationError>;
