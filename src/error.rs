use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum BranchError {
    #[error("variable/weight count mismatch: {variables} variables, {weights} weights")]
    WeightCountMismatch { variables: usize, weights: usize },
    #[error("mandatory fraction must lie in (0, 1], got {0}")]
    FractionOutOfRange(f64),
    #[error("cannot split variable {variable}: its domain is empty")]
    EmptyDomain { variable: usize },
    #[error("choice archive error: {0}")]
    Archive(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<BranchError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<BranchError> for Error {
    fn from(inner: BranchError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
