use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpsError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Unknown payment method: {0:?}")]
    UnknownPaymentMethod(String),
    #[error("Unknown log sink kind: {0:?}")]
    UnknownSinkKind(String),
    #[error("Unknown allowance: {0:?}")]
    UnknownAllowance(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, OpsError>;
