use thiserror::Error;

/// Error type for myrs statement operations
#[derive(Debug, Error)]
pub enum MyRsError {
    #[error("This statement has already been prepared")]
    AlreadyPrepared,

    #[error("Statement could not be produced with sql: \"{sql}\" (native error {code}: {message})")]
    InvalidQuery {
        sql: String,
        message: String,
        code: u32,
    },

    #[error("Parameter collection expected: {0}")]
    InvalidArgument(String),

    #[error("Execution failed: {0}")]
    Execution(String),
}

/// Result type alias for myrs operations
pub type Result<T> = std::result::Result<T, MyRsError>;
