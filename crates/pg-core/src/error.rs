use thiserror::Error;

pub type PgResult<T> = Result<T, PgError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PgError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Arithmetic overflow computing {what}")]
    Overflow { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
