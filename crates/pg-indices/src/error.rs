use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("No index selected")]
    EmptySelection,

    #[error("Unknown index '{0}' (expected zagreb, wiener or gutman)")]
    UnknownIndex(String),
}
