//! Error type for cashier operations

use thiserror::Error;

/// Message shown to the operator for any rejected input.
pub const ERROR_VALUE: &str = "There is a data input error";

#[derive(Error, Debug)]
pub enum Error {
    /// Rejected operator input or an operation called in the wrong state.
    ///
    /// Carries no detail on purpose; the reason is logged where the input
    /// was rejected.
    #[error("{}", ERROR_VALUE)]
    InvalidInput,

    /// The confirmation channel could not produce an answer.
    #[error("Confirmation channel failed: {0}")]
    Channel(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
