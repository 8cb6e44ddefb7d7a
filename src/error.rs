//! Error types for the points ledger.

use thiserror::Error;

/// Result type alias for CLI-level operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Rejected input to a [`PointsStore`](crate::PointsStore) operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// Customer id was empty or contained only whitespace
    #[error("Customer ID cannot be empty or null.")]
    EmptyCustomerId,

    /// Points value was zero or negative
    #[error("Number of points must be a positive integer.")]
    NonPositivePoints(i64),
}

/// Malformed command-line arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// Customer id was absent or blank
    #[error("Missing customer Id for '{command}' command. Usage: {command} <customerId> <points>")]
    MissingCustomerId { command: String },

    /// Points token was absent
    #[error("Missing points value for '{command}' command. Usage: {command} <customerId> <points>")]
    MissingPoints { command: String },

    /// Points token was not a positive whole number
    #[error("Invalid points value for '{command}' command. Points must be a positive integer.")]
    InvalidPoints { command: String, value: String },

    /// `earn`/`redeem` did not get exactly two arguments
    #[error("Invalid number of arguments for '{command}' command. Usage: {command} <customerId> <points>")]
    WrongArgumentCount { command: String, count: usize },

    /// First token was not a known command
    #[error("Unknown command: '{0}'. Use 'help' for usage information.")]
    UnknownCommand(String),
}

/// Errors surfaced by the CLI.
///
/// Keeps parser failures apart from store failures so the caller can decide
/// whether to print usage text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The arguments could not be turned into a command
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// The store rejected the request
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}
