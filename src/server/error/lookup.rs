use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the external card database.
///
/// Only ever constructed and consumed inside the card lookup client, which logs it and
/// falls back to an empty or absent result.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Connection failure, timeout or undecodable response body.
    #[error("Card database request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The card database answered with a non-success status, which it also uses for
    /// "no card matching your query".
    #[error("Card database responded with status {0}")]
    Status(StatusCode),
}
