//! Errors returned by view-model actions.

use campaign_client::RequestError;
use campaign_types::ValidationError;
use thiserror::Error;

/// Failure of a user action.
///
/// Both variants have already been shown to the user by the time the
/// caller sees them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsoleError {
    /// Input rejected locally; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request was sent and failed.
    #[error(transparent)]
    Request(#[from] RequestError),
}
