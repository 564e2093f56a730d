//! Error types for the claimvault engine.
//!
//! All errors use the `CV_ERR_` prefix convention for easy grepping in
//! logs. Error codes are grouped by subsystem:
//! - 1xx: Claim / escrow precondition failures
//! - 2xx: Access policy failures
//! - 3xx: Runtime / external call failures
//! - 9xx: General / internal
//!
//! Every error is a full-transaction failure: the surrounding call commits
//! nothing. There is no degraded or partial-success mode, and no internal
//! retry — callers resubmit a corrected call.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::Address;

/// Central error enum for all claimvault operations.
#[derive(Debug, Error)]
pub enum ClaimvaultError {
    // =================================================================
    // Claim / Escrow Errors (1xx)
    // =================================================================
    /// Attached or declared value was not strictly positive.
    #[error("CV_ERR_100: Invalid amount: {amount} (must be strictly positive)")]
    InvalidAmount { amount: Decimal },

    /// A deposit was attempted while a claim already exists for that identity.
    #[error("CV_ERR_101: Claim already pending for {0}")]
    DuplicateClaim(Address),

    /// A refund or redemption targeted an identity with no claim.
    #[error("CV_ERR_102: No pending claim for {0}")]
    NoPendingClaim(Address),

    /// The administrator-declared amount does not equal the stored claim's.
    #[error("CV_ERR_103: Amount mismatch: declared {declared}, held {held}")]
    AmountMismatch { declared: Decimal, held: Decimal },

    // =================================================================
    // Access Errors (2xx)
    // =================================================================
    /// The caller is not authorized for this entrypoint.
    #[error("CV_ERR_200: Unauthorized caller: {sender}")]
    Unauthorized { sender: Address },

    // =================================================================
    // Runtime / External Errors (3xx)
    // =================================================================
    /// The deferred call to the token registry was rejected; the whole
    /// triggering call is rolled back.
    #[error("CV_ERR_300: External call rejected: {reason}")]
    ExternalCallRejected { reason: String },

    /// The sender cannot cover the currency attached to the call.
    #[error("CV_ERR_301: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Decimal, available: Decimal },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("CV_ERR_900: Internal error: {0}")]
    Internal(String),

    /// State snapshot serialization / deserialization error.
    #[error("CV_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, ClaimvaultError>;

impl From<serde_json::Error> for ClaimvaultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = ClaimvaultError::NoPendingClaim(Address::new());
        let msg = format!("{err}");
        assert!(msg.starts_with("CV_ERR_102"), "Got: {msg}");
    }

    #[test]
    fn amount_mismatch_display() {
        let err = ClaimvaultError::AmountMismatch {
            declared: Decimal::new(5, 0),
            held: Decimal::ONE,
        };
        let msg = format!("{err}");
        assert!(msg.contains("CV_ERR_103"));
        assert!(msg.contains('5'));
        assert!(msg.contains('1'));
    }

    #[test]
    fn all_errors_have_cv_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(ClaimvaultError::InvalidAmount {
                amount: Decimal::ZERO,
            }),
            Box::new(ClaimvaultError::DuplicateClaim(Address::new())),
            Box::new(ClaimvaultError::Unauthorized {
                sender: Address::new(),
            }),
            Box::new(ClaimvaultError::ExternalCallRejected {
                reason: "test".into(),
            }),
            Box::new(ClaimvaultError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("CV_ERR_"),
                "Error missing CV_ERR_ prefix: {msg}"
            );
        }
    }
}
