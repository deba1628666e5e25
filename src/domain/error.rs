//! Domain Error Types
//!
//! Failure taxonomy for ledger operations. Every business-rule violation is
//! recovered into one of these values; `execute` never surfaces a panic for
//! bad input.

use thiserror::Error;

/// Reasons an operation cannot be applied.
///
/// Callers receive an undistinguished failure signal on the wire; the
/// taxonomy exists for logging and tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// The operation type matched none of deposit/withdraw/transfer.
    #[error("unknown operation type: {0:?}")]
    InvalidOperationType(String),

    /// The amount string did not parse as a 64-bit integer.
    #[error("amount is not a valid integer: {0:?}")]
    MalformedAmount(String),

    /// A required origin account does not exist (withdraw, transfer).
    #[error("account not found: {0}")]
    AccountNotFound(String),

    /// The operation omitted a required origin/destination id.
    #[error("operation is missing the {0} account id")]
    MissingAccountId(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OperationError::InvalidOperationType("loan".to_string());
        assert!(err.to_string().contains("loan"));

        let err = OperationError::AccountNotFound("ACC001".to_string());
        assert!(err.to_string().contains("ACC001"));
    }

    #[test]
    fn test_missing_account_id_names_side() {
        let err = OperationError::MissingAccountId("origin");
        assert!(err.to_string().contains("origin"));
    }
}
