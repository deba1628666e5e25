//! Operation request and result types
//!
//! An `Operation` is a single ledger-mutating request. The type string is
//! matched case-insensitively and the amount travels as an integer-valued
//! string, both inherited from the wire contract.

use serde::{Deserialize, Serialize};

use super::account::Account;
use super::error::OperationError;

/// The three supported operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Deposit,
    Withdraw,
    Transfer,
}

impl OperationKind {
    /// Resolve a type string case-insensitively. `None` for anything that is
    /// not deposit/withdraw/transfer.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("deposit") {
            Some(Self::Deposit)
        } else if s.eq_ignore_ascii_case("withdraw") {
            Some(Self::Withdraw)
        } else if s.eq_ignore_ascii_case("transfer") {
            Some(Self::Transfer)
        } else {
            None
        }
    }
}

/// A single ledger-mutating request.
///
/// `origin` is required for withdraw and transfer, `destination` for deposit
/// and transfer; the unused side is ignored. Validation happens in the
/// operation handler, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Operation type, matched case-insensitively.
    #[serde(rename = "type")]
    pub kind: String,

    /// Amount as an integer-valued string.
    pub amount: String,

    /// Source account id for withdraw and transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Target account id for deposit and transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl Operation {
    pub fn new(kind: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            amount: amount.into(),
            origin: None,
            destination: None,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Parse the amount string as a signed 64-bit integer.
    ///
    /// Zero and negative values pass; a negative amount inverts the
    /// operation's direction, matching the reference system.
    pub fn parsed_amount(&self) -> Result<i64, OperationError> {
        self.amount
            .parse()
            .map_err(|_| OperationError::MalformedAmount(self.amount.clone()))
    }

    pub(crate) fn require_origin(&self) -> Result<&str, OperationError> {
        self.origin
            .as_deref()
            .ok_or(OperationError::MissingAccountId("origin"))
    }

    pub(crate) fn require_destination(&self) -> Result<&str, OperationError> {
        self.destination
            .as_deref()
            .ok_or(OperationError::MissingAccountId("destination"))
    }
}

/// Post-mutation view returned by a successful operation.
///
/// Snapshots are tagged with the side they played so the response layer can
/// shape them without re-reading the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    Deposit { destination: Account },
    Withdraw { origin: Account },
    Transfer { origin: Account, destination: Account },
}
