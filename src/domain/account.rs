//! Account type
//!
//! The single record kind held by the account store: an opaque string id and
//! an integer balance in the smallest currency unit.

use serde::{Deserialize, Serialize};

/// A ledger entry identified by a unique id with an integer balance.
///
/// Balances are signed and may go negative: the system performs no overdraft
/// protection on withdraw or transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, the key in the account store.
    pub id: String,

    /// Current balance in the smallest currency denomination.
    pub balance: i64,
}

impl Account {
    pub fn new(id: impl Into<String>, balance: i64) -> Self {
        Self {
            id: id.into(),
            balance,
        }
    }
}
