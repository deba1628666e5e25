//! Operation Handler
//!
//! Interprets an operation request and applies it to the account store. All
//! business rules live here; the store remains a semantics-free keyed map.

use std::sync::Arc;

use crate::domain::{Account, Operation, OperationError, OperationKind, OperationOutcome};
use crate::store::AccountStore;

/// Executes deposit/withdraw/transfer operations against the shared store.
///
/// Holds no state between calls: every `execute` is a self-contained
/// transaction that re-reads current balances inside the store's per-id
/// locks and writes the results back.
pub struct OperationHandler {
    store: Arc<AccountStore>,
}

impl OperationHandler {
    pub fn new(store: Arc<AccountStore>) -> Self {
        Self { store }
    }

    /// Execute one operation.
    ///
    /// The type string is matched case-insensitively; an unknown type, a
    /// non-integer amount, a missing required account id, or a missing
    /// origin account all come back as an [`OperationError`], never a panic.
    pub fn execute(&self, operation: &Operation) -> Result<OperationOutcome, OperationError> {
        let kind = OperationKind::parse(&operation.kind)
            .ok_or_else(|| OperationError::InvalidOperationType(operation.kind.clone()))?;
        let amount = operation.parsed_amount()?;

        match kind {
            OperationKind::Deposit => self.deposit(operation.require_destination()?, amount),
            OperationKind::Withdraw => self.withdraw(operation.require_origin()?, amount),
            OperationKind::Transfer => self.transfer(
                operation.require_origin()?,
                operation.require_destination()?,
                amount,
            ),
        }
    }

    /// Credit `destination`, creating it with balance = amount when unseen.
    fn deposit(&self, destination: &str, amount: i64) -> Result<OperationOutcome, OperationError> {
        let account = self.store.upsert(destination, |existing| match existing {
            Some(current) => Account::new(destination, current.balance + amount),
            None => Account::new(destination, amount),
        });

        Ok(OperationOutcome::Deposit {
            destination: account,
        })
    }

    /// Debit `origin`. Withdraw never creates accounts: an unknown origin is
    /// a failure. The balance may go negative.
    fn withdraw(&self, origin: &str, amount: i64) -> Result<OperationOutcome, OperationError> {
        let account = self
            .store
            .update(origin, |current| {
                Account::new(origin, current.balance - amount)
            })
            .ok_or_else(|| OperationError::AccountNotFound(origin.to_owned()))?;

        Ok(OperationOutcome::Withdraw { origin: account })
    }

    /// Move funds from an existing origin to a created-on-demand destination.
    ///
    /// The origin debit runs first so that an unknown origin fails before any
    /// side effect. The two mutations are individually serialized per id but
    /// are not one joint transaction.
    fn transfer(
        &self,
        origin: &str,
        destination: &str,
        amount: i64,
    ) -> Result<OperationOutcome, OperationError> {
        let debited = self
            .store
            .update(origin, |current| {
                Account::new(origin, current.balance - amount)
            })
            .ok_or_else(|| OperationError::AccountNotFound(origin.to_owned()))?;

        let credited = self.store.upsert(destination, |existing| match existing {
            Some(current) => Account::new(destination, current.balance + amount),
            None => Account::new(destination, amount),
        });

        // Same-account transfer: report the final balance on both sides.
        let debited = if origin == destination {
            credited.clone()
        } else {
            debited
        };

        Ok(OperationOutcome::Transfer {
            origin: debited,
            destination: credited,
        })
    }
}
