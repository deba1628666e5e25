//! Domain module
//!
//! Ledger types with no knowledge of storage or transport: accounts,
//! operation requests, operation results, and the failure taxonomy.

mod account;
mod error;
mod operation;

pub use account::Account;
pub use error::OperationError;
pub use operation::{Operation, OperationKind, OperationOutcome};
