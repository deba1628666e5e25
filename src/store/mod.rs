//! Account store
//!
//! Concurrent keyed storage for account records. This is a pure store: no
//! operation semantics live here, only creation, lookup, overwrite, reset,
//! and atomic per-id read-modify-write.
//!
//! `DashMap` provides fine-grained locking through internal sharding, so
//! operations on different accounts proceed concurrently while the closure
//! passed to [`AccountStore::upsert`] or [`AccountStore::update`] runs with
//! exclusive access to its entry. Two concurrent deposits to the same id
//! therefore cannot lose an update.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::Account;

/// Concurrent map from account id to account record.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: DashMap<String, Account>,
}

impl AccountStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Snapshot lookup. Returns a clone of the stored record; concurrent
    /// mutations after the call are not reflected in the returned value.
    pub fn get(&self, id: &str) -> Option<Account> {
        self.accounts.get(id).map(|entry| entry.value().clone())
    }

    /// Unconditional create-or-overwrite, keyed by the account's own id.
    pub fn put(&self, account: Account) -> Account {
        self.accounts.insert(account.id.clone(), account.clone());
        account
    }

    /// Atomically clear all accounts.
    pub fn reset(&self) {
        self.accounts.clear();
    }

    /// Atomic read-modify-write that creates the entry when absent.
    ///
    /// The closure sees the current record (or `None`) and produces the next
    /// one; it runs while the entry is exclusively locked, so no other
    /// read-modify-write on the same id can interleave. The closure must not
    /// touch the store itself.
    pub fn upsert<F>(&self, id: &str, f: F) -> Account
    where
        F: FnOnce(Option<&Account>) -> Account,
    {
        match self.accounts.entry(id.to_owned()) {
            Entry::Occupied(mut entry) => {
                let next = f(Some(entry.get()));
                entry.insert(next.clone());
                next
            }
            Entry::Vacant(entry) => {
                let next = f(None);
                entry.insert(next.clone());
                next
            }
        }
    }

    /// Atomic read-modify-write on an existing entry.
    ///
    /// Returns `None` without calling the closure when the id is unknown;
    /// never creates an entry. Same locking contract as [`Self::upsert`].
    pub fn update<F>(&self, id: &str, f: F) -> Option<Account>
    where
        F: FnOnce(&Account) -> Account,
    {
        let mut entry = self.accounts.get_mut(id)?;
        let next = f(entry.value());
        *entry.value_mut() = next.clone();
        Some(next)
    }

    /// Number of accounts currently stored.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
