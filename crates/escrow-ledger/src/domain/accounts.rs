//! Per-address user profile registry.
//!
//! Independent of the listing workflow; exists for identity and profile
//! display only. One account per address, created once.

use crate::domain::errors::EscrowError;
use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::collections::HashMap;

/// A registered user profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    pub last_name: String,
    pub email: String,
}

/// Registry of user accounts keyed by address.
#[derive(Clone, Debug, Default)]
pub struct UserDirectory {
    accounts: HashMap<Address, UserAccount>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account. All three fields must be non-empty and the
    /// address must not already have one.
    pub fn create(&mut self, owner: Address, account: UserAccount) -> Result<(), EscrowError> {
        if account.username.is_empty() {
            return Err(EscrowError::EmptyField("username"));
        }
        if account.last_name.is_empty() {
            return Err(EscrowError::EmptyField("last name"));
        }
        if account.email.is_empty() {
            return Err(EscrowError::EmptyField("email"));
        }
        if self.accounts.contains_key(&owner) {
            return Err(EscrowError::UserAlreadyExists(owner));
        }
        self.accounts.insert(owner, account);
        Ok(())
    }

    pub fn exists(&self, owner: &Address) -> bool {
        self.accounts.contains_key(owner)
    }

    pub fn get(&self, owner: &Address) -> Result<&UserAccount, EscrowError> {
        self.accounts
            .get(owner)
            .ok_or(EscrowError::UserNotFound(*owner))
    }
}
