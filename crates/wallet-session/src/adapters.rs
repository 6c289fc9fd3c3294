//! Wallet provider adapters.

use crate::ports::{SessionError, WalletProvider};
use async_trait::async_trait;
use shared_types::Address;
use std::sync::RwLock;
use tokio::sync::broadcast;

/// Programmable in-process wallet for development and tests.
///
/// Holds one authorized account and a broadcast channel for simulated
/// account-change notifications.
pub struct StaticWalletProvider {
    account: RwLock<Option<Address>>,
    changes: broadcast::Sender<Vec<Address>>,
}

impl StaticWalletProvider {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(16);
        Self {
            account: RwLock::new(None),
            changes,
        }
    }

    /// A provider that has already authorized `account`.
    pub fn with_account(account: Address) -> Self {
        let provider = Self::new();
        provider.set_account(Some(account));
        provider
    }

    /// Changes the authorized account without notifying subscribers.
    pub fn set_account(&self, account: Option<Address>) {
        if let Ok(mut current) = self.account.write() {
            *current = account;
        }
    }

    /// Simulates a wallet-side account change: updates the authorized
    /// account and notifies subscribers.
    pub fn announce(&self, accounts: Vec<Address>) {
        self.set_account(accounts.first().copied());
        let _ = self.changes.send(accounts);
    }
}

impl Default for StaticWalletProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletProvider for StaticWalletProvider {
    async fn current_account(&self) -> Result<Option<Address>, SessionError> {
        self.account
            .read()
            .map(|a| *a)
            .map_err(|_| SessionError::Provider("wallet state poisoned".into()))
    }

    async fn request_account(&self) -> Result<Option<Address>, SessionError> {
        // The in-process wallet "prompts" by handing out whatever is
        // authorized; None models a declined prompt.
        self.current_account().await
    }

    fn subscribe(&self) -> broadcast::Receiver<Vec<Address>> {
        self.changes.subscribe()
    }
}
