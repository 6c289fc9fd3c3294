//! The session state machine.
//!
//! Startup reconnects silently if the wallet already authorized an
//! account, unless the user logged out explicitly in this session; an
//! explicit `connect` always goes through the provider prompt. Account
//! changes from the wallet re-resolve the role and are published through
//! a watch channel.

use crate::ports::{SessionError, WalletProvider};
use serde::{Deserialize, Serialize};
use shared_types::{format_address, Address, Role, RoleRegistry};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// What consumers observe about the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub account: Option<Address>,
    pub role: Role,
}

impl SessionState {
    pub const fn disconnected() -> Self {
        Self {
            account: None,
            role: Role::None,
        }
    }

    pub fn connected(&self) -> bool {
        self.account.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::disconnected()
    }
}

/// Tracks the connected signer and its role.
pub struct WalletSession {
    provider: Option<Arc<dyn WalletProvider>>,
    registry: RoleRegistry,
    /// Set by an explicit disconnect; suppresses silent reconnection.
    logged_out: AtomicBool,
    state: watch::Sender<SessionState>,
}

impl WalletSession {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>, registry: RoleRegistry) -> Self {
        let (state, _) = watch::channel(SessionState::disconnected());
        Self {
            provider,
            registry,
            logged_out: AtomicBool::new(false),
            state,
        }
    }

    /// False when no provider is installed (demo mode).
    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Subscribes to session transitions.
    pub fn watch(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Silent startup check: adopts an already-authorized account
    /// without prompting. Skipped after an explicit logout.
    pub async fn check_wallet(&self) -> Result<SessionState, SessionError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(SessionError::ProviderUnavailable)?;

        if self.logged_out.load(Ordering::SeqCst) {
            debug!("manual logout active, skipping silent reconnect");
            return Ok(self.state());
        }

        if let Some(account) = provider.current_account().await? {
            self.apply_account(Some(account));
        }
        Ok(self.state())
    }

    /// Explicit connect through the provider prompt. A declined prompt
    /// leaves the session unchanged.
    pub async fn connect(&self) -> Result<SessionState, SessionError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(SessionError::ProviderUnavailable)?;

        if let Some(account) = provider.request_account().await? {
            self.logged_out.store(false, Ordering::SeqCst);
            self.apply_account(Some(account));
        }
        Ok(self.state())
    }

    /// Explicit logout. Clears the session and suppresses silent
    /// reconnection until the next explicit connect.
    pub fn disconnect(&self) {
        self.logged_out.store(true, Ordering::SeqCst);
        self.apply_account(None);
        info!("wallet disconnected");
    }

    /// Applies a wallet-side account change. An empty list clears the
    /// session; otherwise the first account becomes the signer.
    pub fn handle_accounts_changed(&self, accounts: &[Address]) {
        match accounts.first() {
            None => {
                info!("all accounts disconnected");
                self.apply_account(None);
            }
            Some(account) => self.apply_account(Some(*account)),
        }
    }

    /// Spawns the listener that feeds provider change notifications into
    /// the session. Returns `None` in demo mode.
    pub fn spawn_listener(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let provider = self.provider.clone()?;
        let mut changes = provider.subscribe();
        let session = Arc::clone(self);
        Some(tokio::spawn(async move {
            while let Ok(accounts) = changes.recv().await {
                session.handle_accounts_changed(&accounts);
            }
        }))
    }

    fn apply_account(&self, account: Option<Address>) {
        let role = self.registry.resolve(account);
        let next = SessionState { account, role };
        let changed = self.state.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next.clone();
                true
            }
        });
        if changed {
            match account {
                Some(addr) => {
                    info!(account = %format_address(&addr), role = %role, "session account set")
                }
                None => debug!("session cleared"),
            }
        }
    }
}
