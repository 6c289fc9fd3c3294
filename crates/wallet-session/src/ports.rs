//! The wallet provider port.

use async_trait::async_trait;
use shared_types::Address;
use thiserror::Error;
use tokio::sync::broadcast;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No wallet provider is installed; the session runs in demo mode.
    #[error("wallet provider is not available")]
    ProviderUnavailable,

    /// The provider failed to answer.
    #[error("wallet provider error: {0}")]
    Provider(String),
}

/// Capability exposed by the external wallet.
///
/// `current_account` never prompts; `request_account` may. A user
/// declining the prompt is a clean `Ok(None)`, not an error.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// The account already authorized for this origin, if any.
    async fn current_account(&self) -> Result<Option<Address>, SessionError>;

    /// Asks the user to connect an account.
    async fn request_account(&self) -> Result<Option<Address>, SessionError>;

    /// Stream of account-change notifications. An empty list means the
    /// user disconnected every account.
    fn subscribe(&self) -> broadcast::Receiver<Vec<Address>>;
}
