//! Wallet session driving role-gated dispatch.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use action_dispatcher::{DispatchError, Intent};
    use escrow_ledger::ports::inbound::EscrowRpc;
    use shared_types::Role;
    use std::sync::Arc;
    use wallet_session::{StaticWalletProvider, WalletSession};

    /// Switching wallet accounts changes which intents dispatch: the
    /// session resolves the role, the dispatcher enforces it.
    #[tokio::test]
    async fn account_switches_gate_intents() {
        let d = Deployment::with_listing().await;
        let provider = Arc::new(StaticWalletProvider::with_account(OUTSIDER));
        let session = WalletSession::new(Some(provider.clone()), d.registry.clone());

        let state = session.connect().await.unwrap();
        assert_eq!(state.role, Role::GenericUser);
        let caller = state.account.unwrap();
        assert!(matches!(
            d.dispatcher.dispatch(caller, Intent::Buy, 0).await,
            Err(DispatchError::RoleMismatch { .. })
        ));

        // The user switches to the buyer account in the wallet.
        session.handle_accounts_changed(&[BUYER]);
        let state = session.state();
        assert_eq!(state.role, Role::Buyer);
        let caller = state.account.unwrap();
        d.dispatcher.dispatch(caller, Intent::Buy, 0).await.unwrap();
        assert!(d.escrow.approval(0, BUYER).await.unwrap());
    }

    /// Disconnecting mid-flow leaves the ledger untouched and the
    /// session roleless; reconnecting resumes where the protocol stood.
    #[tokio::test]
    async fn disconnect_does_not_disturb_ledger_state() {
        let d = Deployment::with_listing().await;
        let provider = Arc::new(StaticWalletProvider::with_account(BUYER));
        let session = WalletSession::new(Some(provider.clone()), d.registry.clone());

        session.connect().await.unwrap();
        d.dispatcher.dispatch(BUYER, Intent::Buy, 0).await.unwrap();

        session.disconnect();
        assert_eq!(session.state().role, Role::None);
        assert_eq!(d.escrow.deposited_funds(0).await.unwrap(), EARNEST);

        let state = session.connect().await.unwrap();
        assert_eq!(state.role, Role::Buyer);
    }
}
