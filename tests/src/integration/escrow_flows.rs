//! End-to-end escrow choreography through the dispatcher.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use action_dispatcher::{DispatchError, DispatchOutcome, Intent};
    use escrow_ledger::domain::errors::EscrowError;
    use escrow_ledger::events::EscrowEvent;
    use escrow_ledger::ports::inbound::EscrowRpc;
    use escrow_ledger::ports::outbound::{AssetRegistry, FundsRail};
    use shared_types::ZERO_ADDRESS;

    /// The reference sale: list at price 10 / earnest 5, all four
    /// parties act, the seller finalizes. Asset custody ends with the
    /// buyer and the ledger balance returns to zero.
    #[tokio::test]
    async fn four_party_sale_completes() {
        let d = Deployment::with_listing().await;

        let outcome = d.dispatcher.dispatch(BUYER, Intent::Buy, 0).await.unwrap();
        assert_eq!(outcome, DispatchOutcome::Completed);

        d.dispatcher
            .dispatch(INSPECTOR, Intent::ApproveInspection, 0)
            .await
            .unwrap();
        d.dispatcher
            .dispatch(LENDER, Intent::ApproveLending, 0)
            .await
            .unwrap();

        let outcome = d
            .dispatcher
            .dispatch(SELLER, Intent::ApproveSale, 0)
            .await
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Completed);

        assert_eq!(d.assets.custodian_of(0).unwrap(), BUYER);
        assert!(!d.escrow.is_listed(0).await.unwrap());
        assert_eq!(d.escrow.get_balance().await.unwrap(), 0);
        assert_eq!(d.funds.balance_of(SELLER), PRICE);
        assert_eq!(d.funds.balance_of(BUYER), OPENING_BALANCE - EARNEST);
        assert_eq!(
            d.funds.balance_of(LENDER),
            OPENING_BALANCE - (PRICE - EARNEST)
        );
    }

    /// Deposit then buyer cancellation: the asset returns to the
    /// seller, the buyer is made whole, and the listing record resets.
    #[tokio::test]
    async fn deposit_then_cancel_refunds_in_full() {
        let d = Deployment::with_listing().await;
        d.dispatcher.dispatch(BUYER, Intent::Buy, 0).await.unwrap();
        assert_eq!(d.escrow.get_balance().await.unwrap(), EARNEST);

        d.dispatcher
            .dispatch(BUYER, Intent::Cancel, 0)
            .await
            .unwrap();

        assert_eq!(d.assets.custodian_of(0).unwrap(), SELLER);
        assert_eq!(d.funds.balance_of(BUYER), OPENING_BALANCE);
        assert_eq!(d.escrow.get_balance().await.unwrap(), 0);
        assert!(!d.escrow.is_listed(0).await.unwrap());
        assert_eq!(d.escrow.purchase_price(0).await.unwrap(), 0);
        assert_eq!(d.escrow.escrow_amount(0).await.unwrap(), 0);
        assert_eq!(d.escrow.buyer_of(0).await.unwrap(), ZERO_ADDRESS);
        assert!(!d.escrow.approval(0, BUYER).await.unwrap());
    }

    /// The inspector never files a verdict: finalize fails with the
    /// specific inspection error and nothing moves.
    #[tokio::test]
    async fn finalize_without_inspection_changes_nothing() {
        let d = Deployment::with_listing().await;
        d.dispatcher.dispatch(BUYER, Intent::Buy, 0).await.unwrap();
        d.dispatcher
            .dispatch(LENDER, Intent::ApproveLending, 0)
            .await
            .unwrap();
        d.escrow.approve_transaction(SELLER, 0).await.unwrap();

        let err = d
            .dispatcher
            .dispatch(SELLER, Intent::Finalize, 0)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DispatchError::Ledger(EscrowError::InspectionNotPassed(0))
        );

        assert!(d.escrow.is_listed(0).await.unwrap());
        assert_eq!(d.assets.custodian_of(0).unwrap(), LEDGER_ADDRESS);
        assert_eq!(d.escrow.get_balance().await.unwrap(), PRICE);
    }

    /// Speculative finalize via approve-sale is benign while parties
    /// are outstanding, and every party's later action still lands.
    #[tokio::test]
    async fn seller_can_approve_first_without_error() {
        let d = Deployment::with_listing().await;

        let outcome = d
            .dispatcher
            .dispatch(SELLER, Intent::ApproveSale, 0)
            .await
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::AwaitingOtherParties);

        d.dispatcher.dispatch(BUYER, Intent::Buy, 0).await.unwrap();
        d.dispatcher
            .dispatch(INSPECTOR, Intent::ApproveInspection, 0)
            .await
            .unwrap();
        d.dispatcher
            .dispatch(LENDER, Intent::ApproveLending, 0)
            .await
            .unwrap();

        // Explicit finalize now succeeds.
        d.dispatcher
            .dispatch(SELLER, Intent::Finalize, 0)
            .await
            .unwrap();
        assert_eq!(d.assets.custodian_of(0).unwrap(), BUYER);
    }

    /// Once cancelled, every pending intent fails with `NotListed`
    /// rather than silently succeeding.
    #[tokio::test]
    async fn cancellation_is_immediate_and_non_negotiable() {
        let d = Deployment::with_listing().await;
        d.dispatcher
            .dispatch(SELLER, Intent::Cancel, 0)
            .await
            .unwrap();

        for (caller, intent) in [
            (INSPECTOR, Intent::ApproveInspection),
            (LENDER, Intent::ApproveLending),
            (SELLER, Intent::ApproveSale),
            (SELLER, Intent::Finalize),
            (SELLER, Intent::Cancel),
        ] {
            assert_eq!(
                d.dispatcher.dispatch(caller, intent, 0).await,
                Err(DispatchError::Ledger(EscrowError::NotListed(0))),
                "{intent} should fail after cancellation"
            );
        }

        // The buyer's flow fails on its own advisory precheck.
        assert_eq!(
            d.dispatcher.dispatch(BUYER, Intent::Buy, 0).await,
            Err(DispatchError::NotForSale(0))
        );
    }

    /// A cancelled property can be listed again from scratch.
    #[tokio::test]
    async fn relisting_after_cancellation_starts_clean() {
        let d = Deployment::with_listing().await;
        d.dispatcher.dispatch(BUYER, Intent::Buy, 0).await.unwrap();
        d.dispatcher
            .dispatch(BUYER, Intent::Cancel, 0)
            .await
            .unwrap();

        d.escrow.list(SELLER, 0, BUYER, 20, 8).await.unwrap();
        assert!(d.escrow.is_listed(0).await.unwrap());
        assert_eq!(d.escrow.purchase_price(0).await.unwrap(), 20);
        assert_eq!(d.escrow.deposited_funds(0).await.unwrap(), 0);
        assert!(!d.escrow.approval(0, BUYER).await.unwrap());
    }

    /// User profile registration over the RPC surface.
    #[tokio::test]
    async fn user_accounts_register_once_per_address() {
        let d = Deployment::new();
        d.escrow
            .create_account(
                BUYER,
                "Juan".into(),
                "Perez".into(),
                "juan.perez@email.com".into(),
            )
            .await
            .unwrap();

        assert!(d.escrow.user_exists(BUYER).await.unwrap());
        let info = d.escrow.user_info(BUYER).await.unwrap();
        assert_eq!(info.username, "Juan");
        assert_eq!(info.email, "juan.perez@email.com");

        assert_eq!(
            d.escrow
                .create_account(BUYER, "Pedro".into(), "Garcia".into(), "p@email.com".into())
                .await,
            Err(EscrowError::UserAlreadyExists(BUYER))
        );
        assert_eq!(
            d.escrow.user_info(OUTSIDER).await,
            Err(EscrowError::UserNotFound(OUTSIDER))
        );
        assert!(d
            .sink
            .events()
            .iter()
            .any(|e| matches!(e, EscrowEvent::UserCreated { owner, .. } if *owner == BUYER)));
    }

    /// The ledger emits one event per effective transition.
    #[tokio::test]
    async fn events_trace_the_full_sale() {
        let d = Deployment::with_listing().await;
        d.dispatcher.dispatch(BUYER, Intent::Buy, 0).await.unwrap();
        d.dispatcher
            .dispatch(INSPECTOR, Intent::ApproveInspection, 0)
            .await
            .unwrap();
        d.dispatcher
            .dispatch(LENDER, Intent::ApproveLending, 0)
            .await
            .unwrap();
        d.dispatcher
            .dispatch(SELLER, Intent::ApproveSale, 0)
            .await
            .unwrap();

        let events = d.sink.events();
        assert!(matches!(events[0], EscrowEvent::PropertyListed { id: 0, .. }));
        assert!(events
            .iter()
            .any(|e| matches!(e, EscrowEvent::EarnestDeposited { amount, .. } if *amount == EARNEST)));
        assert!(events
            .iter()
            .any(|e| matches!(e, EscrowEvent::InspectionUpdated { passed: true, .. })));
        assert!(events
            .iter()
            .any(|e| matches!(e, EscrowEvent::FundsReceived { amount, .. } if *amount == PRICE - EARNEST)));
        assert!(matches!(
            events.last(),
            Some(EscrowEvent::SaleFinalized { buyer, amount, .. })
                if *buyer == BUYER && *amount == PRICE
        ));
    }
}
