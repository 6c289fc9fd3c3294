//! Projection behavior across the full choreography.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use action_dispatcher::Intent;
    use escrow_ledger::adapters::OfflineLedger;
    use escrow_ledger::domain::listing::ListingStage;
    use escrow_ledger::ports::inbound::EscrowRpc;
    use state_projector::{ContractSnapshot, StateProjector};
    use std::sync::Arc;

    /// The snapshot mirrors the stepper the display layer renders: each
    /// party's action flips exactly its own bit, and the owner stays
    /// unresolved until the listing ends.
    #[tokio::test]
    async fn snapshot_tracks_each_party_action() {
        let d = Deployment::with_listing().await;

        let snap = d.projector.snapshot(0).await;
        assert!(snap.contracts_available);
        assert_eq!(snap.approval_count(), 0);
        assert!(snap.in_escrow());

        d.dispatcher.dispatch(BUYER, Intent::Buy, 0).await.unwrap();
        let snap = d.projector.snapshot(0).await;
        assert!(snap.has_bought && !snap.has_sold && !snap.has_lended && !snap.has_inspected);

        d.dispatcher
            .dispatch(INSPECTOR, Intent::ApproveInspection, 0)
            .await
            .unwrap();
        let snap = d.projector.snapshot(0).await;
        assert!(snap.has_bought && snap.has_inspected);

        d.dispatcher
            .dispatch(LENDER, Intent::ApproveLending, 0)
            .await
            .unwrap();
        let snap = d.projector.snapshot(0).await;
        assert!(snap.has_lended);
        assert_eq!(d.escrow.stage(0).await.unwrap(), Some(ListingStage::PartiallyApproved));

        d.dispatcher
            .dispatch(SELLER, Intent::ApproveSale, 0)
            .await
            .unwrap();
        let snap = d.projector.snapshot(0).await;
        // Finalized: the listing ended, detail bits reset, owner known.
        assert_eq!(snap.owner, Some(BUYER));
        assert!(!snap.in_escrow());
    }

    #[tokio::test]
    async fn cancelled_listing_projects_seller_as_owner() {
        let d = Deployment::with_listing().await;
        d.dispatcher.dispatch(BUYER, Intent::Buy, 0).await.unwrap();
        d.dispatcher
            .dispatch(BUYER, Intent::Cancel, 0)
            .await
            .unwrap();

        let snap = d.projector.snapshot(0).await;
        assert_eq!(snap.owner, Some(SELLER));
        assert_eq!(snap.approval_count(), 0);
    }

    /// Never-listed assets resolve their real custodian as owner.
    #[tokio::test]
    async fn unlisted_assets_resolve_their_custodian() {
        let d = Deployment::new();
        let snap = d.projector.snapshot(1).await;
        assert_eq!(snap.owner, Some(SELLER));
    }

    /// Ids with no registered asset abort the fetch early; the result
    /// is indistinguishable from a confirmed-empty listing.
    #[tokio::test]
    async fn unregistered_ids_leave_the_initial_snapshot() {
        let d = Deployment::new();
        let snap = d.projector.snapshot(99).await;
        assert!(snap.contracts_available);
        assert_eq!(snap.approval_count(), 0);
        assert_eq!(snap.owner, None);
    }

    /// An unreachable ledger degrades every field, including
    /// availability, and never errors.
    #[tokio::test]
    async fn unreachable_ledger_degrades_to_demo_mode() {
        let projector = StateProjector::new(Some(Arc::new(OfflineLedger)), None);
        assert_eq!(projector.snapshot(0).await, ContractSnapshot::unavailable());

        let detached = StateProjector::detached();
        assert!(!detached.contracts_available());
        assert_eq!(detached.snapshot(0).await, ContractSnapshot::unavailable());
    }
}
