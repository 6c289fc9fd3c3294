//! Snapshot derivation against the live ledger handles.

use crate::snapshot::ContractSnapshot;
use escrow_ledger::domain::errors::EscrowError;
use escrow_ledger::ports::inbound::EscrowRpc;
use escrow_ledger::ports::outbound::AssetRegistry;
use shared_types::PropertyId;
use std::sync::Arc;
use tracing::{debug, warn};

/// Derives [`ContractSnapshot`]s from the escrow ledger and the asset
/// registry.
///
/// Both handles are optional: without a ledger handle the projector is
/// in demo mode and every snapshot is degraded; without a registry the
/// custody cross-check is skipped.
#[derive(Clone)]
pub struct StateProjector {
    escrow: Option<Arc<dyn EscrowRpc>>,
    assets: Option<Arc<dyn AssetRegistry>>,
}

impl StateProjector {
    pub fn new(
        escrow: Option<Arc<dyn EscrowRpc>>,
        assets: Option<Arc<dyn AssetRegistry>>,
    ) -> Self {
        Self { escrow, assets }
    }

    /// A projector wired to a live deployment.
    pub fn connected(escrow: Arc<dyn EscrowRpc>, assets: Arc<dyn AssetRegistry>) -> Self {
        Self::new(Some(escrow), Some(assets))
    }

    /// A projector with no ledger at all (demo mode).
    pub fn detached() -> Self {
        Self::new(None, None)
    }

    pub fn contracts_available(&self) -> bool {
        self.escrow.is_some()
    }

    /// Derives the current snapshot for a listing.
    ///
    /// Never fails: an unreachable ledger degrades to the all-false
    /// snapshot, and a missing asset aborts early leaving the initial
    /// values. Callers re-run this after their own writes; there is no
    /// push channel to wait on.
    pub async fn snapshot(&self, id: PropertyId) -> ContractSnapshot {
        let Some(escrow) = self.escrow.as_ref() else {
            debug!(property_id = id, "no ledger handle, degraded snapshot");
            return ContractSnapshot::unavailable();
        };

        let mut snapshot = ContractSnapshot {
            contracts_available: true,
            ..ContractSnapshot::default()
        };

        match self.fetch(escrow.as_ref(), id, &mut snapshot).await {
            Ok(()) => snapshot,
            Err(EscrowError::Unavailable) => {
                warn!(property_id = id, "ledger unreachable, degraded snapshot");
                ContractSnapshot::unavailable()
            }
            Err(EscrowError::UnknownAsset(_)) => {
                // No such asset: abort early. "Never populated" and
                // "confirmed empty" are the same observable state.
                debug!(property_id = id, "asset not registered, fetch aborted");
                snapshot
            }
            Err(err) => {
                warn!(property_id = id, error = %err, "projection fetch failed");
                snapshot
            }
        }
    }

    async fn fetch(
        &self,
        escrow: &dyn EscrowRpc,
        id: PropertyId,
        snapshot: &mut ContractSnapshot,
    ) -> Result<(), EscrowError> {
        // Custody cross-check: an asset held outside the ledger names
        // its owner directly.
        if let Some(assets) = self.assets.as_ref() {
            let custodian = assets.custodian_of(id)?;
            let ledger_address = escrow.ledger_address().await?;
            if custodian != ledger_address {
                snapshot.owner = Some(custodian);
            }
        }

        let listed = escrow.is_listed(id).await?;
        if listed {
            let buyer = escrow.buyer_of(id).await?;
            let seller = escrow.seller().await?;
            let lender = escrow.lender().await?;
            let inspector = escrow.inspector().await?;

            snapshot.has_bought = escrow.approval(id, buyer).await?;
            snapshot.has_sold = escrow.approval(id, seller).await?;
            snapshot.has_lended = escrow.approval(id, lender).await?;

            // Two-step inspection: the approval bit alone is not enough.
            let inspector_approved = escrow.approval(id, inspector).await?;
            let inspection_passed = escrow.inspection_passed(id).await?;
            snapshot.has_inspected = inspector_approved && inspection_passed;
        } else if snapshot.owner.is_none() {
            // Listing ended while the ledger still holds (or last held)
            // the record: the buyer of record is the owner.
            snapshot.owner = Some(escrow.buyer_of(id).await?);
        }

        Ok(())
    }
}
