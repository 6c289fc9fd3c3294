//! Role-gated dispatch onto the ledger RPC surface.

use crate::intent::{DispatchOutcome, Intent};
use escrow_ledger::domain::errors::EscrowError;
use escrow_ledger::ports::inbound::EscrowRpc;
use shared_types::{Address, PropertyId, Role, RoleRegistry};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Dispatch failure. Ledger-transition errors pass through unchanged so
/// the actor sees exactly which precondition failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The caller's role cannot perform this intent at all.
    #[error("a {role} cannot {intent}")]
    RoleMismatch { role: Role, intent: Intent },

    /// Advisory precheck: the listing is not active.
    #[error("property {0} is not available for purchase")]
    NotForSale(PropertyId),

    /// Advisory precheck: the connected account is not the listing's
    /// designated buyer.
    #[error("connected account is not the designated buyer for property {0}")]
    NotDesignatedBuyer(PropertyId),

    #[error(transparent)]
    Ledger(#[from] EscrowError),
}

/// Sequences ledger calls for each role-gated intent.
pub struct ActionDispatcher {
    escrow: Arc<dyn EscrowRpc>,
    registry: RoleRegistry,
}

impl ActionDispatcher {
    pub fn new(escrow: Arc<dyn EscrowRpc>, registry: RoleRegistry) -> Self {
        Self { escrow, registry }
    }

    /// Resolves the caller's role and runs the matching call sequence.
    pub async fn dispatch(
        &self,
        caller: Address,
        intent: Intent,
        id: PropertyId,
    ) -> Result<DispatchOutcome, DispatchError> {
        let role = self.registry.resolve_address(caller);
        debug!(property_id = id, %role, %intent, "dispatching");

        match (role, intent) {
            (Role::Buyer, Intent::Buy) => self.buy(caller, id).await,
            (Role::Inspector, Intent::ApproveInspection) => {
                self.approve_inspection(caller, id).await
            }
            (Role::Lender, Intent::ApproveLending) => self.approve_lending(caller, id).await,
            (Role::Seller, Intent::ApproveSale) => self.approve_sale(caller, id).await,
            (Role::Seller, Intent::Finalize) => self.finalize(caller, id).await,
            (Role::Buyer | Role::Seller, Intent::Cancel) => self.cancel(caller, id).await,
            (role, intent) => Err(DispatchError::RoleMismatch { role, intent }),
        }
    }

    /// Earnest deposit, confirmed, then buyer approval. If approval
    /// fails after a successful deposit the listing stays in its
    /// deposited state; the deposit is not rolled back and the flow is
    /// resumable.
    async fn buy(
        &self,
        caller: Address,
        id: PropertyId,
    ) -> Result<DispatchOutcome, DispatchError> {
        if !self.escrow.is_listed(id).await? {
            return Err(DispatchError::NotForSale(id));
        }
        let designated = self.escrow.buyer_of(id).await?;
        if designated != caller {
            return Err(DispatchError::NotDesignatedBuyer(id));
        }

        let earnest = self.escrow.escrow_amount(id).await?;
        self.escrow.deposit_earnest(caller, id, earnest).await?;
        self.escrow.approve_transaction(caller, id).await?;

        info!(property_id = id, "earnest deposited and purchase approved");
        Ok(DispatchOutcome::Completed)
    }

    /// Status update first, then the inspector's approval. The ledger
    /// checks both independently at finalize time; the fixed order keeps
    /// the intent legible.
    async fn approve_inspection(
        &self,
        caller: Address,
        id: PropertyId,
    ) -> Result<DispatchOutcome, DispatchError> {
        self.escrow
            .update_inspection_status(caller, id, true)
            .await?;
        self.escrow.approve_transaction(caller, id).await?;

        info!(property_id = id, "inspection passed and approved");
        Ok(DispatchOutcome::Completed)
    }

    /// Approval, then the raw transfer of the remaining purchase funds.
    /// The ledger does not validate the transferred amount; shortfalls
    /// surface only when the seller finalizes.
    async fn approve_lending(
        &self,
        caller: Address,
        id: PropertyId,
    ) -> Result<DispatchOutcome, DispatchError> {
        self.escrow.approve_transaction(caller, id).await?;

        let price = self.escrow.purchase_price(id).await?;
        let earnest = self.escrow.escrow_amount(id).await?;
        let lend_amount = price.saturating_sub(earnest);
        self.escrow.send_funds(caller, id, lend_amount).await?;

        info!(property_id = id, amount = %lend_amount, "lending approved and funded");
        Ok(DispatchOutcome::Completed)
    }

    /// Approval, then a speculative finalize. Outstanding approvals,
    /// inspection, or funding are the expected common case here, logged
    /// and reported as awaiting, never surfaced as failures.
    async fn approve_sale(
        &self,
        caller: Address,
        id: PropertyId,
    ) -> Result<DispatchOutcome, DispatchError> {
        self.escrow.approve_transaction(caller, id).await?;

        match self.escrow.finalize_sale(caller, id).await {
            Ok(()) => {
                info!(property_id = id, "sale approved and finalized");
                Ok(DispatchOutcome::Completed)
            }
            Err(
                err @ (EscrowError::IncompleteApprovals { .. }
                | EscrowError::InspectionNotPassed(_)
                | EscrowError::InsufficientFunds { .. }),
            ) => {
                info!(property_id = id, reason = %err, "finalize deferred");
                Ok(DispatchOutcome::AwaitingOtherParties)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Explicit finalize: the caller believes every precondition holds,
    /// so every ledger error is a hard failure.
    async fn finalize(
        &self,
        caller: Address,
        id: PropertyId,
    ) -> Result<DispatchOutcome, DispatchError> {
        self.escrow.finalize_sale(caller, id).await?;
        info!(property_id = id, "sale finalized");
        Ok(DispatchOutcome::Completed)
    }

    async fn cancel(
        &self,
        caller: Address,
        id: PropertyId,
    ) -> Result<DispatchOutcome, DispatchError> {
        self.escrow.cancel_sale(caller, id).await?;
        info!(property_id = id, "sale cancelled");
        Ok(DispatchOutcome::Completed)
    }
}
