//! Per-property listing record.
//!
//! A listing is the unit of escrow coordination: created by `list`,
//! mutated by deposits, approvals, and inspection updates, and destroyed
//! (terminally) by finalization or cancellation.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, PropertyId, ZERO_ADDRESS};
use std::collections::BTreeSet;

/// Lifecycle phase of a listing. `Finalized` and `Cancelled` are
/// terminal; no transition leaves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingPhase {
    Active,
    Finalized,
    Cancelled,
}

/// Derived progress of an active listing, for display and gating.
///
/// Not stored: recomputed from the deposit, approval set, and inspection
/// flag, so it can never drift from the authoritative fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingStage {
    /// Listed, earnest not yet deposited.
    NoDeposit,
    /// Earnest deposited, no approvals yet.
    Deposited,
    /// At least one of buyer/seller/lender has approved.
    PartiallyApproved,
    /// All three approvals present and inspection passed.
    ReadyToFinalize,
}

/// One property under escrow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Listing {
    pub id: PropertyId,
    /// Designated buyer; immutable for the life of the listing.
    pub buyer: Address,
    /// Total price in the smallest currency unit.
    pub purchase_price: Amount,
    /// Earnest deposit required from the buyer.
    pub escrow_amount: Amount,
    /// Latest inspector verdict; latest write wins.
    pub inspection_passed: bool,
    /// Addresses that have approved this transaction.
    pub approvals: BTreeSet<Address>,
    /// Funds held by the ledger attributable to this transaction.
    pub deposited_funds: Amount,
    pub phase: ListingPhase,
}

impl Listing {
    pub fn new(
        id: PropertyId,
        buyer: Address,
        purchase_price: Amount,
        escrow_amount: Amount,
    ) -> Self {
        Self {
            id,
            buyer,
            purchase_price,
            escrow_amount,
            inspection_passed: false,
            approvals: BTreeSet::new(),
            deposited_funds: 0,
            phase: ListingPhase::Active,
        }
    }

    pub fn is_listed(&self) -> bool {
        self.phase == ListingPhase::Active
    }

    pub fn has_approved(&self, who: &Address) -> bool {
        self.approvals.contains(who)
    }

    /// Records an approval. Returns `false` if the caller had already
    /// approved (a no-op, not an error).
    pub fn approve(&mut self, who: Address) -> bool {
        self.approvals.insert(who)
    }

    /// Resets every mutable field on cancellation. Cleared fields read
    /// back as zero/empty/false afterwards.
    pub(crate) fn clear_on_cancel(&mut self) {
        self.buyer = ZERO_ADDRESS;
        self.purchase_price = 0;
        self.escrow_amount = 0;
        self.inspection_passed = false;
        self.approvals.clear();
        self.deposited_funds = 0;
        self.phase = ListingPhase::Cancelled;
    }
}
