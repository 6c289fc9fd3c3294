//! The projected snapshot.

use serde::{Deserialize, Serialize};
use shared_types::Address;

/// Point-in-time view of one listing's contract state.
///
/// A snapshot that was never populated (missing asset, fetch aborted)
/// is observably identical to one derived from an empty listing: all
/// booleans false, no owner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSnapshot {
    /// Buyer has approved (earnest deposited and consent recorded).
    pub has_bought: bool,
    /// Seller has approved.
    pub has_sold: bool,
    /// Lender has approved.
    pub has_lended: bool,
    /// Inspector has approved AND the inspection passed. Both are
    /// required; the approval bit alone is insufficient.
    pub has_inspected: bool,
    /// Resolved owner: the outside custodian, or the buyer once the
    /// listing ended, or `None` while the asset sits in escrow.
    pub owner: Option<Address>,
    /// False when the ledger was unreachable (demo/degraded mode).
    pub contracts_available: bool,
}

impl ContractSnapshot {
    /// The degraded snapshot reported when the ledger is unreachable.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// True while the asset is still held by the escrow ledger.
    pub fn in_escrow(&self) -> bool {
        self.contracts_available && self.owner.is_none()
    }

    /// Count of recorded approvals, for progress display.
    pub fn approval_count(&self) -> usize {
        [self.has_bought, self.has_sold, self.has_lended, self.has_inspected]
            .iter()
            .filter(|b| **b)
            .count()
    }
}
