//! User intents and dispatch results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the connected user is asking to do with a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Buyer: deposit earnest, then approve.
    Buy,
    /// Inspector: record a passed inspection, then approve.
    ApproveInspection,
    /// Lender: approve, then wire the remaining funds.
    ApproveLending,
    /// Seller: approve, then speculatively try to finalize.
    ApproveSale,
    /// Seller: finalize now, expecting every precondition to hold.
    Finalize,
    /// Buyer or seller: abort the sale.
    Cancel,
}

impl Intent {
    pub fn label(self) -> &'static str {
        match self {
            Intent::Buy => "buy",
            Intent::ApproveInspection => "approve inspection",
            Intent::ApproveLending => "approve lending",
            Intent::ApproveSale => "approve sale",
            Intent::Finalize => "finalize",
            Intent::Cancel => "cancel",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a dispatched intent concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchOutcome {
    /// Every call in the sequence completed.
    Completed,
    /// The caller's part is recorded; finalization still waits on other
    /// parties. The expected common case for the seller's approve-sale.
    AwaitingOtherParties,
}
