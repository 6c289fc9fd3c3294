//! Domain events emitted by the ledger.
//!
//! Events are delivered through the [`EventSink`](crate::ports::outbound::EventSink)
//! outbound port; the ledger never waits on consumers.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, PropertyId};

/// Everything the ledger announces about its own transitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscrowEvent {
    PropertyListed {
        id: PropertyId,
        buyer: Address,
        purchase_price: Amount,
        escrow_amount: Amount,
    },
    EarnestDeposited {
        id: PropertyId,
        from: Address,
        amount: Amount,
    },
    TransactionApproved {
        id: PropertyId,
        by: Address,
    },
    InspectionUpdated {
        id: PropertyId,
        passed: bool,
    },
    FundsReceived {
        id: PropertyId,
        from: Address,
        amount: Amount,
    },
    SaleFinalized {
        id: PropertyId,
        buyer: Address,
        amount: Amount,
    },
    SaleCancelled {
        id: PropertyId,
        by: Address,
        refunded: Amount,
    },
    UserCreated {
        owner: Address,
        username: String,
        last_name: String,
        email: String,
    },
}

impl EscrowEvent {
    /// The listing this event concerns, if any.
    pub fn property_id(&self) -> Option<PropertyId> {
        match self {
            EscrowEvent::PropertyListed { id, .. }
            | EscrowEvent::EarnestDeposited { id, .. }
            | EscrowEvent::TransactionApproved { id, .. }
            | EscrowEvent::InspectionUpdated { id, .. }
            | EscrowEvent::FundsReceived { id, .. }
            | EscrowEvent::SaleFinalized { id, .. }
            | EscrowEvent::SaleCancelled { id, .. } => Some(*id),
            EscrowEvent::UserCreated { .. } => None,
        }
    }
}
