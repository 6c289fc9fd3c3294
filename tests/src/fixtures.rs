//! Shared deployment harness for integration tests.

use std::sync::Arc;

use action_dispatcher::ActionDispatcher;
use escrow_ledger::adapters::{
    InMemoryAssetRegistry, InMemoryFundsRail, RecordingEventSink, SharedLedger,
};
use escrow_ledger::domain::ledger::{EscrowLedger, PartyConfig};
use escrow_ledger::ports::inbound::EscrowRpc;
use shared_types::{Address, Amount, RoleRegistry};
use state_projector::StateProjector;

pub const SELLER: Address = [0x01; 20];
pub const BUYER: Address = [0x02; 20];
pub const INSPECTOR: Address = [0x03; 20];
pub const LENDER: Address = [0x04; 20];
pub const OUTSIDER: Address = [0xAA; 20];
pub const LEDGER_ADDRESS: Address = [0xEE; 20];

pub const PRICE: Amount = 10;
pub const EARNEST: Amount = 5;
pub const OPENING_BALANCE: Amount = 100;

/// A complete single-process deployment, wired the way the runtime
/// wires it.
pub struct Deployment {
    pub escrow: SharedLedger,
    pub assets: Arc<InMemoryAssetRegistry>,
    pub funds: Arc<InMemoryFundsRail>,
    pub sink: Arc<RecordingEventSink>,
    pub registry: RoleRegistry,
    pub dispatcher: ActionDispatcher,
    pub projector: StateProjector,
}

impl Deployment {
    /// Fresh deployment with assets 0..=2 minted to the seller and the
    /// buyer/lender funded.
    pub fn new() -> Self {
        let assets = Arc::new(InMemoryAssetRegistry::new());
        for id in 0..3 {
            assets.mint(id, SELLER);
        }

        let funds = Arc::new(InMemoryFundsRail::with_balances([
            (BUYER, OPENING_BALANCE),
            (LENDER, OPENING_BALANCE),
        ]));
        let sink = Arc::new(RecordingEventSink::new());

        let ledger = EscrowLedger::new(
            LEDGER_ADDRESS,
            PartyConfig {
                seller: SELLER,
                inspector: INSPECTOR,
                lender: LENDER,
            },
            assets.clone(),
            funds.clone(),
            sink.clone(),
        );
        let escrow = SharedLedger::new(ledger);
        let registry = RoleRegistry::new(SELLER, BUYER, INSPECTOR, LENDER);

        let handle: Arc<dyn EscrowRpc> = Arc::new(escrow.clone());
        let dispatcher = ActionDispatcher::new(handle.clone(), registry.clone());
        let projector = StateProjector::connected(handle, assets.clone());

        Self {
            escrow,
            assets,
            funds,
            sink,
            registry,
            dispatcher,
            projector,
        }
    }

    /// Deployment with property 0 already listed under the standard
    /// terms.
    pub async fn with_listing() -> Self {
        let deployment = Self::new();
        deployment
            .escrow
            .list(SELLER, 0, BUYER, PRICE, EARNEST)
            .await
            .expect("listing fixture");
        deployment
    }
}

impl Default for Deployment {
    fn default() -> Self {
        Self::new()
    }
}
