//! # Homestead Node Runtime
//!
//! Wires a complete single-process deployment together and drives the
//! escrow choreography end to end:
//!
//! 1. Load configuration (environment with development defaults)
//! 2. Initialize tracing
//! 3. Build the funds rail, asset registry, ledger, catalog, session,
//!    projector, and dispatcher
//! 4. Run the four-party happy path on one listing
//! 5. Run a deposit-then-cancel flow on a second listing

mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use action_dispatcher::{ActionDispatcher, Intent};
use escrow_ledger::adapters::{
    InMemoryAssetRegistry, InMemoryFundsRail, SharedLedger, TracingEventSink,
};
use escrow_ledger::domain::ledger::{EscrowLedger, PartyConfig};
use escrow_ledger::ports::inbound::EscrowRpc;
use property_catalog::PropertyCatalog;
use shared_types::{short_address, Address};
use state_projector::StateProjector;
use wallet_session::{StaticWalletProvider, WalletSession};

use crate::config::RuntimeConfig;

/// Demo catalog in the external metadata schema.
const DEMO_CATALOG: &str = r#"[
    {
        "id": 0,
        "name": "Seaside Villa",
        "description": "Four bedrooms, two terraces, ocean view",
        "image": "https://example.com/properties/0.png",
        "attributes": [
            { "trait_type": "Purchase Price", "value": 10 },
            { "trait_type": "Bedrooms", "value": 4 },
            { "trait_type": "Location", "value": "Valencia" }
        ]
    },
    {
        "id": 1,
        "name": "City Loft",
        "description": "Compact loft in the old town",
        "image": "https://example.com/properties/1.png",
        "attributes": [
            { "trait_type": "Purchase Price", "value": 10 },
            { "trait_type": "Bedrooms", "value": 2 },
            { "trait_type": "Location", "value": "Madrid" }
        ]
    }
]"#;

struct Runtime {
    config: RuntimeConfig,
    escrow: Arc<dyn EscrowRpc>,
    catalog: PropertyCatalog,
    session: Arc<WalletSession>,
    provider: Arc<StaticWalletProvider>,
    projector: StateProjector,
    dispatcher: ActionDispatcher,
}

impl Runtime {
    fn build(config: RuntimeConfig) -> Result<Self> {
        let assets = Arc::new(InMemoryAssetRegistry::new());
        assets.mint(0, config.seller);
        assets.mint(1, config.seller);

        let funds = Arc::new(InMemoryFundsRail::with_balances([
            (config.buyer, config.opening_balance),
            (config.lender, config.opening_balance),
        ]));

        let ledger = EscrowLedger::new(
            config.ledger_address,
            PartyConfig {
                seller: config.seller,
                inspector: config.inspector,
                lender: config.lender,
            },
            assets.clone(),
            funds,
            Arc::new(TracingEventSink),
        );
        let escrow: Arc<dyn EscrowRpc> = Arc::new(SharedLedger::new(ledger));

        let catalog = PropertyCatalog::from_json(DEMO_CATALOG).context("demo catalog")?;

        let registry = config.registry();
        let provider = Arc::new(StaticWalletProvider::new());
        let session = Arc::new(WalletSession::new(Some(provider.clone()), registry.clone()));
        let _listener = session.spawn_listener();

        let projector = StateProjector::connected(escrow.clone(), assets);
        let dispatcher = ActionDispatcher::new(escrow.clone(), registry);

        Ok(Self {
            config,
            escrow,
            catalog,
            session,
            provider,
            projector,
            dispatcher,
        })
    }

    /// Switches the connected wallet account and re-resolves the role.
    async fn sign_in(&self, who: Address) -> Result<()> {
        self.provider.set_account(Some(who));
        let state = self.session.check_wallet().await?;
        info!(
            account = %short_address(&who),
            role = %state.role,
            "signer switched"
        );
        Ok(())
    }

    async fn report(&self, id: u64) {
        let snapshot = self.projector.snapshot(id).await;
        let stage = self.escrow.stage(id).await.ok().flatten();
        info!(property_id = id, ?snapshot, ?stage, "projection");
    }

    /// The four-party happy path: list, buy, inspect, lend, approve,
    /// finalize.
    async fn run_sale(&self, id: u64) -> Result<()> {
        let record = self
            .catalog
            .record(id)
            .with_context(|| format!("property {id} missing from catalog"))?;
        info!(property_id = id, name = %record.name, price = ?record.price(), "starting sale");

        self.sign_in(self.config.seller).await?;
        self.escrow
            .list(
                self.config.seller,
                id,
                self.config.buyer,
                self.config.purchase_price,
                self.config.escrow_amount,
            )
            .await?;
        self.report(id).await;

        self.sign_in(self.config.buyer).await?;
        if !self.escrow.user_exists(self.config.buyer).await? {
            self.escrow
                .create_account(
                    self.config.buyer,
                    "Juan".into(),
                    "Perez".into(),
                    "juan.perez@email.com".into(),
                )
                .await?;
        }
        self.dispatcher
            .dispatch(self.config.buyer, Intent::Buy, id)
            .await?;
        self.report(id).await;

        self.sign_in(self.config.inspector).await?;
        self.dispatcher
            .dispatch(self.config.inspector, Intent::ApproveInspection, id)
            .await?;
        self.report(id).await;

        self.sign_in(self.config.lender).await?;
        self.dispatcher
            .dispatch(self.config.lender, Intent::ApproveLending, id)
            .await?;
        self.report(id).await;

        self.sign_in(self.config.seller).await?;
        let outcome = self
            .dispatcher
            .dispatch(self.config.seller, Intent::ApproveSale, id)
            .await?;
        info!(property_id = id, ?outcome, "seller approval dispatched");
        self.report(id).await;

        let balance = self.escrow.get_balance().await?;
        info!(property_id = id, balance = %balance, "sale complete");
        Ok(())
    }

    /// Deposit, then buyer-initiated cancellation with a full refund.
    async fn run_cancellation(&self, id: u64) -> Result<()> {
        info!(property_id = id, "starting cancellation flow");

        self.sign_in(self.config.seller).await?;
        self.escrow
            .list(
                self.config.seller,
                id,
                self.config.buyer,
                self.config.purchase_price,
                self.config.escrow_amount,
            )
            .await?;

        self.sign_in(self.config.buyer).await?;
        self.dispatcher
            .dispatch(self.config.buyer, Intent::Buy, id)
            .await?;
        self.report(id).await;

        self.dispatcher
            .dispatch(self.config.buyer, Intent::Cancel, id)
            .await?;
        self.report(id).await;

        let balance = self.escrow.get_balance().await?;
        info!(property_id = id, balance = %balance, "cancellation complete");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RuntimeConfig::from_env()?;
    info!(
        seller = %short_address(&config.seller),
        buyer = %short_address(&config.buyer),
        inspector = %short_address(&config.inspector),
        lender = %short_address(&config.lender),
        "runtime configured"
    );

    let runtime = Runtime::build(config)?;
    runtime.run_sale(0).await?;
    runtime.run_cancellation(1).await?;

    info!("demo choreography complete");
    Ok(())
}
