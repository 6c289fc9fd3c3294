//! # Inbound Port - EscrowRpc
//!
//! The RPC surface of the ledger: seven state-mutating operations plus
//! the reads the projection and dispatch layers poll. This is the only
//! wire-level contract the system fixes; everything a client may do goes
//! through it.
//!
//! Mutating calls are serialized per ledger by the implementing handle.
//! Reads are non-blocking snapshots that may race in-flight writes;
//! callers re-fetch after their own writes.

use crate::domain::accounts::UserAccount;
use crate::domain::errors::EscrowError;
use crate::domain::listing::ListingStage;
use async_trait::async_trait;
use shared_types::{Address, Amount, PropertyId};

/// Primary API of the escrow ledger.
#[async_trait]
pub trait EscrowRpc: Send + Sync {
    // === Transitions ===

    /// Lists a property. Seller-only.
    async fn list(
        &self,
        caller: Address,
        id: PropertyId,
        buyer: Address,
        purchase_price: Amount,
        escrow_amount: Amount,
    ) -> Result<(), EscrowError>;

    /// Deposits the earnest amount. Designated-buyer-only, exact match.
    async fn deposit_earnest(
        &self,
        caller: Address,
        id: PropertyId,
        amount: Amount,
    ) -> Result<(), EscrowError>;

    /// Approves the transaction. Buyer, seller, or lender; idempotent.
    async fn approve_transaction(
        &self,
        caller: Address,
        id: PropertyId,
    ) -> Result<(), EscrowError>;

    /// Sets the inspection verdict. Inspector-only; latest write wins.
    async fn update_inspection_status(
        &self,
        caller: Address,
        id: PropertyId,
        passed: bool,
    ) -> Result<(), EscrowError>;

    /// Finalizes the sale. Seller-only; requires unanimity, inspection,
    /// and full funding.
    async fn finalize_sale(&self, caller: Address, id: PropertyId) -> Result<(), EscrowError>;

    /// Cancels the sale. Buyer or seller; refunds and returns custody.
    async fn cancel_sale(&self, caller: Address, id: PropertyId) -> Result<(), EscrowError>;

    /// Raw fund transfer attributed to a listing. The ledger checks
    /// neither the sender's role nor the amount.
    async fn send_funds(
        &self,
        from: Address,
        id: PropertyId,
        amount: Amount,
    ) -> Result<(), EscrowError>;

    // === Listing reads ===

    async fn is_listed(&self, id: PropertyId) -> Result<bool, EscrowError>;
    async fn buyer_of(&self, id: PropertyId) -> Result<Address, EscrowError>;
    async fn purchase_price(&self, id: PropertyId) -> Result<Amount, EscrowError>;
    async fn escrow_amount(&self, id: PropertyId) -> Result<Amount, EscrowError>;
    async fn approval(&self, id: PropertyId, who: Address) -> Result<bool, EscrowError>;
    async fn inspection_passed(&self, id: PropertyId) -> Result<bool, EscrowError>;
    async fn deposited_funds(&self, id: PropertyId) -> Result<Amount, EscrowError>;
    async fn stage(&self, id: PropertyId) -> Result<Option<ListingStage>, EscrowError>;

    // === Deployment reads ===

    async fn get_balance(&self) -> Result<Amount, EscrowError>;
    async fn ledger_address(&self) -> Result<Address, EscrowError>;
    async fn seller(&self) -> Result<Address, EscrowError>;
    async fn inspector(&self) -> Result<Address, EscrowError>;
    async fn lender(&self) -> Result<Address, EscrowError>;

    // === User accounts ===

    async fn create_account(
        &self,
        caller: Address,
        username: String,
        last_name: String,
        email: String,
    ) -> Result<(), EscrowError>;

    async fn user_exists(&self, owner: Address) -> Result<bool, EscrowError>;
    async fn user_info(&self, owner: Address) -> Result<UserAccount, EscrowError>;
}
