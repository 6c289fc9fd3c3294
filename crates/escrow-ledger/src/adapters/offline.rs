//! A ledger handle whose every call fails with `Unavailable`.
//!
//! Stands in for an unreachable deployment so projection layers can be
//! exercised in their degraded mode.

use crate::domain::accounts::UserAccount;
use crate::domain::errors::EscrowError;
use crate::domain::listing::ListingStage;
use crate::ports::inbound::EscrowRpc;
use async_trait::async_trait;
use shared_types::{Address, Amount, PropertyId};

#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineLedger;

#[async_trait]
impl EscrowRpc for OfflineLedger {
    async fn list(
        &self,
        _caller: Address,
        _id: PropertyId,
        _buyer: Address,
        _purchase_price: Amount,
        _escrow_amount: Amount,
    ) -> Result<(), EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn deposit_earnest(
        &self,
        _caller: Address,
        _id: PropertyId,
        _amount: Amount,
    ) -> Result<(), EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn approve_transaction(
        &self,
        _caller: Address,
        _id: PropertyId,
    ) -> Result<(), EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn update_inspection_status(
        &self,
        _caller: Address,
        _id: PropertyId,
        _passed: bool,
    ) -> Result<(), EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn finalize_sale(&self, _caller: Address, _id: PropertyId) -> Result<(), EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn cancel_sale(&self, _caller: Address, _id: PropertyId) -> Result<(), EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn send_funds(
        &self,
        _from: Address,
        _id: PropertyId,
        _amount: Amount,
    ) -> Result<(), EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn is_listed(&self, _id: PropertyId) -> Result<bool, EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn buyer_of(&self, _id: PropertyId) -> Result<Address, EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn purchase_price(&self, _id: PropertyId) -> Result<Amount, EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn escrow_amount(&self, _id: PropertyId) -> Result<Amount, EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn approval(&self, _id: PropertyId, _who: Address) -> Result<bool, EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn inspection_passed(&self, _id: PropertyId) -> Result<bool, EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn deposited_funds(&self, _id: PropertyId) -> Result<Amount, EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn stage(&self, _id: PropertyId) -> Result<Option<ListingStage>, EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn get_balance(&self) -> Result<Amount, EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn ledger_address(&self) -> Result<Address, EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn seller(&self) -> Result<Address, EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn inspector(&self) -> Result<Address, EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn lender(&self) -> Result<Address, EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn create_account(
        &self,
        _caller: Address,
        _username: String,
        _last_name: String,
        _email: String,
    ) -> Result<(), EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn user_exists(&self, _owner: Address) -> Result<bool, EscrowError> {
        Err(EscrowError::Unavailable)
    }

    async fn user_info(&self, _owner: Address) -> Result<UserAccount, EscrowError> {
        Err(EscrowError::Unavailable)
    }
}
