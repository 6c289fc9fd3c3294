//! Serialized shared handle over the domain ledger.
//!
//! The write lock totally orders mutating operations on the deployment,
//! which gives every per-listing transition the atomicity the protocol
//! assumes. Reads take the shared lock and may observe state that a
//! concurrent writer supersedes a moment later; callers treat every read
//! as a point-in-time snapshot.

use crate::domain::accounts::UserAccount;
use crate::domain::errors::EscrowError;
use crate::domain::ledger::EscrowLedger;
use crate::domain::listing::ListingStage;
use crate::ports::inbound::EscrowRpc;
use async_trait::async_trait;
use shared_types::{Address, Amount, PropertyId};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable, thread-safe handle implementing [`EscrowRpc`].
#[derive(Clone)]
pub struct SharedLedger {
    inner: Arc<RwLock<EscrowLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: EscrowLedger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, EscrowLedger>, EscrowError> {
        self.inner.read().map_err(|_| EscrowError::Unavailable)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, EscrowLedger>, EscrowError> {
        self.inner.write().map_err(|_| EscrowError::Unavailable)
    }
}

#[async_trait]
impl EscrowRpc for SharedLedger {
    async fn list(
        &self,
        caller: Address,
        id: PropertyId,
        buyer: Address,
        purchase_price: Amount,
        escrow_amount: Amount,
    ) -> Result<(), EscrowError> {
        self.write()?
            .list(caller, id, buyer, purchase_price, escrow_amount)
    }

    async fn deposit_earnest(
        &self,
        caller: Address,
        id: PropertyId,
        amount: Amount,
    ) -> Result<(), EscrowError> {
        self.write()?.deposit_earnest(caller, id, amount)
    }

    async fn approve_transaction(
        &self,
        caller: Address,
        id: PropertyId,
    ) -> Result<(), EscrowError> {
        self.write()?.approve_transaction(caller, id)
    }

    async fn update_inspection_status(
        &self,
        caller: Address,
        id: PropertyId,
        passed: bool,
    ) -> Result<(), EscrowError> {
        self.write()?.update_inspection_status(caller, id, passed)
    }

    async fn finalize_sale(&self, caller: Address, id: PropertyId) -> Result<(), EscrowError> {
        self.write()?.finalize_sale(caller, id)
    }

    async fn cancel_sale(&self, caller: Address, id: PropertyId) -> Result<(), EscrowError> {
        self.write()?.cancel_sale(caller, id)
    }

    async fn send_funds(
        &self,
        from: Address,
        id: PropertyId,
        amount: Amount,
    ) -> Result<(), EscrowError> {
        self.write()?.receive_funds(from, id, amount)
    }

    async fn is_listed(&self, id: PropertyId) -> Result<bool, EscrowError> {
        Ok(self.read()?.is_listed(id))
    }

    async fn buyer_of(&self, id: PropertyId) -> Result<Address, EscrowError> {
        Ok(self.read()?.buyer_of(id))
    }

    async fn purchase_price(&self, id: PropertyId) -> Result<Amount, EscrowError> {
        Ok(self.read()?.purchase_price(id))
    }

    async fn escrow_amount(&self, id: PropertyId) -> Result<Amount, EscrowError> {
        Ok(self.read()?.escrow_amount(id))
    }

    async fn approval(&self, id: PropertyId, who: Address) -> Result<bool, EscrowError> {
        Ok(self.read()?.approval(id, who))
    }

    async fn inspection_passed(&self, id: PropertyId) -> Result<bool, EscrowError> {
        Ok(self.read()?.inspection_passed(id))
    }

    async fn deposited_funds(&self, id: PropertyId) -> Result<Amount, EscrowError> {
        Ok(self.read()?.deposited_funds(id))
    }

    async fn stage(&self, id: PropertyId) -> Result<Option<ListingStage>, EscrowError> {
        Ok(self.read()?.stage(id))
    }

    async fn get_balance(&self) -> Result<Amount, EscrowError> {
        Ok(self.read()?.balance())
    }

    async fn ledger_address(&self) -> Result<Address, EscrowError> {
        Ok(self.read()?.address())
    }

    async fn seller(&self) -> Result<Address, EscrowError> {
        Ok(self.read()?.seller())
    }

    async fn inspector(&self) -> Result<Address, EscrowError> {
        Ok(self.read()?.inspector())
    }

    async fn lender(&self) -> Result<Address, EscrowError> {
        Ok(self.read()?.lender())
    }

    async fn create_account(
        &self,
        caller: Address,
        username: String,
        last_name: String,
        email: String,
    ) -> Result<(), EscrowError> {
        self.write()?
            .create_account(caller, username, last_name, email)
    }

    async fn user_exists(&self, owner: Address) -> Result<bool, EscrowError> {
        Ok(self.read()?.user_exists(owner))
    }

    async fn user_info(&self, owner: Address) -> Result<UserAccount, EscrowError> {
        self.read()?.user_info(owner)
    }
}
