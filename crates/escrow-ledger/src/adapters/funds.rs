//! In-memory implementation of [`FundsRail`].

use crate::domain::errors::EscrowError;
use crate::ports::outbound::FundsRail;
use shared_types::{Address, Amount};
use std::collections::HashMap;
use std::sync::RwLock;

/// Account balance book. Unknown addresses hold zero.
pub struct InMemoryFundsRail {
    balances: RwLock<HashMap<Address, Amount>>,
}

impl InMemoryFundsRail {
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
        }
    }

    /// Seeds initial balances.
    pub fn with_balances<I>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (Address, Amount)>,
    {
        Self {
            balances: RwLock::new(accounts.into_iter().collect()),
        }
    }

    /// Credits an address out of thin air. Test and genesis helper.
    pub fn credit(&self, owner: Address, amount: Amount) {
        if let Ok(mut balances) = self.balances.write() {
            let entry = balances.entry(owner).or_insert(0);
            *entry = entry.saturating_add(amount);
        }
    }
}

impl Default for InMemoryFundsRail {
    fn default() -> Self {
        Self::new()
    }
}

impl FundsRail for InMemoryFundsRail {
    fn balance_of(&self, owner: Address) -> Amount {
        self.balances
            .read()
            .map(|b| b.get(&owner).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    fn transfer(&self, from: Address, to: Address, amount: Amount) -> Result<(), EscrowError> {
        let mut balances = self.balances.write().map_err(|_| EscrowError::Unavailable)?;
        let available = balances.get(&from).copied().unwrap_or(0);
        if available < amount {
            return Err(EscrowError::InsufficientBalance { amount, available });
        }
        balances.insert(from, available - amount);
        let to_balance = balances.get(&to).copied().unwrap_or(0);
        balances.insert(to, to_balance.saturating_add(amount));
        Ok(())
    }
}
