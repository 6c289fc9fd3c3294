//! In-memory implementation of [`AssetRegistry`].

use crate::domain::errors::EscrowError;
use crate::ports::outbound::AssetRegistry;
use shared_types::{Address, PropertyId};
use std::collections::HashMap;
use std::sync::RwLock;

/// Custody table for registered assets.
pub struct InMemoryAssetRegistry {
    custodians: RwLock<HashMap<PropertyId, Address>>,
}

impl InMemoryAssetRegistry {
    pub fn new() -> Self {
        Self {
            custodians: RwLock::new(HashMap::new()),
        }
    }

    /// Registers an asset under its initial custodian.
    pub fn mint(&self, id: PropertyId, owner: Address) {
        if let Ok(mut custodians) = self.custodians.write() {
            custodians.insert(id, owner);
        }
    }
}

impl Default for InMemoryAssetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetRegistry for InMemoryAssetRegistry {
    fn custodian_of(&self, id: PropertyId) -> Result<Address, EscrowError> {
        let custodians = self.custodians.read().map_err(|_| EscrowError::Unavailable)?;
        custodians
            .get(&id)
            .copied()
            .ok_or(EscrowError::UnknownAsset(id))
    }

    fn transfer(&self, from: Address, to: Address, id: PropertyId) -> Result<(), EscrowError> {
        let mut custodians = self
            .custodians
            .write()
            .map_err(|_| EscrowError::Unavailable)?;
        let holder = custodians
            .get(&id)
            .copied()
            .ok_or(EscrowError::UnknownAsset(id))?;
        if holder != from {
            return Err(EscrowError::NotCustodian { id, holder });
        }
        custodians.insert(id, to);
        Ok(())
    }
}
