//! Outbound (driven) ports of the escrow ledger.

use crate::domain::errors::EscrowError;
use crate::events::EscrowEvent;
use shared_types::{Address, Amount, PropertyId};

/// Custody registry for the transferable assets.
///
/// The ledger uses it to pull an asset into its own custody at listing
/// time and to hand it to the buyer (finalize) or back to the seller
/// (cancel). Projection layers use `custodian_of` to cross-check
/// ownership.
pub trait AssetRegistry: Send + Sync {
    /// Current custodian of an asset.
    ///
    /// # Errors
    /// - `UnknownAsset`: no asset registered under this id
    fn custodian_of(&self, id: PropertyId) -> Result<Address, EscrowError>;

    /// Moves an asset between custodians.
    ///
    /// # Errors
    /// - `UnknownAsset`: no asset registered under this id
    /// - `NotCustodian`: `from` does not currently hold the asset
    fn transfer(&self, from: Address, to: Address, id: PropertyId) -> Result<(), EscrowError>;
}

/// Fund movement between addresses.
///
/// Transfers are atomic: either both balances move or neither does.
pub trait FundsRail: Send + Sync {
    /// Current balance of an address. Unknown addresses hold zero.
    fn balance_of(&self, owner: Address) -> Amount;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    /// - `InsufficientBalance`: `from` cannot cover the amount
    fn transfer(&self, from: Address, to: Address, amount: Amount) -> Result<(), EscrowError>;
}

/// Receiver of ledger domain events. Must not block.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EscrowEvent);
}
