//! Escrow error types.
//!
//! Every failure names the precondition that was violated so the caller
//! can resolve it (wait for another party, reconnect, or switch signer)
//! instead of retrying blindly.

use shared_types::{Address, Amount, PropertyId, Role};
use thiserror::Error;

/// Escrow ledger error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EscrowError {
    /// Caller lacks the role the operation requires.
    #[error("caller is not {required}")]
    Unauthorized {
        caller: Address,
        required: &'static str,
    },

    /// The operation requires an active listing that does not exist or
    /// has already ended.
    #[error("property {0} is not listed")]
    NotListed(PropertyId),

    /// The property already has an active listing.
    #[error("property {0} is already listed")]
    AlreadyListed(PropertyId),

    /// Earnest deposit must match the escrow amount exactly.
    #[error("deposit of {paid} does not match the required earnest amount {required}")]
    AmountMismatch { paid: Amount, required: Amount },

    /// Finalization requires unanimous approval from buyer, seller, and
    /// lender.
    #[error("approvals still missing from {missing:?}")]
    IncompleteApprovals { missing: Vec<Role> },

    /// Finalization requires a passed inspection.
    #[error("inspection has not passed for property {0}")]
    InspectionNotPassed(PropertyId),

    /// Deposited funds do not cover the purchase price.
    #[error("deposited funds {available} do not cover the purchase price {required}")]
    InsufficientFunds { required: Amount, available: Amount },

    /// No asset is registered under this id.
    #[error("no asset registered under id {0}")]
    UnknownAsset(PropertyId),

    /// An asset transfer was attempted by a party that does not hold it.
    #[error("asset {id} is held by another custodian")]
    NotCustodian { id: PropertyId, holder: Address },

    /// A fund transfer exceeds the payer's balance.
    #[error("balance {available} cannot cover a transfer of {amount}")]
    InsufficientBalance { amount: Amount, available: Amount },

    /// A user account already exists for this address.
    #[error("user already exists")]
    UserAlreadyExists(Address),

    /// No user account is registered for this address.
    #[error("user does not exist")]
    UserNotFound(Address),

    /// A required profile field was empty.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// The ledger is unreachable. Read paths degrade instead of failing.
    #[error("escrow ledger is unavailable")]
    Unavailable,
}
