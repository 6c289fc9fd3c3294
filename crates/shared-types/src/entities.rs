//! # Core Domain Entities
//!
//! Fixed-size primitives used by every subsystem.
//!
//! ## Type Decisions
//!
//! - `Amount: u128` - amounts are kept in the smallest currency unit.
//!   u128 covers every practical balance while avoiding a big-integer
//!   dependency.
//! - `Address: [u8; 20]` - Ethereum-style 20-byte account address.

use thiserror::Error;

/// A 20-byte account address.
pub type Address = [u8; 20];

/// Identifier of a property. Shares the id space of the asset registry
/// and the property catalog.
pub type PropertyId = u64;

/// A monetary amount in the smallest currency unit.
pub type Amount = u128;

/// The empty address. Cleared listing fields read back as this value.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// Errors from parsing an address out of its hex representation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    #[error("address must be 20 bytes, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

/// Parses a `0x`-prefixed (or bare) hex string into an [`Address`].
pub fn parse_address(input: &str) -> Result<Address, AddressParseError> {
    let stripped = input.strip_prefix("0x").unwrap_or(input);
    let bytes =
        hex::decode(stripped).map_err(|e| AddressParseError::InvalidHex(e.to_string()))?;
    if bytes.len() != 20 {
        return Err(AddressParseError::InvalidLength(bytes.len()));
    }
    let mut address = ZERO_ADDRESS;
    address.copy_from_slice(&bytes);
    Ok(address)
}

/// Formats an address as a full `0x`-prefixed lowercase hex string.
pub fn format_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

/// Shortened display form: `0x1234...abcd`.
pub fn short_address(address: &Address) -> String {
    let full = format_address(address);
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}
