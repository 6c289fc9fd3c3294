//! # Role Resolution
//!
//! Maps a signer address onto its marketplace role via a static table of
//! configured party addresses. Resolution is a pure lookup: an unmatched
//! non-empty address is a generic user, an absent or zero address carries
//! no role at all.

use crate::entities::{Address, ZERO_ADDRESS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a signer address holds in the marketplace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Seller,
    Buyer,
    Inspector,
    Lender,
    /// Connected, but not one of the four configured parties.
    GenericUser,
    /// No signer connected (or the zero address).
    None,
}

impl Role {
    /// True for the three roles whose approval gates finalization.
    pub fn is_approver(self) -> bool {
        matches!(self, Role::Buyer | Role::Seller | Role::Lender)
    }

    /// True for any of the four configured parties.
    pub fn is_party(self) -> bool {
        matches!(
            self,
            Role::Seller | Role::Buyer | Role::Inspector | Role::Lender
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Seller => "seller",
            Role::Buyer => "buyer",
            Role::Inspector => "inspector",
            Role::Lender => "lender",
            Role::GenericUser => "user",
            Role::None => "none",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static table of the four configured party addresses.
///
/// Every listing in a deployment shares these parties; they are explicit
/// configuration on the registry instance rather than process-wide
/// globals, so per-listing tables remain possible later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRegistry {
    pub seller: Address,
    pub buyer: Address,
    pub inspector: Address,
    pub lender: Address,
}

impl RoleRegistry {
    pub fn new(seller: Address, buyer: Address, inspector: Address, lender: Address) -> Self {
        Self {
            seller,
            buyer,
            inspector,
            lender,
        }
    }

    /// Resolves an optional signer address to its role.
    pub fn resolve(&self, address: Option<Address>) -> Role {
        match address {
            Some(addr) => self.resolve_address(addr),
            None => Role::None,
        }
    }

    /// Resolves a concrete address to its role. The zero address carries
    /// no role (cleared listing fields read back as zero).
    pub fn resolve_address(&self, address: Address) -> Role {
        if address == ZERO_ADDRESS {
            Role::None
        } else if address == self.seller {
            Role::Seller
        } else if address == self.buyer {
            Role::Buyer
        } else if address == self.inspector {
            Role::Inspector
        } else if address == self.lender {
            Role::Lender
        } else {
            Role::GenericUser
        }
    }

    /// The address configured for a party role, if `role` names one.
    pub fn address_of(&self, role: Role) -> Option<Address> {
        match role {
            Role::Seller => Some(self.seller),
            Role::Buyer => Some(self.buyer),
            Role::Inspector => Some(self.inspector),
            Role::Lender => Some(self.lender),
            Role::GenericUser | Role::None => None,
        }
    }
}
