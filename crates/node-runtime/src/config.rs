//! Runtime configuration.
//!
//! Party addresses are explicit configuration, never process-wide
//! globals. Defaults are the well-known local development accounts so a
//! bare `node-runtime` run works out of the box; every field is
//! overridable through the environment.

use anyhow::{Context, Result};
use shared_types::{parse_address, Address, Amount, RoleRegistry};

/// Environment variable prefix for all runtime settings.
const ENV_PREFIX: &str = "HOMESTEAD";

/// Well-known local development accounts.
mod defaults {
    pub const SELLER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
    pub const BUYER: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";
    pub const INSPECTOR: &str = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC";
    pub const LENDER: &str = "0x90F79bf6EB2c4f870365E785982E1f101E93b906";
    pub const LEDGER: &str = "0xa513E6E4b8f2a923D98304ec87F64353C4D5C853";
}

#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub seller: Address,
    pub buyer: Address,
    pub inspector: Address,
    pub lender: Address,
    /// Address the ledger itself holds custody and funds under.
    pub ledger_address: Address,
    /// Demo listing terms.
    pub purchase_price: Amount,
    pub escrow_amount: Amount,
    /// Balance seeded to the buyer and the lender at startup.
    pub opening_balance: Amount,
}

impl RuntimeConfig {
    /// Loads configuration from the environment, falling back to the
    /// development defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            seller: env_address("SELLER", defaults::SELLER)?,
            buyer: env_address("BUYER", defaults::BUYER)?,
            inspector: env_address("INSPECTOR", defaults::INSPECTOR)?,
            lender: env_address("LENDER", defaults::LENDER)?,
            ledger_address: env_address("LEDGER", defaults::LEDGER)?,
            purchase_price: env_amount("PURCHASE_PRICE", 10)?,
            escrow_amount: env_amount("ESCROW_AMOUNT", 5)?,
            opening_balance: env_amount("OPENING_BALANCE", 100)?,
        })
    }

    pub fn registry(&self) -> RoleRegistry {
        RoleRegistry::new(self.seller, self.buyer, self.inspector, self.lender)
    }
}

fn env_address(name: &str, default: &str) -> Result<Address> {
    let key = format!("{ENV_PREFIX}_{name}");
    let raw = std::env::var(&key).unwrap_or_else(|_| default.to_string());
    parse_address(&raw).with_context(|| format!("invalid address in {key}"))
}

fn env_amount(name: &str, default: Amount) -> Result<Amount> {
    let key = format!("{ENV_PREFIX}_{name}");
    match std::env::var(&key) {
        Ok(raw) => raw
            .parse::<Amount>()
            .with_context(|| format!("invalid amount in {key}")),
        Err(_) => Ok(default),
    }
}
