//! # Homestead Test Suite
//!
//! Unified test crate exercising the escrow choreography across crate
//! boundaries: ledger + dispatcher + projector + session wired the way
//! the runtime wires them.
//!
//! ```bash
//! cargo test -p homestead-tests
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
