//! # escrow-ledger
//!
//! Escrow coordination authority for the Homestead marketplace.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: holds every listing's custody state,
//!   approval set, inspection result, and deposited funds.
//! - **Serialized Transitions**: all state-mutating operations on a
//!   listing are atomic and totally ordered through the shared handle;
//!   client-side checks elsewhere are advisory only.
//! - **Terminal States Are Absorbing**: once a listing is finalized or
//!   cancelled, every later mutating call fails with `NotListed`.
//!
//! ## Listing Lifecycle
//!
//! ```text
//! list ──→ [Listed.NoDeposit] ──depositEarnest──→ [Listed.Deposited]
//!                │                                      │
//!                │                               approvals accrue
//!                │                                      ↓
//!                │                      [Listed.PartiallyApproved]
//!                │                                      │
//!                │                 all approvals + inspection passed
//!                │                                      ↓
//!                │                        [Listed.ReadyToFinalize]
//!                │                                      │
//!                ├────────── cancelSale ──→ [Cancelled] │
//!                └──────────────────────────────────────┴─ finalizeSale ──→ [Finalized]
//! ```

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use events::*;
pub use ports::*;
