//! # action-dispatcher
//!
//! Maps a `(role, intent)` pair onto an ordered sequence of escrow
//! ledger calls and enforces the sequencing the ledger does not perform
//! atomically: deposit before buyer approval, inspection status before
//! inspector approval, approval before lender funding, approval before
//! the seller's speculative finalize.
//!
//! Dispatch validates preconditions client-side before issuing any
//! ledger call to avoid wasted failed transactions, but those checks are
//! advisory only; the ledger re-checks everything authoritatively.

pub mod dispatcher;
pub mod intent;

pub use dispatcher::*;
pub use intent::*;
