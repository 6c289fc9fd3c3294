//! # state-projector
//!
//! Projects authoritative ledger state into a consistent in-memory
//! snapshot for display and gating of user actions.
//!
//! ## Role in System
//!
//! - **Pure derivation**: a snapshot is recomputed from the ledger on
//!   every fetch; nothing here caches or mutates, so competing stale
//!   copies of contract state cannot exist.
//! - **Degraded, never fatal**: an unreachable ledger produces a
//!   safe all-false snapshot with `contracts_available = false`; read
//!   failures never propagate to callers.
//! - **Pull only**: the ledger has no push channel. Consumers re-run the
//!   projection after their own writes and on their own refresh cadence.

pub mod projector;
pub mod snapshot;

pub use projector::*;
pub use snapshot::*;
