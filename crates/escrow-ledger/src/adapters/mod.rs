//! Adapters implementing the ledger's ports.
//!
//! In-memory implementations back single-process deployments and tests;
//! a distributed deployment would swap these for chain-backed ones
//! without touching the domain.

pub mod assets;
pub mod funds;
pub mod offline;
pub mod shared;
pub mod sinks;

pub use assets::InMemoryAssetRegistry;
pub use funds::InMemoryFundsRail;
pub use offline::OfflineLedger;
pub use shared::SharedLedger;
pub use sinks::{RecordingEventSink, TracingEventSink};
