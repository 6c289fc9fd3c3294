//! Cross-crate integration flows.

pub mod concurrency;
pub mod escrow_flows;
pub mod projector_flows;
pub mod session_flows;
