//! # wallet-session
//!
//! The signer identity source for the marketplace: which address is
//! connected, what role it holds, and notifications when either changes.
//!
//! The wallet itself is a collaborator behind the [`WalletProvider`]
//! port. When no provider is present at all, the session reports
//! unavailable and the rest of the system keeps working against degraded
//! snapshots (demo mode).

pub mod adapters;
pub mod ports;
pub mod session;

pub use adapters::*;
pub use ports::*;
pub use session::*;
