//! # property-catalog
//!
//! Read-only property records for display layers. The JSON shape is an
//! external, fixed schema (NFT-metadata style: `name`, `description`,
//! `image`, and a `trait_type`/`value` attribute array); this crate only
//! parses and serves it.

pub mod catalog;
pub mod record;

pub use catalog::*;
pub use record::*;
