//! # Shared Types Crate
//!
//! Domain primitives shared across the Homestead workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every cross-subsystem type lives here.
//! - **Plain data**: addresses and amounts are fixed-size value types with
//!   no behavior beyond parsing and formatting.
//! - **Exhaustive roles**: role resolution returns a tagged variant, never
//!   a string, so downstream dispatch can match exhaustively.

pub mod entities;
pub mod roles;

pub use entities::*;
pub use roles::*;
