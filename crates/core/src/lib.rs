//! `gildedrose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod bounds;
pub mod error;

pub use bounds::{MAX_QUALITY, MIN_QUALITY, QualityBounds};
pub use error::{DomainError, DomainResult};
