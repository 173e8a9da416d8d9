//! Inventory domain module.
//!
//! This crate contains the nightly aging rules for the shop's stock,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod item;
pub mod policy;
pub mod shop;

pub use category::{AGED_BRIE, BACKSTAGE_PASSES, Category, SULFURAS};
pub use item::Item;
pub use shop::{DailyReport, GildedRose, ItemAged, Snapshot, apply_daily_update};
