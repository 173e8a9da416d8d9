use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, QualityBounds};

use crate::category::Category;

/// A single stock record.
///
/// Records are plain values owned by whoever holds the collection. Construction
/// never clamps `quality`; call [`Item::validate`] at the boundary where input
/// arrives from outside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Category resolved from the item's name.
    pub fn category(&self) -> Category {
        Category::from_name(&self.name)
    }

    pub fn increase_quality(&mut self) {
        self.quality = QualityBounds::ORDINARY.increase(self.quality);
    }

    pub fn decrease_quality(&mut self) {
        self.quality = QualityBounds::ORDINARY.decrease(self.quality);
    }

    /// Hard reset, not a decrement.
    pub fn reset_quality(&mut self) {
        self.quality = QualityBounds::ORDINARY.min;
    }

    /// Saturates at `i32::MIN` so an expired item can never wrap back to unexpired.
    pub fn decrease_sell_in(&mut self) {
        self.sell_in = self.sell_in.saturating_sub(1);
    }

    /// `sell_in == 0` is still sellable; only strictly negative counts are expired.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }

    /// Check that the record is fit to enter the shop.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let bounds = QualityBounds::ORDINARY;
        if self.category() != Category::Legendary && !bounds.contains(self.quality) {
            return Err(DomainError::invariant(format!(
                "{}: quality {} is outside [{}, {}]",
                self.name, self.quality, bounds.min, bounds.max
            )));
        }
        Ok(())
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
