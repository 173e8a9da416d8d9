//! The shop and its nightly update.

use crate::category::Category;
use crate::item::Item;

/// `(sell_in, quality)` of one item at a point in time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub sell_in: i32,
    pub quality: i32,
}

impl Snapshot {
    pub fn of(item: &Item) -> Self {
        Self {
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }

    pub fn is_expired(self) -> bool {
        self.sell_in < 0
    }
}

/// Record of one item going through one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAged {
    pub name: String,
    pub category: Category,
    pub before: Snapshot,
    pub after: Snapshot,
}

/// Outcome of one call to [`apply_daily_update`], one entry per item in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyReport {
    pub items: Vec<ItemAged>,
}

impl DailyReport {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items that are expired after the update. Legendary items never expire.
    pub fn expired(&self) -> usize {
        self.items
            .iter()
            .filter(|e| e.category != Category::Legendary && e.after.is_expired())
            .count()
    }
}

/// Age every item by one day, in place.
///
/// Each item gets exactly one policy, chosen from its name.
pub fn apply_daily_update(items: &mut [Item]) -> DailyReport {
    let mut report = DailyReport {
        items: Vec::with_capacity(items.len()),
    };

    for item in items.iter_mut() {
        let category = item.category();
        let before = Snapshot::of(item);
        category.age(item);
        let after = Snapshot::of(item);

        tracing::debug!(
            item = %item.name,
            category = category.as_str(),
            sell_in = after.sell_in,
            quality = after.quality,
            "item aged"
        );

        report.items.push(ItemAged {
            name: item.name.clone(),
            category,
            before,
            after,
        });
    }

    report
}

/// The shop: owns the stock and advances it one day at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Advance the whole stock by one day.
    pub fn update_quality(&mut self) -> DailyReport {
        let report = apply_daily_update(&mut self.items);
        tracing::info!(
            items = report.len(),
            expired = report.expired(),
            "daily update applied"
        );
        report
    }

    /// Fold the daily update `days` times.
    pub fn simulate(&mut self, days: u32) -> Vec<DailyReport> {
        (0..days).map(|_| self.update_quality()).collect()
    }
}
