//! Policy classification of items, resolved from the item name.

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Closed set of aging policies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Gains quality with age ("Aged Brie").
    Appreciating,
    /// Gains quality as the event nears, worthless afterwards ("Backstage passes").
    EventTicket,
    /// Never changes ("Sulfuras").
    Legendary,
    /// Loses quality with age. Default for every unmatched name.
    Regular,
}

impl Category {
    /// Total mapping: exact name matches pick a special policy, anything else is `Regular`.
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::Appreciating,
            BACKSTAGE_PASSES => Category::EventTicket,
            SULFURAS => Category::Legendary,
            _ => Category::Regular,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Appreciating => "appreciating",
            Category::EventTicket => "event_ticket",
            Category::Legendary => "legendary",
            Category::Regular => "regular",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
