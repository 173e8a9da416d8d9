//! One elapsed day per category.
//!
//! Every policy follows the same order:
//! - quality step(s) for the day,
//! - `sell_in` decrement,
//! - expiry check on the *new* `sell_in`, with the post-expiry adjustment.
//!
//! Event-ticket thresholds are read before the decrement.

use crate::category::Category;
use crate::item::Item;

/// Below this many days, event tickets gain a second point.
const TICKET_SECOND_STEP: i32 = 11;
/// Below this many days, event tickets gain a third point.
const TICKET_THIRD_STEP: i32 = 6;

impl Category {
    /// Apply one day of this category's policy to `item` in place.
    ///
    /// The category is taken as given; the item's name is not consulted.
    pub fn age(self, item: &mut Item) {
        match self {
            Category::Appreciating => {
                item.increase_quality();
                item.decrease_sell_in();
                if item.is_expired() {
                    item.increase_quality();
                }
            }
            Category::EventTicket => {
                item.increase_quality();
                if item.sell_in < TICKET_SECOND_STEP {
                    item.increase_quality();
                }
                if item.sell_in < TICKET_THIRD_STEP {
                    item.increase_quality();
                }
                item.decrease_sell_in();
                if item.is_expired() {
                    item.reset_quality();
                }
            }
            Category::Legendary => {}
            Category::Regular => {
                item.decrease_quality();
                item.decrease_sell_in();
                if item.is_expired() {
                    item.decrease_quality();
                }
            }
        }
    }

    /// Pure form of [`Category::age`]: `(sell_in, quality)` after one day.
    pub fn next_state(self, sell_in: i32, quality: i32) -> (i32, i32) {
        let mut scratch = Item::new(String::new(), sell_in, quality);
        self.age(&mut scratch);
        (scratch.sell_in, scratch.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appreciating_gains_one_then_two_after_expiry() {
        assert_eq!(Category::Appreciating.next_state(5, 10), (4, 11));
        assert_eq!(Category::Appreciating.next_state(1, 10), (0, 11));
        assert_eq!(Category::Appreciating.next_state(0, 10), (-1, 12));
        assert_eq!(Category::Appreciating.next_state(-3, 49), (-4, 50));
        assert_eq!(Category::Appreciating.next_state(5, 50), (4, 50));
    }

    #[test]
    fn event_ticket_steps_by_days_left() {
        assert_eq!(Category::EventTicket.next_state(15, 10), (14, 11));
        assert_eq!(Category::EventTicket.next_state(11, 10), (10, 11));
        assert_eq!(Category::EventTicket.next_state(10, 10), (9, 12));
        assert_eq!(Category::EventTicket.next_state(6, 10), (5, 12));
        assert_eq!(Category::EventTicket.next_state(5, 10), (4, 13));
        assert_eq!(Category::EventTicket.next_state(1, 10), (0, 13));
    }

    #[test]
    fn event_ticket_resets_after_the_event() {
        assert_eq!(Category::EventTicket.next_state(0, 10), (-1, 0));
        assert_eq!(Category::EventTicket.next_state(0, 50), (-1, 0));
        assert_eq!(Category::EventTicket.next_state(-5, 0), (-6, 0));
    }

    #[test]
    fn event_ticket_clamps_at_fifty() {
        assert_eq!(Category::EventTicket.next_state(5, 49), (4, 50));
        assert_eq!(Category::EventTicket.next_state(10, 49), (9, 50));
    }

    #[test]
    fn legendary_is_untouched() {
        assert_eq!(Category::Legendary.next_state(10, 80), (10, 80));
        assert_eq!(Category::Legendary.next_state(-1, 80), (-1, 80));
    }

    #[test]
    fn regular_loses_one_then_two_after_expiry() {
        assert_eq!(Category::Regular.next_state(10, 20), (9, 19));
        assert_eq!(Category::Regular.next_state(0, 20), (-1, 18));
        assert_eq!(Category::Regular.next_state(5, 0), (4, 0));
        assert_eq!(Category::Regular.next_state(0, 1), (-1, 0));
    }

    #[test]
    fn age_ignores_item_name() {
        let mut item = Item::new("Aged Brie", 5, 10);
        Category::Regular.age(&mut item);
        assert_eq!((item.sell_in, item.quality), (4, 9));
    }
}
