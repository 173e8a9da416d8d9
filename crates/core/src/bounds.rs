//! Saturating quality bounds shared by every non-legendary item.

/// Lowest quality an ordinary item may hold.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality an ordinary item may hold.
pub const MAX_QUALITY: i32 = 50;

/// Closed interval `[min, max]` that quality steps saturate against.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QualityBounds {
    pub min: i32,
    pub max: i32,
}

impl QualityBounds {
    /// The `[0, 50]` range that applies to everything except legendary items.
    pub const ORDINARY: Self = Self {
        min: MIN_QUALITY,
        max: MAX_QUALITY,
    };

    /// One step up, clamped to `max`.
    pub fn increase(self, quality: i32) -> i32 {
        quality.saturating_add(1).min(self.max)
    }

    /// One step down, clamped to `min`.
    pub fn decrease(self, quality: i32) -> i32 {
        quality.saturating_sub(1).max(self.min)
    }

    pub fn contains(self, quality: i32) -> bool {
        (self.min..=self.max).contains(&quality)
    }
}

impl Default for QualityBounds {
    fn default() -> Self {
        Self::ORDINARY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn increase_saturates_at_max() {
        let b = QualityBounds::ORDINARY;
        assert_eq!(b.increase(10), 11);
        assert_eq!(b.increase(49), 50);
        assert_eq!(b.increase(50), 50);
    }

    #[test]
    fn decrease_saturates_at_min() {
        let b = QualityBounds::ORDINARY;
        assert_eq!(b.decrease(10), 9);
        assert_eq!(b.decrease(1), 0);
        assert_eq!(b.decrease(0), 0);
    }

    #[test]
    fn contains_is_inclusive() {
        let b = QualityBounds::ORDINARY;
        assert!(b.contains(0));
        assert!(b.contains(50));
        assert!(!b.contains(-1));
        assert!(!b.contains(51));
    }

    proptest! {
        /// Stepping an in-range value in either direction never leaves the range.
        #[test]
        fn steps_stay_in_range(q in MIN_QUALITY..=MAX_QUALITY) {
            let b = QualityBounds::ORDINARY;
            prop_assert!(b.contains(b.increase(q)));
            prop_assert!(b.contains(b.decrease(q)));
        }
    }
}
