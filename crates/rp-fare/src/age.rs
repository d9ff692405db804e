//! Age-based discount tiers.

/// Flat amount deducted before the percentage discount is applied.
const DEDUCTION: u32 = 350;

/// Rider age classification.
///
/// Tiers are mutually exclusive and cover every non-negative age, so
/// `AgeGroup::of` is total and first-match order never overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    /// Under 6: rides free.
    Toddler,
    /// 6 to 12: 50% off after the flat deduction.
    Child,
    /// 13 to 18: 20% off after the flat deduction.
    Teen,
    /// 19 and up: full fare.
    Adult,
}

impl AgeGroup {
    pub fn of(age: u32) -> Self {
        match age {
            0..=5 => AgeGroup::Toddler,
            6..=12 => AgeGroup::Child,
            13..=18 => AgeGroup::Teen,
            _ => AgeGroup::Adult,
        }
    }

    /// Apply this tier's discount to an undiscounted fare.
    ///
    /// The discounted tiers subtract the flat deduction first (clamped at
    /// zero when the fare is smaller) and round the result to the nearest
    /// integer rather than truncating.
    pub fn apply_discount(self, fare: u32) -> u32 {
        match self {
            AgeGroup::Toddler => 0,
            AgeGroup::Child => discounted(fare, 0.5),
            AgeGroup::Teen => discounted(fare, 0.8),
            AgeGroup::Adult => fare,
        }
    }
}

fn discounted(fare: u32, multiplier: f64) -> u32 {
    let after_deduction = fare.saturating_sub(DEDUCTION);
    (f64::from(after_deduction) * multiplier).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(AgeGroup::of(0), AgeGroup::Toddler);
        assert_eq!(AgeGroup::of(5), AgeGroup::Toddler);
        assert_eq!(AgeGroup::of(6), AgeGroup::Child);
        assert_eq!(AgeGroup::of(12), AgeGroup::Child);
        assert_eq!(AgeGroup::of(13), AgeGroup::Teen);
        assert_eq!(AgeGroup::of(18), AgeGroup::Teen);
        assert_eq!(AgeGroup::of(19), AgeGroup::Adult);
        assert_eq!(AgeGroup::of(75), AgeGroup::Adult);
    }

    #[test]
    fn discounts_on_reference_fare() {
        // 1850 is the scenario fare for the Nambu -> Gangnam trip.
        assert_eq!(AgeGroup::Toddler.apply_discount(1850), 0);
        assert_eq!(AgeGroup::Child.apply_discount(1850), 750);
        assert_eq!(AgeGroup::Teen.apply_discount(1850), 1200);
        assert_eq!(AgeGroup::Adult.apply_discount(1850), 1850);
    }

    #[test]
    fn rounds_to_nearest() {
        // (475 - 350) * 0.5 = 62.5 rounds up to 63.
        assert_eq!(AgeGroup::Child.apply_discount(475), 63);
    }

    #[test]
    fn clamps_when_fare_below_deduction() {
        assert_eq!(AgeGroup::Child.apply_discount(300), 0);
        assert_eq!(AgeGroup::Teen.apply_discount(0), 0);
    }

    proptest! {
        #[test]
        fn discount_never_exceeds_fare(fare in 0u32..100_000, age in 0u32..120) {
            prop_assert!(AgeGroup::of(age).apply_discount(fare) <= fare);
        }

        #[test]
        fn every_age_has_exactly_one_tier(age in 0u32..200) {
            // `of` is a total function; this pins the tier edges.
            let tier = AgeGroup::of(age);
            let expected = if age < 6 {
                AgeGroup::Toddler
            } else if age < 13 {
                AgeGroup::Child
            } else if age < 19 {
                AgeGroup::Teen
            } else {
                AgeGroup::Adult
            };
            prop_assert_eq!(tier, expected);
        }
    }
}
