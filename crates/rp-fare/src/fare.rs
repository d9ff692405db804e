//! Distance-tier fare table plus line surcharge resolution.

use rp_model::Line;

/// Flat fare for trips up to 10 km.
pub const BASE_FARE: u32 = 1250;

/// Increment charged per distance unit above the flat band.
const STEP_FARE: u32 = 100;

/// Compute the undiscounted fare for a trip.
///
/// Distance tiers:
/// - up to 10 km: `BASE_FARE` flat
/// - 10 to 50 km: 100 per started 5 km over 10
/// - beyond 50 km: the full 10-50 band, then 100 per started 8 km over 50
///
/// On top of the distance fare, the rider pays the maximum surcharge among
/// the traversed lines: crossing several premium lines charges only the
/// single highest premium, never the sum. An empty line set contributes 0.
pub fn calculate_fare<'a, I>(lines_on_path: I, distance: u32) -> u32
where
    I: IntoIterator<Item = &'a Line>,
{
    fare_by_distance(distance) + max_surcharge(lines_on_path)
}

fn fare_by_distance(distance: u32) -> u32 {
    match distance {
        0..=10 => BASE_FARE,
        11..=50 => BASE_FARE + step_overage(distance - 10, 5),
        _ => BASE_FARE + step_overage(40, 5) + step_overage(distance - 50, 8),
    }
}

fn step_overage(over: u32, unit: u32) -> u32 {
    over.div_ceil(unit) * STEP_FARE
}

fn max_surcharge<'a, I>(lines_on_path: I) -> u32
where
    I: IntoIterator<Item = &'a Line>,
{
    lines_on_path
        .into_iter()
        .map(Line::surcharge)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rp_core::Id;
    use rp_model::Station;

    fn line(surcharge: u32) -> Line {
        let up = Station::new(Id::new(1).unwrap(), "A");
        let down = Station::new(Id::new(2).unwrap(), "B");
        Line::new("L", "red", up, down, 10, surcharge).unwrap()
    }

    #[test]
    fn flat_band_up_to_ten() {
        assert_eq!(fare_by_distance(0), 1250);
        assert_eq!(fare_by_distance(9), 1250);
        assert_eq!(fare_by_distance(10), 1250);
    }

    #[test]
    fn middle_band_steps_every_five() {
        assert_eq!(fare_by_distance(11), 1350);
        assert_eq!(fare_by_distance(12), 1350);
        assert_eq!(fare_by_distance(15), 1350);
        assert_eq!(fare_by_distance(16), 1450);
        assert_eq!(fare_by_distance(50), 2050);
    }

    #[test]
    fn long_band_steps_every_eight() {
        assert_eq!(fare_by_distance(51), 2150);
        assert_eq!(fare_by_distance(58), 2150);
        assert_eq!(fare_by_distance(59), 2250);
        assert_eq!(fare_by_distance(178), 3650);
    }

    #[test]
    fn surcharge_takes_maximum_not_sum() {
        let lines = [line(0), line(500), line(300)];
        assert_eq!(calculate_fare(lines.iter(), 12), 1350 + 500);
    }

    #[test]
    fn no_lines_means_no_surcharge() {
        assert_eq!(calculate_fare(std::iter::empty::<&Line>(), 12), 1350);
    }

    proptest! {
        #[test]
        fn fare_is_monotonic_in_distance(distance in 0u32..500) {
            prop_assert!(fare_by_distance(distance) <= fare_by_distance(distance + 1));
        }

        #[test]
        fn fare_is_at_least_base(distance in 0u32..500, surcharge in 0u32..1000) {
            let lines = [line(surcharge)];
            prop_assert!(calculate_fare(lines.iter(), distance) >= BASE_FARE);
        }
    }
}
