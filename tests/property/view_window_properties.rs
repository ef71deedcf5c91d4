// Property tests for the visible date window

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use week_board::board::{Density, ViewWindow};

fn date_from(days: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(days)
}

fn density() -> impl Strategy<Value = Density> {
    prop_oneof![Just(Density::Single), Just(Density::Week)]
}

proptest! {
    /// Property: visible dates are ascending, consecutive and the right length
    #[test]
    fn prop_window_is_contiguous(
        days in 0..20_000i64,
        density in density(),
    ) {
        let anchor = date_from(days);
        let window = ViewWindow::new(anchor, density);
        let dates = window.visible_dates();

        let expected_len = match density {
            Density::Single => 1,
            Density::Week => 7,
        };
        prop_assert_eq!(dates.len(), expected_len);
        for pair in dates.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        prop_assert!(dates.contains(&anchor));
        if density == Density::Week {
            prop_assert_eq!(dates[0].weekday(), Weekday::Mon);
        }
    }

    /// Property: retreat undoes advance, in both densities
    #[test]
    fn prop_advance_retreat_inverse(
        days in 0..20_000i64,
        density in density(),
        steps in 1..20usize,
    ) {
        let anchor = date_from(days);
        let mut window = ViewWindow::new(anchor, density);
        for _ in 0..steps {
            window.advance();
        }
        prop_assert_eq!(window.anchor() - anchor, Duration::days(density.step_days() * steps as i64));
        for _ in 0..steps {
            window.retreat();
        }
        prop_assert_eq!(window.anchor(), anchor);
    }
}
