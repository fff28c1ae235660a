//! Property-based invariant tests for height conversion and sentence selection.
//!
//! 1. Non-metric heights render trunc(h * 3.280839895) feet, exactly, or fail when too large
//! 2. Metric heights render unchanged
//! 3. A climbed date selects the dated sentence, its absence never shows a date
//! 4. Flipping the metric preference keeps the sentence shape
//! 5. Grouping never changes the digits

use chrono::NaiveDate;
use international_mountains::describe::{date_as_string, DescribeError, InputError};
use international_mountains::format::format_whole_number;
use international_mountains::locale::NumberConventions;
use international_mountains::units::{height_in_unit, LengthUnit, FEET_PER_METER_NANO};
use international_mountains::{describe, LocaleSettings};
use proptest::prelude::*;

fn en_us(metric: bool) -> LocaleSettings {
    LocaleSettings::from_tag("en-US").with_metric_system(Some(metric))
}

fn plain(value: i64) -> String {
    format_whole_number(value, &en_us(true).number)
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1800i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("valid day"))
}

proptest! {
    #[test]
    fn feet_are_truncated_product(h in 0i64..=i64::MAX) {
        let exact = h as i128 * FEET_PER_METER_NANO / 1_000_000_000;
        let feet = height_in_unit(h, LengthUnit::Foot);
        prop_assert_eq!(feet, i64::try_from(exact).ok());

        let s = describe("M", h, None, &en_us(false));
        match feet {
            Some(feet) => prop_assert_eq!(s.unwrap(), format!("M is {} feet tall.", plain(feet))),
            None => prop_assert_eq!(
                s.unwrap_err(),
                DescribeError::InvalidInput(InputError::ConvertedHeightOutOfRange(h))
            ),
        }
    }

    #[test]
    fn meters_are_unchanged(h in 0i64..=i64::MAX) {
        let s = describe("M", h, None, &en_us(true)).unwrap();
        prop_assert_eq!(s, format!("M is {} meters tall.", plain(h)));
    }

    #[test]
    fn date_presence_selects_template(h in 0i64..100_000, date in any_date()) {
        let locale = en_us(true);
        let formatted = date_as_string(date, &locale);
        prop_assert!(!formatted.is_empty());

        let dated = describe("M", h, Some(date), &locale).unwrap();
        let expected_suffix = format!("and was climbed on {formatted}.");
        prop_assert!(dated.ends_with(&expected_suffix));

        let undated = describe("M", h, None, &locale).unwrap();
        prop_assert!(!undated.contains("climbed"));
        prop_assert!(!undated.contains(&formatted));
    }

    #[test]
    fn metric_flip_changes_only_the_height(h in 0i64..100_000, date in any_date()) {
        let m = describe("M", h, Some(date), &en_us(true)).unwrap();
        let f = describe("M", h, Some(date), &en_us(false)).unwrap();
        let m_rest = m.replacen(&format!("{} meters", plain(h)), "<h>", 1);
        let f_rest = f.replacen(
            &format!("{} feet", plain(height_in_unit(h, LengthUnit::Foot).expect("fits"))),
            "<h>",
            1,
        );
        prop_assert_eq!(m_rest, f_rest);
    }

    #[test]
    fn grouping_keeps_digits(v in 0i64..i64::MAX, size in 1usize..5) {
        let conventions = NumberConventions { grouping_separator: "'".into(), grouping_size: size };
        let s = format_whole_number(v, &conventions);
        prop_assert_eq!(s.replace('\'', ""), v.to_string());
    }
}
