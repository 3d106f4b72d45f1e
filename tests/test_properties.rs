//! Property-based tests for field validation and pagination.

use address_book::{AddressBook, Birthday, Phone, Record};
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use std::collections::HashSet;

// =============================================================================
// Strategies
// =============================================================================

fn valid_phone() -> impl Strategy<Value = String> {
    "[0-9]{10}"
}

fn invalid_phone() -> impl Strategy<Value = String> {
    any::<String>().prop_filter("must not be ten ASCII digits", |s| {
        !(s.len() == 10 && s.bytes().all(|b| b.is_ascii_digit()))
    })
}

fn calendar_date() -> impl Strategy<Value = NaiveDate> {
    (1i32..=9999, 1u32..=366).prop_filter_map("day of year out of range", |(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
    })
}

fn distinct_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[A-Za-z]{1,12}", 0..40).prop_map(|set| set.into_iter().collect())
}

// =============================================================================
// Phone
// =============================================================================

proptest! {
    #[test]
    fn prop_ten_digits_accepted(s in valid_phone()) {
        let phone = Phone::new(s.clone()).unwrap();
        prop_assert_eq!(phone.to_string(), s);
    }

    #[test]
    fn prop_anything_else_rejected(s in invalid_phone()) {
        prop_assert!(Phone::new(s).is_err());
    }
}

// =============================================================================
// Birthday
// =============================================================================

proptest! {
    #[test]
    fn prop_formatted_dates_validate(date in calendar_date()) {
        let text = date.format("%Y-%m-%d").to_string();
        prop_assert!(Birthday::validate(&text));
        prop_assert_eq!(Birthday::new(&text).unwrap().date(), date);
    }

    #[test]
    fn prop_impossible_days_rejected(year in 1i32..=9999, month in 1u32..=12, day in 29u32..=40) {
        let text = format!("{:04}-{:02}-{:02}", year, month, day);
        let exists = NaiveDate::from_ymd_opt(year, month, day).is_some();
        prop_assert_eq!(Birthday::validate(&text), exists);
    }

    #[test]
    fn prop_days_to_birthday_within_a_year(born in calendar_date(), today in calendar_date()) {
        prop_assume!(today.year() < 9999);
        let text = born.format("%Y-%m-%d").to_string();
        let record = Record::new("Someone", Some(text.as_str())).unwrap();
        let days = record.days_to_birthday_from(today).unwrap();
        prop_assert!((0..=365).contains(&days));
    }
}

// =============================================================================
// Pagination
// =============================================================================

proptest! {
    #[test]
    fn prop_pages_cover_every_record_once(names in distinct_names(), page_size in 1usize..8) {
        let book: AddressBook = names
            .iter()
            .map(|name| Record::new(name.as_str(), None).unwrap())
            .collect();

        let pages: Vec<Vec<&Record>> = book.iterate(page_size).unwrap().collect();

        for (i, page) in pages.iter().enumerate() {
            if i + 1 < pages.len() {
                prop_assert_eq!(page.len(), page_size);
            } else {
                prop_assert!(!page.is_empty() && page.len() <= page_size);
            }
        }

        let seen: Vec<&str> = pages.iter().flatten().map(|r| r.name().as_str()).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(&seen, &expected);
        prop_assert_eq!(seen.iter().collect::<HashSet<_>>().len(), names.len());
    }
}
