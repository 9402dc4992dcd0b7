use autotable_types::timestamp;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

#[test]
fn canonical_has_millis_and_z() {
    let ts = Utc.with_ymd_and_hms(2023, 6, 7, 12, 0, 0).unwrap();
    assert_eq!(timestamp::canonical(&ts), "2023-06-07T12:00:00.000Z");
}

#[test]
fn parse_normalizes_offsets() {
    let parsed = timestamp::parse("2023-06-07T14:00:00+02:00").unwrap();
    assert_eq!(timestamp::canonical(&parsed), "2023-06-07T12:00:00.000Z");
}

#[test]
fn canonical_keeps_sub_millisecond_digits() {
    let raw = "2023-01-06T11:25:00.123456Z";
    let ts = timestamp::parse(raw).unwrap();
    assert_eq!(timestamp::canonical(&ts), raw);

    let nanos = "2023-01-06T11:25:00.123456789Z";
    assert_eq!(timestamp::canonical(&timestamp::parse(nanos).unwrap()), nanos);
}

#[test]
fn canonical_separates_instants_within_one_millisecond() {
    let a = timestamp::parse("2023-01-06T11:25:00.123456Z").unwrap();
    let b = timestamp::parse("2023-01-06T11:25:00.123999Z").unwrap();
    assert_ne!(timestamp::canonical(&a), timestamp::canonical(&b));
}

#[test]
fn parse_rejects_dates_without_time() {
    assert!(timestamp::parse("2023-06-07").is_err());
}

// Millisecond timestamps between 2001 and 2286.
fn millis_strategy() -> impl Strategy<Value = i64> {
    1_000_000_000_000i64..10_000_000_000_000
}

// Nanosecond timestamps over the same range.
fn nanos_strategy() -> impl Strategy<Value = i64> {
    1_000_000_000_000_000_000i64..9_000_000_000_000_000_000
}

proptest! {
    #[test]
    fn canonical_parses_back(ms in millis_strategy()) {
        let ts = Utc.timestamp_millis_opt(ms).unwrap();
        prop_assert_eq!(timestamp::parse(&timestamp::canonical(&ts)).unwrap(), ts);
    }

    #[test]
    fn canonical_is_lossless_for_any_precision(ns in nanos_strategy()) {
        let ts = Utc.timestamp_nanos(ns);
        prop_assert_eq!(timestamp::parse(&timestamp::canonical(&ts)).unwrap(), ts);
    }

    /// Text order of canonical forms agrees with chronological order.
    #[test]
    fn canonical_text_orders_like_instants(a in millis_strategy(), b in millis_strategy()) {
        let ta = Utc.timestamp_millis_opt(a).unwrap();
        let tb = Utc.timestamp_millis_opt(b).unwrap();
        prop_assert_eq!(
            timestamp::canonical(&ta).cmp(&timestamp::canonical(&tb)),
            ta.cmp(&tb)
        );
    }
}
