//! Property-based tests for the containers and the driver bridge
//!
//! These tests verify invariants that should hold for all possible input
//! values.

use maybe::{DriverValue, Nullable, Optional};
use proptest::prelude::*;

// ===== CONTAINER PROPERTIES =====

proptest! {
    #[test]
    fn some_try_get_identity(x in any::<i64>()) {
        let opt = Optional::some(x);
        prop_assert_eq!(opt.try_get(), (&x, true));
    }

    #[test]
    fn valid_extract_identity(s in ".*") {
        let n = Nullable::valid(s.clone());
        prop_assert_eq!(n.extract(), (&s, true));
    }

    #[test]
    fn clear_always_restores_zero(x in any::<u32>()) {
        let mut opt = Optional::some(x);
        opt.clear();
        prop_assert_eq!(opt, Optional::none());
        prop_assert_eq!(opt.try_get(), (&0, false));
    }

    #[test]
    fn optional_nullable_round_trip(x in proptest::option::of(any::<i16>())) {
        let opt = Optional::from(x);
        prop_assert_eq!(opt.to_nullable().to_optional(), opt);
        prop_assert_eq!(opt.into_option(), x);
    }

    #[test]
    fn nullable_equality_matches_option(
        a in proptest::option::of(0_u8..4),
        b in proptest::option::of(0_u8..4),
    ) {
        prop_assert_eq!(Nullable::from(a) == Nullable::from(b), a == b);
    }
}

// ===== DRIVER PROPERTIES =====

proptest! {
    #[test]
    fn unsigned_in_range_round_trips(u in 0..=i64::MAX as u64) {
        let encoded = Nullable::valid(u).to_driver_value().unwrap();
        let decoded = Nullable::<u64>::from_driver_value(encoded).unwrap();
        prop_assert_eq!(decoded, Nullable::valid(u));
    }

    #[test]
    fn unsigned_above_range_overflows(u in (i64::MAX as u64 + 1)..=u64::MAX) {
        let err = Nullable::valid(u).to_driver_value().unwrap_err();
        prop_assert!(err.is_overflow());
    }

    #[test]
    fn narrow_signed_round_trips(x in any::<i16>()) {
        let encoded = Nullable::valid(x).to_driver_value().unwrap();
        prop_assert_eq!(&encoded, &DriverValue::Int64(i64::from(x)));
        prop_assert_eq!(Nullable::<i16>::from_driver_value(encoded).unwrap(), Nullable::valid(x));
    }

    #[test]
    fn int64_into_u8_never_wraps(v in any::<i64>()) {
        match Nullable::<u8>::from_driver_value(v) {
            Ok(n) => prop_assert_eq!(i64::from(*n.extract().0), v),
            Err(err) => {
                prop_assert!(err.is_overflow());
                prop_assert!(!(0..=255).contains(&v));
            }
        }
    }

    #[test]
    fn textual_integers_decode(v in any::<i32>()) {
        let n = Nullable::<i32>::from_driver_value(DriverValue::text(v.to_string())).unwrap();
        prop_assert_eq!(n, Nullable::valid(v));
    }

    #[test]
    fn f32_round_trips_through_float64(x in prop::num::f32::NORMAL) {
        let encoded = Nullable::valid(x).to_driver_value().unwrap();
        prop_assert_eq!(Nullable::<f32>::from_driver_value(encoded).unwrap(), Nullable::valid(x));
    }

    #[test]
    fn failed_scan_leaves_null(s in "[a-z]{1,8}") {
        let mut n = Nullable::valid(1_i64);
        prop_assert!(n.scan(DriverValue::text(s)).is_err());
        prop_assert!(n.is_null());
    }
}

// ===== WIRE PROPERTIES =====

#[cfg(feature = "serde")]
proptest! {
    #[test]
    fn json_round_trip_int(x in proptest::option::of(any::<i64>())) {
        let opt = Optional::from(x);
        let json = serde_json::to_string(&opt).unwrap();
        prop_assert_eq!(serde_json::from_str::<Optional<i64>>(&json).unwrap(), opt);

        let n = Nullable::from(x);
        let json = serde_json::to_string(&n).unwrap();
        prop_assert_eq!(serde_json::from_str::<Nullable<i64>>(&json).unwrap(), n);
    }

    #[test]
    fn json_round_trip_string(x in proptest::option::of(".*")) {
        let n = Nullable::from(x);
        let json = serde_json::to_string(&n).unwrap();
        prop_assert_eq!(serde_json::from_str::<Nullable<String>>(&json).unwrap(), n);
    }

    #[test]
    fn json_round_trip_bool(x in proptest::option::of(any::<bool>())) {
        let opt = Optional::from(x);
        let json = serde_json::to_string(&opt).unwrap();
        prop_assert_eq!(serde_json::from_str::<Optional<bool>>(&json).unwrap(), opt);
    }
}
