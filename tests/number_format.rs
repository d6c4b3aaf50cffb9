use format_utils::number::{
    clamp, random_int_range, random_int_range_with, random_range, random_range_with, sum,
    to_bytes, to_percentage, to_sig_figs, to_sig_figs_with_unit, BytesOptions,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn clamp_values() {
    assert_eq!(clamp(10.0, 0.0, 100.0), 10.0);
    assert_eq!(clamp(-10.0, 0.0, 100.0), 0.0);
    assert_eq!(clamp(1000.0, 0.0, 100.0), 100.0);
}

#[test]
fn clamp_inverted_bounds_yields_min() {
    assert_eq!(clamp(50.0, 100.0, 0.0), 100.0);
    assert_eq!(clamp(-50.0, 100.0, 0.0), 100.0);
}

#[test]
fn clamp_nan_propagates() {
    assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
}

#[test]
fn sum_values() {
    assert_eq!(sum([1.0, 2.0, 3.0]), 6.0);
    assert_eq!(sum(Vec::<f64>::new()), 0.0);
    assert_eq!(sum([None, None, Some(f64::NAN), Some(5.0)]), 5.0);
}

#[test]
fn sig_figs_rounding() {
    assert_eq!(to_sig_figs(Some(123456.0), 4), Some(123500.0));
    assert_eq!(to_sig_figs(Some(159.0), 2), Some(160.0));
    assert_eq!(to_sig_figs(Some(1.2345), 3), Some(1.23));
    assert_eq!(to_sig_figs(Some(0.00123), 2), Some(0.0012));
    assert_eq!(to_sig_figs(Some(-123456.0), 4), Some(-123500.0));
}

#[test]
fn sig_figs_clamps_precision() {
    assert_eq!(to_sig_figs(Some(1234.0), 0), Some(1000.0));
    assert_eq!(to_sig_figs(Some(0.1), 50), Some(0.1));
}

#[test]
fn invariant_sig_figs_none_passthrough() {
    for n in 0..30 {
        assert_eq!(to_sig_figs(None, n), None);
    }
}

#[test]
fn golden_sig_figs_with_unit() {
    let cases: [(f64, usize, &str); 11] = [
        (123456.0, 4, "123.5k"),
        (123.0, 2, "120"),
        (1.23, 3, "1.23"),
        (0.00123, 2, "1.2m"),
        (0.000123, 2, "120µ"),
        (123000000.0, 3, "123M"),
        (-123456.0, 4, "-123.5k"),
        (9876543210.0, 5, "9.8765G"),
        (1e-9, 2, "1.0n"),
        (1e-12, 1, "1p"),
        (1e15, 3, "1.00P"),
    ];
    for (value, sig_figs, expected) in cases {
        assert_eq!(
            to_sig_figs_with_unit(Some(value), sig_figs),
            expected,
            "{value} to {sig_figs} sig figs"
        );
    }
}

#[test]
fn sig_figs_with_unit_edge_cases() {
    assert_eq!(to_sig_figs_with_unit(None, 3), "undefined");
    assert_eq!(to_sig_figs_with_unit(Some(0.0), 3), "0.00");
    assert_eq!(to_sig_figs_with_unit(Some(0.0), 1), "0");
    assert_eq!(to_sig_figs_with_unit(Some(1e30), 3), "1e+30");
    assert_eq!(to_sig_figs_with_unit(Some(f64::NAN), 3), "NaN");
}

#[test]
fn percentages() {
    assert_eq!(to_percentage(0.12, 0), "12");
    assert_eq!(to_percentage(-0.12, 0), "-12");
    assert_eq!(to_percentage(1.2, 0), "120");
    assert_eq!(to_percentage(0.0, 0), "0");
    assert_eq!(to_percentage(1.0, 0), "100");
    assert_eq!(to_percentage(0.1234, 0), "12");
}

#[test]
fn percentages_with_decimals() {
    assert_eq!(to_percentage(0.12, 2), "12.00");
    assert_eq!(to_percentage(0.0, 2), "0.00");
    assert_eq!(to_percentage(1.0, 3), "100.000");
    assert_eq!(to_percentage(0.55555, 2), "55.55");
}

#[test]
fn golden_bytes() {
    let defaults = BytesOptions::default();
    let cases: [(f64, &str); 10] = [
        (0.0, "0 Bytes"),
        (120.0, "120 Bytes"),
        (120e3, "117 kB"),
        (120e6, "114 MB"),
        (120e9, "112 GB"),
        (120e12, "109 TB"),
        (120e15, "107 PB"),
        (120e18, "104 EB"),
        (120e21, "102 ZB"),
        (120e24, "99 YB"),
    ];
    for (bytes, expected) in cases {
        assert_eq!(to_bytes(Some(bytes), &defaults), expected);
    }
}

#[test]
fn bytes_missing_input() {
    assert_eq!(to_bytes(None, &BytesOptions::default()), "0 Bytes");
    assert_eq!(to_bytes(Some(f64::NAN), &BytesOptions::default()), "0 Bytes");
}

#[test]
fn bytes_decimal_places() {
    assert_eq!(to_bytes(Some(120_000.0), &BytesOptions::decimals(1)), "117.2 kB");
    assert_eq!(to_bytes(Some(120_000.0), &BytesOptions::decimals(2)), "117.19 kB");
    assert_eq!(to_bytes(Some(120_000.0), &BytesOptions::decimals(3)), "117.188 kB");
    assert_eq!(to_bytes(Some(120_000.0), &BytesOptions::decimals(4)), "117.1875 kB");
    assert_eq!(to_bytes(Some(121_000.0), &BytesOptions::decimals(5)), "118.16406 kB");
    // Trailing zeros are dropped
    assert_eq!(to_bytes(Some(1024.0), &BytesOptions::decimals(3)), "1 kB");
}

#[test]
fn bytes_base_1000() {
    let options = BytesOptions::base1000();
    assert_eq!(to_bytes(Some(120_000.0), &options), "120 kB");
    assert_eq!(to_bytes(Some(120_000_000.0), &options), "120 MB");
    assert_eq!(to_bytes(Some(120_000_000_000.0), &options), "120 GB");
}

#[test]
fn bytes_beyond_table_stay_in_yottabytes() {
    assert_eq!(to_bytes(Some(1024f64.powi(9)), &BytesOptions::default()), "1024 YB");
}

#[test]
fn random_range_bounds() {
    for _ in 0..100 {
        let n = random_range(10.0, 100.0);
        assert!((10.0..100.0).contains(&n));
    }
}

#[test]
fn random_int_range_is_inclusive_integer() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen_min = false;
    let mut seen_max = false;
    for _ in 0..1000 {
        let n = random_int_range_with(&mut rng, 1.2, 4.9);
        assert!((2.0..=4.0).contains(&n));
        assert_eq!(n.round(), n);
        seen_min |= n == 2.0;
        seen_max |= n == 4.0;
    }
    assert!(seen_min && seen_max, "both bounds must be reachable");

    let n = random_int_range(10.0, 100.0);
    assert!((10.0..=100.0).contains(&n));
}

#[test]
fn random_range_with_seed_is_reproducible() {
    let a = random_range_with(&mut StdRng::seed_from_u64(42), 0.0, 1.0);
    let b = random_range_with(&mut StdRng::seed_from_u64(42), 0.0, 1.0);
    assert_eq!(a, b);
}
