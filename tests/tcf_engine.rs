mod common;

use common::assert_close;
use neta_test_toolbox::tcf::profile::{
    ATS25_TRANSFORMER_PROFILE, CABLE_VLF_PROFILE, DRY_TYPE_PROFILE, STANDARD_PROFILE,
    SWITCH_MTS_PROFILE,
};
use neta_test_toolbox::tcf::{correction_factor, tables, TcfTable, DEFAULT_FACTOR};
use neta_test_toolbox::units::{celsius_from_fahrenheit, fahrenheit_from_celsius};

#[test]
fn fahrenheit_to_celsius_rounds_and_roundtrips_within_one_degree() {
    let mut f = -40.0;
    while f <= 150.0 {
        let c = celsius_from_fahrenheit(f);
        let exact = (f - 32.0) * 5.0 / 9.0;
        assert_eq!(c, (exact + 0.5).floor(), "f={f}");
        assert!((fahrenheit_from_celsius(c) - f).abs() <= 1.0, "f={f} c={c}");
        f += 0.1;
    }
}

#[test]
fn tabulated_keys_return_exact_factors() {
    let tables: [TcfTable; 4] = [
        tables::STANDARD,
        tables::DRY_TYPE,
        tables::SWITCH_MTS_SPARSE,
        tables::CABLE_BANDED,
    ];
    for table in tables {
        for p in table.points() {
            assert_eq!(table.factor(f64::from(p.celsius)), p.factor, "key {}", p.celsius);
        }
    }
    assert_eq!(correction_factor(20.0), 1.0);
    assert_eq!(correction_factor(25.0), 1.25);
}

#[test]
fn banded_interpolation_is_strictly_between_neighbours() {
    let points = &tables::CABLE_BANDED_POINTS;
    for pair in points.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        for step in 1..10 {
            let c = f64::from(lo.celsius) + f64::from(hi.celsius - lo.celsius) * f64::from(step) / 10.0;
            let factor = tables::CABLE_BANDED.factor(c);
            assert!(factor > lo.factor && factor < hi.factor, "c={c} factor={factor}");
        }
    }
    assert_close(tables::CABLE_BANDED.factor(22.5), 1.125, 1e-12);
}

#[test]
fn out_of_range_clamps_or_defaults_per_variant() {
    assert_eq!(tables::CABLE_BANDED.factor(-15.0), 0.4);
    assert_eq!(tables::CABLE_BANDED.factor(95.0), 10.0);

    assert_eq!(tables::STANDARD.factor(-30.0), DEFAULT_FACTOR);
    assert_eq!(tables::STANDARD.factor(111.0), DEFAULT_FACTOR);
    assert_eq!(tables::STANDARD_TO_60.factor(60.0), 6.3);
    assert_eq!(tables::STANDARD_TO_60.factor(61.0), DEFAULT_FACTOR);
    assert_eq!(tables::STANDARD.factor(61.0), 6.62);
    assert_eq!(tables::SWITCH_MTS_SPARSE.factor(12.0), DEFAULT_FACTOR);
    assert_eq!(tables::DRY_TYPE.factor(66.0), DEFAULT_FACTOR);

    for table in [tables::STANDARD, tables::CABLE_BANDED] {
        assert_eq!(table.factor(f64::NAN), DEFAULT_FACTOR);
        assert_eq!(table.factor(f64::INFINITY), DEFAULT_FACTOR);
    }
}

#[test]
fn discrete_lookup_rounds_celsius_first() {
    assert_eq!(tables::STANDARD.factor(24.5), 1.25);
    assert_eq!(tables::STANDARD.factor(24.49), 1.2);
    assert_eq!(tables::STANDARD.factor(-0.5), 0.4);
}

#[test]
fn profiles_derive_celsius_and_factor() {
    let t = STANDARD_PROFILE.from_fahrenheit(Some(77.0));
    assert_eq!(t.celsius, Some(25.0));
    assert_eq!(t.tcf, 1.25);

    let t = DRY_TYPE_PROFILE.from_fahrenheit(Some(70.0));
    assert_eq!(t.celsius, Some(21.0));
    assert_eq!(t.tcf, 0.775);
    // 70°F와 72°F 행의 한가운데: 앞 행
    assert_eq!(DRY_TYPE_PROFILE.from_fahrenheit(Some(71.0)).celsius, Some(21.0));

    let t = CABLE_VLF_PROFILE.from_celsius(Some(22.5));
    assert_eq!(t.fahrenheit, Some(73.0));
    assert_close(t.tcf, 1.125, 1e-12);

    assert_eq!(SWITCH_MTS_PROFILE.from_celsius(Some(12.0)).tcf, DEFAULT_FACTOR);
    assert_eq!(ATS25_TRANSFORMER_PROFILE.from_celsius(Some(65.0)).tcf, DEFAULT_FACTOR);

    let blank = STANDARD_PROFILE.from_fahrenheit(None);
    assert_eq!(blank.celsius, None);
    assert_eq!(blank.tcf, DEFAULT_FACTOR);
    let nan = STANDARD_PROFILE.from_fahrenheit(Some(f64::NAN));
    assert_eq!(nan.fahrenheit, None);
    assert_eq!(nan.tcf, DEFAULT_FACTOR);
}
