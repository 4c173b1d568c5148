use neta_test_toolbox::correction::{
    apply_correction, dielectric_absorption_ratio, polarization_index, ratio, ratios_acceptable,
};
use neta_test_toolbox::tcf::tables;

#[test]
fn blank_and_qualified_readings_pass_through() {
    for tcf in [0.4, 1.0, 1.25, 63.2] {
        assert_eq!(apply_correction("", tcf), "");
        assert_eq!(apply_correction(">100", tcf), ">100");
        assert_eq!(apply_correction("<0.5", tcf), "<0.5");
        assert_eq!(apply_correction("OPEN", tcf), "OPEN");
    }
}

#[test]
fn unit_factor_only_rounds_to_two_decimals() {
    assert_eq!(apply_correction("3.14159", 1.0), "3.14");
    assert_eq!(apply_correction(" 7 ", 1.0), "7.00");
    assert_eq!(apply_correction("-2.5", 1.0), "-2.50");
}

#[test]
fn discrete_scenario_twenty_five_degrees() {
    assert_eq!(tables::STANDARD.factor(20.0), 1.0);
    let tcf = tables::STANDARD.factor(25.0);
    assert_eq!(tcf, 1.25);
    assert_eq!(apply_correction("10", tcf), "12.50");
}

#[test]
fn banded_scenario_midpoint() {
    let tcf = tables::CABLE_BANDED.factor(22.5);
    assert!((tcf - 1.125).abs() < 1e-12);
    assert_eq!(apply_correction("4", tcf), "4.50");
}

#[test]
fn ratios_use_raw_readings() {
    assert_eq!(dielectric_absorption_ratio("100", "150"), "1.50");
    assert_eq!(polarization_index("150", "300"), "2.00");
    assert_eq!(dielectric_absorption_ratio("0", "150"), "");
    assert_eq!(polarization_index(">2000", "300"), "");
    assert_eq!(ratio("1", ""), "");
}

#[test]
fn ratio_acceptance_needs_every_present_value_above_one() {
    assert_eq!(ratios_acceptable(["1.50", "2.00"]), Some(true));
    assert_eq!(ratios_acceptable(["1.50", "", "1.01"]), Some(true));
    assert_eq!(ratios_acceptable(["1.50", "1.00"]), Some(false));
    assert_eq!(ratios_acceptable(["0.90"]), Some(false));
    assert_eq!(ratios_acceptable(["", ""]), None);
    assert_eq!(ratios_acceptable(std::iter::empty()), None);
}
