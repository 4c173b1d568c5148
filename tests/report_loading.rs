use neta_test_toolbox::reports::automatic_transfer_switch::AtsInsulationResistance;
use neta_test_toolbox::reports::large_dry_type_xfmr_mts::DryTypeInsulation;
use neta_test_toolbox::reports::{
    detect_kind, AutomaticTransferSwitchReport, LargeDryTypeXfmrMtsReport,
    LiquidFilledXfmrAts25Report, MvCircuitBreakerReport, MvMotorStarterMtsReport, ReportForm,
    ReportKind, ReportLoadError, ReportStatus, StoredReport,
};
use serde_json::json;

#[test]
fn missing_insulation_group_yields_template() {
    let raw = json!({
        "customer": "ACME",
        "contactResistance": { "normal": { "p1": "12" } }
    });
    let report = AutomaticTransferSwitchReport::from_payload(&raw).expect("load");
    assert_eq!(report.header.customer, "ACME");
    assert_eq!(report.insulation_resistance, AtsInsulationResistance::default());
    assert_eq!(report.contact_resistance.normal.p1, "12");
    assert_eq!(report.contact_resistance.normal.units, "µΩ");

    let dry = LargeDryTypeXfmrMtsReport::from_payload(&json!({ "identifier": "TX-9" })).expect("load");
    assert_eq!(dry.insulation_resistance, DryTypeInsulation::default());
    assert_eq!(dry.turns_ratio.taps.len(), 7);
}

#[test]
fn malformed_group_falls_back_to_template() {
    let raw = json!({
        "insulationResistance": "n/a",
        "testEquipmentUsed": [1, 2, 3],
        "temperature": { "fahrenheit": "abc", "tcf": "x" }
    });
    let report = AutomaticTransferSwitchReport::from_payload(&raw).expect("load");
    assert_eq!(report.insulation_resistance, AtsInsulationResistance::default());
    assert_eq!(report.test_equipment_used, Default::default());
    assert_eq!(report.temperature.fahrenheit, None);
    assert_eq!(report.temperature.tcf, 1.0);
}

#[test]
fn envelopes_and_legacy_keys_are_merged() {
    let raw = json!({
        "data": {
            "report_data": {
                "customerName": "Plant 4",
                "job_number": 1234,
                "temperature": { "celsius": 25 },
                "insulationRows": [
                    { "windingUnderTest": "Primary to Ground", "measured05Min": 100, "measured1Min": "150" }
                ]
            }
        },
        "report_info": { "status": "limited service", "substation": "North" }
    });
    let report = LiquidFilledXfmrAts25Report::from_payload(&raw).expect("load");
    assert_eq!(report.header.customer, "Plant 4");
    assert_eq!(report.header.job_number, "1234");
    assert_eq!(report.header.substation, "North");
    assert_eq!(report.header.status, ReportStatus::LimitedService);
    assert_eq!(report.temperature.celsius, Some(25.0));
    assert_eq!(report.insulation_rows.0.len(), 1);
    assert_eq!(report.insulation_rows.0[0].measured_05_min, "100");
    assert_eq!(report.insulation_rows.0[0].measured_1_min, "150");
}

#[test]
fn canonical_key_wins_over_legacy_spelling() {
    let raw = json!({ "customer": "New", "customerName": "Old", "customer_name": "Older" });
    let report = MvCircuitBreakerReport::from_payload(&raw).expect("load");
    assert_eq!(report.header.customer, "New");
}

#[test]
fn non_object_payload_is_rejected() {
    let err = MvMotorStarterMtsReport::from_payload(&json!([1, 2])).unwrap_err();
    assert!(matches!(err, ReportLoadError::NotAnObject));
}

#[test]
fn stored_record_carries_kind_and_version() {
    let record = MvCircuitBreakerReport::default().into_record();
    let value = StoredReport::new(record).to_value().expect("serialize");
    assert_eq!(value["reportType"], "medium-voltage-circuit-breaker");
    assert_eq!(value["schemaVersion"], 1);
    assert_eq!(value["insulationResistanceMeasured"]["testVoltage"], "1000V");
    assert_eq!(detect_kind(&value), Some(ReportKind::MediumVoltageCircuitBreaker));

    let wrapped = json!({ "data": { "reportType": "automatic-transfer-switch" } });
    assert_eq!(detect_kind(&wrapped), Some(ReportKind::AutomaticTransferSwitch));
    assert_eq!(detect_kind(&json!({ "reportType": "unknown" })), None);

    let back: StoredReport = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back.record.kind(), ReportKind::MediumVoltageCircuitBreaker);
}

#[test]
fn report_kind_parses_tags() {
    for kind in ReportKind::ALL {
        assert_eq!(kind.as_str().parse::<ReportKind>().expect("parse"), kind);
    }
    assert_eq!(
        " Medium-Voltage-Switch-MTS ".parse::<ReportKind>().expect("parse"),
        ReportKind::MediumVoltageSwitchMts
    );
    assert!("relay-protection".parse::<ReportKind>().is_err());
}
