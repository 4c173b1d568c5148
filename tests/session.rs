use std::sync::Mutex;

use async_trait::async_trait;
use neta_test_toolbox::logging;
use neta_test_toolbox::reports::{
    AutomaticTransferSwitchReport, LargeDryTypeXfmrMtsReport, LiquidFilledXfmrAts25Report,
    MvCableVlfReport, MvMotorStarterMtsReport, MvSwitchMtsReport, ReportStatus,
};
use neta_test_toolbox::session::{JobContext, ReportSession, SessionDefaults, SessionError};
use neta_test_toolbox::sink::{JsonFileSink, ReportSink, SinkError};
use neta_test_toolbox::tcf::TemperatureDriver;
use serde_json::{json, Value};

#[derive(Default)]
struct MemorySink {
    saved: Mutex<Vec<Value>>,
}

#[async_trait]
impl ReportSink for MemorySink {
    async fn save(&self, payload: &Value) -> Result<(), SinkError> {
        self.saved.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

struct RejectingSink;

#[async_trait]
impl ReportSink for RejectingSink {
    async fn save(&self, _payload: &Value) -> Result<(), SinkError> {
        Err(SinkError::Rejected("server offline".to_string()))
    }
}

fn ats_session() -> ReportSession<AutomaticTransferSwitchReport> {
    ReportSession::open(None, None, SessionDefaults::default())
}

#[test]
fn last_edit_wins_before_save() {
    logging::init_test();
    let mut session = ats_session();
    session.set_fahrenheit(Some(77.0));
    assert_eq!(session.tcf(), 1.25);

    session.edit(|r| r.insulation_resistance.pole_to_pole_normal_closed.p1_reading = "10".into());
    session.edit(|r| r.insulation_resistance.pole_to_pole_normal_closed.p1_reading = "20".into());

    let row = &session.record().insulation_resistance.pole_to_pole_normal_closed;
    assert_eq!(row.p1_corrected, "25.00");

    let payload = session.to_payload().expect("payload");
    assert_eq!(
        payload["insulationResistance"]["poleToPoleNormalClosed"]["p1Corrected"],
        "25.00"
    );
    assert_eq!(payload["reportType"], "automatic-transfer-switch");
    assert_eq!(session.revision(), 3);
}

#[test]
fn temperature_change_recomputes_every_correction() {
    let mut session = ats_session();
    session.edit(|r| {
        r.insulation_resistance.line_to_load_normal_open.neutral_reading = "8".into();
        r.insulation_resistance.line_to_load_normal_open.p2_reading = ">2000".into();
    });
    session.set_fahrenheit(Some(77.0));
    let row = &session.record().insulation_resistance.line_to_load_normal_open;
    assert_eq!(row.neutral_corrected, "10.00");
    assert_eq!(row.p2_corrected, ">2000");

    session.set_fahrenheit(Some(68.0));
    let row = &session.record().insulation_resistance.line_to_load_normal_open;
    assert_eq!(row.neutral_corrected, "8.00");

    // 보정 칸을 직접 고쳐도 다시 계산된다
    session.edit(|r| r.insulation_resistance.line_to_load_normal_open.neutral_corrected = "999".into());
    let row = &session.record().insulation_resistance.line_to_load_normal_open;
    assert_eq!(row.neutral_corrected, "8.00");
}

#[test]
fn celsius_driven_report_rounds_fahrenheit() {
    let stored = json!({
        "temperature": { "fahrenheit": 10, "celsius": 22.5 },
        "insulationTest": { "preTest": { "ag": "4", "bg": "OPEN", "cg": "" } }
    });
    let session = ReportSession::<MvCableVlfReport>::open(Some(&stored), None, SessionDefaults::default());
    assert_eq!(session.driver(), TemperatureDriver::Celsius);
    let temp = session.record().temperature;
    assert_eq!(temp.fahrenheit, Some(73.0));
    assert!((temp.tcf - 1.125).abs() < 1e-12);

    let corrected = &session.record().insulation_test.pre_test_corrected;
    assert_eq!(corrected.ag, "4.50");
    assert_eq!(corrected.bg, "OPEN");
    assert_eq!(corrected.cg, "");
    assert!(!session.is_dirty());
}

#[test]
fn missing_driver_field_falls_back_to_the_other_one() {
    let stored = json!({ "temperature": { "fahrenheit": 77, "celsius": "" } });
    let session = ReportSession::<MvSwitchMtsReport>::open(Some(&stored), None, SessionDefaults::default());
    assert_eq!(session.driver(), TemperatureDriver::Fahrenheit);
    assert_eq!(session.record().temperature.celsius, Some(25.0));
    assert_eq!(session.tcf(), 1.25);
}

#[test]
fn switch_report_blanks_non_numeric_corrections() {
    let mut session = ReportSession::<MvSwitchMtsReport>::new_blank(SessionDefaults::default());
    session.set_celsius(Some(25.0));
    session.edit(|r| {
        r.insulation.rows[0].readings.p1 = "100".into();
        r.insulation.rows[0].readings.p2 = "N/A".into();
    });
    let row = &session.record().insulation_corrected.rows[0];
    assert_eq!(row.label, "Pole to Pole");
    assert_eq!(row.readings.p1, "125.00");
    assert_eq!(row.readings.p2, "");
    assert_eq!(session.record().temperature.fahrenheit, Some(77.0));
}

#[test]
fn transformer_ratios_and_acceptance_follow_raw_readings() {
    let mut session =
        ReportSession::<LiquidFilledXfmrAts25Report>::new_blank(SessionDefaults::default());
    session.set_celsius(Some(25.0));
    session.edit(|r| {
        let row = &mut r.insulation_rows.0[0];
        row.measured_05_min = "100".into();
        row.measured_1_min = "150".into();
        row.measured_10_min = "300".into();
    });
    let report = session.record();
    assert_eq!(report.insulation_rows.0[0].corrected_1_min, "187.50");
    assert_eq!(report.dielectric_absorption.primary, "1.50");
    assert_eq!(report.dielectric_absorption.secondary, "");
    assert_eq!(report.dielectric_absorption.acceptable, "Pass");
    assert_eq!(report.polarization_index.primary, "2.00");

    session.edit(|r| r.insulation_rows.0[1].measured_05_min = "200".into());
    session.edit(|r| r.insulation_rows.0[1].measured_1_min = "150".into());
    assert_eq!(session.record().dielectric_absorption.secondary, "0.75");
    assert_eq!(session.record().dielectric_absorption.acceptable, "Fail");
}

#[test]
fn dry_type_keeps_qualifiers_and_derives_turns_ratio() {
    let mut session =
        ReportSession::<LargeDryTypeXfmrMtsReport>::new_blank(SessionDefaults::default());
    assert_eq!(session.record().temperature.celsius, Some(21.0));
    assert_eq!(session.tcf(), 0.775);

    session.edit(|r| {
        let t = &mut r.insulation_resistance.primary_to_ground.readings;
        t.half_minute = "1000".into();
        t.one_minute = ">2000".into();
        t.ten_minute = "N/A".into();
        r.nameplate_data.tap_configuration.voltages[0] = "13800".into();
        r.turns_ratio.secondary_winding_voltage = "480".into();
        let tap = &mut r.turns_ratio.taps[0];
        tap.phase_a_ttr = "28.700".into();
        tap.phase_b_ttr = "28.750".into();
        tap.phase_c_ttr = "28.800".into();
    });
    let report = session.record();
    let corrected = &report.insulation_resistance.primary_to_ground.corrected;
    assert_eq!(corrected.half_minute, "775.00");
    assert_eq!(corrected.one_minute, ">2000");
    assert_eq!(corrected.ten_minute, "");
    assert_eq!(report.insulation_resistance.primary_to_ground.dielectric_absorption, "");
    assert_eq!(report.insulation_resistance.dielectric_absorption_acceptable, "No");
    assert_eq!(report.insulation_resistance.polarization_index_acceptable, "No");

    let tap = &report.turns_ratio.taps[0];
    assert_eq!(tap.nameplate_voltage, "13800");
    assert_eq!(tap.calculated_ratio, "28.750");
    assert_eq!(tap.phase_a_dev, "0.174");
    assert_eq!(tap.phase_b_dev, "0.000");
    assert_eq!(tap.assessment, "Pass");
    assert_eq!(report.turns_ratio.taps[1].assessment, "Select One");
}

#[test]
fn dry_type_record_with_both_temperature_spellings_keeps_its_temperature() {
    let stored = json!({
        "temperature": {
            "ambient": 86,
            "celsius": 30,
            "fahrenheit": 86,
            "correctionFactor": 1.316,
            "humidity": 40
        },
        "insulationResistance": {
            "primaryToGround": { "readings": { "halfMinute": "80", "oneMinute": "100" } }
        }
    });
    let session =
        ReportSession::<LargeDryTypeXfmrMtsReport>::open(Some(&stored), None, SessionDefaults::default());
    let temp = session.record().temperature;
    assert_eq!(temp.fahrenheit, Some(86.0));
    assert_eq!(temp.celsius, Some(30.0));
    assert_eq!(temp.tcf, 1.316);
    assert_eq!(temp.humidity, Some(40.0));

    let insulation = &session.record().insulation_resistance;
    assert_eq!(insulation.primary_to_ground.corrected.one_minute, "131.60");
    assert_eq!(insulation.primary_to_ground.dielectric_absorption, "1.25");
    assert_eq!(insulation.dielectric_absorption_acceptable, "Yes");
    assert_eq!(insulation.polarization_index_acceptable, "No");
}

#[test]
fn ats25_keeps_entered_ratio_summary_without_raw_rows() {
    let stored = json!({
        "temperature": { "celsius": 20 },
        "dielectricAbsorption": {
            "primary": "1.4", "secondary": "1.3", "priToSec": "1.5", "acceptable": "Pass"
        },
        "polarizationIndex": { "primary": "2.1", "acceptable": "Pass" }
    });
    let mut session =
        ReportSession::<LiquidFilledXfmrAts25Report>::open(Some(&stored), None, SessionDefaults::default());
    let da = &session.record().dielectric_absorption;
    assert_eq!(
        (da.primary.as_str(), da.secondary.as_str(), da.pri_to_sec.as_str(), da.acceptable.as_str()),
        ("1.4", "1.3", "1.5", "Pass")
    );
    assert_eq!(session.record().polarization_index.primary, "2.1");

    // 원시값이 생긴 칸만 계산값으로 바뀐다
    session.edit(|r| {
        let row = &mut r.insulation_rows.0[1];
        row.measured_05_min = "200".into();
        row.measured_1_min = "150".into();
    });
    let da = &session.record().dielectric_absorption;
    assert_eq!(da.primary, "1.4");
    assert_eq!(da.secondary, "0.75");
    assert_eq!(da.pri_to_sec, "1.5");
    assert_eq!(da.acceptable, "Fail");
}

#[test]
fn motor_starter_corrects_all_three_insulation_tables() {
    let mut session =
        ReportSession::<MvMotorStarterMtsReport>::new_blank(SessionDefaults::default());
    session.edit(|r| {
        r.electrical_tests.insulation_resistance.test_voltage = "5000V".into();
        r.electrical_tests.insulation_resistance.readings[0].p1_mq = "100".into();
        r.electrical_test_contactor.insulation_resistance.readings[2].p3_mq = ">5000".into();
        r.electrical_test_reactor.insulation_resistance.winding_to_ground.a_phase = "40".into();
    });
    session.set_fahrenheit(Some(77.0));

    let r = session.record();
    let starter = &r.electrical_tests.temperature_corrected;
    assert_eq!(starter.test_voltage, "5000V");
    assert_eq!(starter.readings[0].p1_mq, "125.00");
    assert_eq!(starter.readings[0].test, "Pole to Pole");
    assert_eq!(r.electrical_test_contactor.temperature_corrected.readings[2].p3_mq, ">5000");
    let reactor = &r.electrical_test_reactor.temperature_corrected.winding_to_ground;
    assert_eq!(reactor.a_phase, "50.00");
    assert_eq!(reactor.units, "MΩ");
}

#[test]
fn status_is_operator_toggled() {
    let mut session = ats_session();
    assert_eq!(session.status(), ReportStatus::Pass);
    assert_eq!(session.cycle_status(), ReportStatus::Fail);
    assert_eq!(session.cycle_status(), ReportStatus::LimitedService);
    session.set_status(ReportStatus::Pass);
    assert_eq!(session.status(), ReportStatus::Pass);
    assert!(session.is_dirty());
}

#[test]
fn job_context_fills_only_blank_header_fields() {
    let stored = json!({ "customer": "Operator Entered", "address": "" });
    let job = JobContext {
        customer_name: "Job Co".into(),
        address: "1 Substation Rd".into(),
        job_number: "J-77".into(),
    };
    let session =
        ReportSession::<AutomaticTransferSwitchReport>::open(Some(&stored), Some(&job), SessionDefaults::default());
    let header = &session.record().header;
    assert_eq!(header.customer, "Operator Entered");
    assert_eq!(header.address, "1 Substation Rd");
    assert_eq!(header.job_number, "J-77");
}

#[test]
fn unreadable_or_foreign_record_opens_blank_template() {
    let foreign = json!({ "reportType": "automatic-transfer-switch", "customer": "ACME" });
    let session = ReportSession::<MvSwitchMtsReport>::open(Some(&foreign), None, SessionDefaults::default());
    assert_eq!(session.record().header.customer, "");

    let garbage = json!("not a record");
    let session = ReportSession::<MvSwitchMtsReport>::open(Some(&garbage), None, SessionDefaults::default());
    assert_eq!(session.record().insulation.test_voltage, "2500V");
    assert!(!session.is_dirty());
}

#[test]
fn only_one_save_in_flight() {
    let mut session = ats_session();
    session.set_fahrenheit(Some(50.0));
    let ticket = session.begin_save().expect("first save");
    assert!(session.is_saving());
    assert!(matches!(session.begin_save(), Err(SessionError::SaveInFlight)));

    session.finish_save(ticket, Ok(())).expect("finish");
    assert!(!session.is_saving());
    assert!(!session.is_dirty());
    assert!(session.begin_save().is_ok());
}

#[test]
fn edit_during_save_stays_dirty() {
    let mut session = ats_session();
    session.set_fahrenheit(Some(50.0));
    let ticket = session.begin_save().expect("save");
    session.edit(|r| r.comments = "late note".into());
    assert_eq!(ticket.payload()["comments"], "");

    session.finish_save(ticket, Ok(())).expect("finish");
    assert!(session.is_dirty());
    assert_eq!(session.record().comments, "late note");
}

#[tokio::test]
async fn failed_save_keeps_state_and_allows_retry() {
    logging::init_test();
    let mut session = ats_session();
    session.edit(|r| r.comments = "keep me".into());
    let before = session.record().clone();

    let err = session.save(&RejectingSink).await.unwrap_err();
    assert!(matches!(err, SessionError::SaveFailed(SinkError::Rejected(_))));
    assert_eq!(session.record(), &before);
    assert!(session.is_dirty());
    assert!(!session.is_saving());
    assert!(session.last_save_error().unwrap().contains("server offline"));

    let sink = MemorySink::default();
    session.save(&sink).await.expect("retry");
    assert!(!session.is_dirty());
    assert_eq!(session.last_save_error(), None);
    let saved = sink.saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0]["comments"], "keep me");
}

#[tokio::test]
async fn file_sink_writes_self_contained_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("cable.json");
    let sink = JsonFileSink::new(&path);

    let mut session = ReportSession::<MvCableVlfReport>::new_blank(SessionDefaults {
        fahrenheit: Some(77.0),
        humidity: Some(35.0),
    });
    session.edit(|r| r.insulation_test.post_test.cg = "2".into());
    session.save(&sink).await.expect("save");

    let text = std::fs::read_to_string(&path).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["reportType"], "medium-voltage-cable-vlf");
    assert_eq!(value["schemaVersion"], 1);
    assert_eq!(value["temperature"]["celsius"], 25.0);
    assert_eq!(value["temperature"]["humidity"], 35.0);
    assert_eq!(value["insulationTest"]["postTest"]["cg"], "2");
    assert_eq!(value["insulationTest"]["postTestCorrected"]["cg"], "2.50");

    let reopened = ReportSession::<MvCableVlfReport>::open(Some(&value), None, SessionDefaults::default());
    assert_eq!(reopened.record(), session.record());
}
