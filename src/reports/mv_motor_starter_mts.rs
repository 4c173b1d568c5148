//! 7.16.1.2 중전압 전동기 기동반 시험 (MTS).
//!
//! 기동반 본체, 접촉기, 기동 리액터 세 부분에 각각 절연저항 보정표가 붙는다.

use serde::{Deserialize, Serialize};

use super::common::{
    inspection_items, lenient, InspectionItem, PhaseReadings, ReportHeader, TemperatureReading,
    TestInstrument,
};
use super::{ReportForm, ReportKind, ReportRecord};
use crate::correction::{apply_correction_with, NonNumeric};
use crate::tcf::profile::STANDARD_PROFILE;
use crate::tcf::TemperatureProfile;

const VISUAL_ITEMS: &[(&str, &str)] = &[
    ("7.16.1.2.A.1", "Inspect physical and mechanical condition."),
    ("7.16.1.2.A.2", "Inspect anchorage, alignment, and grounding."),
    ("7.16.1.2.A.4", "Clean the unit."),
    ("7.16.1.2.A.5.1", "Use of a low-resistance ohmmeter in accordance with Section 7.16.1.2.B.1."),
    ("7.16.1.2.A.6", "Test electrical and mechanical interlock systems for correct operation and sequencing."),
    ("7.16.1.2.A.7", "Verify correct barrier and shutter installation and operation."),
    ("7.16.1.2.A.8", "Exercise active components and confirm correct operation of indicating devices."),
    ("7.16.1.2.A.9", "Inspect contactors. 1. Verify mechanical operation. 2. Inspect and adjust contact gap, wipe, alignment, and pressure in accordance with manufacturer's published data."),
    ("7.16.1.2.A.10", "Compare overload protection rating with motor nameplate to verify correct size."),
    ("7.16.1.2.A.11", "Use appropriate lubrication on moving current-carrying parts and on moving and sliding surfaces."),
];

const INSULATION_TESTS: [(&str, &str); 3] = [
    ("Pole to Pole", "Closed"),
    ("Pole to Frame", "Closed"),
    ("Line to Load", "Open"),
];

const CONTACT_TESTS: [&str; 3] = ["Switch", "Fuse", "Switch + Fuse"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarterNameplate {
    #[serde(deserialize_with = "lenient::text")]
    pub manufacturer: String,
    #[serde(deserialize_with = "lenient::text")]
    pub catalog_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub serial_number: String,
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub starter_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub manufacturing_date: String,
    #[serde(deserialize_with = "lenient::text")]
    pub ic_rating: String,
    #[serde(rename = "ratedVoltageKV", deserialize_with = "lenient::text")]
    pub rated_voltage_kv: String,
    #[serde(rename = "operatingVoltageKV", deserialize_with = "lenient::text")]
    pub operating_voltage_kv: String,
    #[serde(deserialize_with = "lenient::text")]
    pub ampacity: String,
    #[serde(rename = "impulseRatingBIL", deserialize_with = "lenient::text")]
    pub impulse_rating_bil: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EGap {
    #[serde(deserialize_with = "lenient::text")]
    pub unit_measurement: String,
    #[serde(deserialize_with = "lenient::text")]
    pub tolerance: String,
    #[serde(deserialize_with = "lenient::text")]
    pub a_phase: String,
    #[serde(deserialize_with = "lenient::text")]
    pub b_phase: String,
    #[serde(deserialize_with = "lenient::text")]
    pub c_phase: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarterVisualInspection {
    #[serde(deserialize_with = "lenient::group")]
    pub items: Vec<InspectionItem>,
    #[serde(deserialize_with = "lenient::group")]
    pub e_gap: EGap,
}

impl Default for StarterVisualInspection {
    fn default() -> Self {
        Self {
            items: inspection_items(VISUAL_ITEMS, "Select One"),
            e_gap: EGap::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarterFuseData {
    #[serde(deserialize_with = "lenient::text")]
    pub manufacturer: String,
    #[serde(deserialize_with = "lenient::text")]
    pub catalog_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub class: String,
    #[serde(rename = "ratedVoltageKV", deserialize_with = "lenient::text")]
    pub rated_voltage_kv: String,
    #[serde(deserialize_with = "lenient::text")]
    pub ampacity: String,
    #[serde(rename = "icRatingKA", deserialize_with = "lenient::text")]
    pub ic_rating_ka: String,
}

/// 접촉 저항 표의 한 줄.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRow {
    #[serde(deserialize_with = "lenient::text")]
    pub test: String,
    #[serde(flatten)]
    pub readings: PhaseReadings,
    #[serde(deserialize_with = "lenient::text")]
    pub units: String,
}

fn contact_rows() -> Vec<ContactRow> {
    CONTACT_TESTS
        .iter()
        .map(|test| ContactRow {
            test: test.to_string(),
            readings: PhaseReadings::default(),
            units: "µΩ".to_string(),
        })
        .collect()
}

/// 절연저항 표의 한 줄 (MΩ).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MegohmRow {
    #[serde(deserialize_with = "lenient::text")]
    pub test: String,
    #[serde(deserialize_with = "lenient::text")]
    pub state: String,
    #[serde(deserialize_with = "lenient::text")]
    pub p1_mq: String,
    #[serde(deserialize_with = "lenient::text")]
    pub p2_mq: String,
    #[serde(deserialize_with = "lenient::text")]
    pub p3_mq: String,
}

impl MegohmRow {
    fn corrected(&self, tcf: f64, rule: NonNumeric) -> Self {
        Self {
            test: self.test.clone(),
            state: self.state.clone(),
            p1_mq: apply_correction_with(&self.p1_mq, tcf, rule),
            p2_mq: apply_correction_with(&self.p2_mq, tcf, rule),
            p3_mq: apply_correction_with(&self.p3_mq, tcf, rule),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MegohmTable {
    #[serde(deserialize_with = "lenient::text")]
    pub test_voltage: String,
    pub readings: Vec<MegohmRow>,
}

impl Default for MegohmTable {
    fn default() -> Self {
        Self {
            test_voltage: "1000V".to_string(),
            readings: INSULATION_TESTS
                .iter()
                .map(|(test, state)| MegohmRow {
                    test: test.to_string(),
                    state: state.to_string(),
                    ..MegohmRow::default()
                })
                .collect(),
        }
    }
}

impl MegohmTable {
    /// 측정표로부터 보정표를 만든다. 시험 전압은 측정표를 따른다.
    fn corrected(&self, tcf: f64, rule: NonNumeric) -> Self {
        Self {
            test_voltage: self.test_voltage.clone(),
            readings: self.readings.iter().map(|r| r.corrected(tcf, rule)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarterElectricalTests {
    #[serde(deserialize_with = "lenient::group")]
    pub contact_resistance_as_found: Vec<ContactRow>,
    #[serde(deserialize_with = "lenient::group")]
    pub contact_resistance_as_left: Vec<ContactRow>,
    #[serde(deserialize_with = "lenient::group")]
    pub insulation_resistance: MegohmTable,
    #[serde(deserialize_with = "lenient::group")]
    pub temperature_corrected: MegohmTable,
}

impl Default for StarterElectricalTests {
    fn default() -> Self {
        Self {
            contact_resistance_as_found: contact_rows(),
            contact_resistance_as_left: contact_rows(),
            insulation_resistance: MegohmTable::default(),
            temperature_corrected: MegohmTable::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactorData {
    #[serde(deserialize_with = "lenient::text")]
    pub manufacturer: String,
    #[serde(deserialize_with = "lenient::text")]
    pub catalog_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub serial_number: String,
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub contactor_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub manufacturing_date: String,
    #[serde(rename = "icRatingKA", deserialize_with = "lenient::text")]
    pub ic_rating_ka: String,
    #[serde(rename = "ratedVoltageKV", deserialize_with = "lenient::text")]
    pub rated_voltage_kv: String,
    #[serde(rename = "operatingVoltageKV", deserialize_with = "lenient::text")]
    pub operating_voltage_kv: String,
    #[serde(deserialize_with = "lenient::text")]
    pub ampacity: String,
    #[serde(rename = "controlVoltageV", deserialize_with = "lenient::text")]
    pub control_voltage_v: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VacuumBottleIntegrity {
    #[serde(deserialize_with = "lenient::text")]
    pub test_voltage: String,
    #[serde(deserialize_with = "lenient::text")]
    pub test_duration: String,
    #[serde(flatten)]
    pub readings: PhaseReadings,
    #[serde(deserialize_with = "lenient::text")]
    pub units: String,
}

impl Default for VacuumBottleIntegrity {
    fn default() -> Self {
        Self {
            test_voltage: String::new(),
            test_duration: "1 Min.".to_string(),
            readings: PhaseReadings::default(),
            units: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactorElectricalTests {
    #[serde(deserialize_with = "lenient::group")]
    pub insulation_resistance: MegohmTable,
    #[serde(deserialize_with = "lenient::group")]
    pub temperature_corrected: MegohmTable,
    #[serde(deserialize_with = "lenient::group")]
    pub vacuum_bottle_integrity: VacuumBottleIntegrity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StartingReactorData {
    #[serde(deserialize_with = "lenient::text")]
    pub manufacturer: String,
    #[serde(deserialize_with = "lenient::text")]
    pub catalog_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub serial_number: String,
    #[serde(rename = "ratedCurrentA", deserialize_with = "lenient::text")]
    pub rated_current_a: String,
    #[serde(rename = "ratedVoltageKV", deserialize_with = "lenient::text")]
    pub rated_voltage_kv: String,
    #[serde(rename = "operatingVoltageKV", deserialize_with = "lenient::text")]
    pub operating_voltage_kv: String,
}

/// 리액터 A/B/C 상 값과 단위.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindingPhases {
    #[serde(deserialize_with = "lenient::text")]
    pub a_phase: String,
    #[serde(deserialize_with = "lenient::text")]
    pub b_phase: String,
    #[serde(deserialize_with = "lenient::text")]
    pub c_phase: String,
    #[serde(deserialize_with = "lenient::text")]
    pub units: String,
}

impl WindingPhases {
    fn with_units(units: &str) -> Self {
        Self {
            a_phase: String::new(),
            b_phase: String::new(),
            c_phase: String::new(),
            units: units.to_string(),
        }
    }

    fn corrected(&self, tcf: f64, rule: NonNumeric) -> Self {
        Self {
            a_phase: apply_correction_with(&self.a_phase, tcf, rule),
            b_phase: apply_correction_with(&self.b_phase, tcf, rule),
            c_phase: apply_correction_with(&self.c_phase, tcf, rule),
            units: self.units.clone(),
        }
    }
}

impl Default for WindingPhases {
    fn default() -> Self {
        Self::with_units("MΩ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindingToGroundTest {
    #[serde(deserialize_with = "lenient::text")]
    pub test_voltage: String,
    #[serde(deserialize_with = "lenient::group")]
    pub winding_to_ground: WindingPhases,
}

impl Default for WindingToGroundTest {
    fn default() -> Self {
        Self {
            test_voltage: "1000V".to_string(),
            winding_to_ground: WindingPhases::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReactorElectricalTests {
    #[serde(deserialize_with = "lenient::group")]
    pub insulation_resistance: WindingToGroundTest,
    #[serde(deserialize_with = "lenient::group")]
    pub temperature_corrected: WindingToGroundTest,
    #[serde(deserialize_with = "lenient::group")]
    pub contact_resistance_as_found: WindingPhases,
    #[serde(deserialize_with = "lenient::group")]
    pub contact_resistance_as_left: WindingPhases,
}

impl Default for ReactorElectricalTests {
    fn default() -> Self {
        Self {
            insulation_resistance: WindingToGroundTest::default(),
            temperature_corrected: WindingToGroundTest::default(),
            contact_resistance_as_found: WindingPhases::with_units("µΩ"),
            contact_resistance_as_left: WindingPhases::with_units("µΩ"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarterTestEquipment {
    #[serde(deserialize_with = "lenient::group")]
    pub megohmmeter: TestInstrument,
    #[serde(deserialize_with = "lenient::group")]
    pub low_resistance_ohmmeter: TestInstrument,
    #[serde(deserialize_with = "lenient::group")]
    pub hipot: TestInstrument,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MvMotorStarterMtsReport {
    #[serde(flatten)]
    pub header: ReportHeader,
    #[serde(deserialize_with = "lenient::group")]
    pub temperature: TemperatureReading,
    #[serde(deserialize_with = "lenient::group")]
    pub nameplate_data: StarterNameplate,
    #[serde(deserialize_with = "lenient::group")]
    pub visual_mechanical_inspection: StarterVisualInspection,
    #[serde(deserialize_with = "lenient::group")]
    pub fuse_data: StarterFuseData,
    #[serde(deserialize_with = "lenient::group")]
    pub electrical_tests: StarterElectricalTests,
    #[serde(deserialize_with = "lenient::group")]
    pub contactor_data: ContactorData,
    #[serde(deserialize_with = "lenient::group")]
    pub electrical_test_contactor: ContactorElectricalTests,
    #[serde(deserialize_with = "lenient::group")]
    pub starting_reactor_data: StartingReactorData,
    #[serde(deserialize_with = "lenient::group")]
    pub electrical_test_reactor: ReactorElectricalTests,
    #[serde(deserialize_with = "lenient::group")]
    pub test_equipment_used: StarterTestEquipment,
    #[serde(deserialize_with = "lenient::text")]
    pub comments: String,
}

impl Default for MvMotorStarterMtsReport {
    fn default() -> Self {
        Self {
            header: ReportHeader::default(),
            temperature: TemperatureReading::new(68.0, 20.0, 1.0, Some(0.0)),
            nameplate_data: StarterNameplate::default(),
            visual_mechanical_inspection: StarterVisualInspection::default(),
            fuse_data: StarterFuseData::default(),
            electrical_tests: StarterElectricalTests::default(),
            contactor_data: ContactorData::default(),
            electrical_test_contactor: ContactorElectricalTests::default(),
            starting_reactor_data: StartingReactorData::default(),
            electrical_test_reactor: ReactorElectricalTests::default(),
            test_equipment_used: StarterTestEquipment::default(),
            comments: String::new(),
        }
    }
}

impl ReportForm for MvMotorStarterMtsReport {
    const KIND: ReportKind = ReportKind::MediumVoltageMotorStarterMts;
    const PROFILE: TemperatureProfile = STANDARD_PROFILE;
    const NON_NUMERIC: NonNumeric = NonNumeric::PassThrough;
    const KEY_ALIASES: &'static [(&'static str, &'static str)] = &[
        ("nameplate_data", "nameplateData"),
        ("visual_mechanical_inspection", "visualMechanicalInspection"),
        ("fuse_data", "fuseData"),
        ("electrical_tests", "electricalTests"),
        ("contactor_data", "contactorData"),
        ("electrical_test_contactor", "electricalTestContactor"),
        ("starting_reactor_data", "startingReactorData"),
        ("electrical_test_reactor", "electricalTestReactor"),
        ("test_equipment_used", "testEquipmentUsed"),
    ];

    fn header(&self) -> &ReportHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut ReportHeader {
        &mut self.header
    }

    fn temperature(&self) -> &TemperatureReading {
        &self.temperature
    }

    fn temperature_mut(&mut self) -> &mut TemperatureReading {
        &mut self.temperature
    }

    fn derive_corrections(&mut self, tcf: f64) {
        let rule = Self::NON_NUMERIC;

        let starter = &mut self.electrical_tests;
        starter.temperature_corrected = starter.insulation_resistance.corrected(tcf, rule);

        let contactor = &mut self.electrical_test_contactor;
        contactor.temperature_corrected = contactor.insulation_resistance.corrected(tcf, rule);

        let reactor = &mut self.electrical_test_reactor;
        reactor.temperature_corrected = WindingToGroundTest {
            test_voltage: reactor.insulation_resistance.test_voltage.clone(),
            winding_to_ground: reactor.insulation_resistance.winding_to_ground.corrected(tcf, rule),
        };
    }

    fn into_record(self) -> ReportRecord {
        ReportRecord::MediumVoltageMotorStarterMts(self)
    }
}
