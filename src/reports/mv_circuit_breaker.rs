//! 7.6.3 중전압 진공 차단기 시험.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{lenient, PhaseReadingsWithUnits, ReportHeader, TemperatureReading, TestInstrument};
use super::{ReportForm, ReportKind, ReportRecord};
use crate::correction::{apply_correction_with, NonNumeric};
use crate::tcf::profile::STANDARD_PROFILE;
use crate::tcf::TemperatureProfile;

const VISUAL_IDS: [&str; 11] = [
    "7.6.3.A.1",
    "7.6.3.A.2",
    "7.6.3.A.3",
    "7.6.3.A.4",
    "7.6.3.A.5",
    "7.6.3.A.6",
    "7.6.3.A.7",
    "7.6.3.A.8.1",
    "7.6.3.A.9",
    "7.6.3.A.10",
    "7.6.3.A.11",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreakerNameplate {
    #[serde(deserialize_with = "lenient::text")]
    pub manufacturer: String,
    #[serde(deserialize_with = "lenient::text")]
    pub catalog_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub serial_number: String,
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub breaker_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub manufacturing_date: String,
    #[serde(deserialize_with = "lenient::text")]
    pub ic_rating: String,
    #[serde(deserialize_with = "lenient::text")]
    pub rated_voltage: String,
    #[serde(deserialize_with = "lenient::text")]
    pub operating_voltage: String,
    #[serde(deserialize_with = "lenient::text")]
    pub ampacity: String,
    #[serde(deserialize_with = "lenient::text")]
    pub mva_rating: String,
}

/// 극간(닫힘), 극-프레임(닫힘), 선-부하(열림) 각 세 상.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreakerInsulationValues {
    #[serde(deserialize_with = "lenient::text")]
    pub pole_to_pole_closed_p1_p2: String,
    #[serde(deserialize_with = "lenient::text")]
    pub pole_to_pole_closed_p2_p3: String,
    #[serde(deserialize_with = "lenient::text")]
    pub pole_to_pole_closed_p3_p1: String,
    #[serde(deserialize_with = "lenient::text")]
    pub pole_to_frame_closed_p1: String,
    #[serde(deserialize_with = "lenient::text")]
    pub pole_to_frame_closed_p2: String,
    #[serde(deserialize_with = "lenient::text")]
    pub pole_to_frame_closed_p3: String,
    #[serde(deserialize_with = "lenient::text")]
    pub line_to_load_open_p1: String,
    #[serde(deserialize_with = "lenient::text")]
    pub line_to_load_open_p2: String,
    #[serde(deserialize_with = "lenient::text")]
    pub line_to_load_open_p3: String,
}

impl BreakerInsulationValues {
    fn fields(&self) -> [&String; 9] {
        [
            &self.pole_to_pole_closed_p1_p2,
            &self.pole_to_pole_closed_p2_p3,
            &self.pole_to_pole_closed_p3_p1,
            &self.pole_to_frame_closed_p1,
            &self.pole_to_frame_closed_p2,
            &self.pole_to_frame_closed_p3,
            &self.line_to_load_open_p1,
            &self.line_to_load_open_p2,
            &self.line_to_load_open_p3,
        ]
    }

    fn corrected(&self, tcf: f64, rule: NonNumeric) -> Self {
        let [a, b, c, d, e, f, g, h, i] = self.fields().map(|raw| apply_correction_with(raw, tcf, rule));
        Self {
            pole_to_pole_closed_p1_p2: a,
            pole_to_pole_closed_p2_p3: b,
            pole_to_pole_closed_p3_p1: c,
            pole_to_frame_closed_p1: d,
            pole_to_frame_closed_p2: e,
            pole_to_frame_closed_p3: f,
            line_to_load_open_p1: g,
            line_to_load_open_p2: h,
            line_to_load_open_p3: i,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreakerInsulation {
    #[serde(deserialize_with = "lenient::text")]
    pub test_voltage: String,
    #[serde(deserialize_with = "lenient::text")]
    pub pole_to_pole_units: String,
    #[serde(deserialize_with = "lenient::text")]
    pub pole_to_frame_units: String,
    #[serde(deserialize_with = "lenient::text")]
    pub line_to_load_units: String,
    #[serde(flatten)]
    pub values: BreakerInsulationValues,
}

impl Default for BreakerInsulation {
    fn default() -> Self {
        Self {
            test_voltage: "1000V".to_string(),
            pole_to_pole_units: "MΩ".to_string(),
            pole_to_frame_units: "MΩ".to_string(),
            line_to_load_units: "MΩ".to_string(),
            values: BreakerInsulationValues::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DielectricWithstand {
    #[serde(deserialize_with = "lenient::text")]
    pub p1_ground: String,
    #[serde(deserialize_with = "lenient::text")]
    pub p2_ground: String,
    #[serde(deserialize_with = "lenient::text")]
    pub p3_ground: String,
    #[serde(deserialize_with = "lenient::text")]
    pub units: String,
    #[serde(deserialize_with = "lenient::text")]
    pub test_voltage: String,
    #[serde(deserialize_with = "lenient::text")]
    pub test_duration: String,
}

impl Default for DielectricWithstand {
    fn default() -> Self {
        Self {
            p1_ground: String::new(),
            p2_ground: String::new(),
            p3_ground: String::new(),
            units: "μA".to_string(),
            test_voltage: String::new(),
            test_duration: "1 Min.".to_string(),
        }
    }
}

/// 열린 상태 진공 건전성 (극별 누설 전류).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VacuumIntegrity {
    #[serde(flatten)]
    pub readings: PhaseReadingsWithUnits,
    #[serde(deserialize_with = "lenient::text")]
    pub test_voltage: String,
    #[serde(deserialize_with = "lenient::text")]
    pub test_duration: String,
}

impl Default for VacuumIntegrity {
    fn default() -> Self {
        Self {
            readings: PhaseReadingsWithUnits::with_units("μA"),
            test_voltage: String::new(),
            test_duration: "1 Min.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreakerTestEquipment {
    #[serde(deserialize_with = "lenient::group")]
    pub insulation_resistance_tester: TestInstrument,
    #[serde(deserialize_with = "lenient::group")]
    pub micro_ohmmeter: TestInstrument,
    #[serde(deserialize_with = "lenient::group")]
    pub hi_pot_tester: TestInstrument,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MvCircuitBreakerReport {
    #[serde(flatten)]
    pub header: ReportHeader,
    #[serde(deserialize_with = "lenient::group")]
    pub temperature: TemperatureReading,
    #[serde(flatten)]
    pub nameplate: BreakerNameplate,
    /// NETA 항목 id → 결과
    #[serde(deserialize_with = "lenient::group")]
    pub visual_mechanical_inspection: BTreeMap<String, String>,
    #[serde(deserialize_with = "lenient::text")]
    pub counter_reading_as_found: String,
    #[serde(deserialize_with = "lenient::text")]
    pub counter_reading_as_left: String,
    #[serde(deserialize_with = "lenient::group")]
    pub contact_resistance: PhaseReadingsWithUnits,
    #[serde(deserialize_with = "lenient::group")]
    pub insulation_resistance_measured: BreakerInsulation,
    #[serde(deserialize_with = "lenient::group")]
    pub insulation_resistance_corrected: BreakerInsulationValues,
    #[serde(deserialize_with = "lenient::group")]
    pub dielectric_withstand_closed: DielectricWithstand,
    #[serde(deserialize_with = "lenient::group")]
    pub vacuum_integrity_open: VacuumIntegrity,
    #[serde(deserialize_with = "lenient::group")]
    pub test_equipment: BreakerTestEquipment,
    #[serde(deserialize_with = "lenient::text")]
    pub comments: String,
}

impl Default for MvCircuitBreakerReport {
    fn default() -> Self {
        Self {
            header: ReportHeader::default(),
            temperature: TemperatureReading::new(68.0, 20.0, 1.0, Some(80.0)),
            nameplate: BreakerNameplate::default(),
            visual_mechanical_inspection: VISUAL_IDS
                .iter()
                .map(|id| (id.to_string(), String::new()))
                .collect(),
            counter_reading_as_found: String::new(),
            counter_reading_as_left: String::new(),
            contact_resistance: PhaseReadingsWithUnits::with_units("μΩ"),
            insulation_resistance_measured: BreakerInsulation::default(),
            insulation_resistance_corrected: BreakerInsulationValues::default(),
            dielectric_withstand_closed: DielectricWithstand::default(),
            vacuum_integrity_open: VacuumIntegrity::default(),
            test_equipment: BreakerTestEquipment::default(),
            comments: String::new(),
        }
    }
}

impl ReportForm for MvCircuitBreakerReport {
    const KIND: ReportKind = ReportKind::MediumVoltageCircuitBreaker;
    const PROFILE: TemperatureProfile = STANDARD_PROFILE;
    const NON_NUMERIC: NonNumeric = NonNumeric::PassThrough;
    const KEY_ALIASES: &'static [(&'static str, &'static str)] = &[
        ("visual_mechanical_inspection", "visualMechanicalInspection"),
        ("contact_resistance", "contactResistance"),
        ("insulation_resistance_measured", "insulationResistanceMeasured"),
        ("dielectric_withstand_closed", "dielectricWithstandClosed"),
        ("vacuum_integrity_open", "vacuumIntegrityOpen"),
        ("test_equipment", "testEquipment"),
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
        self.insulation_resistance_corrected = self
            .insulation_resistance_measured
            .values
            .corrected(tcf, Self::NON_NUMERIC);
    }

    fn into_record(self) -> ReportRecord {
        ReportRecord::MediumVoltageCircuitBreaker(self)
    }
}
