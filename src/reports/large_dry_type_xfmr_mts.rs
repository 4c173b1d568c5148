//! 7.2.1.2 대형 건식 변압기 육안·기계·절연저항 시험 (MTS).
//!
//! 화씨 → 섭씨는 계산이 아니라 대응표의 가장 가까운 행으로 정하고, 건식 권선용 TCF 표를 쓴다.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{acceptance_label, lenient, ReportHeader, TemperatureReading, TestInstrument};
use super::{ReportForm, ReportKind, ReportRecord};
use crate::correction::{
    apply_correction_with, dielectric_absorption_ratio, polarization_index, ratio_deviation,
    ratios_acceptable, turns_ratio, turns_ratio_assessment, NonNumeric,
};
use crate::tcf::profile::DRY_TYPE_PROFILE;
use crate::tcf::TemperatureProfile;

const VISUAL_IDS: [&str; 11] = [
    "7.2.1.2.A.1",
    "7.2.1.2.A.2",
    "7.2.1.2.A.3*",
    "7.2.1.2.A.4",
    "7.2.1.2.A.5*",
    "7.2.1.2.A.6",
    "7.2.1.2.A.7",
    "7.2.1.2.A.8",
    "7.2.1.2.A.9",
    "7.2.1.2.A.10",
    "7.2.1.2.A.11",
];

const TAP_COUNT: usize = 7;

/// 점검 항목 id의 설명. 모르는 id는 `None`.
pub fn visual_inspection_description(id: &str) -> Option<&'static str> {
    let text = match id {
        "7.2.1.2.A.1" => "Inspect physical and mechanical condition.",
        "7.2.1.2.A.2" => "Inspect anchorage, alignment, and grounding.",
        "7.2.1.2.A.3*" => "Prior to cleaning the unit, perform as-found tests.",
        "7.2.1.2.A.4" => "Clean the unit.",
        "7.2.1.2.A.5*" => {
            "Verify that control and alarm settings on temperature indicators are as specified."
        }
        "7.2.1.2.A.6" => "Verify that cooling fans operate correctly.",
        "7.2.1.2.A.7" => {
            "Inspect bolted electrical connections for high resistance using a low-resistance ohmmeter."
        }
        "7.2.1.2.A.8" => {
            "Perform specific inspections and mechanical tests as recommended by the manufacturer."
        }
        "7.2.1.2.A.9" => "Perform as-left tests.",
        "7.2.1.2.A.10" => "Verify that as-left tap connections are as specified.",
        "7.2.1.2.A.11" => "Verify the presence of surge arresters.",
        _ => return None,
    };
    Some(text)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindingData {
    #[serde(deserialize_with = "lenient::text")]
    pub volts: String,
    #[serde(deserialize_with = "lenient::text")]
    pub volts_secondary: String,
    #[serde(deserialize_with = "lenient::text")]
    pub connection: String,
    #[serde(deserialize_with = "lenient::text")]
    pub material: String,
}

impl WindingData {
    fn new(connection: &str) -> Self {
        Self {
            connection: connection.to_string(),
            material: "Aluminum".to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TapConfiguration {
    pub positions: Vec<u32>,
    pub voltages: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub current_position: String,
    #[serde(deserialize_with = "lenient::text")]
    pub current_position_secondary: String,
    #[serde(deserialize_with = "lenient::text")]
    pub tap_volts_specific: String,
    #[serde(deserialize_with = "lenient::text")]
    pub tap_percent_specific: String,
}

impl Default for TapConfiguration {
    fn default() -> Self {
        Self {
            positions: (1..=TAP_COUNT as u32).collect(),
            voltages: vec![String::new(); TAP_COUNT],
            current_position: "3".to_string(),
            current_position_secondary: String::new(),
            tap_volts_specific: String::new(),
            tap_percent_specific: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DryTypeNameplate {
    #[serde(deserialize_with = "lenient::text")]
    pub manufacturer: String,
    #[serde(deserialize_with = "lenient::text")]
    pub catalog_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub serial_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub kva: String,
    #[serde(deserialize_with = "lenient::text")]
    pub temp_rise: String,
    #[serde(deserialize_with = "lenient::text")]
    pub impedance: String,
    #[serde(deserialize_with = "lenient::group")]
    pub primary: WindingData,
    #[serde(deserialize_with = "lenient::group")]
    pub secondary: WindingData,
    #[serde(deserialize_with = "lenient::group")]
    pub tap_configuration: TapConfiguration,
}

impl Default for DryTypeNameplate {
    fn default() -> Self {
        Self {
            manufacturer: String::new(),
            catalog_number: String::new(),
            serial_number: String::new(),
            kva: String::new(),
            temp_rise: String::new(),
            impedance: String::new(),
            primary: WindingData::new("Delta"),
            secondary: WindingData::new("Wye"),
            tap_configuration: TapConfiguration::default(),
        }
    }
}

/// 30초 / 1분 / 10분 값.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimedReadings {
    #[serde(deserialize_with = "lenient::text")]
    pub half_minute: String,
    #[serde(deserialize_with = "lenient::text")]
    pub one_minute: String,
    #[serde(deserialize_with = "lenient::text")]
    pub ten_minute: String,
}

impl TimedReadings {
    fn corrected(&self, tcf: f64, rule: NonNumeric) -> Self {
        Self {
            half_minute: apply_correction_with(&self.half_minute, tcf, rule),
            one_minute: apply_correction_with(&self.one_minute, tcf, rule),
            ten_minute: apply_correction_with(&self.ten_minute, tcf, rule),
        }
    }
}

/// 권선 조합 하나의 시험.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindingTest {
    #[serde(deserialize_with = "lenient::text")]
    pub test_voltage: String,
    #[serde(deserialize_with = "lenient::text")]
    pub unit: String,
    #[serde(deserialize_with = "lenient::group")]
    pub readings: TimedReadings,
    #[serde(deserialize_with = "lenient::group")]
    pub corrected: TimedReadings,
    #[serde(deserialize_with = "lenient::text")]
    pub dielectric_absorption: String,
    #[serde(deserialize_with = "lenient::text")]
    pub polarization_index: String,
}

impl WindingTest {
    fn new(test_voltage: &str) -> Self {
        Self {
            test_voltage: test_voltage.to_string(),
            unit: "MΩ".to_string(),
            readings: TimedReadings::default(),
            corrected: TimedReadings::default(),
            dielectric_absorption: String::new(),
            polarization_index: String::new(),
        }
    }

    fn derive(&mut self, tcf: f64, rule: NonNumeric) {
        self.corrected = self.readings.corrected(tcf, rule);
        self.dielectric_absorption =
            dielectric_absorption_ratio(&self.readings.half_minute, &self.readings.one_minute);
        self.polarization_index =
            polarization_index(&self.readings.one_minute, &self.readings.ten_minute);
    }
}

impl Default for WindingTest {
    fn default() -> Self {
        Self::new("5000V")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DryTypeInsulation {
    #[serde(deserialize_with = "lenient::text")]
    pub temperature: String,
    #[serde(deserialize_with = "lenient::group")]
    pub primary_to_ground: WindingTest,
    #[serde(deserialize_with = "lenient::group")]
    pub secondary_to_ground: WindingTest,
    #[serde(deserialize_with = "lenient::group")]
    pub primary_to_secondary: WindingTest,
    /// `Yes` / `No`
    #[serde(deserialize_with = "lenient::text")]
    pub dielectric_absorption_acceptable: String,
    #[serde(deserialize_with = "lenient::text")]
    pub polarization_index_acceptable: String,
}

impl Default for DryTypeInsulation {
    fn default() -> Self {
        Self {
            temperature: String::new(),
            primary_to_ground: WindingTest::new("5000V"),
            secondary_to_ground: WindingTest::new("1000V"),
            primary_to_secondary: WindingTest::new("5000V"),
            dielectric_absorption_acceptable: String::new(),
            polarization_index_acceptable: String::new(),
        }
    }
}

impl DryTypeInsulation {
    fn tests(&self) -> [&WindingTest; 3] {
        [&self.primary_to_ground, &self.secondary_to_ground, &self.primary_to_secondary]
    }

    fn derive(&mut self, tcf: f64, rule: NonNumeric) {
        for test in [
            &mut self.primary_to_ground,
            &mut self.secondary_to_ground,
            &mut self.primary_to_secondary,
        ] {
            test.derive(tcf, rule);
        }
        let dar = ratios_acceptable(self.tests().map(|t| t.dielectric_absorption.as_str()));
        let pi = ratios_acceptable(self.tests().map(|t| t.polarization_index.as_str()));
        // 비율이 하나도 없으면 `No`
        self.dielectric_absorption_acceptable =
            acceptance_label(Some(dar.unwrap_or(false)), "Yes", "No");
        self.polarization_index_acceptable =
            acceptance_label(Some(pi.unwrap_or(false)), "Yes", "No");
    }
}

/// 탭 하나의 권수비 시험 행.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TurnsRatioTap {
    #[serde(deserialize_with = "lenient::text")]
    pub tap: String,
    #[serde(deserialize_with = "lenient::text")]
    pub nameplate_voltage: String,
    #[serde(deserialize_with = "lenient::text")]
    pub calculated_ratio: String,
    #[serde(rename = "phaseA_TTR", deserialize_with = "lenient::text")]
    pub phase_a_ttr: String,
    #[serde(rename = "phaseA_Dev", deserialize_with = "lenient::text")]
    pub phase_a_dev: String,
    #[serde(rename = "phaseB_TTR", deserialize_with = "lenient::text")]
    pub phase_b_ttr: String,
    #[serde(rename = "phaseB_Dev", deserialize_with = "lenient::text")]
    pub phase_b_dev: String,
    #[serde(rename = "phaseC_TTR", deserialize_with = "lenient::text")]
    pub phase_c_ttr: String,
    #[serde(rename = "phaseC_Dev", deserialize_with = "lenient::text")]
    pub phase_c_dev: String,
    #[serde(deserialize_with = "lenient::text")]
    pub assessment: String,
}

impl TurnsRatioTap {
    fn derive(&mut self, nameplate_voltage: &str, secondary_voltage: &str) {
        self.calculated_ratio = turns_ratio(nameplate_voltage, secondary_voltage);
        self.phase_a_dev = ratio_deviation(&self.calculated_ratio, &self.phase_a_ttr);
        self.phase_b_dev = ratio_deviation(&self.calculated_ratio, &self.phase_b_ttr);
        self.phase_c_dev = ratio_deviation(&self.calculated_ratio, &self.phase_c_ttr);
        let assessment =
            turns_ratio_assessment([&self.phase_a_dev, &self.phase_b_dev, &self.phase_c_dev]);
        // 편차가 다 나오지 않았으면 운영자 선택을 그대로 둔다
        if !assessment.is_empty() {
            self.assessment = assessment;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TurnsRatio {
    #[serde(deserialize_with = "lenient::text")]
    pub secondary_winding_voltage: String,
    pub taps: Vec<TurnsRatioTap>,
}

impl Default for TurnsRatio {
    fn default() -> Self {
        let taps = (1..=TAP_COUNT)
            .map(|i| TurnsRatioTap {
                tap: i.to_string(),
                assessment: "Select One".to_string(),
                ..TurnsRatioTap::default()
            })
            .collect();
        Self {
            secondary_winding_voltage: String::new(),
            taps,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DryTypeTestEquipment {
    #[serde(deserialize_with = "lenient::group")]
    pub megohmmeter: TestInstrument,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LargeDryTypeXfmrMtsReport {
    #[serde(flatten)]
    pub header: ReportHeader,
    #[serde(deserialize_with = "lenient::group")]
    pub temperature: TemperatureReading,
    #[serde(deserialize_with = "lenient::group")]
    pub nameplate_data: DryTypeNameplate,
    /// 항목 id → 결과, `{id}_comments` → 비고
    #[serde(deserialize_with = "lenient::group")]
    pub visual_inspection: BTreeMap<String, String>,
    #[serde(deserialize_with = "lenient::group")]
    pub insulation_resistance: DryTypeInsulation,
    #[serde(deserialize_with = "lenient::group")]
    pub turns_ratio: TurnsRatio,
    #[serde(deserialize_with = "lenient::group")]
    pub test_equipment: DryTypeTestEquipment,
    #[serde(deserialize_with = "lenient::text")]
    pub comments: String,
}

impl Default for LargeDryTypeXfmrMtsReport {
    fn default() -> Self {
        let visual_inspection = VISUAL_IDS
            .iter()
            .flat_map(|id| {
                [
                    (id.to_string(), "Select One".to_string()),
                    (format!("{id}_comments"), String::new()),
                ]
            })
            .collect();
        Self {
            header: ReportHeader::default(),
            temperature: TemperatureReading::new(70.0, 21.0, 0.775, Some(50.0)),
            nameplate_data: DryTypeNameplate::default(),
            visual_inspection,
            insulation_resistance: DryTypeInsulation::default(),
            turns_ratio: TurnsRatio::default(),
            test_equipment: DryTypeTestEquipment::default(),
            comments: String::new(),
        }
    }
}

impl ReportForm for LargeDryTypeXfmrMtsReport {
    const KIND: ReportKind = ReportKind::LargeDryTypeXfmrMts;
    const PROFILE: TemperatureProfile = DRY_TYPE_PROFILE;
    const NON_NUMERIC: NonNumeric = NonNumeric::BlankKeepQualifiers;
    const KEY_ALIASES: &'static [(&'static str, &'static str)] = &[
        ("nameplate", "nameplateData"),
        ("nameplate_data", "nameplateData"),
        ("visual_inspection", "visualInspection"),
        ("insulation_resistance", "insulationResistance"),
        ("turns_ratio", "turnsRatio"),
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
        self.insulation_resistance.derive(tcf, Self::NON_NUMERIC);

        let secondary = self.turns_ratio.secondary_winding_voltage.clone();
        let tap_voltages = &self.nameplate_data.tap_configuration.voltages;
        for (idx, tap) in self.turns_ratio.taps.iter_mut().enumerate() {
            if let Some(v) = tap_voltages.get(idx).filter(|v| !v.is_empty()) {
                tap.nameplate_voltage = v.clone();
            }
            let nameplate = tap.nameplate_voltage.clone();
            tap.derive(&nameplate, &secondary);
        }
    }

    fn into_record(self) -> ReportRecord {
        ReportRecord::LargeDryTypeXfmrMts(self)
    }
}
