//! 7.2.2 유입 변압기 육안·기계·절연저항 시험 (ATS 25).

use serde::{Deserialize, Serialize};

use super::common::{
    acceptance_label, inspection_items, lenient, InspectionItem, ReportHeader, TemperatureReading,
    TestInstrument,
};
use super::{ReportForm, ReportKind, ReportRecord};
use crate::correction::{
    apply_correction_with, dielectric_absorption_ratio, polarization_index, ratios_acceptable,
    NonNumeric,
};
use crate::tcf::profile::ATS25_TRANSFORMER_PROFILE;
use crate::tcf::TemperatureProfile;

const VISUAL_ITEMS: &[(&str, &str)] = &[
    ("7.2.2.A.1", "Compare equipment nameplate data with drawings."),
    ("7.2.2.A.2", "Inspect physical and mechanical condition."),
    ("7.2.2.A.3", "Inspect impact recorder prior to unloading."),
    ("7.2.2.A.5", "Inspect anchorage, alignment, and grounding."),
    ("7.2.2.A.6", "Verify the presence of PCB content labeling."),
    ("7.2.2.A.7", "Verify removal of any shipping bracing after placement."),
    ("7.2.2.A.8", "Verify the bushings are clean."),
    ("7.2.2.A.9", "Verify that alarm, control, and trip settings on temperature and level indicators are as specified."),
    ("7.2.2.A.10", "Verify operation of alarm, control, and trip circuits from temperature and level indicators, pressure relief device, gas accumulator, and fault pressure relay."),
    ("7.2.2.A.11", "Verify that cooling fans and pumps operate correctly and have appropriate overcurrent protection."),
    ("7.2.2.A.12", "Verify tightness of accessible bolted electrical connections by calibrated torque-wrench method."),
    ("7.2.2.A.13", "Verify correct liquid level in tanks and bushings."),
    ("7.2.2.A.14", "Verify valves are in the correct operating position."),
    ("7.2.2.A.15", "Verify that positive pressure is maintained on gas-blanketed transformers."),
    ("7.2.2.A.16", "Perform inspections and mechanical tests as recommended by the manufacturer."),
    ("7.2.2.A.17", "Test load tap-changer in accordance with Section 7.12.3."),
    ("7.2.2.A.18", "Verify presence of transformer surge arresters."),
    ("7.2.2.A.19", "Verify de-energized tap-changer position is left as specified."),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ats25Nameplate {
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
    #[serde(deserialize_with = "lenient::text")]
    pub primary_voltage1: String,
    #[serde(deserialize_with = "lenient::text")]
    pub primary_voltage2: String,
    #[serde(deserialize_with = "lenient::text")]
    pub secondary_voltage1: String,
    #[serde(deserialize_with = "lenient::text")]
    pub secondary_voltage2: String,
    #[serde(deserialize_with = "lenient::text")]
    pub primary_winding_connection: String,
    #[serde(deserialize_with = "lenient::text")]
    pub secondary_winding_connection: String,
    #[serde(deserialize_with = "lenient::text")]
    pub primary_winding_material: String,
    #[serde(deserialize_with = "lenient::text")]
    pub secondary_winding_material: String,
    /// 탭 1~7 전압
    #[serde(deserialize_with = "lenient::group")]
    pub tap_voltages: [String; 7],
    #[serde(deserialize_with = "lenient::text")]
    pub tap_position_left: String,
}

impl Default for Ats25Nameplate {
    fn default() -> Self {
        Self {
            manufacturer: String::new(),
            catalog_number: String::new(),
            serial_number: String::new(),
            kva: String::new(),
            temp_rise: String::new(),
            impedance: String::new(),
            primary_voltage1: String::new(),
            primary_voltage2: String::new(),
            secondary_voltage1: String::new(),
            secondary_voltage2: String::new(),
            primary_winding_connection: "Delta".to_string(),
            secondary_winding_connection: "Wye".to_string(),
            primary_winding_material: String::new(),
            secondary_winding_material: String::new(),
            tap_voltages: Default::default(),
            tap_position_left: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndicatorGaugeValues {
    #[serde(deserialize_with = "lenient::text")]
    pub oil_level: String,
    #[serde(deserialize_with = "lenient::text")]
    pub tank_pressure: String,
    #[serde(deserialize_with = "lenient::text")]
    pub oil_temperature: String,
    #[serde(deserialize_with = "lenient::text")]
    pub winding_temperature: String,
    #[serde(deserialize_with = "lenient::text")]
    pub oil_temp_range: String,
    #[serde(deserialize_with = "lenient::text")]
    pub winding_temp_range: String,
}

/// 권선 조합 하나의 30초/1분/10분 측정값과 보정값.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsulationRow {
    #[serde(deserialize_with = "lenient::text")]
    pub winding_under_test: String,
    #[serde(deserialize_with = "lenient::text")]
    pub test_voltage: String,
    #[serde(rename = "measured05Min", deserialize_with = "lenient::text")]
    pub measured_05_min: String,
    #[serde(rename = "measured1Min", deserialize_with = "lenient::text")]
    pub measured_1_min: String,
    #[serde(rename = "measured10Min", deserialize_with = "lenient::text")]
    pub measured_10_min: String,
    #[serde(rename = "corrected05Min", deserialize_with = "lenient::text")]
    pub corrected_05_min: String,
    #[serde(rename = "corrected1Min", deserialize_with = "lenient::text")]
    pub corrected_1_min: String,
    #[serde(rename = "corrected10Min", deserialize_with = "lenient::text")]
    pub corrected_10_min: String,
}

impl InsulationRow {
    fn new(winding: &str, test_voltage: &str) -> Self {
        Self {
            winding_under_test: winding.to_string(),
            test_voltage: test_voltage.to_string(),
            ..Self::default()
        }
    }
}

/// 1차-대지, 2차-대지, 1차-2차 세 줄.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsulationRows(pub Vec<InsulationRow>);

impl Default for InsulationRows {
    fn default() -> Self {
        Self(vec![
            InsulationRow::new("Primary to Ground", "5000V"),
            InsulationRow::new("Secondary to Ground", "1000V"),
            InsulationRow::new("Primary to Secondary", "5000V"),
        ])
    }
}

/// 흡수비 또는 성극지수 요약 행.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RatioSummary {
    #[serde(deserialize_with = "lenient::text")]
    pub primary: String,
    #[serde(deserialize_with = "lenient::text")]
    pub secondary: String,
    #[serde(deserialize_with = "lenient::text")]
    pub pri_to_sec: String,
    /// `Pass` / `Fail` / 빈 문자열
    #[serde(deserialize_with = "lenient::text")]
    pub acceptable: String,
}

impl RatioSummary {
    /// 원시 행에서 계산되는 칸만 덮어쓴다. 계산할 수 없는 칸은 운영자가 적은 값을 둔다.
    fn refresh(&mut self, rows: &[InsulationRow], ratio: impl Fn(&InsulationRow) -> String) {
        let at = |i: usize| rows.get(i).map(&ratio).unwrap_or_default();
        let derived = [at(0), at(1), at(2)];
        for (cell, value) in [&mut self.primary, &mut self.secondary, &mut self.pri_to_sec]
            .into_iter()
            .zip(&derived)
        {
            if !value.is_empty() {
                *cell = value.clone();
            }
        }
        if let Some(ok) = ratios_acceptable(derived.iter().map(String::as_str)) {
            self.acceptable = acceptance_label(Some(ok), "Pass", "Fail");
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ats25TestEquipment {
    #[serde(deserialize_with = "lenient::group")]
    pub megohmmeter: TestInstrument,
    #[serde(deserialize_with = "lenient::group")]
    pub ttr_test_set: TestInstrument,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LiquidFilledXfmrAts25Report {
    #[serde(flatten)]
    pub header: ReportHeader,
    #[serde(deserialize_with = "lenient::group")]
    pub temperature: TemperatureReading,
    #[serde(deserialize_with = "lenient::group")]
    pub nameplate: Ats25Nameplate,
    #[serde(deserialize_with = "lenient::group")]
    pub visual_inspection_items: Vec<InspectionItem>,
    #[serde(deserialize_with = "lenient::group")]
    pub indicator_gauge_values: IndicatorGaugeValues,
    #[serde(deserialize_with = "lenient::text")]
    pub insulation_temperature: String,
    #[serde(deserialize_with = "lenient::text")]
    pub insulation_unit: String,
    #[serde(deserialize_with = "lenient::group")]
    pub insulation_rows: InsulationRows,
    #[serde(deserialize_with = "lenient::group")]
    pub dielectric_absorption: RatioSummary,
    #[serde(deserialize_with = "lenient::group")]
    pub polarization_index: RatioSummary,
    #[serde(deserialize_with = "lenient::group")]
    pub test_equipment: Ats25TestEquipment,
    #[serde(deserialize_with = "lenient::text")]
    pub visual_mechanical_comments: String,
    #[serde(deserialize_with = "lenient::text")]
    pub comments: String,
}

impl Default for LiquidFilledXfmrAts25Report {
    fn default() -> Self {
        Self {
            header: ReportHeader::default(),
            temperature: TemperatureReading::default(),
            nameplate: Ats25Nameplate::default(),
            visual_inspection_items: inspection_items(VISUAL_ITEMS, "Select One"),
            indicator_gauge_values: IndicatorGaugeValues::default(),
            insulation_temperature: String::new(),
            insulation_unit: "MΩ".to_string(),
            insulation_rows: InsulationRows::default(),
            dielectric_absorption: RatioSummary::default(),
            polarization_index: RatioSummary::default(),
            test_equipment: Ats25TestEquipment::default(),
            visual_mechanical_comments: String::new(),
            comments: String::new(),
        }
    }
}

impl ReportForm for LiquidFilledXfmrAts25Report {
    const KIND: ReportKind = ReportKind::LiquidFilledXfmrAts25;
    const PROFILE: TemperatureProfile = ATS25_TRANSFORMER_PROFILE;
    const NON_NUMERIC: NonNumeric = NonNumeric::Blank;
    const KEY_ALIASES: &'static [(&'static str, &'static str)] = &[
        ("nameplate_data", "nameplate"),
        ("visual_inspection_items", "visualInspectionItems"),
        ("indicator_gauge_values", "indicatorGaugeValues"),
        ("test_equipment_used", "testEquipment"),
        ("test_equipment", "testEquipment"),
        ("insulation_rows", "insulationRows"),
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
        for row in &mut self.insulation_rows.0 {
            row.corrected_05_min = apply_correction_with(&row.measured_05_min, tcf, rule);
            row.corrected_1_min = apply_correction_with(&row.measured_1_min, tcf, rule);
            row.corrected_10_min = apply_correction_with(&row.measured_10_min, tcf, rule);
        }
        let rows = &self.insulation_rows.0;
        self.dielectric_absorption.refresh(rows, |r| {
            dielectric_absorption_ratio(&r.measured_05_min, &r.measured_1_min)
        });
        self.polarization_index.refresh(rows, |r| {
            polarization_index(&r.measured_1_min, &r.measured_10_min)
        });
    }

    fn into_record(self) -> ReportRecord {
        ReportRecord::LiquidFilledXfmrAts25(self)
    }
}
