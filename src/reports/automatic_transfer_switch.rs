//! 7.22.3 자동 절체 개폐기(ATS) 시험.

use serde::{Deserialize, Serialize};

use super::common::{
    inspection_items, lenient, InspectionItem, ReportHeader, TemperatureReading, TestInstrument,
};
use super::{ReportForm, ReportKind, ReportRecord};
use crate::correction::{apply_correction_with, NonNumeric};
use crate::tcf::profile::STANDARD_PROFILE;
use crate::tcf::TemperatureProfile;

const VISUAL_ITEMS: &[(&str, &str)] = &[
    ("7.22.3.A.1", "Compare equipment nameplate data with drawings and specifications."),
    ("7.22.3.A.2", "Inspect physical and mechanical condition."),
    ("7.22.3.A.3", "Inspect anchorage, alignment, grounding, and required clearances."),
    ("7.22.3.A.4", "Verify the unit is clean."),
    ("7.22.3.A.5", "Verify appropriate lubrication on moving current-carrying parts and on moving and sliding surfaces."),
    ("7.22.3.A.6", "Verify that manual transfer warnings are attached and visible."),
    ("7.22.3.A.7", "Verify tightness of all control connections."),
    ("7.22.3.A.8.1", "Use of low-resistance ohmmeter in accordance with Section 7.22.3.B.1."),
    ("7.22.3.A.9", "Perform manual transfer operation."),
    ("7.22.3.A.10", "Verify positive mechanical interlocking between normal and alternate sources."),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AtsNameplate {
    #[serde(deserialize_with = "lenient::text")]
    pub nameplate_manufacturer: String,
    #[serde(deserialize_with = "lenient::text")]
    pub nameplate_model_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub nameplate_catalog_no: String,
    #[serde(deserialize_with = "lenient::text")]
    pub nameplate_serial_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub nameplate_system_voltage: String,
    #[serde(deserialize_with = "lenient::text")]
    pub nameplate_rated_voltage: String,
    #[serde(deserialize_with = "lenient::text")]
    pub nameplate_rated_current: String,
    #[serde(rename = "nameplateSCCR", deserialize_with = "lenient::text")]
    pub nameplate_sccr: String,
}

/// 한 시험 구간의 P1/P2/P3/중성선 측정값과 보정값.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AtsInsulationRow {
    #[serde(deserialize_with = "lenient::text")]
    pub p1_reading: String,
    #[serde(deserialize_with = "lenient::text")]
    pub p1_corrected: String,
    #[serde(deserialize_with = "lenient::text")]
    pub p2_reading: String,
    #[serde(deserialize_with = "lenient::text")]
    pub p2_corrected: String,
    #[serde(deserialize_with = "lenient::text")]
    pub p3_reading: String,
    #[serde(deserialize_with = "lenient::text")]
    pub p3_corrected: String,
    #[serde(deserialize_with = "lenient::text")]
    pub neutral_reading: String,
    #[serde(deserialize_with = "lenient::text")]
    pub neutral_corrected: String,
    #[serde(deserialize_with = "lenient::text")]
    pub units: String,
}

impl Default for AtsInsulationRow {
    fn default() -> Self {
        Self {
            p1_reading: String::new(),
            p1_corrected: String::new(),
            p2_reading: String::new(),
            p2_corrected: String::new(),
            p3_reading: String::new(),
            p3_corrected: String::new(),
            neutral_reading: String::new(),
            neutral_corrected: String::new(),
            units: "MΩ".to_string(),
        }
    }
}

impl AtsInsulationRow {
    fn derive(&mut self, tcf: f64, rule: NonNumeric) {
        self.p1_corrected = apply_correction_with(&self.p1_reading, tcf, rule);
        self.p2_corrected = apply_correction_with(&self.p2_reading, tcf, rule);
        self.p3_corrected = apply_correction_with(&self.p3_reading, tcf, rule);
        self.neutral_corrected = apply_correction_with(&self.neutral_reading, tcf, rule);
    }
}

/// 상용(normal) / 비상(emergency) 측 각각의 극간·극-중성선·극-대지·선-부하 시험.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AtsInsulationResistance {
    #[serde(deserialize_with = "lenient::group")]
    pub pole_to_pole_normal_closed: AtsInsulationRow,
    #[serde(deserialize_with = "lenient::group")]
    pub pole_to_pole_emergency_closed: AtsInsulationRow,
    #[serde(deserialize_with = "lenient::group")]
    pub pole_to_neutral_normal_closed: AtsInsulationRow,
    #[serde(deserialize_with = "lenient::group")]
    pub pole_to_neutral_emergency_closed: AtsInsulationRow,
    #[serde(deserialize_with = "lenient::group")]
    pub pole_to_ground_normal_closed: AtsInsulationRow,
    #[serde(deserialize_with = "lenient::group")]
    pub pole_to_ground_emergency_closed: AtsInsulationRow,
    #[serde(deserialize_with = "lenient::group")]
    pub line_to_load_normal_open: AtsInsulationRow,
    #[serde(deserialize_with = "lenient::group")]
    pub line_to_load_emergency_open: AtsInsulationRow,
}

impl AtsInsulationResistance {
    pub fn rows_mut(&mut self) -> [&mut AtsInsulationRow; 8] {
        [
            &mut self.pole_to_pole_normal_closed,
            &mut self.pole_to_pole_emergency_closed,
            &mut self.pole_to_neutral_normal_closed,
            &mut self.pole_to_neutral_emergency_closed,
            &mut self.pole_to_ground_normal_closed,
            &mut self.pole_to_ground_emergency_closed,
            &mut self.line_to_load_normal_open,
            &mut self.line_to_load_emergency_open,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtsContact {
    #[serde(deserialize_with = "lenient::text")]
    pub p1: String,
    #[serde(deserialize_with = "lenient::text")]
    pub p2: String,
    #[serde(deserialize_with = "lenient::text")]
    pub p3: String,
    #[serde(deserialize_with = "lenient::text")]
    pub neutral: String,
    #[serde(deserialize_with = "lenient::text")]
    pub units: String,
}

impl Default for AtsContact {
    fn default() -> Self {
        Self {
            p1: String::new(),
            p2: String::new(),
            p3: String::new(),
            neutral: String::new(),
            units: "µΩ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtsContactResistance {
    #[serde(deserialize_with = "lenient::group")]
    pub normal: AtsContact,
    #[serde(deserialize_with = "lenient::group")]
    pub emergency: AtsContact,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AtsTestEquipment {
    #[serde(deserialize_with = "lenient::group")]
    pub megohmmeter: TestInstrument,
    #[serde(deserialize_with = "lenient::group")]
    pub low_resistance_ohmmeter: TestInstrument,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutomaticTransferSwitchReport {
    #[serde(flatten)]
    pub header: ReportHeader,
    #[serde(deserialize_with = "lenient::group")]
    pub temperature: TemperatureReading,
    #[serde(flatten)]
    pub nameplate: AtsNameplate,
    #[serde(deserialize_with = "lenient::group")]
    pub visual_inspection_items: Vec<InspectionItem>,
    #[serde(deserialize_with = "lenient::text")]
    pub insulation_test_voltage: String,
    #[serde(deserialize_with = "lenient::group")]
    pub insulation_resistance: AtsInsulationResistance,
    #[serde(deserialize_with = "lenient::group")]
    pub contact_resistance: AtsContactResistance,
    #[serde(deserialize_with = "lenient::group")]
    pub test_equipment_used: AtsTestEquipment,
    #[serde(deserialize_with = "lenient::text")]
    pub comments: String,
}

impl Default for AutomaticTransferSwitchReport {
    fn default() -> Self {
        Self {
            header: ReportHeader::default(),
            temperature: TemperatureReading::new(68.0, 20.0, 1.0, Some(50.0)),
            nameplate: AtsNameplate::default(),
            visual_inspection_items: inspection_items(VISUAL_ITEMS, "Select One"),
            insulation_test_voltage: "1000V".to_string(),
            insulation_resistance: AtsInsulationResistance::default(),
            contact_resistance: AtsContactResistance::default(),
            test_equipment_used: AtsTestEquipment::default(),
            comments: String::new(),
        }
    }
}

impl ReportForm for AutomaticTransferSwitchReport {
    const KIND: ReportKind = ReportKind::AutomaticTransferSwitch;
    const PROFILE: TemperatureProfile = STANDARD_PROFILE;
    const NON_NUMERIC: NonNumeric = NonNumeric::PassThrough;
    const KEY_ALIASES: &'static [(&'static str, &'static str)] = &[
        ("visual_inspection_items", "visualInspectionItems"),
        ("insulation_test_voltage", "insulationTestVoltage"),
        ("insulation_resistance", "insulationResistance"),
        ("contact_resistance", "contactResistance"),
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
        for row in self.insulation_resistance.rows_mut() {
            row.derive(tcf, Self::NON_NUMERIC);
        }
    }

    fn into_record(self) -> ReportRecord {
        ReportRecord::AutomaticTransferSwitch(self)
    }
}
