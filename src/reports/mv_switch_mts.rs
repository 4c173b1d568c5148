//! 7.5.1.2 중전압 개폐기 시험 (MTS).
//!
//! 섭씨 입력이 기준이며, 10°C와 15~30°C만 있는 축약 TCF 표를 쓴다.

use serde::{Deserialize, Serialize};

use super::common::{
    inspection_items, lenient, InspectionItem, PhaseReadings, ReportHeader, TemperatureReading,
    TestInstrument,
};
use super::{ReportForm, ReportKind, ReportRecord};
use crate::correction::NonNumeric;
use crate::tcf::profile::SWITCH_MTS_PROFILE;
use crate::tcf::TemperatureProfile;

const VISUAL_ITEMS: &[(&str, &str)] = &[
    ("7.5.1.2.A.1", "Inspect physical and mechanical condition."),
    ("7.5.1.2.A.2", "Inspect anchorage, alignment, and grounding."),
    ("7.5.1.2.A.4", "Clean the unit."),
    ("7.5.1.2.A.5", "Verify correct blade alignment, blade penetration, travel stops, arc interrupter operation, and mechanical operation."),
    ("7.5.1.2.A.6", "Verify that fuse sizes and types are in accordance with drawings, short-circuit studies, and"),
    ("7.5.1.2.A.7", "Verify that expulsion-limiting devices are in place on all fuses having expulsion-type elements."),
    ("7.5.1.2.A.8", "Verify that each fuseholder has adequate mechanical support and contact integrity."),
    ("7.5.1.2.A.9.1", "Use of a low-resistance ohmmeter in accordance with Section 7.5.1.2.B.1."),
    ("7.5.1.2.A.10", "Verify operation and sequencing of interlocking systems."),
    ("7.5.1.2.A.11", "Verify that phase-barrier mounting is intact."),
    ("7.5.1.2.A.12", "Verify correct operation of all indicating and control devices."),
    ("7.5.1.2.A.13", "Use appropriate lubrication on moving current-carrying parts and on moving and sliding surfaces."),
];

/// (시험 구간, 개폐 상태)
const INSULATION_ROWS: [(&str, &str); 3] = [
    ("Pole to Pole", "Closed"),
    ("Pole to Frame", "Closed"),
    ("Line to Load", "Open"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwitchNameplate {
    #[serde(deserialize_with = "lenient::text")]
    pub manufacturer: String,
    #[serde(deserialize_with = "lenient::text")]
    pub catalog_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub serial_number: String,
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub switch_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub mfg_date: String,
    #[serde(deserialize_with = "lenient::text")]
    pub ic_rating_ka: String,
    #[serde(deserialize_with = "lenient::text")]
    pub rated_voltage_kv: String,
    #[serde(deserialize_with = "lenient::text")]
    pub operating_voltage_kv: String,
    #[serde(deserialize_with = "lenient::text")]
    pub ampacity: String,
    #[serde(deserialize_with = "lenient::text")]
    pub impulse_bil: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FuseData {
    #[serde(deserialize_with = "lenient::text")]
    pub manufacturer: String,
    #[serde(deserialize_with = "lenient::text")]
    pub catalog_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub class_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub rated_voltage_kv: String,
    #[serde(deserialize_with = "lenient::text")]
    pub ampacity_a: String,
    #[serde(deserialize_with = "lenient::text")]
    pub ic_rating_ka: String,
}

/// 개폐기 / 퓨즈 / 개폐기+퓨즈 접촉 저항.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactResistanceSet {
    #[serde(deserialize_with = "lenient::group")]
    pub switch: PhaseReadings,
    #[serde(deserialize_with = "lenient::group")]
    pub fuse: PhaseReadings,
    #[serde(deserialize_with = "lenient::group")]
    pub switch_fuse: PhaseReadings,
    #[serde(deserialize_with = "lenient::text")]
    pub units: String,
}

impl Default for ContactResistanceSet {
    fn default() -> Self {
        Self {
            switch: PhaseReadings::default(),
            fuse: PhaseReadings::default(),
            switch_fuse: PhaseReadings::default(),
            units: "µΩ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchInsulationRow {
    #[serde(deserialize_with = "lenient::text")]
    pub label: String,
    #[serde(deserialize_with = "lenient::text")]
    pub position: String,
    #[serde(deserialize_with = "lenient::group")]
    pub readings: PhaseReadings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwitchInsulation {
    #[serde(deserialize_with = "lenient::text")]
    pub test_voltage: String,
    pub rows: Vec<SwitchInsulationRow>,
}

impl Default for SwitchInsulation {
    fn default() -> Self {
        Self {
            test_voltage: "2500V".to_string(),
            rows: INSULATION_ROWS
                .iter()
                .map(|(label, position)| SwitchInsulationRow {
                    label: label.to_string(),
                    position: position.to_string(),
                    readings: PhaseReadings::default(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectedRow {
    #[serde(deserialize_with = "lenient::text")]
    pub label: String,
    #[serde(deserialize_with = "lenient::group")]
    pub readings: PhaseReadings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchInsulationCorrected {
    pub rows: Vec<CorrectedRow>,
}

impl Default for SwitchInsulationCorrected {
    fn default() -> Self {
        Self {
            rows: INSULATION_ROWS
                .iter()
                .map(|(label, _)| CorrectedRow {
                    label: label.to_string(),
                    readings: PhaseReadings::default(),
                })
                .collect(),
        }
    }
}

/// 내전압 시험 (극별 누설 전류).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwitchDielectric {
    #[serde(deserialize_with = "lenient::text")]
    pub test_voltage: String,
    #[serde(deserialize_with = "lenient::text")]
    pub duration: String,
    #[serde(deserialize_with = "lenient::text")]
    pub units: String,
    #[serde(flatten)]
    pub readings: PhaseReadings,
}

impl Default for SwitchDielectric {
    fn default() -> Self {
        Self {
            test_voltage: "16.1".to_string(),
            duration: "1 Min.".to_string(),
            units: "mA".to_string(),
            readings: PhaseReadings::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwitchEquipmentUsed {
    #[serde(deserialize_with = "lenient::group")]
    pub megohmmeter: TestInstrument,
    #[serde(deserialize_with = "lenient::group")]
    pub low_resistance_ohmmeter: TestInstrument,
    #[serde(deserialize_with = "lenient::group")]
    pub hipot: TestInstrument,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MvSwitchMtsReport {
    #[serde(flatten)]
    pub header: ReportHeader,
    #[serde(deserialize_with = "lenient::group")]
    pub temperature: TemperatureReading,
    #[serde(deserialize_with = "lenient::group")]
    pub nameplate: SwitchNameplate,
    #[serde(deserialize_with = "lenient::group")]
    pub visual: Vec<InspectionItem>,
    #[serde(deserialize_with = "lenient::group")]
    pub fuse_data: FuseData,
    #[serde(deserialize_with = "lenient::group")]
    pub contact_as_found: ContactResistanceSet,
    #[serde(deserialize_with = "lenient::group")]
    pub contact_as_left: ContactResistanceSet,
    #[serde(deserialize_with = "lenient::group")]
    pub insulation: SwitchInsulation,
    #[serde(deserialize_with = "lenient::group")]
    pub insulation_corrected: SwitchInsulationCorrected,
    #[serde(deserialize_with = "lenient::group")]
    pub dielectric: SwitchDielectric,
    #[serde(deserialize_with = "lenient::group")]
    pub equipment_used: SwitchEquipmentUsed,
    #[serde(deserialize_with = "lenient::text")]
    pub comments: String,
}

impl Default for MvSwitchMtsReport {
    fn default() -> Self {
        Self {
            header: ReportHeader::default(),
            temperature: TemperatureReading::new(68.0, 20.0, 1.0, Some(50.0)),
            nameplate: SwitchNameplate::default(),
            visual: inspection_items(VISUAL_ITEMS, ""),
            fuse_data: FuseData::default(),
            contact_as_found: ContactResistanceSet::default(),
            contact_as_left: ContactResistanceSet::default(),
            insulation: SwitchInsulation::default(),
            insulation_corrected: SwitchInsulationCorrected::default(),
            dielectric: SwitchDielectric::default(),
            equipment_used: SwitchEquipmentUsed::default(),
            comments: String::new(),
        }
    }
}

impl ReportForm for MvSwitchMtsReport {
    const KIND: ReportKind = ReportKind::MediumVoltageSwitchMts;
    const PROFILE: TemperatureProfile = SWITCH_MTS_PROFILE;
    const NON_NUMERIC: NonNumeric = NonNumeric::Blank;
    const KEY_ALIASES: &'static [(&'static str, &'static str)] = &[
        ("fuse_data", "fuseData"),
        ("contact_as_found", "contactAsFound"),
        ("contact_as_left", "contactAsLeft"),
        ("insulation_corrected", "insulationCorrected"),
        ("equipment_used", "equipmentUsed"),
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
        self.insulation_corrected.rows = self
            .insulation
            .rows
            .iter()
            .map(|row| CorrectedRow {
                label: row.label.clone(),
                readings: row.readings.corrected(tcf, Self::NON_NUMERIC),
            })
            .collect();
    }

    fn into_record(self) -> ReportRecord {
        ReportRecord::MediumVoltageSwitchMts(self)
    }
}
