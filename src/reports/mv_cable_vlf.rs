//! 중전압 케이블 VLF 내전압 / Tan Delta 시험.
//!
//! 섭씨 입력이 기준이고, TCF는 5°C 간격 표를 선형 보간한다.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{lenient, ReportHeader, TemperatureReading, TestInstrument};
use super::{ReportForm, ReportKind, ReportRecord};
use crate::correction::{apply_correction_with, NonNumeric};
use crate::tcf::profile::CABLE_VLF_PROFILE;
use crate::tcf::TemperatureProfile;

const VISUAL_KEYS: [&str; 6] = [
    "inspectCablesAndConnectors",
    "inspectTerminationsAndSplices",
    "useOhmmeter",
    "inspectShieldGrounding",
    "verifyBendRadius",
    "inspectCurrentTransformers",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CableInfo {
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::text")]
    pub size: String,
    #[serde(deserialize_with = "lenient::text")]
    pub length: String,
    #[serde(deserialize_with = "lenient::text")]
    pub voltage_rating: String,
    #[serde(deserialize_with = "lenient::text")]
    pub insulation: String,
    #[serde(deserialize_with = "lenient::text")]
    pub year_installed: String,
    #[serde(deserialize_with = "lenient::text")]
    pub tested_from: String,
    #[serde(deserialize_with = "lenient::text")]
    pub tested_to: String,
    #[serde(deserialize_with = "lenient::text")]
    pub manufacturer: String,
    #[serde(deserialize_with = "lenient::text")]
    pub conductor_material: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TerminationData {
    #[serde(deserialize_with = "lenient::text")]
    pub termination_data: String,
    #[serde(deserialize_with = "lenient::text")]
    pub rated_voltage: String,
    #[serde(deserialize_with = "lenient::text")]
    pub termination_data2: String,
    #[serde(deserialize_with = "lenient::text")]
    pub rated_voltage2: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShieldContinuity {
    #[serde(deserialize_with = "lenient::text")]
    pub phase_a: String,
    #[serde(deserialize_with = "lenient::text")]
    pub phase_b: String,
    #[serde(deserialize_with = "lenient::text")]
    pub phase_c: String,
    #[serde(deserialize_with = "lenient::text")]
    pub unit: String,
}

impl Default for ShieldContinuity {
    fn default() -> Self {
        Self {
            phase_a: String::new(),
            phase_b: String::new(),
            phase_c: String::new(),
            unit: "Ω".to_string(),
        }
    }
}

/// A-대지, B-대지, C-대지.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseToGround {
    #[serde(deserialize_with = "lenient::text")]
    pub ag: String,
    #[serde(deserialize_with = "lenient::text")]
    pub bg: String,
    #[serde(deserialize_with = "lenient::text")]
    pub cg: String,
}

impl PhaseToGround {
    fn corrected(&self, tcf: f64, rule: NonNumeric) -> Self {
        Self {
            ag: apply_correction_with(&self.ag, tcf, rule),
            bg: apply_correction_with(&self.bg, tcf, rule),
            cg: apply_correction_with(&self.cg, tcf, rule),
        }
    }
}

/// 내전압 전후 절연저항.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CableInsulationTest {
    #[serde(deserialize_with = "lenient::text")]
    pub test_voltage: String,
    #[serde(deserialize_with = "lenient::text")]
    pub unit: String,
    #[serde(deserialize_with = "lenient::group")]
    pub pre_test: PhaseToGround,
    #[serde(deserialize_with = "lenient::group")]
    pub post_test: PhaseToGround,
    #[serde(deserialize_with = "lenient::group")]
    pub pre_test_corrected: PhaseToGround,
    #[serde(deserialize_with = "lenient::group")]
    pub post_test_corrected: PhaseToGround,
}

impl Default for CableInsulationTest {
    fn default() -> Self {
        Self {
            test_voltage: "1000".to_string(),
            unit: "GΩ".to_string(),
            pre_test: PhaseToGround::default(),
            post_test: PhaseToGround::default(),
            pre_test_corrected: PhaseToGround::default(),
            post_test_corrected: PhaseToGround::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentCapacitance {
    #[serde(rename = "mA", deserialize_with = "lenient::text")]
    pub milliamps: String,
    #[serde(rename = "nF", deserialize_with = "lenient::text")]
    pub nanofarads: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WithstandReading {
    #[serde(deserialize_with = "lenient::text")]
    pub time_minutes: String,
    #[serde(rename = "kVAC", deserialize_with = "lenient::text")]
    pub kvac: String,
    #[serde(deserialize_with = "lenient::group")]
    pub phase_a: CurrentCapacitance,
    #[serde(deserialize_with = "lenient::group")]
    pub phase_b: CurrentCapacitance,
    #[serde(deserialize_with = "lenient::group")]
    pub phase_c: CurrentCapacitance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithstandTest {
    pub readings: Vec<WithstandReading>,
}

impl Default for WithstandTest {
    fn default() -> Self {
        let readings = (1..=6)
            .map(|step| WithstandReading {
                time_minutes: (step * 10).to_string(),
                kvac: "13".to_string(),
                ..WithstandReading::default()
            })
            .collect();
        Self { readings }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TanDeltaPhase {
    #[serde(deserialize_with = "lenient::text")]
    pub td: String,
    #[serde(deserialize_with = "lenient::text")]
    pub std_dev: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TanDeltaValue {
    #[serde(deserialize_with = "lenient::text")]
    pub voltage_step: String,
    #[serde(rename = "kV", deserialize_with = "lenient::text")]
    pub kv: String,
    #[serde(deserialize_with = "lenient::group")]
    pub phase_a: TanDeltaPhase,
    #[serde(deserialize_with = "lenient::group")]
    pub phase_b: TanDeltaPhase,
    #[serde(deserialize_with = "lenient::group")]
    pub phase_c: TanDeltaPhase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TanDeltaTest {
    #[serde(rename = "systemVoltageL2G", deserialize_with = "lenient::text")]
    pub system_voltage_l2g: String,
    #[serde(deserialize_with = "lenient::text")]
    pub frequency: String,
    pub values: Vec<TanDeltaValue>,
}

impl Default for TanDeltaTest {
    fn default() -> Self {
        let steps = [("0.5 Uo", "7.200"), ("1.0 Uo", "14.400"), ("1.5 Uo", "21.600"), ("2.0 Uo", "28.800")];
        Self {
            system_voltage_l2g: "14.4".to_string(),
            frequency: "0.1".to_string(),
            values: steps
                .iter()
                .map(|(step, kv)| TanDeltaValue {
                    voltage_step: step.to_string(),
                    kv: kv.to_string(),
                    ..TanDeltaValue::default()
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CableTestEquipment {
    #[serde(deserialize_with = "lenient::group")]
    pub ohmmeter: TestInstrument,
    #[serde(deserialize_with = "lenient::group")]
    pub megohmmeter: TestInstrument,
    #[serde(deserialize_with = "lenient::group")]
    pub vlf_hipot: TestInstrument,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MvCableVlfReport {
    #[serde(flatten)]
    pub header: ReportHeader,
    #[serde(deserialize_with = "lenient::group")]
    pub temperature: TemperatureReading,
    #[serde(deserialize_with = "lenient::group")]
    pub cable_info: CableInfo,
    #[serde(deserialize_with = "lenient::group")]
    pub termination_data: TerminationData,
    #[serde(deserialize_with = "lenient::group")]
    pub visual_inspection: BTreeMap<String, String>,
    #[serde(deserialize_with = "lenient::group")]
    pub shield_continuity: ShieldContinuity,
    #[serde(deserialize_with = "lenient::group")]
    pub insulation_test: CableInsulationTest,
    #[serde(deserialize_with = "lenient::group")]
    pub withstand_test: WithstandTest,
    #[serde(deserialize_with = "lenient::group")]
    pub tan_delta_test: TanDeltaTest,
    #[serde(deserialize_with = "lenient::group")]
    pub equipment: CableTestEquipment,
    #[serde(deserialize_with = "lenient::text")]
    pub comments: String,
}

impl Default for MvCableVlfReport {
    fn default() -> Self {
        Self {
            header: ReportHeader::default(),
            temperature: TemperatureReading::new(68.0, 20.0, 1.0, Some(0.0)),
            cable_info: CableInfo::default(),
            termination_data: TerminationData::default(),
            visual_inspection: VISUAL_KEYS
                .iter()
                .map(|k| (k.to_string(), "Select One".to_string()))
                .collect(),
            shield_continuity: ShieldContinuity::default(),
            insulation_test: CableInsulationTest::default(),
            withstand_test: WithstandTest::default(),
            tan_delta_test: TanDeltaTest::default(),
            equipment: CableTestEquipment::default(),
            comments: String::new(),
        }
    }
}

impl ReportForm for MvCableVlfReport {
    const KIND: ReportKind = ReportKind::MediumVoltageCableVlf;
    const PROFILE: TemperatureProfile = CABLE_VLF_PROFILE;
    const NON_NUMERIC: NonNumeric = NonNumeric::PassThrough;
    const KEY_ALIASES: &'static [(&'static str, &'static str)] = &[
        ("cable_info", "cableInfo"),
        ("termination_data", "terminationData"),
        ("visual_inspection", "visualInspection"),
        ("shield_continuity", "shieldContinuity"),
        ("insulation_test", "insulationTest"),
        ("withstand_test", "withstandTest"),
        ("tan_delta_test", "tanDeltaTest"),
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
        let test = &mut self.insulation_test;
        test.pre_test_corrected = test.pre_test.corrected(tcf, rule);
        test.post_test_corrected = test.post_test.corrected(tcf, rule);
    }

    fn into_record(self) -> ReportRecord {
        ReportRecord::MediumVoltageCableVlf(self)
    }
}
