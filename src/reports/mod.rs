//! 보고서 종류별 스키마와 공통 인터페이스.
//!
//! 각 보고서는 `#[serde(default)]` 구조체이고, `Default`가 곧 빈 양식이다.
//! 저장 형태는 `reportType` 태그가 붙은 [`ReportRecord`]이다.

pub mod automatic_transfer_switch;
pub mod common;
pub mod large_dry_type_xfmr_mts;
pub mod liquid_filled_xfmr_ats25;
pub mod mv_cable_vlf;
pub mod mv_circuit_breaker;
pub mod mv_motor_starter_mts;
pub mod mv_switch_mts;
pub mod payload;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::correction::NonNumeric;
use crate::tcf::TemperatureProfile;

pub use automatic_transfer_switch::AutomaticTransferSwitchReport;
pub use common::{
    InspectionItem, PhaseReadings, PhaseReadingsWithUnits, ReportHeader, ReportStatus,
    TemperatureReading, TestInstrument,
};
pub use large_dry_type_xfmr_mts::LargeDryTypeXfmrMtsReport;
pub use liquid_filled_xfmr_ats25::LiquidFilledXfmrAts25Report;
pub use mv_cable_vlf::MvCableVlfReport;
pub use mv_circuit_breaker::MvCircuitBreakerReport;
pub use mv_motor_starter_mts::MvMotorStarterMtsReport;
pub use mv_switch_mts::MvSwitchMtsReport;

/// 저장 레코드 형식 버전.
pub const SCHEMA_VERSION: u32 = 1;

/// 보고서 종류 태그.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    #[serde(rename = "liquid-filled-xfmr-ats25")]
    LiquidFilledXfmrAts25,
    #[serde(rename = "large-dry-type-xfmr-mts")]
    LargeDryTypeXfmrMts,
    #[serde(rename = "medium-voltage-circuit-breaker")]
    MediumVoltageCircuitBreaker,
    #[serde(rename = "medium-voltage-switch-mts")]
    MediumVoltageSwitchMts,
    #[serde(rename = "medium-voltage-cable-vlf")]
    MediumVoltageCableVlf,
    #[serde(rename = "automatic-transfer-switch")]
    AutomaticTransferSwitch,
    #[serde(rename = "medium-voltage-motor-starter-mts")]
    MediumVoltageMotorStarterMts,
}

impl ReportKind {
    pub const ALL: [ReportKind; 7] = [
        Self::LiquidFilledXfmrAts25,
        Self::LargeDryTypeXfmrMts,
        Self::MediumVoltageCircuitBreaker,
        Self::MediumVoltageSwitchMts,
        Self::MediumVoltageCableVlf,
        Self::AutomaticTransferSwitch,
        Self::MediumVoltageMotorStarterMts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::LiquidFilledXfmrAts25 => "liquid-filled-xfmr-ats25",
            ReportKind::LargeDryTypeXfmrMts => "large-dry-type-xfmr-mts",
            ReportKind::MediumVoltageCircuitBreaker => "medium-voltage-circuit-breaker",
            ReportKind::MediumVoltageSwitchMts => "medium-voltage-switch-mts",
            ReportKind::MediumVoltageCableVlf => "medium-voltage-cable-vlf",
            ReportKind::AutomaticTransferSwitch => "automatic-transfer-switch",
            ReportKind::MediumVoltageMotorStarterMts => "medium-voltage-motor-starter-mts",
        }
    }

    /// 인쇄 양식 제목.
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::LiquidFilledXfmrAts25 => {
                "7.2.2 Liquid Filled Xfmr. Visual, Mechanical, Insulation Resistance Test ATS 25"
            }
            ReportKind::LargeDryTypeXfmrMts => {
                "7.2.1.2 Large Dry Type Xfmr. Visual, Mechanical, Insulation Resistance Test MTS"
            }
            ReportKind::MediumVoltageCircuitBreaker => "7.6.3 Medium Voltage Circuit Breaker",
            ReportKind::MediumVoltageSwitchMts => "7.5.1.2 Medium Voltage Switch MTS",
            ReportKind::MediumVoltageCableVlf => "3.2.3 Medium Voltage Cable VLF Test",
            ReportKind::AutomaticTransferSwitch => "7.22.3 Automatic Transfer Switch ATS",
            ReportKind::MediumVoltageMotorStarterMts => "7.16.1.2 Medium Voltage Motor Starter MTS",
        }
    }

    /// 이 종류의 온도 처리 규칙.
    pub fn profile(self) -> TemperatureProfile {
        match self {
            ReportKind::LiquidFilledXfmrAts25 => LiquidFilledXfmrAts25Report::PROFILE,
            ReportKind::LargeDryTypeXfmrMts => LargeDryTypeXfmrMtsReport::PROFILE,
            ReportKind::MediumVoltageCircuitBreaker => MvCircuitBreakerReport::PROFILE,
            ReportKind::MediumVoltageSwitchMts => MvSwitchMtsReport::PROFILE,
            ReportKind::MediumVoltageCableVlf => MvCableVlfReport::PROFILE,
            ReportKind::AutomaticTransferSwitch => AutomaticTransferSwitchReport::PROFILE,
            ReportKind::MediumVoltageMotorStarterMts => MvMotorStarterMtsReport::PROFILE,
        }
    }

    pub fn non_numeric(self) -> NonNumeric {
        match self {
            ReportKind::LiquidFilledXfmrAts25 => LiquidFilledXfmrAts25Report::NON_NUMERIC,
            ReportKind::LargeDryTypeXfmrMts => LargeDryTypeXfmrMtsReport::NON_NUMERIC,
            ReportKind::MediumVoltageCircuitBreaker => MvCircuitBreakerReport::NON_NUMERIC,
            ReportKind::MediumVoltageSwitchMts => MvSwitchMtsReport::NON_NUMERIC,
            ReportKind::MediumVoltageCableVlf => MvCableVlfReport::NON_NUMERIC,
            ReportKind::AutomaticTransferSwitch => AutomaticTransferSwitchReport::NON_NUMERIC,
            ReportKind::MediumVoltageMotorStarterMts => MvMotorStarterMtsReport::NON_NUMERIC,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 보고서 종류 문자열을 해석하지 못했다.
#[derive(Debug, Error)]
#[error("알 수 없는 보고서 종류: {0}")]
pub struct UnknownReportKind(pub String);

impl FromStr for ReportKind {
    type Err = UnknownReportKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| UnknownReportKind(key.to_string()))
    }
}

/// 저장된 값을 보고서 스키마로 읽지 못한 이유.
#[derive(Debug, Error)]
pub enum ReportLoadError {
    #[error("보고서 데이터가 객체가 아닙니다")]
    NotAnObject,
    #[error("보고서 스키마 오류: {0}")]
    Schema(#[from] serde_json::Error),
}

/// 보고서 한 종류의 스키마와 온도 보정 규칙.
pub trait ReportForm:
    Default + Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: ReportKind;
    /// 환산 방식, TCF 표, 불러올 때의 기준 온도 필드.
    const PROFILE: TemperatureProfile;
    /// 숫자가 아닌 측정값의 보정 칸 처리.
    const NON_NUMERIC: NonNumeric;
    /// 이 보고서만의 옛 키 → 현재 키.
    const KEY_ALIASES: &'static [(&'static str, &'static str)] = &[];

    fn header(&self) -> &ReportHeader;
    fn header_mut(&mut self) -> &mut ReportHeader;
    fn temperature(&self) -> &TemperatureReading;
    fn temperature_mut(&mut self) -> &mut TemperatureReading;

    /// 원시 측정값과 TCF로 모든 보정값과 비율 칸을 다시 채운다.
    fn derive_corrections(&mut self, tcf: f64);

    fn into_record(self) -> ReportRecord;

    /// 껍데기와 옛 키를 정리한 뒤 스키마로 읽는다. 빠진 묶음은 빈 양식으로 채워진다.
    fn from_payload(value: &Value) -> Result<Self, ReportLoadError> {
        let flat = payload::normalize(value, Self::KEY_ALIASES).ok_or(ReportLoadError::NotAnObject)?;
        Ok(serde_json::from_value(flat)?)
    }
}

/// 저장 단위 레코드. `reportType` 태그로 종류를 구분한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "reportType")]
pub enum ReportRecord {
    #[serde(rename = "liquid-filled-xfmr-ats25")]
    LiquidFilledXfmrAts25(LiquidFilledXfmrAts25Report),
    #[serde(rename = "large-dry-type-xfmr-mts")]
    LargeDryTypeXfmrMts(LargeDryTypeXfmrMtsReport),
    #[serde(rename = "medium-voltage-circuit-breaker")]
    MediumVoltageCircuitBreaker(MvCircuitBreakerReport),
    #[serde(rename = "medium-voltage-switch-mts")]
    MediumVoltageSwitchMts(MvSwitchMtsReport),
    #[serde(rename = "medium-voltage-cable-vlf")]
    MediumVoltageCableVlf(MvCableVlfReport),
    #[serde(rename = "automatic-transfer-switch")]
    AutomaticTransferSwitch(AutomaticTransferSwitchReport),
    #[serde(rename = "medium-voltage-motor-starter-mts")]
    MediumVoltageMotorStarterMts(MvMotorStarterMtsReport),
}

impl ReportRecord {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportRecord::LiquidFilledXfmrAts25(_) => ReportKind::LiquidFilledXfmrAts25,
            ReportRecord::LargeDryTypeXfmrMts(_) => ReportKind::LargeDryTypeXfmrMts,
            ReportRecord::MediumVoltageCircuitBreaker(_) => ReportKind::MediumVoltageCircuitBreaker,
            ReportRecord::MediumVoltageSwitchMts(_) => ReportKind::MediumVoltageSwitchMts,
            ReportRecord::MediumVoltageCableVlf(_) => ReportKind::MediumVoltageCableVlf,
            ReportRecord::AutomaticTransferSwitch(_) => ReportKind::AutomaticTransferSwitch,
            ReportRecord::MediumVoltageMotorStarterMts(_) => {
                ReportKind::MediumVoltageMotorStarterMts
            }
        }
    }
}

/// 저장소로 넘기는 최종 형태: 스키마 버전 + 태그된 레코드.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReport {
    pub schema_version: u32,
    #[serde(flatten)]
    pub record: ReportRecord,
}

impl StoredReport {
    pub fn new(record: ReportRecord) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            record,
        }
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// 레코드에 적힌 보고서 종류를 찾는다. 껍데기 안쪽도 살핀다.
pub fn detect_kind(value: &Value) -> Option<ReportKind> {
    let flat = payload::normalize(value, &[])?;
    ["reportType", "report_type", "reportSlug"]
        .iter()
        .filter_map(|key| flat.get(*key).and_then(Value::as_str))
        .find_map(|s| s.parse().ok())
}
