//! 모든 보고서가 공유하는 레코드 조각.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::correction::{apply_correction_with, NonNumeric};

/// 느슨한 역직렬화 도우미.
///
/// 저장된 레코드는 여러 경로(로컬 DB, 동기화 API, 수기 편집)를 거치므로
/// 문자열 칸에 숫자나 null이 들어오는 일이 흔하다.
pub(crate) mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// 문자열·숫자·불리언은 문자열로, 그 밖의 값은 빈 문자열로 받는다.
    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => String::new(),
        })
    }

    /// 숫자, 숫자 문자열, `""`, null을 받는다. 해석할 수 없으면 `None`.
    pub fn temperature<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(parsed.filter(|v| v.is_finite()))
    }

    /// TCF 칸. 해석할 수 없으면 1.0.
    pub fn factor<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(temperature(deserializer)?.unwrap_or(crate::tcf::DEFAULT_FACTOR))
    }

    /// 측정 묶음. 모양이 맞지 않으면 해당 묶음만 기본 양식으로 되돌린다.
    pub fn group<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        match T::deserialize(value) {
            Ok(parsed) => Ok(parsed),
            Err(err) => {
                tracing::warn!(error = %err, "malformed group replaced with template");
                Ok(T::default())
            }
        }
    }
}

/// 보고서 판정. 운영자가 직접 고르며 계산으로 정해지지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ReportStatus {
    #[default]
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
    #[serde(rename = "LIMITED SERVICE")]
    LimitedService,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [Self::Pass, Self::Fail, Self::LimitedService];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Pass => "PASS",
            ReportStatus::Fail => "FAIL",
            ReportStatus::LimitedService => "LIMITED SERVICE",
        }
    }

    /// 상태 배지를 누를 때의 순환 순서: PASS → FAIL → LIMITED SERVICE → PASS
    pub fn cycle(self) -> Self {
        match self {
            ReportStatus::Pass => ReportStatus::Fail,
            ReportStatus::Fail => ReportStatus::LimitedService,
            ReportStatus::LimitedService => ReportStatus::Pass,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let upper = s.trim().to_uppercase();
        Self::ALL.into_iter().find(|st| st.as_str() == upper)
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReportStatus {
    /// 알 수 없는 값은 PASS로 읽는다.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = lenient::text(deserializer)?;
        Ok(Self::parse(&raw).unwrap_or_default())
    }
}

/// 보고서 머리말(고객/작업 정보와 판정).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportHeader {
    #[serde(deserialize_with = "lenient::text")]
    pub customer: String,
    #[serde(deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(deserialize_with = "lenient::text")]
    pub user: String,
    #[serde(deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(deserialize_with = "lenient::text")]
    pub identifier: String,
    #[serde(deserialize_with = "lenient::text")]
    pub job_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub technicians: String,
    #[serde(deserialize_with = "lenient::text")]
    pub substation: String,
    #[serde(deserialize_with = "lenient::text")]
    pub eqpt_location: String,
    pub status: ReportStatus,
}

/// 주위 온도와 그로부터 나온 TCF.
///
/// `celsius`, `tcf`는 저장된 값을 그대로 믿지 않고 세션이 열릴 때 다시 계산한다.
/// 옛 키(`ambient`, `correctionFactor`)는 [`super::payload::normalize`]에서 옮긴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureReading {
    #[serde(deserialize_with = "lenient::temperature")]
    pub fahrenheit: Option<f64>,
    #[serde(deserialize_with = "lenient::temperature")]
    pub celsius: Option<f64>,
    #[serde(deserialize_with = "lenient::factor")]
    pub tcf: f64,
    #[serde(deserialize_with = "lenient::temperature")]
    pub humidity: Option<f64>,
}

impl TemperatureReading {
    pub fn new(fahrenheit: f64, celsius: f64, tcf: f64, humidity: Option<f64>) -> Self {
        Self {
            fahrenheit: Some(fahrenheit),
            celsius: Some(celsius),
            tcf,
            humidity,
        }
    }
}

impl Default for TemperatureReading {
    fn default() -> Self {
        Self::new(68.0, 20.0, 1.0, None)
    }
}

/// 측정기 식별 세 항목.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestInstrument {
    #[serde(deserialize_with = "lenient::text", alias = "model")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text", alias = "serial", alias = "serial_number")]
    pub serial_number: String,
    #[serde(deserialize_with = "lenient::text", alias = "id", alias = "amp_id")]
    pub amp_id: String,
}

/// 육안·기계 점검 항목 한 줄.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectionItem {
    #[serde(deserialize_with = "lenient::text", alias = "netaSection", alias = "neta")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::text")]
    pub result: String,
}

impl InspectionItem {
    pub fn new(id: &str, description: &str, result: &str) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            result: result.to_string(),
        }
    }
}

/// `(id, 설명)` 목록으로 점검표를 만든다.
pub fn inspection_items(items: &[(&str, &str)], result: &str) -> Vec<InspectionItem> {
    items
        .iter()
        .map(|(id, description)| InspectionItem::new(id, description, result))
        .collect()
}

/// 세 상(P1/P2/P3) 값.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseReadings {
    #[serde(deserialize_with = "lenient::text")]
    pub p1: String,
    #[serde(deserialize_with = "lenient::text")]
    pub p2: String,
    #[serde(deserialize_with = "lenient::text")]
    pub p3: String,
}

impl PhaseReadings {
    pub fn corrected(&self, tcf: f64, rule: NonNumeric) -> Self {
        Self {
            p1: apply_correction_with(&self.p1, tcf, rule),
            p2: apply_correction_with(&self.p2, tcf, rule),
            p3: apply_correction_with(&self.p3, tcf, rule),
        }
    }
}

/// 단위가 붙은 세 상 값 (접촉 저항 등).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseReadingsWithUnits {
    #[serde(flatten)]
    pub readings: PhaseReadings,
    #[serde(deserialize_with = "lenient::text", alias = "unit")]
    pub units: String,
}

impl PhaseReadingsWithUnits {
    pub fn with_units(units: &str) -> Self {
        Self {
            readings: PhaseReadings::default(),
            units: units.to_string(),
        }
    }
}

impl Default for PhaseReadingsWithUnits {
    fn default() -> Self {
        Self::with_units("µΩ")
    }
}

/// 흡수비/성극지수 합격 여부 표기.
pub fn acceptance_label(acceptable: Option<bool>, yes: &str, no: &str) -> String {
    match acceptable {
        Some(true) => yes.to_string(),
        Some(false) => no.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_serializes_with_form_labels() {
        let v = serde_json::to_value(ReportStatus::LimitedService).unwrap();
        assert_eq!(v, json!("LIMITED SERVICE"));
        let parsed: ReportStatus = serde_json::from_value(json!("fail")).unwrap();
        assert_eq!(parsed, ReportStatus::Fail);
        let unknown: ReportStatus = serde_json::from_value(json!("??")).unwrap();
        assert_eq!(unknown, ReportStatus::Pass);
    }

    #[test]
    fn status_cycles_through_all_labels() {
        let mut st = ReportStatus::Pass;
        for expected in [ReportStatus::Fail, ReportStatus::LimitedService, ReportStatus::Pass] {
            st = st.cycle();
            assert_eq!(st, expected);
        }
    }

    #[test]
    fn temperature_accepts_strings_and_blanks() {
        let t: TemperatureReading =
            serde_json::from_value(json!({ "fahrenheit": "77", "celsius": "", "humidity": null }))
                .unwrap();
        assert_eq!(t.fahrenheit, Some(77.0));
        assert_eq!(t.celsius, None);
        assert_eq!(t.humidity, None);
        assert_eq!(t.tcf, 1.0);
    }

    #[test]
    fn instrument_reads_legacy_triplet_names() {
        let i: TestInstrument =
            serde_json::from_value(json!({ "model": "MIT525", "serial": 1234, "id": "A-7" }))
                .unwrap();
        assert_eq!(i.name, "MIT525");
        assert_eq!(i.serial_number, "1234");
        assert_eq!(i.amp_id, "A-7");
    }
}
