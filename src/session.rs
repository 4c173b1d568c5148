//! 보고서 세션: 불러오기, 편집, 파생값 재계산, 저장.
//!
//! 모든 변경은 곧바로 온도 → TCF → 보정값 순서로 다시 계산된다.
//! 저장은 한 번에 하나만 진행되며, 실패해도 편집 중인 상태는 그대로 남는다.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::reports::{detect_kind, ReportForm, ReportKind, ReportStatus, StoredReport};
use crate::sink::{ReportSink, SinkError};
use crate::tcf::TemperatureDriver;

/// 세션 수준 오류.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("이미 저장 중입니다")]
    SaveInFlight,
    #[error("저장 실패: {0}")]
    SaveFailed(#[from] SinkError),
    #[error("레코드 직렬화 오류: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 작업(Job) 정보. 머리말의 빈 칸을 채우는 데만 쓴다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobContext {
    pub customer_name: String,
    pub address: String,
    pub job_number: String,
}

/// 같은 값의 여러 표기. 앞쪽부터 보고 처음으로 비어 있지 않은 값을 쓴다.
const CUSTOMER_KEYS: [&str; 3] = ["customer_name", "customerName", "customer"];
const ADDRESS_KEYS: [&str; 3] = ["address", "site_address", "siteAddress"];
const JOB_NUMBER_KEYS: [&str; 2] = ["job_number", "jobNumber"];

impl JobContext {
    /// 객체가 아니면 경고를 남기고 `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let Value::Object(map) = value else {
            warn!("작업 정보가 객체가 아니어서 머리말을 채우지 않음");
            return None;
        };
        Some(Self {
            customer_name: first_text(map, &CUSTOMER_KEYS),
            address: first_text(map, &ADDRESS_KEYS),
            job_number: first_text(map, &JOB_NUMBER_KEYS),
        })
    }
}

fn first_text(map: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .map(|value| match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        })
        .find(|s| !s.trim().is_empty())
        .unwrap_or_default()
}

/// 새 양식을 만들 때만 적용하는 기본값.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionDefaults {
    pub fahrenheit: Option<f64>,
    pub humidity: Option<f64>,
}

impl From<&Config> for SessionDefaults {
    fn from(cfg: &Config) -> Self {
        Self {
            fahrenheit: Some(cfg.default_fahrenheit),
            humidity: cfg.default_humidity,
        }
    }
}

/// 진행 중인 저장 한 건. 만든 시점의 레코드 스냅샷을 담는다.
#[derive(Debug, Clone)]
pub struct SaveTicket {
    revision: u64,
    payload: Value,
}

impl SaveTicket {
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

/// 보고서 한 건의 편집 세션.
#[derive(Debug, Clone)]
pub struct ReportSession<R: ReportForm> {
    record: R,
    driver: TemperatureDriver,
    dirty: bool,
    saving: bool,
    last_save_error: Option<String>,
    revision: u64,
}

impl<R: ReportForm> ReportSession<R> {
    /// 저장된 레코드(없으면 빈 양식)로 세션을 연다. 읽을 수 없는 레코드는 빈 양식으로 대체한다.
    pub fn open(report_data: Option<&Value>, job: Option<&JobContext>, defaults: SessionDefaults) -> Self {
        let loaded = report_data.filter(|v| !v.is_null()).and_then(load_record::<R>);
        let fresh = loaded.is_none();
        let mut record = loaded.unwrap_or_default();

        if fresh {
            apply_defaults::<R>(&mut record, defaults);
        }
        if let Some(job) = job {
            prefill_header(&mut record, job);
        }

        let temp = *record.temperature();
        let driver = match R::PROFILE.load_driver {
            TemperatureDriver::Celsius if temp.celsius.is_none() && temp.fahrenheit.is_some() => {
                TemperatureDriver::Fahrenheit
            }
            TemperatureDriver::Fahrenheit if temp.fahrenheit.is_none() && temp.celsius.is_some() => {
                TemperatureDriver::Celsius
            }
            driver => driver,
        };

        let mut session = Self {
            record,
            driver,
            dirty: false,
            saving: false,
            last_save_error: None,
            revision: 0,
        };
        session.refresh();
        session
    }

    /// 빈 양식으로 새 세션.
    pub fn new_blank(defaults: SessionDefaults) -> Self {
        Self::open(None, None, defaults)
    }

    pub fn kind(&self) -> ReportKind {
        R::KIND
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn driver(&self) -> TemperatureDriver {
        self.driver
    }

    pub fn tcf(&self) -> f64 {
        self.record.temperature().tcf
    }

    pub fn status(&self) -> ReportStatus {
        self.record.header().status
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    /// 편집할 때마다 1씩 오른다.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_fahrenheit(&mut self, fahrenheit: Option<f64>) {
        self.driver = TemperatureDriver::Fahrenheit;
        self.record.temperature_mut().fahrenheit = fahrenheit;
        self.touch();
    }

    pub fn set_celsius(&mut self, celsius: Option<f64>) {
        self.driver = TemperatureDriver::Celsius;
        self.record.temperature_mut().celsius = celsius;
        self.touch();
    }

    pub fn set_humidity(&mut self, humidity: Option<f64>) {
        self.record.temperature_mut().humidity = humidity;
        self.touch();
    }

    pub fn set_status(&mut self, status: ReportStatus) {
        self.record.header_mut().status = status;
        self.touch();
    }

    pub fn cycle_status(&mut self) -> ReportStatus {
        let next = self.status().cycle();
        self.set_status(next);
        next
    }

    /// 임의의 필드를 고친다. 끝나면 파생값을 모두 다시 계산한다.
    ///
    /// 보정값 칸을 직접 고쳐도 재계산에서 덮어쓰인다.
    pub fn edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut R),
    {
        f(&mut self.record);
        self.touch();
    }

    /// 저장소로 넘길 레코드 (`schemaVersion` + `reportType` 포함).
    pub fn to_payload(&self) -> Result<Value, serde_json::Error> {
        StoredReport::new(self.record.clone().into_record()).to_value()
    }

    /// 저장을 시작한다. 이미 진행 중이면 거절한다.
    pub fn begin_save(&mut self) -> Result<SaveTicket, SessionError> {
        if self.saving {
            warn!(kind = %R::KIND, "저장 중복 요청 거절");
            return Err(SessionError::SaveInFlight);
        }
        let payload = self.to_payload()?;
        self.saving = true;
        info!(kind = %R::KIND, revision = self.revision, "보고서 저장 시작");
        Ok(SaveTicket {
            revision: self.revision,
            payload,
        })
    }

    /// 저장 결과를 반영한다. 실패해도 레코드는 건드리지 않는다.
    pub fn finish_save(&mut self, ticket: SaveTicket, result: Result<(), SinkError>) -> Result<(), SessionError> {
        self.saving = false;
        match result {
            Ok(()) => {
                self.last_save_error = None;
                // 저장 중에 편집이 있었다면 여전히 저장되지 않은 상태다.
                if ticket.revision == self.revision {
                    self.dirty = false;
                }
                info!(kind = %R::KIND, revision = ticket.revision, "보고서 저장 완료");
                Ok(())
            }
            Err(err) => {
                warn!(kind = %R::KIND, revision = ticket.revision, error = %err, "보고서 저장 실패");
                self.last_save_error = Some(err.to_string());
                Err(SessionError::SaveFailed(err))
            }
        }
    }

    pub async fn save(&mut self, sink: &dyn ReportSink) -> Result<(), SessionError> {
        let ticket = self.begin_save()?;
        let result = sink.save(ticket.payload()).await;
        self.finish_save(ticket, result)
    }

    fn touch(&mut self) {
        self.refresh();
        self.dirty = true;
        self.revision += 1;
    }

    fn refresh(&mut self) {
        let temp = *self.record.temperature();
        let value = match self.driver {
            TemperatureDriver::Fahrenheit => temp.fahrenheit,
            TemperatureDriver::Celsius => temp.celsius,
        };
        let derived = R::PROFILE.derive(self.driver, value);

        let temp = self.record.temperature_mut();
        temp.fahrenheit = derived.fahrenheit;
        temp.celsius = derived.celsius;
        temp.tcf = derived.tcf;

        self.record.derive_corrections(derived.tcf);
        debug!(
            kind = %R::KIND,
            fahrenheit = ?derived.fahrenheit,
            celsius = ?derived.celsius,
            tcf = derived.tcf,
            "파생값 재계산"
        );
    }
}

fn load_record<R: ReportForm>(value: &Value) -> Option<R> {
    if let Some(found) = detect_kind(value).filter(|k| *k != R::KIND) {
        warn!(expected = %R::KIND, found = %found, "다른 종류의 보고서 레코드, 빈 양식으로 시작");
        return None;
    }
    match R::from_payload(value) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!(kind = %R::KIND, error = %err, "보고서 레코드를 읽지 못해 빈 양식으로 시작");
            None
        }
    }
}

fn apply_defaults<R: ReportForm>(record: &mut R, defaults: SessionDefaults) {
    let temp = record.temperature_mut();
    if let Some(f) = defaults.fahrenheit.filter(|f| f.is_finite()) {
        temp.fahrenheit = Some(f);
        temp.celsius = R::PROFILE.celsius_for(f);
    }
    if defaults.humidity.is_some() {
        temp.humidity = defaults.humidity;
    }
}

fn prefill_header<R: ReportForm>(record: &mut R, job: &JobContext) {
    let header = record.header_mut();
    fill_if_empty(&mut header.customer, &job.customer_name);
    fill_if_empty(&mut header.address, &job.address);
    fill_if_empty(&mut header.job_number, &job.job_number);
}

fn fill_if_empty(slot: &mut String, value: &str) {
    if slot.trim().is_empty() && !value.trim().is_empty() {
        *slot = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::MvCircuitBreakerReport;
    use serde_json::json;

    #[test]
    fn job_context_accepts_both_spellings() {
        let a = JobContext::from_value(&json!({ "customer_name": "ACME", "site_address": "1 Main", "job_number": 42 }))
            .unwrap();
        let b = JobContext::from_value(&json!({ "customerName": "ACME", "address": "1 Main", "jobNumber": "42" }))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.job_number, "42");
        assert!(JobContext::from_value(&json!("ACME")).is_none());
    }

    #[test]
    fn job_context_with_both_spellings_takes_first_non_blank() {
        let job = JobContext::from_value(&json!({
            "customer_name": "ACME",
            "customerName": "ACME",
            "job_number": "",
            "jobNumber": "J1",
            "address": null,
            "site_address": "1 Main"
        }))
        .unwrap();
        assert_eq!(job.customer_name, "ACME");
        assert_eq!(job.job_number, "J1");
        assert_eq!(job.address, "1 Main");
    }

    #[test]
    fn fresh_record_takes_defaults_but_loaded_one_does_not() {
        let defaults = SessionDefaults {
            fahrenheit: Some(77.0),
            humidity: Some(40.0),
        };
        let fresh = ReportSession::<MvCircuitBreakerReport>::open(None, None, defaults);
        assert_eq!(fresh.record().temperature.fahrenheit, Some(77.0));
        assert_eq!(fresh.record().temperature.celsius, Some(25.0));
        assert_eq!(fresh.record().temperature.humidity, Some(40.0));

        let stored = json!({ "temperature": { "fahrenheit": 59, "humidity": 70 } });
        let loaded = ReportSession::<MvCircuitBreakerReport>::open(Some(&stored), None, defaults);
        assert_eq!(loaded.record().temperature.fahrenheit, Some(59.0));
        assert_eq!(loaded.record().temperature.celsius, Some(15.0));
        assert_eq!(loaded.record().temperature.humidity, Some(70.0));
        assert!(!loaded.is_dirty());
    }
}
