use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::config::{self, Config};
use crate::conversion;
use crate::reports::{
    AutomaticTransferSwitchReport, LargeDryTypeXfmrMtsReport, LiquidFilledXfmrAts25Report,
    MvCableVlfReport, MvCircuitBreakerReport, MvMotorStarterMtsReport, MvSwitchMtsReport,
    ReportForm, ReportKind, ReportStatus, UnknownReportKind,
};
use crate::session::{JobContext, ReportSession, SessionDefaults, SessionError};
use crate::sink::JsonFileSink;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] config::ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] conversion::ConversionError),
    /// 입력 JSON 파싱 오류
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    UnknownKind(#[from] UnknownReportKind),
    /// 보고서 세션 오류 (저장 실패 포함)
    #[error("보고서 오류: {0}")]
    Session(#[from] SessionError),
    /// 종류를 정할 수 없는 레코드
    #[error("보고서 종류를 알 수 없습니다. --kind 로 지정하세요")]
    KindRequired,
}

/// `report` 명령 한 건의 입력.
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub kind: Option<ReportKind>,
    pub input: Option<PathBuf>,
    pub job: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub fahrenheit: Option<f64>,
    pub celsius: Option<f64>,
    pub status: Option<ReportStatus>,
}

/// 저장을 마친 보고서 요약.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub kind: ReportKind,
    pub path: PathBuf,
    pub fahrenheit: Option<f64>,
    pub celsius: Option<f64>,
    pub tcf: f64,
}

fn read_json(path: &Path) -> Result<Value, AppError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// 레코드를 읽어 파생값을 다시 계산하고 JSON 파일로 저장한다.
pub async fn run_report(req: &ReportRequest, cfg: &Config) -> Result<ReportSummary, AppError> {
    let data = req.input.as_deref().map(read_json).transpose()?;
    let job = match req.job.as_deref() {
        Some(path) => JobContext::from_value(&read_json(path)?),
        None => None,
    };
    let kind = req
        .kind
        .or_else(|| data.as_ref().and_then(crate::reports::detect_kind))
        .ok_or(AppError::KindRequired)?;

    match kind {
        ReportKind::LiquidFilledXfmrAts25 => {
            process::<LiquidFilledXfmrAts25Report>(req, cfg, data.as_ref(), job.as_ref()).await
        }
        ReportKind::LargeDryTypeXfmrMts => {
            process::<LargeDryTypeXfmrMtsReport>(req, cfg, data.as_ref(), job.as_ref()).await
        }
        ReportKind::MediumVoltageCircuitBreaker => {
            process::<MvCircuitBreakerReport>(req, cfg, data.as_ref(), job.as_ref()).await
        }
        ReportKind::MediumVoltageSwitchMts => {
            process::<MvSwitchMtsReport>(req, cfg, data.as_ref(), job.as_ref()).await
        }
        ReportKind::MediumVoltageCableVlf => {
            process::<MvCableVlfReport>(req, cfg, data.as_ref(), job.as_ref()).await
        }
        ReportKind::AutomaticTransferSwitch => {
            process::<AutomaticTransferSwitchReport>(req, cfg, data.as_ref(), job.as_ref()).await
        }
        ReportKind::MediumVoltageMotorStarterMts => {
            process::<MvMotorStarterMtsReport>(req, cfg, data.as_ref(), job.as_ref()).await
        }
    }
}

async fn process<R: ReportForm>(
    req: &ReportRequest,
    cfg: &Config,
    data: Option<&Value>,
    job: Option<&JobContext>,
) -> Result<ReportSummary, AppError> {
    let mut session = ReportSession::<R>::open(data, job, SessionDefaults::from(cfg));
    if let Some(f) = req.fahrenheit {
        session.set_fahrenheit(Some(f));
    }
    if let Some(c) = req.celsius {
        session.set_celsius(Some(c));
    }
    if let Some(status) = req.status {
        session.set_status(status);
    }

    let sink = match &req.output {
        Some(path) => JsonFileSink::new(path.clone()),
        None => JsonFileSink::in_dir(&cfg.records_dir, R::KIND.as_str(), &session.record().header().identifier),
    };
    session.save(&sink).await?;

    let temp = *session.record().temperature();
    info!(kind = %R::KIND, path = %sink.path().display(), tcf = temp.tcf, "보고서 처리 완료");
    Ok(ReportSummary {
        kind: R::KIND,
        path: sink.path().to_path_buf(),
        fahrenheit: temp.fahrenheit,
        celsius: temp.celsius,
        tcf: temp.tcf,
    })
}

/// 대화형 계산기의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::TcfLookup => ui_cli::handle_tcf_lookup(config)?,
            MenuChoice::Correction => ui_cli::handle_correction()?,
            MenuChoice::Ratios => ui_cli::handle_ratios()?,
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion()?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
