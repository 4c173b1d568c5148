use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use neta_test_toolbox::app::{self, AppError, ReportRequest};
use neta_test_toolbox::config::{self, Config};
use neta_test_toolbox::correction::apply_correction_with;
use neta_test_toolbox::logging;
use neta_test_toolbox::reports::{ReportKind, ReportStatus};
use neta_test_toolbox::tcf::{TemperatureDriver, TemperatureProfile};

/// NETA 시험 보고서 온도 보정 도구
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Commands>,
}

/// 온도 입력. 둘 다 없으면 설정의 기본 온도를 쓴다.
#[derive(Args, Debug, Clone, Copy)]
struct TemperatureArgs {
    /// 주위 온도 (°F)
    #[arg(short, long, conflicts_with = "celsius", allow_negative_numbers = true)]
    fahrenheit: Option<f64>,
    /// 주위 온도 (°C)
    #[arg(short, long, allow_negative_numbers = true)]
    celsius: Option<f64>,
}

impl TemperatureArgs {
    fn resolve(&self, profile: &TemperatureProfile, cfg: &Config) -> (Option<f64>, Option<f64>, f64) {
        let derived = match (self.fahrenheit, self.celsius) {
            (_, Some(c)) => profile.derive(TemperatureDriver::Celsius, Some(c)),
            (Some(f), None) => profile.derive(TemperatureDriver::Fahrenheit, Some(f)),
            (None, None) => profile.derive(TemperatureDriver::Fahrenheit, Some(cfg.default_fahrenheit)),
        };
        (derived.fahrenheit, derived.celsius, derived.tcf)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 보고서 종류와 온도에 대한 TCF를 출력한다.
    Tcf {
        #[arg(short, long)]
        kind: ReportKind,
        #[command(flatten)]
        temperature: TemperatureArgs,
    },
    /// 원시 측정값을 보정한다.
    Correct {
        #[arg(short, long)]
        kind: ReportKind,
        /// TCF를 직접 지정 (온도보다 우선)
        #[arg(long)]
        tcf: Option<f64>,
        #[command(flatten)]
        temperature: TemperatureArgs,
        /// 원시 측정값들
        #[arg(required = true, allow_hyphen_values = true)]
        readings: Vec<String>,
    },
    /// 보고서 레코드를 읽어 보정값을 다시 계산하고 JSON으로 저장한다.
    Report {
        /// 레코드에 reportType이 없을 때 필요
        #[arg(short, long)]
        kind: Option<ReportKind>,
        /// 저장된 레코드 JSON
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// 작업 정보 JSON (고객명, 주소, 작업 번호)
        #[arg(short, long)]
        job: Option<PathBuf>,
        /// 출력 경로 (기본: 설정의 records_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        temperature: TemperatureArgs,
        /// PASS / FAIL / LIMITED SERVICE
        #[arg(short, long)]
        status: Option<String>,
    },
    /// 대화형 계산기 메뉴
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
#[tokio::main]
async fn main() {
    if let Err(err) = try_run().await {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

async fn try_run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default(&cli.config)?;
    logging::init(&cfg.log);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Tcf { kind, temperature } => {
            let (f, c, tcf) = temperature.resolve(&kind.profile(), &cfg);
            println!("{}", kind.title());
            println!("  °F  = {}", f.map_or("-".to_string(), |v| v.to_string()));
            println!("  °C  = {}", c.map_or("-".to_string(), |v| v.to_string()));
            println!("  TCF = {tcf}");
        }
        Commands::Correct {
            kind,
            tcf,
            temperature,
            readings,
        } => {
            let tcf = match tcf {
                Some(t) => t,
                None => temperature.resolve(&kind.profile(), &cfg).2,
            };
            println!("TCF = {tcf}");
            for raw in &readings {
                let corrected = apply_correction_with(raw, tcf, kind.non_numeric());
                println!("{raw:>12} → {corrected}");
            }
        }
        Commands::Report {
            kind,
            input,
            job,
            output,
            temperature,
            status,
        } => {
            let req = ReportRequest {
                kind,
                input,
                job,
                output,
                fahrenheit: temperature.fahrenheit,
                celsius: temperature.celsius,
                status: status.as_deref().and_then(ReportStatus::parse),
            };
            let summary = app::run_report(&req, &cfg).await?;
            println!(
                "{} 저장: {} (TCF {})",
                summary.kind,
                summary.path.display(),
                summary.tcf
            );
        }
        Commands::Interactive => {
            app::run(&mut cfg, &cli.config)?;
        }
    }
    Ok(())
}
