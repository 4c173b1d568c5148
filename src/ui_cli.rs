use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::correction::{
    apply_correction_with, dielectric_absorption_ratio, polarization_index, ratios_acceptable,
};
use crate::quantity::QuantityKind;
use crate::reports::ReportKind;
use crate::tcf::TemperatureDriver;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    TcfLookup,
    Correction,
    Ratios,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== NETA Test Toolbox ===");
    println!("1) 온도 보정 계수(TCF) 조회");
    println!("2) 측정값 보정");
    println!("3) 흡수비(DAR) / 성극지수(PI)");
    println!("4) 단위 변환기");
    println!("5) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::TcfLookup),
            "2" => return Ok(MenuChoice::Correction),
            "3" => return Ok(MenuChoice::Ratios),
            "4" => return Ok(MenuChoice::UnitConversion),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 보고서 종류와 온도로 TCF를 조회한다.
pub fn handle_tcf_lookup(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- TCF 조회 --");
    let kind = read_report_kind()?;
    let profile = kind.profile();
    println!("온도 단위: 1=°F 2=°C (빈 값이면 설정의 기본 온도 {}°F)", cfg.default_fahrenheit);
    let (driver, value) = match read_line("선택: ")?.trim() {
        "2" => (TemperatureDriver::Celsius, read_f64("섭씨 온도: ")?),
        "1" => (TemperatureDriver::Fahrenheit, read_f64("화씨 온도: ")?),
        _ => (TemperatureDriver::Fahrenheit, cfg.default_fahrenheit),
    };
    let derived = profile.derive(driver, Some(value));
    println!(
        "{}: {}°F / {}°C → TCF {}",
        kind.title(),
        fmt_temp(derived.fahrenheit),
        fmt_temp(derived.celsius),
        derived.tcf
    );
    Ok(())
}

/// 원시 측정값들에 TCF를 곱한다. 보고서 종류의 비숫자 규칙을 따른다.
pub fn handle_correction() -> Result<(), AppError> {
    println!("\n-- 측정값 보정 --");
    let kind = read_report_kind()?;
    let tcf = read_f64("TCF: ")?;
    let raw = read_line("측정값 (쉼표로 구분): ")?;
    for value in raw.trim().split(',') {
        let value = value.trim();
        let corrected = apply_correction_with(value, tcf, kind.non_numeric());
        println!("{value:>12} → {corrected}");
    }
    Ok(())
}

/// 0.5분 / 1분 / 10분 값으로 DAR, PI를 계산한다.
pub fn handle_ratios() -> Result<(), AppError> {
    println!("\n-- DAR / PI --");
    let half = read_line("0.5분 값: ")?;
    let one = read_line("1분 값: ")?;
    let ten = read_line("10분 값: ")?;
    let dar = dielectric_absorption_ratio(half.trim(), one.trim());
    let pi = polarization_index(one.trim(), ten.trim());
    println!("DAR = {}", if dar.is_empty() { "-" } else { dar.as_str() });
    println!("PI  = {}", if pi.is_empty() { "-" } else { pi.as_str() });
    match ratios_acceptable([dar.as_str(), pi.as_str()]) {
        Some(true) => println!("판정: 양호 (모두 1.0 초과)"),
        Some(false) => println!("판정: 불량"),
        None => println!("판정: 값 없음"),
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion() -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    println!("1) 온도  2) 저항");
    let kind = loop {
        let sel = read_line("항목 번호를 입력: ")?;
        match sel.trim() {
            "1" => break QuantityKind::Temperature,
            "2" => break QuantityKind::Resistance,
            _ => println!("지원하지 않는 번호입니다."),
        }
    };
    let value = read_f64("값 입력: ")?;
    let from_unit = read_line("입력 단위(ex: F, C, MΩ): ")?;
    let to_unit = read_line("변환 단위(ex: C, K, GΩ): ")?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("변환 결과: {result} {}", to_unit.trim());
    Ok(())
}

/// 새 양식의 기본 온도/습도를 바꾼다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 기본 온도: {}°F", cfg.default_fahrenheit);
    let f = read_line("새 기본 온도(°F, 빈 값이면 유지): ")?;
    if let Ok(v) = f.trim().parse::<f64>() {
        if v.is_finite() {
            cfg.default_fahrenheit = v;
        }
    }
    let h = read_line("기본 습도(%, '-' 입력 시 양식 기본값): ")?;
    match h.trim() {
        "" => {}
        "-" => cfg.default_humidity = None,
        s => match s.parse::<f64>() {
            Ok(v) if v.is_finite() => cfg.default_humidity = Some(v),
            _ => println!("잘못된 입력이므로 변경하지 않습니다."),
        },
    }
    println!(
        "기본 온도 {}°F, 기본 습도 {}",
        cfg.default_fahrenheit,
        cfg.default_humidity.map_or("-".to_string(), |h| format!("{h}%"))
    );
    Ok(())
}

fn read_report_kind() -> Result<ReportKind, AppError> {
    for (i, kind) in ReportKind::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, kind.title());
    }
    loop {
        let sel = read_line("보고서 종류: ")?;
        let picked = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| ReportKind::ALL.get(i).copied());
        match picked {
            Some(kind) => return Ok(kind),
            None => println!("지원하지 않는 번호입니다."),
        }
    }
}

fn fmt_temp(value: Option<f64>) -> String {
    value.map_or("-".to_string(), |v| v.to_string())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("숫자를 입력하세요."),
        }
    }
}
