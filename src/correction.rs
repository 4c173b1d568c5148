//! 측정 원시값 → 20°C 보정값 문자열 계산.
//!
//! 현장 입력은 문자열이므로 공란, `N/A`, `>2000` 같은 표기가 그대로 들어온다.
//! 숫자로 해석되지 않는 입력은 오류가 아니라 보고서별 규칙([`NonNumeric`])에 따라 처리한다.

/// 숫자가 아닌 원시값을 보정 칸에 어떻게 옮길지 정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonNumeric {
    /// 원문을 그대로 복사한다.
    PassThrough,
    /// 보정 칸을 비운다.
    Blank,
    /// `<`, `>`가 포함된 표기만 남기고 나머지는 비운다.
    BlankKeepQualifiers,
}

/// 원시 측정 문자열을 숫자로 해석한다.
///
/// 앞뒤 공백을 제외하고 `[+-]숫자[.숫자]` 형태만 받는다. 지수 표기, `inf`/`nan`,
/// 단위나 부등호가 섞인 값은 모두 `None`.
pub fn parse_reading(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
        return None;
    }
    if int_part.is_empty() && frac_part.map_or(true, str::is_empty) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 원시값에 TCF를 곱해 소수 둘째 자리 문자열로 돌려준다.
///
/// 숫자가 아니면 원문을 그대로 돌려준다. 모든 입력에 대해 값을 돌려주며 실패하지 않는다.
pub fn apply_correction(raw: &str, tcf: f64) -> String {
    apply_correction_with(raw, tcf, NonNumeric::PassThrough)
}

pub fn apply_correction_with(raw: &str, tcf: f64, rule: NonNumeric) -> String {
    match parse_reading(raw) {
        Some(value) => format!("{:.2}", value * tcf),
        None => match rule {
            NonNumeric::PassThrough => raw.to_string(),
            NonNumeric::Blank => String::new(),
            NonNumeric::BlankKeepQualifiers if raw.contains(['<', '>']) => raw.to_string(),
            NonNumeric::BlankKeepQualifiers => String::new(),
        },
    }
}

/// 두 원시값의 비. 어느 한쪽이라도 숫자가 아니거나 분모가 0이면 빈 문자열.
pub fn ratio(numerator: &str, denominator: &str) -> String {
    match (parse_reading(numerator), parse_reading(denominator)) {
        (Some(n), Some(d)) if d != 0.0 => format!("{:.2}", n / d),
        _ => String::new(),
    }
}

/// 흡수비(DAR) = 1분 값 / 30초 값
pub fn dielectric_absorption_ratio(half_minute: &str, one_minute: &str) -> String {
    ratio(one_minute, half_minute)
}

/// 성극지수(PI) = 10분 값 / 1분 값
pub fn polarization_index(one_minute: &str, ten_minute: &str) -> String {
    ratio(ten_minute, one_minute)
}

/// 계산된 비율 묶음의 합격 여부.
///
/// 값이 하나도 없으면 `None`. 하나 이상 있고 있는 값이 모두 1.0을 넘으면 `Some(true)`.
pub fn ratios_acceptable<'a, I>(ratios: I) -> Option<bool>
where
    I: IntoIterator<Item = &'a str>,
{
    let values: Vec<f64> = ratios.into_iter().filter_map(parse_reading).collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().all(|v| *v > 1.0))
}

/// 명판 전압 / 2차 권선 전압. 소수 셋째 자리.
pub fn turns_ratio(nameplate_voltage: &str, secondary_voltage: &str) -> String {
    match (parse_reading(nameplate_voltage), parse_reading(secondary_voltage)) {
        (Some(p), Some(s)) if p != 0.0 && s != 0.0 => format!("{:.3}", p / s),
        _ => String::new(),
    }
}

/// 계산 권수비 대비 측정 TTR의 편차[%]. 소수 셋째 자리.
pub fn ratio_deviation(calculated: &str, measured: &str) -> String {
    match (parse_reading(calculated), parse_reading(measured)) {
        (Some(c), Some(m)) if c != 0.0 => format!("{:.3}", (c - m) / c * 100.0),
        _ => String::new(),
    }
}

/// 세 상의 편차가 모두 ±0.5% 안이면 `Pass`, 하나라도 벗어나면 `Fail`, 값이 빠지면 빈 문자열.
pub fn turns_ratio_assessment(deviations: [&str; 3]) -> String {
    let mut parsed = [0.0; 3];
    for (slot, dev) in parsed.iter_mut().zip(deviations) {
        match parse_reading(dev) {
            Some(v) => *slot = v,
            None => return String::new(),
        }
    }
    if parsed.iter().all(|d| *d < 0.501 && *d > -0.501) {
        "Pass".to_string()
    } else {
        "Fail".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reading_accepts_plain_decimals_only() {
        assert_eq!(parse_reading(" 12.5 "), Some(12.5));
        assert_eq!(parse_reading("-3"), Some(-3.0));
        assert_eq!(parse_reading(".5"), Some(0.5));
        assert_eq!(parse_reading("7."), Some(7.0));
        for bad in ["", " ", ".", "-", "1e3", "inf", "NaN", ">100", "<0.5", "12 MΩ", "N/A", "1.2.3"] {
            assert_eq!(parse_reading(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn rules_differ_only_for_non_numeric_text() {
        let tcf = 1.25;
        for rule in [NonNumeric::PassThrough, NonNumeric::Blank, NonNumeric::BlankKeepQualifiers] {
            assert_eq!(apply_correction_with("10", tcf, rule), "12.50");
            assert_eq!(apply_correction_with("", tcf, rule), "");
        }
        assert_eq!(apply_correction_with("N/A", tcf, NonNumeric::PassThrough), "N/A");
        assert_eq!(apply_correction_with("N/A", tcf, NonNumeric::Blank), "");
        assert_eq!(apply_correction_with(">2000", tcf, NonNumeric::Blank), "");
        assert_eq!(apply_correction_with(">2000", tcf, NonNumeric::BlankKeepQualifiers), ">2000");
        assert_eq!(apply_correction_with("N/A", tcf, NonNumeric::BlankKeepQualifiers), "");
    }

    #[test]
    fn turns_ratio_helpers() {
        assert_eq!(turns_ratio("13800", "480"), "28.750");
        assert_eq!(turns_ratio("-", "480"), "");
        assert_eq!(turns_ratio("13800", "0"), "");
        assert_eq!(ratio_deviation("28.750", "28.700"), "0.174");
        assert_eq!(turns_ratio_assessment(["0.174", "-0.2", "0.5"]), "Pass");
        assert_eq!(turns_ratio_assessment(["0.174", "-0.6", "0.5"]), "Fail");
        assert_eq!(turns_ratio_assessment(["0.174", "", "0.5"]), "");
    }
}
