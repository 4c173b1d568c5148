use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `C`, `F`, `K`, `MΩ`, `Mohm`, `kohm` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::Resistance => {
            let from = parse_resistance_unit(from_unit_str)?;
            let to = parse_resistance_unit(to_unit_str)?;
            Ok(convert_resistance(value, from, to))
        }
    }
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "r" | "rankine" => Ok(TemperatureUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 저항 단위 문자열을 해석한다.
///
/// 대소문자가 의미를 가지므로(mΩ / MΩ) 접두어는 원문 그대로 비교한다.
pub fn parse_resistance_unit(s: &str) -> Result<ResistanceUnit, ConversionError> {
    let trimmed = s.trim();
    let (prefix, rest) = match trimmed.char_indices().nth(1) {
        Some((idx, _)) => trimmed.split_at(idx),
        None => ("", trimmed),
    };
    let is_ohm = |u: &str| matches!(u.to_lowercase().as_str(), "ω" | "ohm" | "ohms");
    if is_ohm(trimmed) {
        return Ok(ResistanceUnit::Ohm);
    }
    if !is_ohm(rest) {
        return Err(ConversionError::UnknownUnit(s.to_string()));
    }
    match prefix {
        "µ" | "μ" | "u" => Ok(ResistanceUnit::MicroOhm),
        "m" => Ok(ResistanceUnit::MilliOhm),
        "k" | "K" => Ok(ResistanceUnit::KiloOhm),
        "M" => Ok(ResistanceUnit::MegaOhm),
        "G" | "g" => Ok(ResistanceUnit::GigaOhm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resistance_prefix_is_case_sensitive() {
        assert_eq!(parse_resistance_unit("mΩ").unwrap(), ResistanceUnit::MilliOhm);
        assert_eq!(parse_resistance_unit("MΩ").unwrap(), ResistanceUnit::MegaOhm);
        assert_eq!(parse_resistance_unit("Mohm").unwrap(), ResistanceUnit::MegaOhm);
        assert_eq!(parse_resistance_unit("µΩ").unwrap(), ResistanceUnit::MicroOhm);
        assert_eq!(parse_resistance_unit("ohm").unwrap(), ResistanceUnit::Ohm);
        assert!(parse_resistance_unit("Xohm").is_err());
    }

    #[test]
    fn convert_gigaohm_to_megaohm() {
        let out = convert(QuantityKind::Resistance, 2.5, "GΩ", "MΩ").unwrap();
        assert!((out - 2500.0).abs() < 1e-9);
    }

    #[test]
    fn convert_fahrenheit_to_celsius() {
        let out = convert(QuantityKind::Temperature, 68.0, "F", "C").unwrap();
        assert!((out - 20.0).abs() < 1e-9);
    }
}
