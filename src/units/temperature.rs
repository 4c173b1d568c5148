use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + 273.15,
        TemperatureUnit::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
        TemperatureUnit::Rankine => value * 5.0 / 9.0,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - 273.15,
        TemperatureUnit::Fahrenheit => value_k * 9.0 / 5.0 - 459.67,
        TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
///
/// 섭씨/화씨 사이는 켈빈을 거치지 않고 직접 환산해 .5 경계값이 흔들리지 않게 한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    match (from, to) {
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => (value - 32.0) * 5.0 / 9.0,
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        _ => from_kelvin(to_kelvin(value, from), to),
    }
}

/// 0.5를 항상 양의 방향으로 올리는 반올림 (-2.5 -> -2, 2.5 -> 3).
///
/// 현장 양식의 정수 섭씨 키가 이 규칙으로 만들어졌으므로 `f64::round` 대신 사용한다.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// 화씨를 정수 섭씨로 환산한다. `round((f - 32) * 5/9)`
pub fn celsius_from_fahrenheit(fahrenheit: f64) -> f64 {
    round_half_up(convert_temperature(
        fahrenheit,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Celsius,
    ))
}

/// 섭씨를 화씨로 환산한다. 반올림하지 않는다.
pub fn fahrenheit_from_celsius(celsius: f64) -> f64 {
    convert_temperature(celsius, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit)
}

/// (°F, °C) 대응표에서 입력 화씨와 가장 가까운 행의 섭씨를 돌려준다.
///
/// 같은 거리의 행이 여럿이면 앞쪽 행을 택한다. 표가 비었거나 입력이 유한하지 않으면 `None`.
pub fn nearest_row_celsius(fahrenheit: f64, rows: &[(f64, i32)]) -> Option<i32> {
    if !fahrenheit.is_finite() {
        return None;
    }
    let mut best: Option<(f64, i32)> = None;
    for &(row_f, row_c) in rows {
        let distance = (row_f - fahrenheit).abs();
        match best {
            Some((best_distance, _)) if distance >= best_distance => {}
            _ => best = Some((distance, row_c)),
        }
    }
    best.map(|(_, c)| c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_degree_rounds_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn nearest_row_prefers_first_on_tie() {
        let rows = [(10.0, 1), (12.0, 2)];
        assert_eq!(nearest_row_celsius(11.0, &rows), Some(1));
        assert_eq!(nearest_row_celsius(11.5, &rows), Some(2));
        assert_eq!(nearest_row_celsius(f64::NAN, &rows), None);
        assert_eq!(nearest_row_celsius(11.0, &[]), None);
    }
}
