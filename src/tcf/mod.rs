//! 온도 보정 계수(TCF) 엔진.
//!
//! 주위 온도에서 측정한 절연 저항을 20°C 기준으로 환산하는 곱셈 계수를 구한다.
//! 표는 모두 불변 데이터이며 `TcfTable` 값으로 주입된다.

pub mod profile;
pub mod tables;

pub use profile::{CelsiusConversion, TemperatureDriver, TemperatureProfile};

use crate::units::round_half_up;

/// 표에 해당 온도가 없거나 입력이 잘못되었을 때 쓰는 계수.
pub const DEFAULT_FACTOR: f64 = 1.0;

/// 표의 한 행. 섭씨 정수 키와 보정 계수.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TcfPoint {
    pub celsius: i32,
    pub factor: f64,
}

/// 표 조회 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup {
    /// 섭씨를 정수로 반올림해 정확히 일치하는 키만 사용한다. 없으면 1.0.
    /// `max_celsius`보다 큰 키는 표에 있어도 없는 것으로 본다.
    Discrete { max_celsius: Option<i32> },
    /// 구간 양 끝으로 clamp한 뒤 인접한 두 키 사이를 선형 보간한다.
    Banded,
}

/// 읽기 전용 TCF 표. 키는 오름차순이어야 한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TcfTable {
    points: &'static [TcfPoint],
    lookup: Lookup,
}

impl TcfTable {
    pub const fn discrete(points: &'static [TcfPoint]) -> Self {
        Self {
            points,
            lookup: Lookup::Discrete { max_celsius: None },
        }
    }

    /// 같은 표를 `max_celsius`까지만 사용하는 이산 조회표.
    pub const fn discrete_until(points: &'static [TcfPoint], max_celsius: i32) -> Self {
        Self {
            points,
            lookup: Lookup::Discrete {
                max_celsius: Some(max_celsius),
            },
        }
    }

    pub const fn banded(points: &'static [TcfPoint]) -> Self {
        Self {
            points,
            lookup: Lookup::Banded,
        }
    }

    pub fn lookup(&self) -> Lookup {
        self.lookup
    }

    /// 실제로 조회 가능한 행들. 상한이 있으면 그 이하만 돌려준다.
    pub fn points(&self) -> impl Iterator<Item = &TcfPoint> + '_ {
        let max = match self.lookup {
            Lookup::Discrete { max_celsius } => max_celsius,
            Lookup::Banded => None,
        };
        self.points
            .iter()
            .filter(move |p| max.map_or(true, |m| p.celsius <= m))
    }

    /// 섭씨 온도에 대한 보정 계수를 구한다. 어떤 입력에도 실패하지 않는다.
    pub fn factor(&self, celsius: f64) -> f64 {
        if !celsius.is_finite() {
            return DEFAULT_FACTOR;
        }
        match self.lookup {
            Lookup::Discrete { max_celsius } => self.discrete_factor(celsius, max_celsius),
            Lookup::Banded => self.banded_factor(celsius),
        }
    }

    fn discrete_factor(&self, celsius: f64, max_celsius: Option<i32>) -> f64 {
        let key = round_half_up(celsius);
        if let Some(max) = max_celsius {
            if key > f64::from(max) {
                return DEFAULT_FACTOR;
            }
        }
        self.points
            .iter()
            .find(|p| f64::from(p.celsius) == key)
            .map_or(DEFAULT_FACTOR, |p| p.factor)
    }

    fn banded_factor(&self, celsius: f64) -> f64 {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return DEFAULT_FACTOR,
        };
        if celsius <= f64::from(first.celsius) {
            return first.factor;
        }
        if celsius >= f64::from(last.celsius) {
            return last.factor;
        }
        for pair in self.points.windows(2) {
            let low = pair[0];
            let high = pair[1];
            let (lo_c, hi_c) = (f64::from(low.celsius), f64::from(high.celsius));
            if celsius == lo_c {
                return low.factor;
            }
            if celsius > lo_c && celsius < hi_c {
                let ratio = (celsius - lo_c) / (hi_c - lo_c);
                return low.factor + ratio * (high.factor - low.factor);
            }
        }
        // 키 사이 틈이 없으므로 여기까지 오는 경우는 정확히 어떤 키와 같을 때뿐이다.
        self.points
            .iter()
            .find(|p| f64::from(p.celsius) == celsius)
            .map_or(DEFAULT_FACTOR, |p| p.factor)
    }
}

/// 기본(표준) 표로 섭씨 → TCF를 구한다.
pub fn correction_factor(celsius: f64) -> f64 {
    tables::STANDARD.factor(celsius)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO: [TcfPoint; 2] = [
        TcfPoint {
            celsius: 20,
            factor: 1.0,
        },
        TcfPoint {
            celsius: 25,
            factor: 1.25,
        },
    ];

    #[test]
    fn banded_midpoint_interpolates() {
        let table = TcfTable::banded(&TWO);
        assert!((table.factor(22.5) - 1.125).abs() < 1e-12);
        assert_eq!(table.factor(25.0), 1.25);
    }

    #[test]
    fn empty_table_defaults() {
        let table = TcfTable::banded(&[]);
        assert_eq!(table.factor(20.0), DEFAULT_FACTOR);
        let table = TcfTable::discrete(&[]);
        assert_eq!(table.factor(20.0), DEFAULT_FACTOR);
    }

    #[test]
    fn truncated_table_hides_upper_rows() {
        let table = TcfTable::discrete_until(&TWO, 22);
        assert_eq!(table.factor(20.0), 1.0);
        assert_eq!(table.factor(25.0), DEFAULT_FACTOR);
        assert_eq!(table.points().count(), 1);
    }
}
