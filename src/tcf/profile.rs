use serde::{Deserialize, Serialize};

use super::{tables, TcfTable, DEFAULT_FACTOR};
use crate::units::{celsius_from_fahrenheit, nearest_row_celsius, round_half_up};

/// 화씨 입력을 섭씨로 바꾸는 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CelsiusConversion {
    /// `round((f - 32) * 5/9)`
    Rounded,
    /// 대응표에서 가장 가까운 화씨 행의 섭씨.
    NearestRow(&'static [(f64, i32)]),
}

/// 온도 필드 중 무엇이 다른 값을 결정하는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureDriver {
    Fahrenheit,
    Celsius,
}

/// 보고서 종류별 온도 처리 규칙: 환산 방식, TCF 표, 불러올 때의 기준 필드.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureProfile {
    pub conversion: CelsiusConversion,
    pub table: TcfTable,
    pub load_driver: TemperatureDriver,
}

/// 화씨/섭씨/TCF 세 값을 한 번에 담는 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedTemperature {
    pub fahrenheit: Option<f64>,
    pub celsius: Option<f64>,
    pub tcf: f64,
}

impl TemperatureProfile {
    pub const fn new(table: TcfTable) -> Self {
        Self {
            conversion: CelsiusConversion::Rounded,
            table,
            load_driver: TemperatureDriver::Fahrenheit,
        }
    }

    pub const fn with_conversion(mut self, conversion: CelsiusConversion) -> Self {
        self.conversion = conversion;
        self
    }

    pub const fn with_load_driver(mut self, driver: TemperatureDriver) -> Self {
        self.load_driver = driver;
        self
    }

    /// 화씨 → 섭씨. 입력이 유한하지 않으면 `None`.
    pub fn celsius_for(&self, fahrenheit: f64) -> Option<f64> {
        if !fahrenheit.is_finite() {
            return None;
        }
        match self.conversion {
            CelsiusConversion::Rounded => Some(celsius_from_fahrenheit(fahrenheit)),
            CelsiusConversion::NearestRow(rows) => {
                nearest_row_celsius(fahrenheit, rows).map(f64::from)
            }
        }
    }

    pub fn factor_for(&self, celsius: Option<f64>) -> f64 {
        celsius.map_or(DEFAULT_FACTOR, |c| self.table.factor(c))
    }

    /// 화씨를 기준으로 섭씨와 TCF를 다시 계산한다.
    pub fn from_fahrenheit(&self, fahrenheit: Option<f64>) -> DerivedTemperature {
        let fahrenheit = fahrenheit.filter(|f| f.is_finite());
        let celsius = fahrenheit.and_then(|f| self.celsius_for(f));
        DerivedTemperature {
            fahrenheit,
            celsius,
            tcf: self.factor_for(celsius),
        }
    }

    /// 섭씨를 기준으로 화씨(정수 반올림)와 TCF를 다시 계산한다.
    pub fn from_celsius(&self, celsius: Option<f64>) -> DerivedTemperature {
        let celsius = celsius.filter(|c| c.is_finite());
        let fahrenheit = celsius.map(|c| round_half_up(c * 9.0 / 5.0 + 32.0));
        DerivedTemperature {
            fahrenheit,
            celsius,
            tcf: self.factor_for(celsius),
        }
    }

    pub fn derive(&self, driver: TemperatureDriver, value: Option<f64>) -> DerivedTemperature {
        match driver {
            TemperatureDriver::Fahrenheit => self.from_fahrenheit(value),
            TemperatureDriver::Celsius => self.from_celsius(value),
        }
    }
}

/// 대부분의 보고서: 표준 표, 화씨 기준.
pub const STANDARD_PROFILE: TemperatureProfile = TemperatureProfile::new(tables::STANDARD);

pub const ATS25_TRANSFORMER_PROFILE: TemperatureProfile =
    TemperatureProfile::new(tables::STANDARD_TO_60).with_load_driver(TemperatureDriver::Celsius);

pub const DRY_TYPE_PROFILE: TemperatureProfile = TemperatureProfile::new(tables::DRY_TYPE)
    .with_conversion(CelsiusConversion::NearestRow(&tables::DRY_TYPE_CONVERSION_ROWS));

pub const SWITCH_MTS_PROFILE: TemperatureProfile =
    TemperatureProfile::new(tables::SWITCH_MTS_SPARSE).with_load_driver(TemperatureDriver::Celsius);

pub const CABLE_VLF_PROFILE: TemperatureProfile =
    TemperatureProfile::new(tables::CABLE_BANDED).with_load_driver(TemperatureDriver::Celsius);
