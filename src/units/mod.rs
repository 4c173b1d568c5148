//! 단위 정의 및 변환 모듈 모음.

pub mod resistance;
pub mod temperature;

pub use resistance::{convert_resistance, ResistanceUnit};
pub use temperature::{
    celsius_from_fahrenheit, convert_temperature, fahrenheit_from_celsius, nearest_row_celsius,
    round_half_up, TemperatureUnit,
};
