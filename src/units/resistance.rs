use serde::{Deserialize, Serialize};

/// 저항 단위. 내부 기준은 Ω이다.
///
/// 접촉 저항은 µΩ~Ω, 절연 저항은 kΩ~GΩ 범위를 주로 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResistanceUnit {
    #[serde(rename = "µΩ", alias = "μΩ")]
    MicroOhm,
    #[serde(rename = "mΩ")]
    MilliOhm,
    #[serde(rename = "Ω")]
    Ohm,
    #[serde(rename = "kΩ")]
    KiloOhm,
    #[serde(rename = "MΩ")]
    MegaOhm,
    #[serde(rename = "GΩ")]
    GigaOhm,
}

impl ResistanceUnit {
    /// 양식에 표시되는 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            ResistanceUnit::MicroOhm => "µΩ",
            ResistanceUnit::MilliOhm => "mΩ",
            ResistanceUnit::Ohm => "Ω",
            ResistanceUnit::KiloOhm => "kΩ",
            ResistanceUnit::MegaOhm => "MΩ",
            ResistanceUnit::GigaOhm => "GΩ",
        }
    }

    fn scale(self) -> f64 {
        match self {
            ResistanceUnit::MicroOhm => 1e-6,
            ResistanceUnit::MilliOhm => 1e-3,
            ResistanceUnit::Ohm => 1.0,
            ResistanceUnit::KiloOhm => 1e3,
            ResistanceUnit::MegaOhm => 1e6,
            ResistanceUnit::GigaOhm => 1e9,
        }
    }
}

/// 저항값을 변환한다.
pub fn convert_resistance(value: f64, from: ResistanceUnit, to: ResistanceUnit) -> f64 {
    value * from.scale() / to.scale()
}
