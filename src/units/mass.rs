use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 연료 소비량 입력에 쓰는 질량 단위. 내부 기준은 g이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    Gram,
    Kilogram,
    Tonne,
}

impl MassUnit {
    fn grams_per_unit(self) -> f64 {
        match self {
            MassUnit::Gram => 1.0,
            MassUnit::Kilogram => 1.0e3,
            MassUnit::Tonne => 1.0e6,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            MassUnit::Gram => "g",
            MassUnit::Kilogram => "kg",
            MassUnit::Tonne => "t",
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for MassUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "g" | "gram" => Ok(MassUnit::Gram),
            "kg" | "kilogram" => Ok(MassUnit::Kilogram),
            "t" | "tonne" | "ton" => Ok(MassUnit::Tonne),
            _ => Err(format!("알 수 없는 질량 단위: {s}")),
        }
    }
}

/// 질량 값을 g으로 환산한다.
pub fn to_grams(value: f64, unit: MassUnit) -> f64 {
    value * unit.grams_per_unit()
}
