//! 연료 종류와 연료별 규정 상수.
//!
//! 값은 MEPC.364(79) Table 2 (Cf, 탄소 함량, LCV)를 따른다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CiiError, Result};

/// CII 산정에 사용하는 연료 종류. `Unknown`, `Other`는 계산에 쓸 수 없는 센티넬이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FuelType {
    Unknown,
    /// 디젤/가스유 (ISO 8217 DMX~DMB)
    DieselOrGasoil,
    /// 경질 연료유 (LFO)
    LightFuelOil,
    /// 중질 연료유 (HFO)
    HeavyFuelOil,
    /// LPG (프로판)
    LiquefiedPetroleumPropane,
    /// LPG (부탄)
    LiquefiedPetroleumButane,
    Ethane,
    /// 액화천연가스 (LNG)
    LiquefiedNaturalGas,
    Methanol,
    Ethanol,
    Other,
}

/// 연료 1종의 규정 상수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuelProperties {
    /// CO2 질량 환산 계수 Cf [g CO2 / g 연료]
    pub co2_conversion_factor: f64,
    /// 탄소 함량 [질량 분율]
    pub carbon_content: f64,
    /// 저위발열량 LCV [kJ/kg]
    pub lower_calorific_value_kj_per_kg: f64,
}

impl FuelProperties {
    const fn new(cf: f64, carbon: f64, lcv: f64) -> Self {
        Self {
            co2_conversion_factor: cf,
            carbon_content: carbon,
            lower_calorific_value_kj_per_kg: lcv,
        }
    }
}

const DIESEL_OR_GASOIL: FuelProperties = FuelProperties::new(3.206, 0.8744, 42_700.0);
const LIGHT_FUEL_OIL: FuelProperties = FuelProperties::new(3.151, 0.8594, 41_200.0);
const HEAVY_FUEL_OIL: FuelProperties = FuelProperties::new(3.114, 0.8493, 40_200.0);
const LPG_PROPANE: FuelProperties = FuelProperties::new(3.000, 0.8182, 46_300.0);
const LPG_BUTANE: FuelProperties = FuelProperties::new(3.030, 0.8264, 45_700.0);
const ETHANE: FuelProperties = FuelProperties::new(2.927, 0.7989, 46_400.0);
const LNG: FuelProperties = FuelProperties::new(2.750, 0.7500, 48_000.0);
const METHANOL: FuelProperties = FuelProperties::new(1.375, 0.3750, 19_900.0);
const ETHANOL: FuelProperties = FuelProperties::new(1.913, 0.5217, 26_800.0);

impl FuelType {
    /// 센티넬을 제외한 규정 연료 전체.
    pub const ALL: [FuelType; 9] = [
        FuelType::DieselOrGasoil,
        FuelType::LightFuelOil,
        FuelType::HeavyFuelOil,
        FuelType::LiquefiedPetroleumPropane,
        FuelType::LiquefiedPetroleumButane,
        FuelType::Ethane,
        FuelType::LiquefiedNaturalGas,
        FuelType::Methanol,
        FuelType::Ethanol,
    ];

    /// 센티넬을 제외한 규제 대상 연료를 선언 순서대로 돌려준다.
    pub fn iter() -> impl Iterator<Item = FuelType> {
        Self::ALL.into_iter()
    }

    /// 연료 상수를 조회한다. 센티넬은 `UnsupportedFuelType`.
    pub fn properties(self) -> Result<&'static FuelProperties> {
        match self {
            FuelType::DieselOrGasoil => Ok(&DIESEL_OR_GASOIL),
            FuelType::LightFuelOil => Ok(&LIGHT_FUEL_OIL),
            FuelType::HeavyFuelOil => Ok(&HEAVY_FUEL_OIL),
            FuelType::LiquefiedPetroleumPropane => Ok(&LPG_PROPANE),
            FuelType::LiquefiedPetroleumButane => Ok(&LPG_BUTANE),
            FuelType::Ethane => Ok(&ETHANE),
            FuelType::LiquefiedNaturalGas => Ok(&LNG),
            FuelType::Methanol => Ok(&METHANOL),
            FuelType::Ethanol => Ok(&ETHANOL),
            FuelType::Unknown | FuelType::Other => Err(CiiError::UnsupportedFuelType(self)),
        }
    }

    pub fn co2_conversion_factor(self) -> Result<f64> {
        Ok(self.properties()?.co2_conversion_factor)
    }

    pub fn carbon_content(self) -> Result<f64> {
        Ok(self.properties()?.carbon_content)
    }

    pub fn lower_calorific_value(self) -> Result<f64> {
        Ok(self.properties()?.lower_calorific_value_kj_per_kg)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FuelType::Unknown => "unknown",
            FuelType::DieselOrGasoil => "diesel-or-gasoil",
            FuelType::LightFuelOil => "light-fuel-oil",
            FuelType::HeavyFuelOil => "heavy-fuel-oil",
            FuelType::LiquefiedPetroleumPropane => "liquefied-petroleum-propane",
            FuelType::LiquefiedPetroleumButane => "liquefied-petroleum-butane",
            FuelType::Ethane => "ethane",
            FuelType::LiquefiedNaturalGas => "liquefied-natural-gas",
            FuelType::Methanol => "methanol",
            FuelType::Ethanol => "ethanol",
            FuelType::Other => "other",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('_', "-");
        // 현장에서 흔히 쓰는 약어
        let alias = match needle.as_str() {
            "mdo" | "mgo" | "diesel" | "gasoil" => Some(FuelType::DieselOrGasoil),
            "lfo" => Some(FuelType::LightFuelOil),
            "hfo" => Some(FuelType::HeavyFuelOil),
            "propane" => Some(FuelType::LiquefiedPetroleumPropane),
            "butane" => Some(FuelType::LiquefiedPetroleumButane),
            "lng" => Some(FuelType::LiquefiedNaturalGas),
            "unknown" => Some(FuelType::Unknown),
            "other" => Some(FuelType::Other),
            _ => None,
        };
        if let Some(fuel) = alias {
            return Ok(fuel);
        }
        FuelType::ALL
            .iter()
            .copied()
            .find(|fuel| fuel.as_str() == needle)
            .ok_or_else(|| format!("알 수 없는 연료: {s}"))
    }
}

/// 연료 1종의 연간 소비량 [g].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelConsumption {
    pub fuel_type: FuelType,
    pub consumption_grams: f64,
}

impl FuelConsumption {
    pub fn new(fuel_type: FuelType, consumption_grams: f64) -> Self {
        Self {
            fuel_type,
            consumption_grams,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_regulated_fuel_has_properties() {
        for fuel in FuelType::ALL {
            let props = fuel.properties().expect("regulated fuel");
            assert!(props.co2_conversion_factor > 1.0);
            assert!(props.carbon_content > 0.0 && props.carbon_content < 1.0);
            assert!(props.lower_calorific_value_kj_per_kg > 10_000.0);
        }
    }

    #[test]
    fn iter_skips_sentinels() {
        assert_eq!(FuelType::iter().count(), 9);
        assert!(FuelType::iter().all(|f| f != FuelType::Unknown && f != FuelType::Other));
    }

    #[test]
    fn sentinels_are_rejected() {
        for fuel in [FuelType::Unknown, FuelType::Other] {
            assert_eq!(
                fuel.co2_conversion_factor(),
                Err(CiiError::UnsupportedFuelType(fuel))
            );
        }
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("MGO".parse::<FuelType>(), Ok(FuelType::DieselOrGasoil));
        assert_eq!("lng".parse::<FuelType>(), Ok(FuelType::LiquefiedNaturalGas));
        assert_eq!("heavy_fuel_oil".parse::<FuelType>(), Ok(FuelType::HeavyFuelOil));
    }
}
