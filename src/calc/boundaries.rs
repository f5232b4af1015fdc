//! 등급 경계(dd 벡터) 계산. 배수 값은 MEPC.354(78) Table 1을 따른다.

use std::fmt;

use serde::Serialize;

use crate::error::{CiiError, Result};
use crate::ship::{validate_tonnage, CapacityUnit, Ship, ShipType};

/// 등급을 가르는 네 경계의 이름.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImoCiiBoundary {
    /// A/B 경계
    Superior,
    /// B/C 경계
    Lower,
    /// C/D 경계
    Upper,
    /// D/E 경계
    Inferior,
}

impl ImoCiiBoundary {
    /// 오름차순(A 쪽부터) 경계 목록.
    pub const ALL: [ImoCiiBoundary; 4] = [
        ImoCiiBoundary::Superior,
        ImoCiiBoundary::Lower,
        ImoCiiBoundary::Upper,
        ImoCiiBoundary::Inferior,
    ];
}

impl fmt::Display for ImoCiiBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImoCiiBoundary::Superior => "superior",
            ImoCiiBoundary::Lower => "lower",
            ImoCiiBoundary::Upper => "upper",
            ImoCiiBoundary::Inferior => "inferior",
        };
        f.pad(name)
    }
}

/// 경계 네 개를 묶은 값. 표에서는 요구 CII 배수, 결과에서는 절대 CII 값으로 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DdVector {
    pub superior: f64,
    pub lower: f64,
    pub upper: f64,
    pub inferior: f64,
}

impl DdVector {
    const fn new(superior: f64, lower: f64, upper: f64, inferior: f64) -> Self {
        Self {
            superior,
            lower,
            upper,
            inferior,
        }
    }

    pub fn get(&self, boundary: ImoCiiBoundary) -> f64 {
        match boundary {
            ImoCiiBoundary::Superior => self.superior,
            ImoCiiBoundary::Lower => self.lower,
            ImoCiiBoundary::Upper => self.upper,
            ImoCiiBoundary::Inferior => self.inferior,
        }
    }

    /// 경계 이름과 값을 A 쪽부터 순서대로 돌려준다.
    pub fn iter(&self) -> impl Iterator<Item = (ImoCiiBoundary, f64)> + '_ {
        ImoCiiBoundary::ALL.into_iter().map(|b| (b, self.get(b)))
    }

    fn scaled(&self, required_cii: f64) -> Self {
        Self {
            superior: self.superior * required_cii,
            lower: self.lower * required_cii,
            upper: self.upper * required_cii,
            inferior: self.inferior * required_cii,
        }
    }
}

/// 경계 배수가 적용되는 톤수 구간. `upper_limit`이 `None`이면 상한 없음.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightClassification {
    pub lower_limit: u32,
    pub upper_limit: Option<u32>,
}

impl WeightClassification {
    const UNBOUNDED: Self = Self {
        lower_limit: 0,
        upper_limit: None,
    };

    const fn at_least(lower_limit: u32) -> Self {
        Self {
            lower_limit,
            upper_limit: None,
        }
    }

    const fn below(threshold: u32) -> Self {
        Self {
            lower_limit: 0,
            upper_limit: Some(threshold - 1),
        }
    }
}

impl fmt::Display for WeightClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper_limit {
            Some(upper) => write!(f, "[{}, {}]", self.lower_limit, upper),
            None => write!(f, "[{}, ∞)", self.lower_limit),
        }
    }
}

/// 한 선박/연도에 대한 등급 경계. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingBoundaries {
    pub ship_type: ShipType,
    pub weight_classification: WeightClassification,
    pub capacity_unit: CapacityUnit,
    /// 절대 CII 경계 값 (배수 × 요구 CII)
    pub boundaries: DdVector,
    pub year: i32,
}

impl RatingBoundaries {
    pub fn get(&self, boundary: ImoCiiBoundary) -> f64 {
        self.boundaries.get(boundary)
    }
}

#[derive(Debug, Clone, Copy)]
struct DdVectorBand {
    /// 이 배수를 적용하는 최소 DWT (이상)
    min_deadweight: f64,
    weight_classification: WeightClassification,
    multipliers: DdVector,
}

const fn dd_band(
    min_deadweight: f64,
    weight_classification: WeightClassification,
    multipliers: DdVector,
) -> DdVectorBand {
    DdVectorBand {
        min_deadweight,
        weight_classification,
        multipliers,
    }
}

const fn single(multipliers: DdVector) -> [DdVectorBand; 1] {
    [dd_band(0.0, WeightClassification::UNBOUNDED, multipliers)]
}

const BULK_CARRIER: [DdVectorBand; 1] = single(DdVector::new(0.86, 0.94, 1.06, 1.18));
const GAS_CARRIER: [DdVectorBand; 2] = [
    dd_band(
        65_000.0,
        WeightClassification::at_least(65_000),
        DdVector::new(0.81, 0.91, 1.12, 1.44),
    ),
    dd_band(
        0.0,
        WeightClassification::below(65_000),
        DdVector::new(0.85, 0.95, 1.06, 1.25),
    ),
];
const TANKER: [DdVectorBand; 1] = single(DdVector::new(0.82, 0.93, 1.08, 1.28));
const CONTAINER_SHIP: [DdVectorBand; 1] = single(DdVector::new(0.83, 0.94, 1.07, 1.19));
const GENERAL_CARGO_SHIP: [DdVectorBand; 1] = single(DdVector::new(0.83, 0.94, 1.06, 1.19));
const REFRIGERATED_CARGO_CARRIER: [DdVectorBand; 1] =
    single(DdVector::new(0.78, 0.91, 1.07, 1.20));
const COMBINATION_CARRIER: [DdVectorBand; 1] = single(DdVector::new(0.87, 0.96, 1.06, 1.14));
const LNG_CARRIER: [DdVectorBand; 2] = [
    dd_band(
        100_000.0,
        WeightClassification::at_least(100_000),
        DdVector::new(0.89, 0.98, 1.06, 1.13),
    ),
    dd_band(
        0.0,
        WeightClassification::below(100_000),
        DdVector::new(0.78, 0.92, 1.10, 1.37),
    ),
];
const VEHICLE_CARRIER: [DdVectorBand; 1] = single(DdVector::new(0.86, 0.94, 1.06, 1.16));
const RORO_CARGO_SHIP: [DdVectorBand; 1] = single(DdVector::new(0.76, 0.89, 1.08, 1.27));
const RORO_PASSENGER_SHIP: [DdVectorBand; 1] = single(DdVector::new(0.76, 0.92, 1.14, 1.30));
const CRUISE_PASSENGER_SHIP: [DdVectorBand; 1] = single(DdVector::new(0.87, 0.95, 1.06, 1.16));

fn dd_vector_table(ship_type: ShipType) -> Result<&'static [DdVectorBand]> {
    let table: &'static [DdVectorBand] = match ship_type {
        ShipType::BulkCarrier => &BULK_CARRIER,
        ShipType::GasCarrier => &GAS_CARRIER,
        ShipType::Tanker => &TANKER,
        ShipType::ContainerShip => &CONTAINER_SHIP,
        ShipType::GeneralCargoShip => &GENERAL_CARGO_SHIP,
        ShipType::RefrigeratedCargoCarrier => &REFRIGERATED_CARGO_CARRIER,
        ShipType::CombinationCarrier => &COMBINATION_CARRIER,
        ShipType::LngCarrier => &LNG_CARRIER,
        ShipType::RoRoCargoShipVehicleCarrier => &VEHICLE_CARRIER,
        ShipType::RoRoCargoShip => &RORO_CARGO_SHIP,
        // 고속 여객선도 일반 로로 여객선과 같은 배수를 쓴다.
        ShipType::RoRoPassengerShip | ShipType::RoRoPassengerShipHighSpeedSolas => {
            &RORO_PASSENGER_SHIP
        }
        ShipType::CruisePassengerShip => &CRUISE_PASSENGER_SHIP,
        ShipType::Unknown => return Err(CiiError::UnsupportedShipType(ship_type)),
    };
    Ok(table)
}

/// 선박과 해당 연도 요구 CII로 등급 경계를 계산한다.
///
/// 가스 운반선(65,000 DWT)과 LNG 운반선(100,000 DWT)은 선박의 DWT로 구간을 나눈다.
pub fn rating_boundaries(
    ship: &Ship,
    required_cii_in_year: f64,
    year: i32,
) -> Result<RatingBoundaries> {
    let ship_type = ship.ship_type();
    validate_tonnage(ship_type, ship.deadweight_tonnage(), ship.gross_tonnage())?;

    let table = dd_vector_table(ship_type)?;
    let band = table
        .iter()
        .find(|b| ship.deadweight_tonnage() >= b.min_deadweight)
        .or_else(|| table.last())
        .ok_or(CiiError::UnsupportedShipType(ship_type))?;

    Ok(RatingBoundaries {
        ship_type,
        weight_classification: band.weight_classification,
        capacity_unit: ship_type.capacity_unit()?,
        boundaries: band.multipliers.scaled(required_cii_in_year),
        year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_are_strictly_ascending() {
        for kind in ShipType::ALL {
            for band in dd_vector_table(kind).expect("table") {
                let m = band.multipliers;
                assert!(
                    m.superior < m.lower && m.lower < m.upper && m.upper < m.inferior,
                    "{kind}: {m:?}"
                );
            }
        }
    }

    #[test]
    fn weight_classification_display() {
        assert_eq!(WeightClassification::below(65_000).to_string(), "[0, 64999]");
        assert_eq!(WeightClassification::at_least(65_000).to_string(), "[65000, ∞)");
    }
}
