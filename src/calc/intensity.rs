//! 요구 CII(기준선 × 연도별 감축률)와 달성 CII 계산.
//!
//! 기준선 계수(a, c)는 MEPC.353(78), 감축률은 MEPC.338(76)을 따른다.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::error::{CiiError, Result};
use crate::ship::ShipType;

/// 감축률 표가 정의된 연도 범위.
pub const REGULATED_YEARS: RangeInclusive<i32> = 2019..=2030;

/// 연도별 감축률 Z [%/100]. 인덱스 0 = 2019.
const REDUCTION_FACTORS: [f64; 12] = [
    0.00, 0.01, 0.02, 0.03, 0.05, 0.07, 0.09, 0.11, 0.13, 0.15, 0.17, 0.19,
];

/// 용량 하한 이상에서 적용되는 기준선 계수 한 줄.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceLineBand {
    /// 이 계수를 적용하는 최소 용량 (이상)
    pub min_capacity: f64,
    pub a: f64,
    pub c: f64,
}

const fn band(min_capacity: f64, a: f64, c: f64) -> ReferenceLineBand {
    ReferenceLineBand { min_capacity, a, c }
}

// 각 표는 min_capacity 내림차순. 마지막 줄은 min_capacity = 0 으로 나머지를 모두 받는다.
const BULK_CARRIER: [ReferenceLineBand; 1] = [band(0.0, 4745.0, 0.622)];
const GAS_CARRIER: [ReferenceLineBand; 2] = [
    band(65_000.0, 14405e7, 2.071),
    band(0.0, 8104.0, 0.639),
];
const TANKER: [ReferenceLineBand; 1] = [band(0.0, 5247.0, 0.610)];
const CONTAINER_SHIP: [ReferenceLineBand; 1] = [band(0.0, 1984.0, 0.489)];
const GENERAL_CARGO_SHIP: [ReferenceLineBand; 2] = [
    band(20_000.0, 31948.0, 0.792),
    band(0.0, 588.0, 0.3885),
];
const REFRIGERATED_CARGO_CARRIER: [ReferenceLineBand; 1] = [band(0.0, 4600.0, 0.557)];
// c = 622 는 원 인코딩 값 그대로다 (규정 원문은 0.622).
const COMBINATION_CARRIER: [ReferenceLineBand; 1] = [band(0.0, 5119.0, 622.0)];
const LNG_CARRIER: [ReferenceLineBand; 3] = [
    band(100_000.0, 9.827, 0.000),
    band(65_000.0, 14479e10, 2.673),
    band(0.0, 14779e10, 2.673),
];
const VEHICLE_CARRIER: [ReferenceLineBand; 3] = [
    band(57_700.0, 3627.0, 0.590),
    band(30_000.0, 5739.0, 0.590),
    band(0.0, 330.0, 329.0),
];
const RORO_CARGO_SHIP: [ReferenceLineBand; 1] = [band(0.0, 1967.0, 0.485)];
const RORO_PASSENGER_SHIP: [ReferenceLineBand; 1] = [band(0.0, 2023.0, 0.460)];
const RORO_PASSENGER_SHIP_HIGH_SPEED: [ReferenceLineBand; 1] = [band(0.0, 4196.0, 0.460)];
const CRUISE_PASSENGER_SHIP: [ReferenceLineBand; 1] = [band(0.0, 930.0, 0.383)];

fn reference_line_table(ship_type: ShipType) -> Result<&'static [ReferenceLineBand]> {
    let table: &'static [ReferenceLineBand] = match ship_type {
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
        ShipType::RoRoPassengerShip => &RORO_PASSENGER_SHIP,
        ShipType::RoRoPassengerShipHighSpeedSolas => &RORO_PASSENGER_SHIP_HIGH_SPEED,
        ShipType::CruisePassengerShip => &CRUISE_PASSENGER_SHIP,
        ShipType::Unknown => return Err(CiiError::UnsupportedShipType(ship_type)),
    };
    Ok(table)
}

/// 선종과 용량에 해당하는 기준선 계수(a, c)를 조회한다.
pub fn reference_line_coefficients(
    ship_type: ShipType,
    capacity: f64,
) -> Result<ReferenceLineBand> {
    let table = reference_line_table(ship_type)?;
    table
        .iter()
        .find(|b| capacity >= b.min_capacity)
        .or_else(|| table.last())
        .copied()
        .ok_or(CiiError::UnsupportedShipType(ship_type))
}

/// 기준선 CII = a · capacity^(-c).
pub fn reference_cii(ship_type: ShipType, capacity: f64) -> Result<f64> {
    if capacity.is_nan() || capacity <= 0.0 {
        return Err(CiiError::invalid(
            "capacity",
            format!("용량은 0보다 커야 합니다 (입력 {capacity})"),
        ));
    }
    let coeff = reference_line_coefficients(ship_type, capacity)?;
    Ok(coeff.a * capacity.powf(-coeff.c))
}

/// 연도별 감축률을 반환한다. 2019~2030 밖이면 `UnsupportedYear`.
pub fn annual_reduction_factor(year: i32) -> Result<f64> {
    if !REGULATED_YEARS.contains(&year) {
        return Err(CiiError::UnsupportedYear(year));
    }
    Ok(REDUCTION_FACTORS[(year - REGULATED_YEARS.start()) as usize])
}

/// 값에 해당 연도의 감축률을 적용한다: value · (1 − Z).
pub fn apply_annual_reduction_factor(value: f64, year: i32) -> Result<f64> {
    Ok(value * (1.0 - annual_reduction_factor(year)?))
}

/// 해당 연도의 요구 CII를 계산한다.
pub fn required_cii(ship_type: ShipType, capacity: f64, year: i32) -> Result<f64> {
    let reference = reference_cii(ship_type, capacity)?;
    apply_annual_reduction_factor(reference, year)
}

/// 2019~2030 전 연도의 요구 CII를 계산한다.
pub fn required_cii_by_year(ship_type: ShipType, capacity: f64) -> Result<BTreeMap<i32, f64>> {
    REGULATED_YEARS
        .map(|year| required_cii(ship_type, capacity, year).map(|cii| (year, cii)))
        .collect()
}

/// 달성 CII = CO2 질량 / 운송 작업량. 두 값 모두 양수여야 한다.
pub fn attained_cii(mass_of_co2_grams: f64, transport_work: f64) -> Result<f64> {
    if mass_of_co2_grams.is_nan() || mass_of_co2_grams <= 0.0 {
        return Err(CiiError::invalid(
            "mass_of_co2",
            format!("CO2 배출 질량은 0보다 커야 합니다 (입력 {mass_of_co2_grams})"),
        ));
    }
    if transport_work.is_nan() || transport_work <= 0.0 {
        return Err(CiiError::invalid(
            "transport_work",
            format!("운송 작업량은 0보다 커야 합니다 (입력 {transport_work})"),
        ));
    }
    Ok(mass_of_co2_grams / transport_work)
}
