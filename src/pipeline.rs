//! 선박/연료/운항 거리 입력으로 2019~2030년 CII 궤적을 계산한다.
//!
//! CO2 질량, 용량, 운송 작업량, 달성 CII는 연도와 무관하게 한 번만 계산하고
//! 요구 CII와 등급 경계만 연도별로 달라진다.

use serde::Serialize;
use tracing::debug;

use crate::calc::{
    attained_cii, rate, rating_boundaries, required_cii, ship_transport_work,
    total_mass_of_co2_emissions, ImoCiiRating, RatingBoundaries, REGULATED_YEARS,
};
use crate::error::{CiiError, Result};
use crate::fuel::{FuelConsumption, FuelType};
use crate::ship::{Ship, ShipType};

/// 한 해의 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearResult {
    pub year: i32,
    /// 입력 연도(실측)이면 true, 나머지 연도는 추정값
    pub is_measured: bool,
    pub is_estimated: bool,
    pub attained_cii: f64,
    pub required_cii: f64,
    /// 달성 CII / 요구 CII. 요구 CII가 0 이하이면 0.
    pub attained_required_ratio: f64,
    pub rating: ImoCiiRating,
    pub boundaries: RatingBoundaries,
    /// 연간 CO2 배출 질량 [g]
    pub mass_of_co2: f64,
    pub capacity: f64,
    /// 운송 작업량 [capacity · nm]
    pub transport_work: f64,
}

impl YearResult {
    pub fn is_estimated(&self) -> bool {
        self.is_estimated
    }

    pub fn attained_required_ratio(&self) -> f64 {
        self.attained_required_ratio
    }
}

fn attained_required_ratio(attained_cii: f64, required_cii: f64) -> f64 {
    if required_cii > 0.0 {
        attained_cii / required_cii
    } else {
        0.0
    }
}

/// 2019~2030년 오름차순 12개 연도 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub results: Vec<YearResult>,
}

impl CalculationResult {
    /// 실측 연도 결과. 대상 연도가 규정 범위 밖이면 `None`.
    pub fn measured_year(&self) -> Option<&YearResult> {
        self.results.iter().find(|r| r.is_measured)
    }

    pub fn year(&self, year: i32) -> Option<&YearResult> {
        self.results.iter().find(|r| r.year == year)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, YearResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<'a> IntoIterator for &'a CalculationResult {
    type Item = &'a YearResult;
    type IntoIter = std::slice::Iter<'a, YearResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// 여러 연료의 연간 소비량으로 연도별 CII와 등급을 계산한다.
///
/// `target_year`가 2019~2030 밖이면 오류 없이 실측 연도가 없는 결과를 돌려준다.
/// 운항 거리는 검증하지 않는다. 0 이하의 거리는 운송 작업량을 거쳐
/// `attained_cii`에서 `InvalidArgument`로 드러난다.
pub fn calculate_attained_cii_rating(
    ship_type: ShipType,
    gross_tonnage: f64,
    deadweight_tonnage: f64,
    distance_travelled_nm: f64,
    fuel_consumptions: &[FuelConsumption],
    target_year: i32,
) -> Result<CalculationResult> {
    if fuel_consumptions.is_empty() {
        return Err(CiiError::invalid(
            "fuel_consumptions",
            "연료 소비 항목이 하나 이상 필요합니다",
        ));
    }

    let ship = Ship::new(ship_type, deadweight_tonnage, gross_tonnage)?;
    let mass_of_co2 = total_mass_of_co2_emissions(fuel_consumptions)?;
    let capacity = ship.capacity()?;
    let transport_work = ship_transport_work(capacity, distance_travelled_nm);
    let attained = attained_cii(mass_of_co2, transport_work)?;
    debug!(
        %ship_type,
        mass_of_co2,
        capacity,
        transport_work,
        attained_cii = attained,
        "computed year-independent CII inputs"
    );

    let results = REGULATED_YEARS
        .map(|year| {
            let required = required_cii(ship_type, capacity, year)?;
            let boundaries = rating_boundaries(&ship, required, year)?;
            let rating = rate(attained, &boundaries);
            let is_measured = year == target_year;
            Ok(YearResult {
                year,
                is_measured,
                is_estimated: !is_measured,
                attained_cii: attained,
                required_cii: required,
                attained_required_ratio: attained_required_ratio(attained, required),
                rating,
                boundaries,
                mass_of_co2,
                capacity,
                transport_work,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    match results.iter().find(|r| r.is_measured) {
        Some(measured) => debug!(
            year = measured.year,
            required_cii = measured.required_cii,
            rating = %measured.rating,
            "rated measured year"
        ),
        None => debug!(target_year, "target year outside regulated range"),
    }

    Ok(CalculationResult { results })
}

/// 단일 연료 버전. 항목 하나짜리 목록과 완전히 같은 결과를 낸다.
pub fn calculate_attained_cii_rating_single_fuel(
    ship_type: ShipType,
    gross_tonnage: f64,
    deadweight_tonnage: f64,
    distance_travelled_nm: f64,
    fuel_type: FuelType,
    fuel_consumption_grams: f64,
    target_year: i32,
) -> Result<CalculationResult> {
    calculate_attained_cii_rating(
        ship_type,
        gross_tonnage,
        deadweight_tonnage,
        distance_travelled_nm,
        &[FuelConsumption::new(fuel_type, fuel_consumption_grams)],
        target_year,
    )
}
