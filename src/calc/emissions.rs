use crate::error::{CiiError, Result};
use crate::fuel::{FuelConsumption, FuelType};

/// 단일 연료 소비량[g]에서 CO2 배출 질량[g]을 계산한다.
pub fn mass_of_co2_emissions(fuel_type: FuelType, consumption_grams: f64) -> Result<f64> {
    if consumption_grams.is_nan() || consumption_grams < 0.0 {
        return Err(CiiError::OutOfRange {
            name: "fuel_consumption",
            value: consumption_grams,
            ship_type: None,
        });
    }
    let factor = fuel_type.co2_conversion_factor()?;
    Ok(consumption_grams * factor)
}

/// 여러 연료 소비 항목의 CO2 배출 질량을 누적한다.
///
/// 참조값과 비트 단위로 일치하도록 입력 순서대로 더한다. 같은 연료가 여러 번 나와도 된다.
pub fn total_mass_of_co2_emissions(entries: &[FuelConsumption]) -> Result<f64> {
    let mut total = 0.0;
    for entry in entries {
        total += mass_of_co2_emissions(entry.fuel_type, entry.consumption_grams)?;
    }
    tracing::trace!(entries = entries.len(), total, "mass of CO2 emissions");
    Ok(total)
}
