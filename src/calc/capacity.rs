use crate::error::{CiiError, Result};
use crate::ship::{validate_tonnage, ShipType};

/// 산적화물선 용량 상한 [DWT]
pub const BULK_CARRIER_CAPACITY_CAP: f64 = 279_000.0;
/// LNG 운반선 용량 하한 [DWT]
pub const LNG_CARRIER_CAPACITY_FLOOR: f64 = 65_000.0;
/// 로로 자동차 운반선 용량 상한 [DWT]
pub const VEHICLE_CARRIER_CAPACITY_CAP: f64 = 57_700.0;

/// 선종과 톤수로부터 CII 산정용 용량을 구한다.
///
/// 선종의 용량 단위(DWT/GT)에 해당하는 톤수가 0 이하이면 `OutOfRange`,
/// 센티넬 선종이면 `UnsupportedShipType`을 반환한다.
pub fn ship_capacity(
    ship_type: ShipType,
    deadweight_tonnage: f64,
    gross_tonnage: f64,
) -> Result<f64> {
    validate_tonnage(ship_type, deadweight_tonnage, gross_tonnage)?;

    let capacity = match ship_type {
        ShipType::BulkCarrier => deadweight_tonnage.min(BULK_CARRIER_CAPACITY_CAP),
        ShipType::GasCarrier
        | ShipType::Tanker
        | ShipType::ContainerShip
        | ShipType::GeneralCargoShip
        | ShipType::RefrigeratedCargoCarrier
        | ShipType::CombinationCarrier => deadweight_tonnage,
        ShipType::LngCarrier => deadweight_tonnage.max(LNG_CARRIER_CAPACITY_FLOOR),
        // DWT로 판정하고 GT로 되돌아가는 단위 혼용은 원 규정 인코딩을 그대로 따른다.
        ShipType::RoRoCargoShipVehicleCarrier => {
            if deadweight_tonnage >= VEHICLE_CARRIER_CAPACITY_CAP {
                VEHICLE_CARRIER_CAPACITY_CAP
            } else {
                gross_tonnage
            }
        }
        ShipType::RoRoCargoShip
        | ShipType::RoRoPassengerShip
        | ShipType::RoRoPassengerShipHighSpeedSolas
        | ShipType::CruisePassengerShip => gross_tonnage,
        ShipType::Unknown => return Err(CiiError::UnsupportedShipType(ship_type)),
    };

    tracing::trace!(%ship_type, deadweight_tonnage, gross_tonnage, capacity, "ship capacity");
    Ok(capacity)
}
