//! 선종, 용량 단위, 선박 모델.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calc::capacity;
use crate::error::{CiiError, Result};

/// MEPC.337(76)에서 정의한 CII 규제 대상 선종.
///
/// `Unknown`은 미지정 입력을 나타내는 센티넬이며 어떤 표 조회도 통과하지 못한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShipType {
    Unknown,
    /// 산적화물선 (곡물, 석탄, 광석 등)
    BulkCarrier,
    /// 가스 운반선
    GasCarrier,
    /// 유조선
    Tanker,
    /// 컨테이너선
    ContainerShip,
    /// 일반화물선
    GeneralCargoShip,
    /// 냉동화물선
    RefrigeratedCargoCarrier,
    /// 겸용선
    CombinationCarrier,
    /// LNG 운반선
    LngCarrier,
    /// 로로 자동차 운반선
    RoRoCargoShipVehicleCarrier,
    /// 로로 화물선
    RoRoCargoShip,
    /// 로로 여객선
    RoRoPassengerShip,
    /// SOLAS Chapter X 고속 로로 여객선
    RoRoPassengerShipHighSpeedSolas,
    /// 크루즈 여객선
    CruisePassengerShip,
}

/// 선종별 용량 산정에 쓰는 톤수 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CapacityUnit {
    /// 재화중량톤 (deadweight tonnage)
    Dwt,
    /// 총톤수 (gross tonnage)
    Gt,
}

impl ShipType {
    /// 센티넬을 제외한 규제 대상 선종 전체.
    pub const ALL: [ShipType; 13] = [
        ShipType::BulkCarrier,
        ShipType::GasCarrier,
        ShipType::Tanker,
        ShipType::ContainerShip,
        ShipType::GeneralCargoShip,
        ShipType::RefrigeratedCargoCarrier,
        ShipType::CombinationCarrier,
        ShipType::LngCarrier,
        ShipType::RoRoCargoShipVehicleCarrier,
        ShipType::RoRoCargoShip,
        ShipType::RoRoPassengerShip,
        ShipType::RoRoPassengerShipHighSpeedSolas,
        ShipType::CruisePassengerShip,
    ];

    /// 센티넬을 제외한 규제 대상 선종을 선언 순서대로 돌려준다.
    pub fn iter() -> impl Iterator<Item = ShipType> {
        Self::ALL.into_iter()
    }

    /// 선종에 고정된 용량 단위를 반환한다.
    pub fn capacity_unit(self) -> Result<CapacityUnit> {
        match self {
            ShipType::BulkCarrier
            | ShipType::GasCarrier
            | ShipType::Tanker
            | ShipType::ContainerShip
            | ShipType::GeneralCargoShip
            | ShipType::RefrigeratedCargoCarrier
            | ShipType::CombinationCarrier
            | ShipType::LngCarrier => Ok(CapacityUnit::Dwt),
            ShipType::RoRoCargoShipVehicleCarrier
            | ShipType::RoRoCargoShip
            | ShipType::RoRoPassengerShip
            | ShipType::RoRoPassengerShipHighSpeedSolas
            | ShipType::CruisePassengerShip => Ok(CapacityUnit::Gt),
            ShipType::Unknown => Err(CiiError::UnsupportedShipType(self)),
        }
    }

    /// CLI/직렬화에 쓰는 고정 이름.
    pub fn as_str(self) -> &'static str {
        match self {
            ShipType::Unknown => "unknown",
            ShipType::BulkCarrier => "bulk-carrier",
            ShipType::GasCarrier => "gas-carrier",
            ShipType::Tanker => "tanker",
            ShipType::ContainerShip => "container-ship",
            ShipType::GeneralCargoShip => "general-cargo-ship",
            ShipType::RefrigeratedCargoCarrier => "refrigerated-cargo-carrier",
            ShipType::CombinationCarrier => "combination-carrier",
            ShipType::LngCarrier => "lng-carrier",
            ShipType::RoRoCargoShipVehicleCarrier => "ro-ro-cargo-ship-vehicle-carrier",
            ShipType::RoRoCargoShip => "ro-ro-cargo-ship",
            ShipType::RoRoPassengerShip => "ro-ro-passenger-ship",
            ShipType::RoRoPassengerShipHighSpeedSolas => "ro-ro-passenger-ship-high-speed-solas",
            ShipType::CruisePassengerShip => "cruise-passenger-ship",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for CapacityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            CapacityUnit::Dwt => "DWT",
            CapacityUnit::Gt => "GT",
        })
    }
}

impl FromStr for ShipType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('_', "-");
        if needle == ShipType::Unknown.as_str() {
            return Ok(ShipType::Unknown);
        }
        ShipType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| format!("알 수 없는 선종: {s}"))
    }
}

/// 선종과 톤수를 묶은 선박 모델. 생성 시 톤수를 검증하며 이후 변경되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ship {
    ship_type: ShipType,
    deadweight_tonnage: f64,
    gross_tonnage: f64,
}

impl Ship {
    /// 선종에 필요한 톤수가 양수인지 확인한 뒤 선박을 만든다.
    pub fn new(ship_type: ShipType, deadweight_tonnage: f64, gross_tonnage: f64) -> Result<Self> {
        validate_tonnage(ship_type, deadweight_tonnage, gross_tonnage)?;
        Ok(Self {
            ship_type,
            deadweight_tonnage,
            gross_tonnage,
        })
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn deadweight_tonnage(&self) -> f64 {
        self.deadweight_tonnage
    }

    pub fn gross_tonnage(&self) -> f64 {
        self.gross_tonnage
    }

    /// 규정 용량을 계산한다.
    pub fn capacity(&self) -> Result<f64> {
        capacity::ship_capacity(self.ship_type, self.deadweight_tonnage, self.gross_tonnage)
    }
}

/// 선종의 용량 단위에 해당하는 톤수만 검사한다. 다른 톤수 값은 무시한다.
pub fn validate_tonnage(
    ship_type: ShipType,
    deadweight_tonnage: f64,
    gross_tonnage: f64,
) -> Result<()> {
    let (name, value) = match ship_type.capacity_unit()? {
        CapacityUnit::Dwt => ("deadweight_tonnage", deadweight_tonnage),
        CapacityUnit::Gt => ("gross_tonnage", gross_tonnage),
    };
    if value.is_nan() || value <= 0.0 {
        return Err(CiiError::OutOfRange {
            name,
            value,
            ship_type: Some(ship_type),
        });
    }
    Ok(())
}
