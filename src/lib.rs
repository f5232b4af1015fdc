//! IMO CII(Carbon Intensity Indicator) 등급 계산 라이브러리.
//!
//! 계산 로직은 입출력이 없는 순수 함수로 두고, CLI 표현 계층(`app`, `report`, `config`)은
//! 그 위에 얹는다.

pub mod app;
pub mod calc;
pub mod config;
pub mod error;
pub mod fuel;
pub mod pipeline;
pub mod report;
pub mod ship;
pub mod units;

pub use error::{CiiError, ErrorKind, Result};
pub use fuel::{FuelConsumption, FuelType};
pub use pipeline::{
    calculate_attained_cii_rating, calculate_attained_cii_rating_single_fuel, CalculationResult,
    YearResult,
};
pub use ship::{CapacityUnit, Ship, ShipType};
