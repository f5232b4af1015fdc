//! CII 산정 단계별 계산 모듈 모음.
//! 용량 → CO2 질량 → 운송 작업량 → 요구/달성 CII → 등급 경계 → 등급 순으로 이어진다.

pub mod boundaries;
pub mod capacity;
pub mod emissions;
pub mod intensity;
pub mod rating;
pub mod transport_work;

pub use boundaries::*;
pub use capacity::*;
pub use emissions::*;
pub use intensity::*;
pub use rating::*;
pub use transport_work::*;
