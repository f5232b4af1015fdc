use thiserror::Error;

use crate::fuel::FuelType;
use crate::ship::ShipType;

/// 라이브러리 전역에서 사용하는 결과 타입.
pub type Result<T> = std::result::Result<T, CiiError>;

/// CII 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CiiError {
    /// 수치 입력이 전제 조건을 위반함 (0 이하의 질량, 운송 작업량 등)
    #[error("잘못된 입력 `{name}`: {message}")]
    InvalidArgument { name: &'static str, message: String },

    /// 톤수/연료 소비량이 허용 범위를 벗어남
    #[error("`{name}` 값 {value} 이(가) 허용 범위를 벗어남{}", format_ship_type(.ship_type))]
    OutOfRange {
        name: &'static str,
        value: f64,
        ship_type: Option<ShipType>,
    },

    /// 규정 대상이 아닌 선종
    #[error("지원하지 않는 선종: {0}")]
    UnsupportedShipType(ShipType),

    /// 규정 대상이 아닌 연료
    #[error("지원하지 않는 연료: {0}")]
    UnsupportedFuelType(FuelType),

    /// 감축률 표(2019~2030) 밖의 연도
    #[error("지원하지 않는 연도: {0} (2019~2030만 지원)")]
    UnsupportedYear(i32),
}

/// 호출자가 구체 variant와 무관하게 분기할 수 있도록 오류를 네 종류로 묶는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    UnsupportedShipType,
    UnsupportedFuelType,
    UnsupportedYear,
}

impl CiiError {
    /// 오류 분류를 반환한다. `OutOfRange`는 `InvalidArgument` 종류로 취급한다.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CiiError::InvalidArgument { .. } | CiiError::OutOfRange { .. } => {
                ErrorKind::InvalidArgument
            }
            CiiError::UnsupportedShipType(_) => ErrorKind::UnsupportedShipType,
            CiiError::UnsupportedFuelType(_) => ErrorKind::UnsupportedFuelType,
            CiiError::UnsupportedYear(_) => ErrorKind::UnsupportedYear,
        }
    }

    pub(crate) fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        CiiError::InvalidArgument {
            name,
            message: message.into(),
        }
    }
}

fn format_ship_type(ship_type: &Option<ShipType>) -> String {
    match ship_type {
        Some(kind) => format!(" (선종 {kind})"),
        None => String::new(),
    }
}
