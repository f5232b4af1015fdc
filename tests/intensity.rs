//! 요구/달성 CII 회귀 테스트. 기준값은 MEPC.353(78) 계수로 직접 계산한 값이다.
use imo_cii_calculator::calc::{
    annual_reduction_factor, attained_cii, reference_cii, required_cii, required_cii_by_year,
};
use imo_cii_calculator::{CiiError, ErrorKind, ShipType};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn reduction_factor_endpoints() {
    assert_eq!(annual_reduction_factor(2019), Ok(0.00));
    assert_eq!(annual_reduction_factor(2023), Ok(0.05));
    assert_eq!(annual_reduction_factor(2030), Ok(0.19));
    assert_eq!(annual_reduction_factor(2018), Err(CiiError::UnsupportedYear(2018)));
    assert_eq!(
        annual_reduction_factor(2031).unwrap_err().kind(),
        ErrorKind::UnsupportedYear
    );
}

#[test]
fn ro_ro_passenger_required_cii() {
    let r2019 = required_cii(ShipType::RoRoPassengerShip, 25_000.0, 2019).expect("2019");
    let r2025 = required_cii(ShipType::RoRoPassengerShip, 25_000.0, 2025).expect("2025");
    assert_close("2019", r2019, 19.18419, 1e-6);
    assert_close("2025", r2025, 17.45761, 1e-6);
}

#[test]
fn bulk_carrier_required_cii_2029() {
    let r = required_cii(ShipType::BulkCarrier, 25_000.0, 2029).expect("2029");
    assert_close("bulk 2029", r, 7.24095, 1e-6);
}

#[test]
fn gas_carrier_upper_band() {
    let r = reference_cii(ShipType::GasCarrier, 70_000.0).expect("gas");
    assert_close("gas 70k", r, 13.314204, 1e-6);
}

#[test]
fn lng_carrier_top_band_is_flat() {
    let small = reference_cii(ShipType::LngCarrier, 100_000.0).expect("100k");
    let large = reference_cii(ShipType::LngCarrier, 250_000.0).expect("250k");
    assert_eq!(small, 9.827);
    assert_eq!(large, 9.827);
}

#[test]
fn required_cii_by_year_covers_regulated_range() {
    let by_year = required_cii_by_year(ShipType::Tanker, 80_000.0).expect("tanker");
    assert_eq!(by_year.len(), 12);
    assert_eq!(by_year.keys().copied().collect::<Vec<_>>(), (2019..=2030).collect::<Vec<_>>());
    assert!(by_year.values().zip(by_year.values().skip(1)).all(|(a, b)| a > b));
    assert_eq!(
        by_year.get(&2026).copied(),
        required_cii(ShipType::Tanker, 80_000.0, 2026).ok()
    );
}

#[test]
fn non_positive_capacity_is_invalid() {
    let err = reference_cii(ShipType::Tanker, 0.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        reference_cii(ShipType::Unknown, 1_000.0),
        Err(CiiError::UnsupportedShipType(ShipType::Unknown))
    );
}

#[test]
fn attained_cii_ratio() {
    let a = attained_cii(1.9e10 * 3.206, 25_000.0 * 150_000.0).expect("attained");
    assert_close("attained", a, 16.24373, 1e-6);
    assert_eq!(attained_cii(0.0, 1.0).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(attained_cii(1.0, -1.0).unwrap_err().kind(), ErrorKind::InvalidArgument);
}
