use imo_cii_calculator::calc::{rate, rating_boundaries, ImoCiiBoundary, ImoCiiRating};
use imo_cii_calculator::{CapacityUnit, CiiError, ErrorKind, Ship, ShipType};

fn ship(kind: ShipType, dwt: f64, gt: f64) -> Ship {
    Ship::new(kind, dwt, gt).expect("valid ship")
}

#[test]
fn boundaries_scale_required_cii() {
    let b = rating_boundaries(&ship(ShipType::BulkCarrier, 25_000.0, 0.0), 10.0, 2023)
        .expect("bulk");
    assert_eq!(b.get(ImoCiiBoundary::Superior), 0.86 * 10.0);
    assert_eq!(b.get(ImoCiiBoundary::Lower), 0.94 * 10.0);
    assert_eq!(b.get(ImoCiiBoundary::Upper), 1.06 * 10.0);
    assert_eq!(b.get(ImoCiiBoundary::Inferior), 1.18 * 10.0);
    assert_eq!(b.capacity_unit, CapacityUnit::Dwt);
    assert_eq!(b.year, 2023);
    assert_eq!(b.weight_classification.upper_limit, None);
}

#[test]
fn gas_carrier_weight_band_switches_at_65000() {
    let small = rating_boundaries(&ship(ShipType::GasCarrier, 64_999.0, 0.0), 1.0, 2020)
        .expect("small");
    let large = rating_boundaries(&ship(ShipType::GasCarrier, 65_000.0, 0.0), 1.0, 2020)
        .expect("large");
    assert_eq!(small.weight_classification.to_string(), "[0, 64999]");
    assert_eq!(large.weight_classification.to_string(), "[65000, ∞)");
    assert_eq!(small.boundaries.inferior, 1.25);
    assert_eq!(large.boundaries.inferior, 1.44);
}

#[test]
fn lng_carrier_weight_band_switches_at_100000() {
    let small = rating_boundaries(&ship(ShipType::LngCarrier, 99_999.0, 0.0), 1.0, 2020)
        .expect("small");
    let large = rating_boundaries(&ship(ShipType::LngCarrier, 100_000.0, 0.0), 1.0, 2020)
        .expect("large");
    assert_eq!(small.weight_classification.upper_limit, Some(99_999));
    assert_eq!(large.weight_classification.lower_limit, 100_000);
    assert_eq!(small.boundaries.superior, 0.78);
    assert_eq!(large.boundaries.superior, 0.89);
}

#[test]
fn boundaries_are_strictly_ordered_for_every_ship_type() {
    for kind in ShipType::ALL {
        for (dwt, gt) in [(10_000.0, 10_000.0), (150_000.0, 150_000.0)] {
            let b = rating_boundaries(&ship(kind, dwt, gt), 7.5, 2027).expect("boundaries");
            let values: Vec<f64> = b.boundaries.iter().map(|(_, v)| v).collect();
            assert!(values.windows(2).all(|w| w[0] < w[1]), "{kind}: {values:?}");
            assert_eq!(
                b.capacity_unit,
                kind.capacity_unit().expect("unit"),
                "{kind}"
            );
        }
    }
}

#[test]
fn gt_ship_types_report_gt_unit() {
    let b = rating_boundaries(&ship(ShipType::RoRoPassengerShip, 0.0, 25_000.0), 19.0, 2019)
        .expect("ro-ro");
    assert_eq!(b.capacity_unit, CapacityUnit::Gt);
    assert_eq!(b.ship_type, ShipType::RoRoPassengerShip);
}

#[test]
fn rating_uses_strict_comparisons() {
    let b = rating_boundaries(&ship(ShipType::Tanker, 50_000.0, 0.0), 5.0, 2024)
        .expect("tanker");
    assert_eq!(rate(b.boundaries.superior - 1e-9, &b), ImoCiiRating::A);
    assert_eq!(rate(b.boundaries.superior, &b), ImoCiiRating::B);
    assert_eq!(rate(b.boundaries.lower, &b), ImoCiiRating::C);
    assert_eq!(rate(b.boundaries.upper, &b), ImoCiiRating::D);
    assert_eq!(rate(b.boundaries.inferior - 1e-9, &b), ImoCiiRating::D);
    assert_eq!(rate(b.boundaries.inferior, &b), ImoCiiRating::E);
}

#[test]
fn unknown_ship_type_cannot_be_built() {
    let err = Ship::new(ShipType::Unknown, 1_000.0, 1_000.0).unwrap_err();
    assert_eq!(err, CiiError::UnsupportedShipType(ShipType::Unknown));
    assert_eq!(err.kind(), ErrorKind::UnsupportedShipType);
}
