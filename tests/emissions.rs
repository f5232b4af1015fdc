use imo_cii_calculator::calc::{mass_of_co2_emissions, total_mass_of_co2_emissions};
use imo_cii_calculator::{CiiError, ErrorKind, FuelConsumption, FuelType};

#[test]
fn diesel_reference_value() {
    assert_eq!(mass_of_co2_emissions(FuelType::DieselOrGasoil, 1000.0), Ok(3206.0));
    assert_eq!(mass_of_co2_emissions(FuelType::HeavyFuelOil, 0.0), Ok(0.0));
}

#[test]
fn multiple_entries_are_summed_in_order() {
    let entries = [
        FuelConsumption::new(FuelType::DieselOrGasoil, 12.5e9),
        FuelConsumption::new(FuelType::LightFuelOil, 10.0e9),
        FuelConsumption::new(FuelType::DieselOrGasoil, 1.0e9),
    ];
    let expected = 0.0 + 12.5e9 * 3.206 + 10.0e9 * 3.151 + 1.0e9 * 3.206;
    assert_eq!(total_mass_of_co2_emissions(&entries), Ok(expected));
}

#[test]
fn negative_consumption_is_out_of_range() {
    let err = mass_of_co2_emissions(FuelType::Methanol, -1.0).unwrap_err();
    assert!(matches!(err, CiiError::OutOfRange { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn sentinel_fuels_are_unsupported() {
    let entries = [
        FuelConsumption::new(FuelType::DieselOrGasoil, 1.0e6),
        FuelConsumption::new(FuelType::Other, 1.0e6),
    ];
    assert_eq!(
        total_mass_of_co2_emissions(&entries),
        Err(CiiError::UnsupportedFuelType(FuelType::Other))
    );
    assert_eq!(
        mass_of_co2_emissions(FuelType::Unknown, 1.0).unwrap_err().kind(),
        ErrorKind::UnsupportedFuelType
    );
}
