use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::config::{Config, ConfigError, OutputFormat, DEFAULT_CONFIG_PATH};
use crate::error::CiiError;
use crate::fuel::{FuelConsumption, FuelType};
use crate::pipeline::{calculate_attained_cii_rating, calculate_attained_cii_rating_single_fuel};
use crate::report;
use crate::ship::ShipType;
use crate::units::{to_grams, MassUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/표준출력 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// CII 계산 오류
    #[error("CII 계산 오류: {0}")]
    Cii(#[from] CiiError),
    /// 결과 JSON 직렬화 오류
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// IMO CII 등급 계산기.
#[derive(Debug, Parser)]
#[command(name = "imo-cii", version, about, long_about = None)]
pub struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 연료 소비량과 운항 거리로 2019~2030년 CII 등급을 계산한다
    Calculate(CalculateArgs),
    /// 규제 대상 선종과 용량 단위를 나열한다
    ShipTypes,
    /// 규제 대상 연료와 환산 계수를 나열한다
    FuelTypes,
    /// 예제 로로 여객선(GT 25,000, 150,000 nm)을 단일/복수 연료로 계산한다
    Demo {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

#[derive(Debug, Args)]
pub struct CalculateArgs {
    /// 선종 (예: bulk-carrier, ro-ro-passenger-ship)
    #[arg(long)]
    pub ship_type: ShipType,

    /// 총톤수 GT
    #[arg(long, default_value_t = 0.0)]
    pub gross_tonnage: f64,

    /// 재화중량톤 DWT
    #[arg(long, default_value_t = 0.0)]
    pub deadweight_tonnage: f64,

    /// 연간 운항 거리 [nm]
    #[arg(long)]
    pub distance: f64,

    /// `연료=수량` 형식. 수량 단위는 설정의 fuel_mass_unit을 따른다. 여러 번 지정 가능.
    #[arg(long = "fuel", required = true)]
    pub fuels: Vec<FuelArg>,

    /// 실측 연도 (생략 시 설정값)
    #[arg(long)]
    pub target_year: Option<i32>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// `--fuel` 인자 한 개.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelArg {
    pub fuel_type: FuelType,
    pub amount: f64,
}

impl FromStr for FuelArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, amount) = s
            .split_once('=')
            .ok_or_else(|| format!("`연료=수량` 형식이어야 합니다: {s}"))?;
        let fuel_type = kind.parse::<FuelType>()?;
        let amount = amount
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("수량을 해석할 수 없습니다 ({amount}): {e}"))?;
        Ok(Self { fuel_type, amount })
    }
}

impl FuelArg {
    fn to_consumption(self, unit: MassUnit) -> FuelConsumption {
        FuelConsumption::new(self.fuel_type, to_grams(self.amount, unit))
    }
}

/// 파싱된 명령을 실행하고 결과를 `out`에 쓴다.
pub fn run(cli: &Cli, config: &Config, out: &mut impl Write) -> Result<(), AppError> {
    match &cli.command {
        Command::Calculate(args) => handle_calculate(args, config, out),
        Command::ShipTypes => handle_ship_types(out),
        Command::FuelTypes => handle_fuel_types(out),
        Command::Demo { format } => handle_demo(format.unwrap_or(config.output_format), out),
    }
}

fn handle_calculate(
    args: &CalculateArgs,
    config: &Config,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let consumptions: Vec<FuelConsumption> = args
        .fuels
        .iter()
        .map(|f| f.to_consumption(config.fuel_mass_unit))
        .collect();
    let target_year = args.target_year.unwrap_or(config.default_target_year);
    tracing::info!(
        ship_type = %args.ship_type,
        fuels = consumptions.len(),
        target_year,
        "calculating CII rating"
    );

    let result = calculate_attained_cii_rating(
        args.ship_type,
        args.gross_tonnage,
        args.deadweight_tonnage,
        args.distance,
        &consumptions,
        target_year,
    )?;
    let format = args.format.unwrap_or(config.output_format);
    writeln!(out, "{}", report::render(&result, format)?)?;
    Ok(())
}

fn handle_ship_types(out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "{:<40} {}", "선종", "용량 단위")?;
    for kind in ShipType::iter() {
        writeln!(out, "{:<40} {}", kind, kind.capacity_unit()?)?;
    }
    Ok(())
}

fn handle_fuel_types(out: &mut impl Write) -> Result<(), AppError> {
    writeln!(
        out,
        "{:<30} {:>8} {:>8} {:>10}",
        "연료", "Cf", "탄소", "LCV[kJ/kg]"
    )?;
    for fuel in FuelType::iter() {
        let p = fuel.properties()?;
        writeln!(
            out,
            "{:<30} {:>8.3} {:>8.4} {:>10.0}",
            fuel, p.co2_conversion_factor, p.carbon_content, p.lower_calorific_value_kj_per_kg
        )?;
    }
    Ok(())
}

fn handle_demo(format: OutputFormat, out: &mut impl Write) -> Result<(), AppError> {
    let ship_type = ShipType::RoRoPassengerShip;
    let (gross_tonnage, deadweight_tonnage, distance) = (25_000.0, 0.0, 150_000.0);

    writeln!(out, "-- 단일 연료: 디젤/가스유 19,000 t --")?;
    let single = calculate_attained_cii_rating_single_fuel(
        ship_type,
        gross_tonnage,
        deadweight_tonnage,
        distance,
        FuelType::DieselOrGasoil,
        to_grams(19_000.0, MassUnit::Tonne),
        2019,
    )?;
    writeln!(out, "{}", report::render(&single, format)?)?;

    writeln!(out, "-- 복수 연료: 디젤/가스유 12,500 t + LFO 10,000 t --")?;
    let multi = calculate_attained_cii_rating(
        ship_type,
        gross_tonnage,
        deadweight_tonnage,
        distance,
        &[
            FuelConsumption::new(FuelType::DieselOrGasoil, to_grams(12_500.0, MassUnit::Tonne)),
            FuelConsumption::new(FuelType::LightFuelOil, to_grams(10_000.0, MassUnit::Tonne)),
        ],
        2019,
    )?;
    writeln!(out, "{}", report::render(&multi, format)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fuel_argument() {
        let arg: FuelArg = "hfo=1500.5".parse().unwrap();
        assert_eq!(arg.fuel_type, FuelType::HeavyFuelOil);
        assert_eq!(arg.amount, 1500.5);
        assert!("hfo".parse::<FuelArg>().is_err());
        assert!("hfo=lots".parse::<FuelArg>().is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
