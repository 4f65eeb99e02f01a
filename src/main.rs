//! Pintle injector sizing CLI: sweeps orifice counts for a design point and
//! prints the best drillable configurations.
//!
//! Usage:
//!   pintle-size --catalog data/drill_sizes.csv
//!   pintle-size --catalog data/drill_sizes.csv --mode water-test --top 5
//!   RUST_LOG=debug pintle-size --catalog data/drill_sizes.csv --json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use twine_core::Model;
use uom::si::{
    f64::{Length, MassRate, Pressure, ThermodynamicTemperature},
    length::inch,
    mass_rate::kilogram_per_second,
    pressure::psi,
    thermodynamic_temperature::kelvin,
};

use pintle_sizing::{
    models::propulsion::pintle::{
        AcceptanceWindow, HoleCountRange, Interval, OperatingMode, PintleInjector, PressureDrops,
        Report, SearchConfig, SizingInput,
    },
    support::{
        drill::DrillCatalog,
        thermo::{
            fluid::{Ethanol, NitrousOxide, Oxygen, Water},
            model::{Incompressible, incompressible::IncompressibleFluid},
        },
    },
};

#[cfg(feature = "coolprop")]
use pintle_sizing::support::thermo::model::{CoolProp, coolprop::CoolPropFluid};

#[derive(Parser)]
#[command(name = "pintle-size")]
#[command(about = "Size a liquid bipropellant pintle injector against a drill catalog")]
struct Args {
    /// CSV drill table with diameters in millimeters
    #[arg(long)]
    catalog: PathBuf,

    /// Catalog column holding the diameters
    #[arg(long, default_value = DrillCatalog::DEFAULT_COLUMN)]
    column: String,

    #[arg(long, value_enum, default_value_t = Mode::Hotfire)]
    mode: Mode,

    /// Oxidizer (defaults to oxygen for hotfire, water for water tests)
    #[arg(long, value_enum)]
    oxidizer: Option<OxidizerKind>,

    /// Fuel (defaults to ethanol for hotfire, water for water tests)
    #[arg(long, value_enum)]
    fuel: Option<FuelKind>,

    /// Number of configurations to report
    #[arg(long, default_value_t = 10)]
    top: usize,

    #[arg(long, default_value_t = HoleCountRange::default().min)]
    min_holes: u32,

    /// Largest hole count, inclusive
    #[arg(long, default_value_t = HoleCountRange::default().max)]
    max_holes: u32,

    #[arg(long, default_value_t = HoleCountRange::default().step)]
    step: u32,

    /// Accepted total momentum ratio range, MIN,MAX
    #[arg(long, value_parser = parse_interval, default_value = "0.9,1.5")]
    tmr: Interval,

    /// Accepted local momentum ratio range, MIN,MAX
    #[arg(long, value_parser = parse_interval, default_value = "1.0,3.0")]
    lmr: Interval,

    /// Chamber pressure override [psia]
    #[arg(long)]
    chamber_pressure: Option<f64>,

    /// Total propellant mass flow override [kg/s]
    #[arg(long)]
    mass_flow: Option<f64>,

    /// Oxidizer-to-fuel mass ratio override
    #[arg(long)]
    mixture_ratio: Option<f64>,

    /// Oxidizer inlet temperature override [K]
    #[arg(long)]
    oxidizer_temperature: Option<f64>,

    /// Fuel inlet temperature override [K]
    #[arg(long)]
    fuel_temperature: Option<f64>,

    /// Fraction of fuel used for film cooling
    #[arg(long)]
    film_cooling: Option<f64>,

    /// Oxidizer injector pressure drop override [psi]
    #[arg(long)]
    oxidizer_dp: Option<f64>,

    /// Fuel injector pressure drop override [psi]
    #[arg(long)]
    fuel_dp: Option<f64>,

    /// Chamber diameter override [in]
    #[arg(long)]
    chamber_diameter: Option<f64>,

    /// Orifice discharge coefficient override
    #[arg(long)]
    discharge_coefficient: Option<f64>,

    /// Use CoolProp real-fluid densities instead of constant densities
    #[cfg(feature = "coolprop")]
    #[arg(long)]
    real_fluid: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Hotfire,
    WaterTest,
}

impl From<Mode> for OperatingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Hotfire => OperatingMode::Hotfire,
            Mode::WaterTest => OperatingMode::WaterTest,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OxidizerKind {
    Oxygen,
    NitrousOxide,
    Water,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FuelKind {
    Ethanol,
    Water,
}

/// Fluids the CLI can hand to every available property model.
#[cfg(not(feature = "coolprop"))]
trait CliFluid: IncompressibleFluid + Clone + Default {}

#[cfg(not(feature = "coolprop"))]
impl<T: IncompressibleFluid + Clone + Default> CliFluid for T {}

/// Fluids the CLI can hand to every available property model.
#[cfg(feature = "coolprop")]
trait CliFluid: IncompressibleFluid + CoolPropFluid + Clone {}

#[cfg(feature = "coolprop")]
impl<T: IncompressibleFluid + CoolPropFluid + Clone> CliFluid for T {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let catalog = DrillCatalog::from_path(&args.catalog, &args.column)
        .with_context(|| format!("failed to load drill catalog {}", args.catalog.display()))?;

    let oxidizer = args.oxidizer.unwrap_or(match args.mode {
        Mode::Hotfire => OxidizerKind::Oxygen,
        Mode::WaterTest => OxidizerKind::Water,
    });
    let fuel = args.fuel.unwrap_or(match args.mode {
        Mode::Hotfire => FuelKind::Ethanol,
        Mode::WaterTest => FuelKind::Water,
    });

    let report = match (oxidizer, fuel) {
        (OxidizerKind::Oxygen, FuelKind::Ethanol) => run::<Oxygen, Ethanol>(&args, &catalog)?,
        (OxidizerKind::Oxygen, FuelKind::Water) => run::<Oxygen, Water>(&args, &catalog)?,
        (OxidizerKind::NitrousOxide, FuelKind::Ethanol) => {
            run::<NitrousOxide, Ethanol>(&args, &catalog)?
        }
        (OxidizerKind::NitrousOxide, FuelKind::Water) => {
            run::<NitrousOxide, Water>(&args, &catalog)?
        }
        (OxidizerKind::Water, FuelKind::Ethanol) => run::<Water, Ethanol>(&args, &catalog)?,
        (OxidizerKind::Water, FuelKind::Water) => run::<Water, Water>(&args, &catalog)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}

fn run<Ox: CliFluid, Fuel: CliFluid>(args: &Args, catalog: &DrillCatalog) -> Result<Report> {
    let input = args.sizing_input::<Ox, Fuel>()?;
    let config = args.search_config();

    #[cfg(feature = "coolprop")]
    if args.real_fluid {
        let thermo_ox = CoolProp::<Ox>::new().context("failed to create oxidizer model")?;
        let thermo_fuel = CoolProp::<Fuel>::new().context("failed to create fuel model")?;
        let ranking = PintleInjector::new(&thermo_ox, &thermo_fuel, catalog)
            .with_config(config)
            .call(&input)?;
        return Ok(ranking.report(args.top));
    }

    let thermo_ox = Incompressible::<Ox>::new().context("invalid oxidizer parameters")?;
    let thermo_fuel = Incompressible::<Fuel>::new().context("invalid fuel parameters")?;
    let ranking = PintleInjector::new(&thermo_ox, &thermo_fuel, catalog)
        .with_config(config)
        .call(&input)?;

    Ok(ranking.report(args.top))
}

impl Args {
    /// Starts from the mode preset and applies any overrides.
    fn sizing_input<Ox: Default, Fuel: Default>(&self) -> Result<SizingInput<Ox, Fuel>> {
        let mode = OperatingMode::from(self.mode);
        let mut input = SizingInput::preset(mode);

        let point = &mut input.operating_point;
        if let Some(value) = self.chamber_pressure {
            point.chamber_pressure = Pressure::new::<psi>(value);
        }
        if let Some(value) = self.mass_flow {
            point.total_mass_flow = MassRate::new::<kilogram_per_second>(value);
        }
        if let Some(value) = self.mixture_ratio {
            point.mixture_ratio = value;
        }
        if let Some(value) = self.oxidizer_temperature {
            point.oxidizer_temperature = ThermodynamicTemperature::new::<kelvin>(value);
        }
        if let Some(value) = self.fuel_temperature {
            point.fuel_temperature = ThermodynamicTemperature::new::<kelvin>(value);
        }
        if let Some(value) = self.film_cooling {
            point.film_cooling_fraction = value;
        }

        // Drops follow an overridden chamber pressure unless given explicitly.
        let mode_drops = PressureDrops::for_mode(mode, point.chamber_pressure);
        if self.oxidizer_dp.is_some() || self.fuel_dp.is_some() {
            let oxidizer = self
                .oxidizer_dp
                .map_or(mode_drops.oxidizer(), Pressure::new::<psi>);
            let fuel = self.fuel_dp.map_or(mode_drops.fuel(), Pressure::new::<psi>);
            input.pressure_drops =
                PressureDrops::new(oxidizer, fuel).context("invalid injector pressure drop")?;
        } else {
            input.pressure_drops = mode_drops;
        }

        if let Some(value) = self.chamber_diameter {
            input.geometry.chamber_diameter = Length::new::<inch>(value);
        }
        if let Some(value) = self.discharge_coefficient {
            input.geometry.discharge_coefficient = value;
        }

        Ok(input)
    }

    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            holes: HoleCountRange {
                min: self.min_holes,
                max: self.max_holes,
                step: self.step,
            },
            window: AcceptanceWindow {
                tmr: self.tmr,
                lmr: self.lmr,
            },
        }
    }
}

fn parse_interval(text: &str) -> Result<Interval, String> {
    let (min, max) = text
        .split_once(',')
        .ok_or_else(|| format!("expected MIN,MAX but got '{text}'"))?;
    let bound = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid bound '{}': {e}", s.trim()))
    };
    Ok(Interval::new(bound(min)?, bound(max)?))
}
