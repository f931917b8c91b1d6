use clap::{Parser, Subcommand, ValueEnum};
use rhumbline_engine::{AngleUnit, GeoPoint, RhumbLineCalc, EARTH_RADIUS_KM};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Parser)]
#[command(name = "rhumb")]
#[command(version = "0.1.0")]
#[command(about = "Rhumb-line navigation calculator", long_about = None)]
struct Cli {
    /// Sphere radius (km)
    #[arg(long, default_value_t = EARTH_RADIUS_KM, global = true)]
    radius: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rhumb-line distance between two points
    Distance {
        #[command(flatten)]
        pair: PointPairArgs,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Constant compass course between two points
    Bearing {
        #[command(flatten)]
        pair: PointPairArgs,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Destination from a start point, bearing, and distance
    Destination {
        /// Start latitude (degrees)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Start longitude (degrees)
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Constant bearing to hold
        #[arg(short = 'b', long, allow_negative_numbers = true)]
        bearing: f64,

        /// Distance to travel (km)
        #[arg(short = 'd', long)]
        distance: f64,

        /// Unit of the bearing argument
        #[arg(long, default_value = "degrees")]
        unit: BearingUnit,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Loxodromic midpoint between two points
    Midpoint {
        #[command(flatten)]
        pair: PointPairArgs,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Interpolate waypoints along the rhumb line (bisection order)
    Interpolate {
        #[command(flatten)]
        pair: PointPairArgs,

        /// Number of waypoints; must be a power of 2 minus 1 (1, 3, 7, ...)
        #[arg(short = 'n', long)]
        points: usize,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Display engine information
    Info,
}

#[derive(clap::Args)]
struct PointPairArgs {
    /// Start latitude (degrees)
    #[arg(long, allow_negative_numbers = true)]
    lat_a: f64,

    /// Start longitude (degrees)
    #[arg(long, allow_negative_numbers = true)]
    lon_a: f64,

    /// End latitude (degrees)
    #[arg(long, allow_negative_numbers = true)]
    lat_b: f64,

    /// End longitude (degrees)
    #[arg(long, allow_negative_numbers = true)]
    lon_b: f64,
}

impl PointPairArgs {
    fn points(&self) -> (GeoPoint, GeoPoint) {
        (
            GeoPoint::new(self.lat_a, self.lon_a),
            GeoPoint::new(self.lat_b, self.lon_b),
        )
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BearingUnit {
    Degrees,
    Radians,
}

impl From<BearingUnit> for AngleUnit {
    fn from(unit: BearingUnit) -> Self {
        match unit {
            BearingUnit::Degrees => AngleUnit::Degrees,
            BearingUnit::Radians => AngleUnit::Radians,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ScalarResult {
    quantity: String,
    value: f64,
    unit: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct PointResult {
    lat: f64,
    lon: f64,
}

impl From<GeoPoint> for PointResult {
    fn from(p: GeoPoint) -> Self {
        PointResult { lat: p.lat, lon: p.lon }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let calc = RhumbLineCalc::with_radius(cli.radius);

    match cli.command {
        Commands::Distance { pair, output } => {
            let (a, b) = pair.points();
            let km = calc.distance(a, b);
            display_scalar("distance", km, "km", output)?;
        }

        Commands::Bearing { pair, output } => {
            let (a, b) = pair.points();
            let deg = calc.bearing(a, b);
            display_scalar("bearing", deg, "degrees", output)?;
        }

        Commands::Destination {
            lat,
            lon,
            bearing,
            distance,
            unit,
            output,
        } => {
            let dest = calc.destination(GeoPoint::new(lat, lon), bearing, distance, unit.into());
            display_points(&[dest], output)?;
        }

        Commands::Midpoint { pair, output } => {
            let (a, b) = pair.points();
            let mid = calc.loxodromic_midpoint(a, b);
            display_points(&[mid], output)?;
        }

        Commands::Interpolate {
            pair,
            points,
            output,
        } => {
            let (a, b) = pair.points();
            let waypoints = calc.loxodromic_power_interpolation(a, b, points)?;
            display_points(&waypoints, output)?;
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║       RHUMBLINE ENGINE v0.1.0          ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Constant-bearing navigation geometry   ║");
            println!("║ on a spherical Earth (R = 6371 km).    ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Operations:                            ║");
            println!("║ • distance    • bearing                ║");
            println!("║ • destination • midpoint               ║");
            println!("║ • interpolate (power-of-two bisection) ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_scalar(
    quantity: &str,
    value: f64,
    unit: &str,
    output: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match output {
        OutputFormat::Table => {
            println!("{:<12} {:>14.6} {}", quantity, value, unit);
        }
        OutputFormat::Json => {
            let result = ScalarResult {
                quantity: quantity.to_string(),
                value,
                unit: unit.to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Csv => {
            println!("quantity,value,unit");
            println!("{},{},{}", quantity, value, unit);
        }
    }
    Ok(())
}

fn display_points(points: &[GeoPoint], output: OutputFormat) -> Result<(), Box<dyn Error>> {
    match output {
        OutputFormat::Table => {
            println!("{:>4} {:>14} {:>14}", "#", "Latitude", "Longitude");
            for (i, p) in points.iter().enumerate() {
                println!("{:>4} {:>14.7} {:>14.7}", i, p.lat, p.lon);
            }
        }
        OutputFormat::Json => {
            let results: Vec<PointResult> = points.iter().copied().map(PointResult::from).collect();
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Csv => {
            println!("lat,lon");
            for p in points {
                println!("{},{}", p.lat, p.lon);
            }
        }
    }
    Ok(())
}
