use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use projectile_engine::{
    compare_engines, constants::DEFAULT_COMPARISON_TOLERANCE, FixedEngine, FloatEngine,
    LaunchInputs,
};

#[derive(Parser)]
#[command(name = "projectile")]
#[command(version = "0.1.0")]
#[command(about = "Deterministic dual-engine projectile trajectory calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a trajectory with the floating-point reference engine
    Path {
        /// Number of sample points
        #[arg(short = 'n', long, default_value = "20")]
        num_pts: usize,

        /// Launch angle (whole degrees, -179..=180)
        #[arg(short = 'a', long, default_value = "105")]
        angle: i32,

        /// Launch speed (m/s, at least 1)
        #[arg(short = 'v', long, default_value = "100.0")]
        velocity: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Run both engines and compare every decoded sample
    Compare {
        /// Number of sample points
        #[arg(short = 'n', long, default_value = "20")]
        num_pts: usize,

        /// Launch angle (whole degrees, -179..=180)
        #[arg(short = 'a', long, default_value = "105")]
        angle: i32,

        /// Launch speed (m/s, at least 1)
        #[arg(short = 'v', long, default_value = "100.0")]
        velocity: f64,

        /// Per-sample acceptance tolerance in meters
        #[arg(short = 't', long, default_value_t = DEFAULT_COMPARISON_TOLERANCE)]
        tolerance: f64,

        /// Write the fixed-point engine's raw integer sequences here
        #[arg(long)]
        fixed_dump: Option<PathBuf>,

        /// Write the reference engine's real-valued sequences here
        #[arg(long)]
        reference_dump: Option<PathBuf>,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Display engine information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct PathDump {
    inputs: LaunchInputs,
    times: Vec<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
}

/// Raw field residues, decimal-encoded (they exceed every primitive width).
#[derive(Debug, Serialize, Deserialize)]
struct FixedDump {
    num_pts: usize,
    theta_0_deg: i32,
    v_0: f64,
    x: Vec<String>,
    y: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ReferenceDump {
    num_pts: usize,
    theta_0_deg: i32,
    v_0: f64,
    x: Vec<f64>,
    y: Vec<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Path {
            num_pts,
            angle,
            velocity,
            output,
        } => {
            let inputs = LaunchInputs::new(num_pts, angle, velocity);
            let engine = FloatEngine::standard();
            let trajectory = engine.trajectory(&inputs)?;
            let times = trajectory.times.clone();
            let sequences = trajectory.into_sequences();
            display_path(&inputs, times, sequences, output)?;
        }

        Commands::Compare {
            num_pts,
            angle,
            velocity,
            tolerance,
            fixed_dump,
            reference_dump,
            output,
        } => {
            let inputs = LaunchInputs::new(num_pts, angle, velocity);
            let fixed = FixedEngine::standard();
            let reference = FloatEngine::standard();
            let report = compare_engines(&fixed, &reference, &inputs)?;

            if let Some(path) = fixed_dump {
                let dump = FixedDump {
                    num_pts: inputs.num_pts,
                    theta_0_deg: inputs.theta_0_deg,
                    v_0: inputs.v_0,
                    x: report.samples.iter().map(|s| s.x_fixed_raw.clone()).collect(),
                    y: report.samples.iter().map(|s| s.y_fixed_raw.clone()).collect(),
                };
                fs::write(&path, serde_json::to_string_pretty(&dump)?)?;
                println!("wrote fixed-point dump to {}", path.display());
            }
            if let Some(path) = reference_dump {
                let dump = ReferenceDump {
                    num_pts: inputs.num_pts,
                    theta_0_deg: inputs.theta_0_deg,
                    v_0: inputs.v_0,
                    x: report.samples.iter().map(|s| s.x_reference).collect(),
                    y: report.samples.iter().map(|s| s.y_reference).collect(),
                };
                fs::write(&path, serde_json::to_string_pretty(&dump)?)?;
                println!("wrote reference dump to {}", path.display());
            }

            display_comparison(&report, output)?;

            // the acceptance gate comes last so the report is always shown
            report.check(tolerance)?;
            println!();
            println!(
                "PASS: {} samples within {:e} (max difference {:e})",
                report.samples.len(),
                tolerance,
                report.max_difference()
            );
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║       PROJECTILE ENGINE v0.1.0         ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Deterministic trajectory generation    ║");
            println!("║ under two arithmetic models.           ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Taylor-series trigonometry           ║");
            println!("║ • Closed-form time-of-flight bound     ║");
            println!("║ • Prime-field fixed-point engine       ║");
            println!("║ • Sample-by-sample equivalence gate    ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_path(
    inputs: &LaunchInputs,
    times: Vec<f64>,
    (xs, ys): (Vec<f64>, Vec<f64>),
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            let dump = PathDump {
                inputs: *inputs,
                times,
                x: xs,
                y: ys,
            };
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }

        OutputFormat::Csv => {
            println!("time,x,y");
            for ((t, x), y) in times.iter().zip(&xs).zip(&ys) {
                println!("{:.6},{:.6},{:.6}", t, x, y);
            }
        }

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║          TRAJECTORY SAMPLES            ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Points:            {:>8}            ║", inputs.num_pts);
            println!("║ Angle:             {:>8}°           ║", inputs.theta_0_deg);
            println!("║ Speed:             {:>8.2} m/s        ║", inputs.v_0);
            println!("╚════════════════════════════════════════╝");
            println!();
            println!("┌──────────┬──────────┬──────────┐");
            println!("│ Time (s) │  X (m)   │  Y (m)   │");
            println!("├──────────┼──────────┼──────────┤");
            for ((t, x), y) in times.iter().zip(&xs).zip(&ys) {
                println!("│ {:>8.3} │ {:>8.2} │ {:>8.2} │", t, x, y);
            }
            println!("└──────────┴──────────┴──────────┘");
        }
    }
    Ok(())
}

fn display_comparison(
    report: &projectile_engine::ComparisonReport,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }

        OutputFormat::Csv => {
            println!("index,x_fixed_scaled,x_reference_scaled,y_fixed_scaled,y_reference_scaled");
            for s in &report.samples {
                println!(
                    "{},{},{},{},{}",
                    s.index, s.x_fixed_scaled, s.x_reference_scaled, s.y_fixed_scaled,
                    s.y_reference_scaled
                );
            }
        }

        OutputFormat::Table => {
            println!(
                "> path for (num_pts={}, theta_0_deg={}, v_0={}) returns:",
                report.inputs.num_pts, report.inputs.theta_0_deg, report.inputs.v_0
            );
            println!();
            println!("> idx\tfixed x\treference x*SCALE_FP\tfixed y\treference y*SCALE_FP");
            for s in &report.samples {
                println!(
                    "> {}\t{}\t{}\t{}\t{}",
                    s.index, s.x_fixed_scaled, s.x_reference_scaled, s.y_fixed_scaled,
                    s.y_reference_scaled
                );
            }
        }
    }
    Ok(())
}
