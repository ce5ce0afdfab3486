use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use serde::Serialize;

use shot_finder::chart::write_power_chart;
use shot_finder::config::load_calibration;
use shot_finder::logging;
use shot_finder::solver::{
    Calibration, Displacement, ScreenPoint, SelectionRule, ShotCandidate, ShotError, shot_options,
    solve,
};

#[derive(Parser)]
#[command(name = "shot_finder")]
#[command(version)]
#[command(about = "Finds the launch angle and power between two points", long_about = None)]
struct Cli {
    /// Calibration JSON file (defaults to $SHOT_FINDER_CALIBRATION, then built-ins)
    #[arg(long, global = true)]
    calibration: Option<PathBuf>,

    /// Override the calibration's tie-break rule
    #[arg(long, global = true, value_enum)]
    rule: Option<RuleArg>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve from a displacement (dy positive = target above launch point)
    Solve {
        #[arg(long, allow_negative_numbers = true)]
        dx: f64,
        #[arg(long, allow_negative_numbers = true)]
        dy: f64,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Solve from launch and target screen coordinates
    Points {
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        #[arg(allow_negative_numbers = true)]
        y1: f64,
        #[arg(allow_negative_numbers = true)]
        x2: f64,
        #[arg(allow_negative_numbers = true)]
        y2: f64,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write a power-by-angle SVG chart
    Chart {
        #[arg(long, allow_negative_numbers = true)]
        dx: f64,
        #[arg(long, allow_negative_numbers = true)]
        dy: f64,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print the active calibration as JSON
    Calibration,
}

#[derive(Args, Clone, Copy)]
struct OutputArgs {
    /// Also list every playable angle
    #[arg(long)]
    all: bool,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleArg {
    Literal,
    NearestHalf,
}

impl From<RuleArg> for SelectionRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Literal => SelectionRule::Literal,
            RuleArg::NearestHalf => SelectionRule::NearestHalf,
        }
    }
}

#[derive(Serialize)]
struct Report {
    displacement: Displacement,
    shot: Option<ShotCandidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Vec<ShotCandidate>>,
}

fn read_f64(prompt: &str) -> Result<f64, String> {
    loop {
        print!("{prompt}");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {e}"))?;

        if bytes == 0 {
            return Err("Input ended unexpectedly (EOF).".to_string());
        }

        match line.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => eprintln!("Please enter a valid number (e.g., 640 or 412.5)."),
        }
    }
}

fn read_points_from_user() -> Result<(ScreenPoint, ScreenPoint), String> {
    let start = ScreenPoint::new(read_f64("Launch x: ")?, read_f64("Launch y: ")?);
    let end = ScreenPoint::new(read_f64("Target x: ")?, read_f64("Target y: ")?);
    Ok((start, end))
}

fn check_finite(values: &[f64]) -> Result<(), String> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err("Inputs must be finite numbers.".to_string())
    }
}

fn report(
    displacement: Displacement,
    calibration: &Calibration,
    output: OutputArgs,
) -> Result<(), String> {
    let shot = solve(displacement, calibration);
    let options = output.all.then(|| shot_options(displacement, calibration));

    if output.json {
        let report = Report {
            displacement,
            shot: shot.ok(),
            options,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Could not encode report: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    println!(
        "Displacement: dx {:.2}, dy {:.2}",
        displacement.dx, displacement.dy
    );
    match shot {
        Ok(best) => println!("Best shot: angle {} deg, power {:.2}", best.angle, best.power),
        Err(ShotError::NoFeasibleShot) => println!("No valid shot"),
        Err(err) => println!("No valid shot: {err}"),
    }
    if let Some(options) = options {
        println!("\nAngle | Power");
        for option in options {
            println!("({}, {:.2})", option.angle, option.power);
        }
    }
    Ok(())
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let mut calibration = load_calibration(cli.calibration.as_deref()).map_err(|e| e.to_string())?;
    if let Some(rule) = cli.rule {
        calibration = calibration.with_selection(rule.into());
    }
    info!(
        "calibration: gravity {}, ratio {}, {} angles, {} rule",
        calibration.gravity,
        calibration.velocity_to_power,
        calibration.angles.len(),
        calibration.selection.as_str()
    );

    match cli.command {
        Some(Commands::Solve { dx, dy, output }) => {
            check_finite(&[dx, dy])?;
            report(Displacement::new(dx, dy), &calibration, output)
        }
        Some(Commands::Points {
            x1,
            y1,
            x2,
            y2,
            output,
        }) => {
            check_finite(&[x1, y1, x2, y2])?;
            let displacement =
                Displacement::between(ScreenPoint::new(x1, y1), ScreenPoint::new(x2, y2));
            report(displacement, &calibration, output)
        }
        Some(Commands::Chart { dx, dy, output }) => {
            check_finite(&[dx, dy])?;
            write_power_chart(&output, Displacement::new(dx, dy), &calibration)
                .map_err(|e| format!("Could not write chart '{}': {e}", output.display()))?;
            println!("Wrote {}", output.display());
            Ok(())
        }
        Some(Commands::Calibration) => {
            let json = serde_json::to_string_pretty(&calibration)
                .map_err(|e| format!("Could not encode calibration: {e}"))?;
            println!("{json}");
            Ok(())
        }
        None => {
            let (start, end) = read_points_from_user()?;
            println!();
            report(
                Displacement::between(start, end),
                &calibration,
                OutputArgs {
                    all: true,
                    json: false,
                },
            )
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
