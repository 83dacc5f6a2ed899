//! Depth sweep and bounded optimization of an I-beam section.
//!
//! Writes `sweep.csv` and `optimization.csv` to the directory given as the
//! first argument (default: current directory). An optional second argument
//! names a JSON study file for the optimization.
//!
//! Run with: `RUST_LOG=ibeam_opt=debug cargo run --example ibeam_study`

use std::path::PathBuf;

use ibeam_opt::optimize::{AscentConfig, StudyConfig};
use ibeam_opt::parameters::{Bounds, ParameterBounds, ParameterVector};
use ibeam_opt::report::write_csv_file;
use ibeam_opt::sweep::SweepConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_study() -> Result<StudyConfig, Box<dyn std::error::Error>> {
    let bounds = ParameterBounds::new(
        Bounds::new(100.0, 300.0)?,
        Bounds::new(20.0, 80.0)?,
        Bounds::fixed(5.0)?,
        Bounds::fixed(5.0)?,
    );
    Ok(StudyConfig::new(
        ParameterVector::new(150.0, 40.0, 5.0, 5.0),
        bounds,
        AscentConfig::default().with_learning_rate(1e-4),
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ibeam_opt=info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();

    let mut args = std::env::args().skip(1);
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    let study = match args.next() {
        Some(path) => StudyConfig::from_json_file(path)?,
        None => default_study()?,
    };

    println!("I-beam depth sweep");
    println!("==================\n");
    let sweep = SweepConfig::default();
    let rows = sweep.run()?;
    for row in rows.iter() {
        println!(
            "depth={:>6.1}  i_xx={:>14.1}  sens=[{:.1}, {:.1}, {:.1}, {:.1}]",
            row.depth, row.i_xx, row.sens_depth, row.sens_width, row.sens_t_web, row.sens_t_flange
        );
    }
    let sweep_path = out_dir.join("sweep.csv");
    write_csv_file(&rows, &sweep_path)?;
    println!("\nWrote {}\n", sweep_path.display());

    println!("Projected gradient ascent");
    println!("=========================\n");
    let result = study.run()?;
    println!("{}", result);
    let records_path = out_dir.join("optimization.csv");
    write_csv_file(&result.records, &records_path)?;
    println!("Wrote {}", records_path.display());

    Ok(())
}
