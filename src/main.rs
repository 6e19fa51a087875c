// Entry point: renders the effect-size figure and its sidecar files.
use std::error::Error;
use std::fs::{create_dir_all, write};
use std::path::PathBuf;

use clap::Parser;

use abfigs::config::FigConfig;
use abfigs::{plots, sim};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "figs.toml")]
    config: String,

    /// Output directory for the rendered figure
    #[arg(long, default_value = "target/plots")]
    out_dir: PathBuf,

    /// Override the simulation seed from the config
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut cfg = FigConfig::load_or_default(&args.config);
    if let Some(seed) = args.seed {
        cfg.trial.seed = seed;
    }

    create_dir_all(&args.out_dir)?;

    let run = sim::simulate_effect(&cfg.trial)?;

    let fig_path = args.out_dir.join("effect_size.png");
    plots::render_effect_size(&fig_path, &run, &cfg.trial, &cfg.chart)?;
    write(args.out_dir.join("effect_size.csv"), plots::effect_csv(&run))?;
    write(
        args.out_dir.join("effect_size_meta.txt"),
        plots::run_meta_text(&cfg.trial),
    )?;

    println!("Saved effect-size figure to {}", args.out_dir.display());
    Ok(())
}
