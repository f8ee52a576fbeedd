//! Lilt CLI
//!
//! Inspect spring presets and simulate spring animations frame by frame.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lilt_animation::{SpringAnimation, SpringPreset};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod config;
mod simulate;

use config::LiltConfig;
use simulate::{Frame, Simulator};

#[derive(Parser)]
#[command(name = "lilt", version, about = "Spring animation toolkit")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a config file (defaults to ./lilt.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in spring presets
    Presets {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate one spring and print every frame
    Simulate {
        /// Preset to use (default, responsive, bouncy)
        #[arg(short, long)]
        preset: Option<SpringPreset>,

        /// Value the spring settles at
        #[arg(short, long, allow_negative_numbers = true)]
        target: Option<f64>,

        /// Value the spring starts from
        #[arg(short, long, allow_negative_numbers = true)]
        from: Option<f64>,

        /// Stop after this many frames
        #[arg(short, long)]
        max_frames: Option<usize>,

        /// Print frames as JSON
        #[arg(long)]
        json: bool,

        /// Pace frames at 60 per second
        #[arg(long)]
        realtime: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Serialize)]
struct PresetRow {
    name: &'static str,
    stiffness: f64,
    damping: f64,
    mass: f64,
    damping_ratio: f64,
    description: &'static str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = LiltConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Presets { json } => print_presets(json),
        Commands::Simulate {
            preset,
            target,
            from,
            max_frames,
            json,
            realtime,
        } => {
            let sim = &mut config.simulation;
            if let Some(preset) = preset {
                // An explicit preset wins over custom physics from the file
                sim.preset = preset;
                sim.spring = None;
            }
            if let Some(target) = target {
                sim.target = target;
            }
            if let Some(from) = from {
                sim.from = from;
            }
            if let Some(max_frames) = max_frames {
                sim.max_frames = max_frames;
            }
            run_simulation(&config, json, realtime)
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn print_presets(json: bool) -> Result<()> {
    let rows: Vec<PresetRow> = SpringPreset::ALL
        .into_iter()
        .map(|preset| {
            let config = preset.config();
            PresetRow {
                name: preset.name(),
                stiffness: config.stiffness(),
                damping: config.damping(),
                mass: config.mass(),
                damping_ratio: config.damping_ratio(),
                description: preset.description(),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<12} {:>9} {:>8} {:>5} {:>7}  {}",
        "preset", "stiffness", "damping", "mass", "ratio", "use"
    );
    for row in rows {
        println!(
            "{:<12} {:>9} {:>8} {:>5} {:>7.3}  {}",
            row.name, row.stiffness, row.damping, row.mass, row.damping_ratio, row.description
        );
    }
    Ok(())
}

fn run_simulation(config: &LiltConfig, json: bool, realtime: bool) -> Result<()> {
    let sim = &config.simulation;
    let spring = SpringAnimation::new(sim.spring_config()?)
        .with_value(sim.from)
        .with_target(sim.target);

    tracing::info!(
        preset = %sim.preset,
        custom = sim.spring.is_some(),
        from = sim.from,
        to = sim.target,
        "simulating spring"
    );

    let simulator = Simulator::new(spring, sim.max_frames);

    let simulation = if realtime {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .context("Failed to start frame clock")?;
        runtime.block_on(simulator.run_realtime(|frame| {
            if !json {
                print_frame(frame);
            }
        }))
    } else {
        let simulation = simulator.run();
        if !json {
            simulation.frames.iter().for_each(print_frame);
        }
        simulation
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&simulation)?);
    }
    Ok(())
}

fn print_frame(frame: &Frame) {
    println!(
        "{:>5}  {:>14.6}  {:>14.6}",
        frame.index, frame.value, frame.velocity
    );
}
