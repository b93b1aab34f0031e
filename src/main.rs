//! conv_planner: layer-by-layer shape calculator for Conv2d / ConvTranspose2d stacks
//!
//! Usage:
//!   conv_planner [OPTIONS]
//!   conv_planner --config plan.ini
//!
//! Examples:
//!   conv_planner -i 1 28 28 -d 32 64 -l cc
//!   conv_planner -d 64 32 1 -s 2 -o 1 -l ttt -i 128 7 7

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use conv_planner::{config::file, print_plan, propagate, PlannerConfig, Result};

/// Simulates the dimensional reduction/upscaling for Conv2d and
/// ConvTranspose2d layers.
#[derive(Parser, Debug)]
#[command(name = "conv_planner")]
#[command(version, about, long_about = None)]
struct Args {
    /// Read every setting from the [MAIN] section of this INI file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Batch size [default: 1]
    #[arg(short, long)]
    batch_size: Option<usize>,

    /// Input channels, width and height [default: 1 28 28]
    #[arg(short, long, num_args = 1..)]
    initial_dims: Option<Vec<usize>>,

    /// Output channels per layer; sets the layer count [default: 32 64 128 256]
    #[arg(short = 'd', long, num_args = 1..)]
    hidden_dims: Option<Vec<usize>>,

    /// Stride, one value or one per layer [default: 2]
    #[arg(short, long, num_args = 1..)]
    stride: Option<Vec<usize>>,

    /// Padding, one value or one per layer [default: 1]
    #[arg(short, long, num_args = 1..)]
    padding: Option<Vec<usize>>,

    /// Output padding for transposed layers, one value or one per layer [default: 0]
    #[arg(short, long, num_args = 1..)]
    output_padding: Option<Vec<usize>>,

    /// Kernel size, one value or one per layer [default: 3]
    #[arg(short, long, num_args = 1..)]
    kernel_size: Option<Vec<usize>>,

    /// Layer tags, one char per layer: c = conv, t = transposed conv [default: cccc]
    #[arg(short, long)]
    layers: Option<String>,

    /// Fail when there are fewer layer tags than hidden dims
    #[arg(long)]
    strict: bool,
}

impl Args {
    fn into_config(self) -> Result<PlannerConfig> {
        if let Some(path) = self.config {
            info!("reading plan from {}, command line layer options ignored", path.display());
            let mut config = file::load(path)?;
            config.strict_layers = self.strict;
            return Ok(config);
        }

        let defaults = PlannerConfig::default();
        Ok(PlannerConfig {
            batch_size: self.batch_size.unwrap_or(defaults.batch_size),
            initial_dims: self.initial_dims.unwrap_or(defaults.initial_dims),
            hidden_dims: self.hidden_dims.unwrap_or(defaults.hidden_dims),
            stride: self.stride.unwrap_or(defaults.stride),
            padding: self.padding.unwrap_or(defaults.padding),
            kernel_size: self.kernel_size.unwrap_or(defaults.kernel_size),
            output_padding: self.output_padding.unwrap_or(defaults.output_padding),
            layers: self.layers.unwrap_or(defaults.layers),
            strict_layers: self.strict,
        })
    }
}

fn run(args: Args) -> Result<()> {
    let model = args.into_config()?.build()?;
    let records = propagate(&model)?;
    print_plan(&records);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
