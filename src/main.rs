use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bnn_layout::compute::print_model_stats::print_model_stats;
use bnn_layout::{config, predict_class, predict_mean, Network, NetworkShape, WeightInit};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode flat network parameters and run forward passes")]
struct Cli {
    /// Network shape JSON ({"layers":[{"out_features":..,"in_features":..,"activation":..}]})
    #[arg(long, global = true)]
    shape: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the per-layer parameter layout
    Summary,

    /// Decode one flat parameter vector and run a forward pass
    Forward {
        /// JSON array of flat parameters
        #[arg(long)]
        params: PathBuf,

        /// Input vector, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        input: Vec<f32>,
    },

    /// Average the forward pass over a set of parameter samples
    Predict {
        /// JSON array of flat parameter samples
        #[arg(long)]
        samples: PathBuf,

        /// Input vector, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        input: Vec<f32>,

        /// Also print `mean > threshold` per output unit
        #[arg(long)]
        threshold: Option<f32>,
    },

    /// Draw a flat parameter vector for the shape
    Init {
        #[arg(long, value_enum, default_value_t = InitKind::Xavier)]
        init: InitKind,

        /// Standard deviation for `normal`, half-width for `uniform`, value for `constant`
        #[arg(long, default_value_t = 1.0)]
        scale: f32,

        #[arg(long)]
        seed: Option<u64>,

        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InitKind {
    Xavier,
    He,
    Lecun,
    Normal,
    Uniform,
    Constant,
}

impl InitKind {
    fn weight_init(self, scale: f32) -> WeightInit {
        match self {
            InitKind::Xavier => WeightInit::Xavier,
            InitKind::He => WeightInit::He,
            InitKind::Lecun => WeightInit::LeCun,
            InitKind::Normal => WeightInit::Normal { std_dev: scale },
            InitKind::Uniform => WeightInit::UniformRandom {
                min: -scale,
                max: scale,
            },
            InitKind::Constant => WeightInit::Constant(scale),
        }
    }
}

fn load_shape(path: Option<&Path>) -> Result<NetworkShape> {
    let path = path.context("--shape is required")?;
    config::load_shape(path).with_context(|| format!("failed to load shape from {}", path.display()))
}

fn format_vector(values: &[f32]) -> String {
    values
        .iter()
        .map(|v| format!("{:.6}", v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let shape = load_shape(cli.shape.as_deref())?;

    match cli.command {
        Command::Summary => {
            print_model_stats(&shape);
        }

        Command::Forward { params, input } => {
            let network = Network::new(shape)?;
            let flat = config::load_vector(&params)
                .with_context(|| format!("failed to load parameters from {}", params.display()))?;
            let output = network.evaluate(&flat, &input)?;
            println!("[{}]", format_vector(&output));
        }

        Command::Predict {
            samples,
            input,
            threshold,
        } => {
            let network = Network::new(shape)?;
            let samples = config::load_samples(&samples)
                .with_context(|| format!("failed to load samples from {}", samples.display()))?;
            info!("Evaluating {} samples", samples.len());

            let mean = predict_mean(&network, &samples, &input)?;
            println!("[{}]", format_vector(&mean));

            if let Some(threshold) = threshold {
                let classes = predict_class(&network, &samples, &input, threshold)?;
                println!("{:?}", classes);
            }
        }

        Command::Init {
            init,
            scale,
            seed,
            out,
        } => {
            let flat = init
                .weight_init(scale)
                .init_network(&shape, seed)
                .with_context(|| format!("failed to draw {:?} parameters with scale {}", init, scale))?;
            info!("Drew {} parameters ({:?}, seed {:?})", flat.len(), init, seed);

            match out {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    let mut writer = BufWriter::new(file);
                    serde_json::to_writer(&mut writer, &flat)?;
                    writer.flush()?;
                }
                None => println!("{}", serde_json::to_string(&flat)?),
            }
        }
    }

    Ok(())
}
