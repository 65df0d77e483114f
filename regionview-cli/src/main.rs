use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use commands::{InputFormat, InputSpec};
use config::{Config, OutputFormat, ViewerOverrides};
use error::{format_error_with_suggestions, CliError};

#[derive(Parser)]
#[command(name = "regionview")]
#[command(about = "RegionView - collapsed-intron coordinate systems for genome tracks")]
#[command(version)]
#[command(long_about = "
RegionView merges and pads the CDS/exon intervals of a transcript, collapses
the introns between them, and maps genomic positions to track pixels and back.

Examples:
  regionview regions --input gene.gff3 --transcript ENST00000357654
  regionview locate --input exons.json --width 1200 46594300 46611100
  regionview invert --input exons.json --width 1200 0 600.5 1199
  regionview config --example --output regionview.toml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Interval file (GFF3 or JSON)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Input file format (auto-detected from extension if not specified)
    #[arg(long)]
    pub format: Option<InputFormat>,

    /// Only use features of this transcript (GFF3 transcript_id or Parent)
    #[arg(short, long)]
    pub transcript: Option<String>,

    /// Flanking bases around each region
    #[arg(short, long)]
    pub padding: Option<i64>,

    /// Track width in pixels
    #[arg(short, long)]
    pub width: Option<f64>,

    /// Feature types to keep (repeatable)
    #[arg(long = "feature-type")]
    pub feature_types: Vec<String>,

    /// Keep every feature type
    #[arg(long, conflicts_with = "feature_types")]
    pub all_features: bool,

    /// Output format
    #[arg(long)]
    pub output: Option<OutputFormat>,
}

impl InputArgs {
    fn input_spec(&self) -> InputSpec {
        InputSpec {
            path: self.input.clone(),
            format: self.format,
            transcript: self.transcript.clone(),
        }
    }

    fn overrides(&self) -> ViewerOverrides {
        ViewerOverrides {
            padding: self.padding,
            width: self.width,
            feature_types: self.feature_types.clone(),
            all_features: self.all_features,
            format: self.output,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the padded, collapsed regions with their offsets and pixel spans
    Regions {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Map genomic positions to compressed positions and pixels
    Locate {
        #[command(flatten)]
        input: InputArgs,

        /// Genomic positions
        #[arg(required = true, allow_negative_numbers = true)]
        positions: Vec<i64>,
    },

    /// Map pixels back to genomic positions
    Invert {
        #[command(flatten)]
        input: InputArgs,

        /// Pixel x coordinates within the track
        #[arg(required = true, allow_negative_numbers = true)]
        pixels: Vec<f64>,
    },

    /// Show configuration
    Config {
        /// Print an example configuration file
        #[arg(long)]
        example: bool,

        /// Write the configuration to this file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn load_config(path: Option<&PathBuf>, input: &InputArgs) -> Result<Config> {
    let mut config = Config::load(path.map(|p| p.as_path()))?;
    config.apply_overrides(&input.overrides());
    log::debug!("Effective viewer parameters: {:?}", config.viewer);
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Regions { input } => {
            let config = load_config(cli.config.as_ref(), &input)?;
            let viewer = commands::build_viewer(&config, &input.input_spec())?;
            commands::regions::execute(&config, &viewer, &mut out)?;
        }

        Commands::Locate { input, positions } => {
            let config = load_config(cli.config.as_ref(), &input)?;
            let viewer = commands::build_viewer(&config, &input.input_spec())?;
            commands::locate::locate(&config, &viewer, &positions, &mut out)?;
        }

        Commands::Invert { input, pixels } => {
            let config = load_config(cli.config.as_ref(), &input)?;
            let viewer = commands::build_viewer(&config, &input.input_spec())?;
            commands::locate::invert(&config, &viewer, &pixels, &mut out)?;
        }

        Commands::Config { example, output } => {
            let config = if example {
                Config::default()
            } else {
                Config::load(cli.config.as_deref())?
            };

            match output {
                Some(path) => {
                    config.save_to_file(&path)?;
                    log::info!("Wrote configuration to {}", path.display());
                }
                None if example => write!(out, "{}", Config::example_toml()?)?,
                None => write!(
                    out,
                    "{}",
                    toml::to_string_pretty(&config).map_err(CliError::from)?
                )?,
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            if let Some((_, suggestions)) = format_error_with_suggestions(cli_err).split_once("\n\n") {
                eprintln!("\n{}", suggestions);
            }
        }
        std::process::exit(1);
    }
}
