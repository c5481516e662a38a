use clap::Parser;
use peakloc::{
    load_spectrum, save_spectrum, GaussianKernel, OutputDomain, Peak, PeakError, PeakSearch,
    SavitzkyGolay, SearchConfig, Smoother, ValueTransform,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Peak locator for sampled spectra (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for the search stages.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SmoothingConfig {
    #[default]
    None,
    SavitzkyGolay {
        window_size: usize,
        poly_order: usize,
    },
    Gaussian {
        sigma: f64,
    },
}

impl SmoothingConfig {
    fn build(&self) -> Result<Option<Box<dyn Smoother>>, PeakError> {
        let smoother: Box<dyn Smoother> = match *self {
            SmoothingConfig::None => return Ok(None),
            SmoothingConfig::SavitzkyGolay {
                window_size,
                poly_order,
            } => Box::new(SavitzkyGolay::new(window_size, poly_order)?),
            SmoothingConfig::Gaussian { sigma } => Box::new(GaussianKernel::new(sigma)?),
        };
        Ok(Some(smoother))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum OutputDomainConfig {
    #[default]
    Original,
    Normalized,
}

impl From<OutputDomainConfig> for OutputDomain {
    fn from(value: OutputDomainConfig) -> Self {
        match value {
            OutputDomainConfig::Original => OutputDomain::Original,
            OutputDomainConfig::Normalized => OutputDomain::Normalized,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    input_path: String,
    log10: bool,
    smoothing: SmoothingConfig,
    half_width: usize,
    output_domain: OutputDomainConfig,
    parallel: bool,
    smoothed_output_path: Option<String>,
    output_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg = SearchConfig::default();
        Self {
            input_path: String::new(),
            log10: false,
            smoothing: SmoothingConfig::None,
            half_width: cfg.half_width,
            output_domain: OutputDomainConfig::Original,
            parallel: cfg.parallel,
            smoothed_output_path: None,
            output_path: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct PeakRecord {
    position: f64,
    region_start: usize,
    region_end: usize,
    method: &'static str,
}

impl From<Peak> for PeakRecord {
    fn from(value: Peak) -> Self {
        Self {
            position: value.position,
            region_start: value.region.start_inclusive(),
            region_end: value.region.end_inclusive(),
            method: value.method.as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    points: usize,
    peaks: Vec<PeakRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("peakloc=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.input_path.is_empty() {
        return Err("input_path must be set in the config".into());
    }
    if config.half_width == 0 {
        return Err("half_width must be at least 1".into());
    }

    let transform = if config.log10 {
        ValueTransform::Log10
    } else {
        ValueTransform::Identity
    };
    let mut spectrum = load_spectrum(&config.input_path, transform)?;
    tracing::info!(points = spectrum.len(), path = %config.input_path, "loaded spectrum");

    if let Some(smoother) = config.smoothing.build()? {
        spectrum = smoother.smooth_spectrum(&spectrum)?;
        if let Some(path) = &config.smoothed_output_path {
            save_spectrum(path, &spectrum)?;
        }
    }

    let search = PeakSearch::default().with_config(SearchConfig {
        half_width: config.half_width,
        output_domain: config.output_domain.into(),
        parallel: config.parallel,
    });
    let peaks = search.search_spectrum(&spectrum)?;
    let output = Output {
        points: spectrum.len(),
        peaks: peaks.into_iter().map(PeakRecord::from).collect(),
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
