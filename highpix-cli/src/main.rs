use clap::Parser;
use highpix::io::load_native_luma;
use highpix::{par_top_pixels, sort_pixels_desc, top_pixels, OwnedImage, Pixel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Report the highest-valued pixels of an image")]
struct Cli {
    /// Path to the JSON configuration file. Defaults apply when omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Override the number of pixels to report.
    #[arg(short = 'k', long)]
    topk: Option<usize>,
    /// Sort output by descending value instead of heap order.
    #[arg(long)]
    sorted: bool,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum OutputFormat {
    #[default]
    Triples,
    Json,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    image_path: Option<PathBuf>,
    width: usize,
    height: usize,
    seed: u64,
    max_value: u16,
    topk: usize,
    parallel: bool,
    format: OutputFormat,
    output_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_path: None,
            width: 256,
            height: 256,
            seed: 0,
            max_value: 255,
            topk: 50,
            parallel: false,
            format: OutputFormat::Triples,
            output_path: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct PixelRecord {
    row: usize,
    col: usize,
    value: u16,
}

impl From<Pixel<u16>> for PixelRecord {
    fn from(value: Pixel<u16>) -> Self {
        Self {
            row: value.coord.row,
            col: value.coord.col,
            value: value.value,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    width: usize,
    height: usize,
    pixels: Vec<PixelRecord>,
}

fn random_image(
    width: usize,
    height: usize,
    seed: u64,
    max_value: u16,
) -> highpix::HighPixResult<OwnedImage<u16>> {
    let mut rng = StdRng::seed_from_u64(seed);
    OwnedImage::from_fn(width, height, |_, _| rng.random_range(0..=max_value))
}

fn render_triples(pixels: &[Pixel<u16>]) -> String {
    pixels
        .iter()
        .map(|p| format!("[{}, {}, {}]", p.coord.row, p.coord.col, p.value))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("highpix=debug".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let mut config: Config = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    if let Some(topk) = cli.topk {
        config.topk = topk;
    }
    if config.topk == 0 {
        return Err("topk must be at least 1".into());
    }

    let image = match &config.image_path {
        Some(path) => load_native_luma(path)?,
        None => random_image(config.width, config.height, config.seed, config.max_value)?,
    };
    tracing::info!(
        width = image.width(),
        height = image.height(),
        topk = config.topk,
        parallel = config.parallel,
        "selecting pixels"
    );

    let view = image.view();
    let mut pixels = if config.parallel {
        par_top_pixels(view, config.topk)?
    } else {
        top_pixels(view, config.topk)?
    };
    if cli.sorted {
        sort_pixels_desc(&mut pixels);
    }

    let rendered = match config.format {
        OutputFormat::Triples => render_triples(&pixels),
        OutputFormat::Json => {
            let output = Output {
                width: image.width(),
                height: image.height(),
                pixels: pixels.into_iter().map(PixelRecord::from).collect(),
            };
            serde_json::to_string_pretty(&output)?
        }
    };

    match config.output_path {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }

    Ok(())
}
