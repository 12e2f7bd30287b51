use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use mkchart::viz::{self, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_CANVAS_SIDE};
use mkchart::{ChartOptions, OutputFormat, storage};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "mkchart",
    version,
    about = "Render a JSON data series to a line chart with an annotation panel"
)]
struct Cli {
    /// JSON file with Title, Legend, Xvalues/XUnit, Yvalues/YUnit. The chart is
    /// written to <INPUT>.png (or .svg).
    input: PathBuf,
    /// Width of the chart in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..=MAX_CANVAS_SIDE as i64))]
    width: u32,
    /// Height of the chart in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..=MAX_CANVAS_SIDE as i64))]
    height: u32,
    /// Output image format.
    #[arg(long, value_enum, default_value_t = Format::Png)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Png,
    Svg,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Png => OutputFormat::Png,
            Format::Svg => OutputFormat::Svg,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage errors exit with 1 like every other failure.
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    match run(cli) {
        Ok(out) => {
            println!("Rendered file {}", out.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<PathBuf> {
    let request = storage::load_request(&cli.input)?;
    let options = ChartOptions {
        width: cli.width,
        height: cli.height,
        format: cli.format.into(),
        ..ChartOptions::default()
    };
    viz::render_chart(&request, &cli.input, &options)
        .with_context(|| format!("rendering chart for {}", cli.input.display()))
}
