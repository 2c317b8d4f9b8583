//! Column medians of a JSON matrix document
//!
//! Reads `{ "class": ..., "nrows": ..., "ncols": ..., "data": [...] }` from a
//! file or stdin and prints the `1 x ncols` median document.

use std::io::Read;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use fastmed::{fast_median_with, HostArray, IntegerRounding, MatrixDocument, MedianConfig};
use log::{info, Level};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "fastmed - column-wise medians of a dense matrix")]
struct Cli {
    /// JSON matrix document to read; stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Rounding for the mean of two integer middle elements
    #[arg(long, value_enum, default_value_t = Rounding::TowardZero)]
    rounding: Rounding,

    /// Return double medians for every input class
    #[arg(long)]
    promote: bool,

    /// Process columns on the calling thread only
    #[arg(long)]
    serial: bool,

    /// Size of the worker pool used for parallel columns
    #[arg(long)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Rounding {
    /// Truncate toward zero
    TowardZero,
    /// Round half away from zero
    Nearest,
}

impl From<Rounding> for IntegerRounding {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::Nearest => IntegerRounding::NearestTiesAway,
            Rounding::TowardZero => IntegerRounding::TowardZero,
        }
    }
}

/// Set up logging options
fn setup_logger(verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let level = match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    };
    simple_logger::init_with_level(level).map_err(|e| e.to_string())?;
    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> std::io::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logger(cli.verbose)?;

    let document = MatrixDocument::from_json(&read_input(cli.input.as_ref())?)?;
    info!(
        "Loaded {}x{} {} matrix",
        document.nrows, document.ncols, document.class
    );
    let input = HostArray::try_from(document)?;

    let config = MedianConfig::default()
        .with_rounding(cli.rounding.into())
        .with_promote(cli.promote)
        .with_parallel(!cli.serial);

    let start_time = std::time::Instant::now();
    let output = match cli.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| fast_median_with(&config, &[input]))?
        }
        None => fast_median_with(&config, &[input])?,
    };
    info!("Medians computed in {:.2?}", start_time.elapsed());

    let document = output
        .to_document()
        .ok_or("median array has no document representation")?;
    println!("{}", document.to_json()?);

    Ok(())
}
