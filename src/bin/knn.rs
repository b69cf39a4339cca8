use anyhow::{Context, Result};
use bpqueue::{config::Settings, io, search, Logger};
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Finds the nearest neighbors of a query point among the points in a file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// File with one point per line, as whitespace separated coordinates
    #[arg(short, long)]
    input: PathBuf,

    /// Coordinates of the query point, e.g. "0.5 1 -2"
    #[arg(short, long, allow_hyphen_values = true)]
    query: String,

    /// TOML file with settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of neighbors, overrides the config file
    #[arg(short = 'k', long)]
    num_neighbors: Option<usize>,
}

fn main() -> Result<()> {
    let res = run(&Args::parse());

    // the installed logger is never dropped, so its buffer must be flushed on every exit path
    log::logger().flush();

    res
}

fn run(args: &Args) -> Result<()> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let num_neighbors = args.num_neighbors.unwrap_or(settings.num_neighbors);

    Logger::from_config(&settings.logger)?
        .install()
        .context("Failed to install logger")?;

    let points = io::read_points_from_file(&args.input)
        .with_context(|| format!("Failed to read points from {:?}", args.input))?;
    info!("Read {} points", points.len());

    let query = io::parse_point(&args.query, 0).context("Invalid query point")?;

    for neighbor in search::nearest_neighbors(&points, &query, num_neighbors)? {
        println!("{}\t{}", neighbor.index(), neighbor.value());
    }

    Ok(())
}
