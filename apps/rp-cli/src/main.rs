use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use rp_app::{compute_path, load_json, load_yaml, AppResult, Network};

#[derive(Parser)]
#[command(name = "rp-cli")]
#[command(about = "railpath CLI - shortest-path and fare computation for transit networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate network file syntax and structure
    Validate {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
    },
    /// List stations in a network
    Stations {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
    },
    /// List lines in a network
    Lines {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
    },
    /// Compute the shortest path between two stations and its fare
    Route {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        /// Source station id
        source: u64,
        /// Target station id
        target: u64,
        /// Rider age (drives the discount tier)
        #[arg(long, default_value_t = 19)]
        age: u32,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Stations { network_path } => cmd_stations(&network_path),
        Commands::Lines { network_path } => cmd_lines(&network_path),
        Commands::Route {
            network_path,
            source,
            target,
            age,
            json,
        } => cmd_route(&network_path, source, target, age, json),
    }
}

fn load(network_path: &Path) -> AppResult<Network> {
    match network_path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(network_path),
        _ => load_yaml(network_path),
    }
}

fn cmd_validate(network_path: &Path) -> AppResult<()> {
    let network = load(network_path)?;
    println!(
        "OK: {} stations, {} lines",
        network.stations().len(),
        network.lines().len()
    );
    Ok(())
}

fn cmd_stations(network_path: &Path) -> AppResult<()> {
    let network = load(network_path)?;
    for station in network.stations() {
        println!("{:>6}  {}", station.id(), station.name());
    }
    Ok(())
}

fn cmd_lines(network_path: &Path) -> AppResult<()> {
    let network = load(network_path)?;
    for line in network.lines() {
        let line_stations = line.stations();
        let stations: Vec<&str> = line_stations.iter().map(|s| s.name()).collect();
        println!(
            "{} ({}, surcharge {}): {}",
            line.name(),
            line.color(),
            line.surcharge(),
            stations.join(" - ")
        );
    }
    Ok(())
}

fn cmd_route(
    network_path: &Path,
    source: u64,
    target: u64,
    age: u32,
    json: bool,
) -> AppResult<()> {
    let network = load(network_path)?;
    let source = network.station(source)?.clone();
    let target = network.station(target)?.clone();

    let result = compute_path(network.lines(), &source, &target, age)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let names: Vec<&str> = result.stations.iter().map(|s| s.name()).collect();
        println!("route:    {}", names.join(" -> "));
        println!("distance: {} km", result.distance);
        println!("fare:     {}", result.fare);
    }
    Ok(())
}
