//! national: minimum-cost rail network across 25 US cities.
//!
//! Paints the built-in 150 × 300 continental terrain (or loads one from
//! CSV), computes the terrain-aware travel cost between every pair of
//! cities, and connects them with a minimum spanning tree.
//!
//! ```text
//! national run    # terrain, cities, cost matrix, spanning tree
//! national paths  # terrain, cities, cost matrix only
//! national mst    # spanning tree from an existing city_paths.csv
//! ```
//!
//! Files land in `--out-dir` (default: current directory): `map.csv`,
//! `cities.csv`, `city_paths.csv`, `mst_results.csv`.

mod logging;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use rn_core::{DiagonalFactor, LocationId, NetworkConfig, PairStrategy};
use rn_mst::SpanningForest;
use rn_output::{
    read_cost_matrix_csv, read_grid_csv, read_locations_csv, render_connection_summary,
    render_disconnected, render_mst_table, CsvWriter, OutputWriter, COST_MATRIX_FILE, MST_FILE,
};
use rn_pipeline::{forest_from_matrix, PipelineBuilder, PipelineObserver, PipelineReport};
use rn_routing::{DijkstraGridRouter, MatrixObserver};
use rn_terrain::presets;

use logging::init_logging;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "national", version, about = "Plan a minimum-cost rail network over terrain")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory for generated CSV files.
    #[arg(long, global = true, default_value = ".")]
    out_dir: PathBuf,

    /// JSON file with a `NetworkConfig`; flags below override its fields.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Worker threads for the cost matrix (default: all cores).
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Use 1.414 instead of √2 for diagonal steps.
    #[arg(long, global = true)]
    legacy_diagonal: bool,

    /// Search each unordered city pair once and mirror the result.
    #[arg(long, global = true)]
    mirrored: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate terrain and cities, compute all paths, build the tree.
    Run(Inputs),
    /// Generate terrain and cities and compute all paths.
    Paths(Inputs),
    /// Build the tree from a previously written cost matrix.
    Mst {
        /// Cost-matrix CSV (default: `<out-dir>/city_paths.csv`).
        #[arg(long)]
        matrix: Option<PathBuf>,
    },
}

#[derive(Debug, clap::Args)]
struct Inputs {
    /// Terrain grid CSV instead of the built-in continental map.
    #[arg(long)]
    grid: Option<PathBuf>,

    /// `City,Lat,Lon,Row,Col` CSV instead of the built-in 25 cities.
    #[arg(long)]
    cities: Option<PathBuf>,
}

// ── Progress printer ──────────────────────────────────────────────────────────

struct Progress;

impl MatrixObserver for Progress {
    fn on_row_start(&mut self, from: LocationId, total: usize, name: &str) {
        println!("Calculating paths from {name}... ({}/{total})", from.index() + 1);
    }

    fn on_unreachable(&mut self, from: &str, to: &str) {
        println!("  Warning: No path found from {from} to {to}");
    }
}

impl PipelineObserver for Progress {
    fn on_forest(&mut self, forest: &SpanningForest) {
        println!(
            "Spanning tree: {} of {} edges accepted",
            forest.edge_count(),
            forest.required_edges()
        );
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn banner(title: &str) {
    println!();
    println!("{}", "=".repeat(70));
    println!("{title}");
    println!("{}", "=".repeat(70));
}

/// Config file (if any) with command-line overrides applied.
fn resolve_config(cli: &Cli) -> Result<NetworkConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))?
        }
        None => NetworkConfig::default(),
    };
    if cli.threads.is_some() {
        config.num_threads = cli.threads;
    }
    if cli.legacy_diagonal {
        config.diagonal = DiagonalFactor::Legacy;
    }
    if cli.mirrored {
        config.pairs = PairStrategy::Mirrored;
    }
    Ok(config)
}

fn print_report(report: &PipelineReport, writer: &mut CsvWriter) -> Result<()> {
    let (matrix, forest) = (report.matrix(), report.forest());

    if let Some(text) = render_disconnected(matrix, forest) {
        println!();
        print!("{text}");
    }
    println!();
    print!("{}", render_mst_table(matrix, forest));

    println!("\nWriting MST to {}...", MST_FILE);
    writer.write_forest(matrix, forest)?;

    println!();
    print!("{}", render_connection_summary(matrix, forest));
    Ok(())
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn plan(config: NetworkConfig, inputs: &Inputs, writer: &mut CsvWriter, with_tree: bool) -> Result<()> {
    banner("Step 1: Generating terrain grid...");
    let grid = match &inputs.grid {
        Some(path) => read_grid_csv(path, config.impassable_at)
            .with_context(|| format!("loading grid {}", path.display()))?,
        None => presets::continental()?,
    };
    writer.write_grid(&grid)?;
    println!("Terrain map saved: {} rows x {} columns", grid.rows(), grid.cols());

    banner("Step 2: Generating city data...");
    let cities = match &inputs.cities {
        Some(path) => read_locations_csv(path)
            .with_context(|| format!("loading cities {}", path.display()))?,
        None => presets::us_cities(),
    };
    let router = DijkstraGridRouter::from_config(&config);
    let pipeline = PipelineBuilder::new(config, router)
        .grid(grid)
        .locations(cities)
        .build()?;
    writer.write_locations(pipeline.locations())?;
    println!("Cities saved: {} cities", pipeline.locations().len());

    println!("\nCity terrain values (first 5):");
    for (_, city) in pipeline.locations().iter().take(5) {
        let terrain = pipeline.grid().cost(city.coord).unwrap_or_default();
        println!("  {}: terrain={terrain} at {}", city.name, city.coord);
    }

    banner("Step 3: Calculating shortest paths...");
    let started = Instant::now();
    let mut progress = Progress;
    let report = if with_tree {
        Some(pipeline.run(&mut progress)?)
    } else {
        let matrix = pipeline.cost_matrix(&mut progress)?;
        writer.write_cost_matrix(&matrix)?;
        None
    };
    println!("Elapsed: {:.2?}", started.elapsed());

    if let Some(report) = report {
        writer.write_cost_matrix(report.matrix())?;
        banner("Step 4: Constructing minimum spanning tree...");
        print_report(&report, writer)?;
    }

    let n = pipeline.locations().len();
    banner("COMPLETE!");
    println!("Generated files in {}:", writer.path("").display());
    println!("  - map.csv (terrain grid)");
    println!("  - cities.csv (city coordinates)");
    println!("  - city_paths.csv (all shortest paths)");
    if with_tree {
        println!("  - mst_results.csv (spanning tree)");
    }
    println!("\nTotal city pairs calculated: {}", n * n);
    Ok(())
}

fn tree_only(matrix_path: &Path, writer: &mut CsvWriter) -> Result<()> {
    println!("Reading city path costs from {}...", matrix_path.display());
    let matrix = read_cost_matrix_csv(matrix_path)
        .with_context(|| format!("loading cost matrix {}", matrix_path.display()))?;
    println!("Loaded {} cities", matrix.len());

    println!("\nConstructing Minimum Spanning Tree using Kruskal's algorithm...");
    let report = forest_from_matrix(matrix)?;
    print_report(&report, writer)?;

    println!("\nDone! MST results saved to {}", writer.path(MST_FILE).display());
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    info!(?config, out_dir = %cli.out_dir.display(), "configuration resolved");
    let mut writer = CsvWriter::new(&cli.out_dir)?;

    match &cli.command {
        Command::Run(inputs) => plan(config, inputs, &mut writer, true),
        Command::Paths(inputs) => plan(config, inputs, &mut writer, false),
        Command::Mst { matrix } => {
            let path = matrix.clone().unwrap_or_else(|| writer.path(COST_MATRIX_FILE));
            tree_only(&path, &mut writer)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from(["national", "run", "--threads", "4", "--legacy-diagonal", "--mirrored"])
            .unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.num_threads, Some(4));
        assert_eq!(config.diagonal, DiagonalFactor::Legacy);
        assert_eq!(config.pairs, PairStrategy::Mirrored);
    }

    #[test]
    fn config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "round_decimals": 1, "pairs": "mirrored" }"#).unwrap();

        let args: Vec<OsString> = vec![
            "national".into(),
            "paths".into(),
            "--config".into(),
            path.clone().into_os_string(),
            "--legacy-diagonal".into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.round_decimals, 1);
        assert_eq!(config.pairs, PairStrategy::Mirrored);
        assert_eq!(config.diagonal, DiagonalFactor::Legacy);
        assert_eq!(config.impassable_at, NetworkConfig::IMPASSABLE);
    }

    #[test]
    fn tree_from_written_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        std::fs::write(
            writer.path(COST_MATRIX_FILE),
            ",A,B,C\nA,0,20,28.28\nB,20,0,20\nC,28.28,20,0\n",
        )
        .unwrap();

        tree_only(&writer.path(COST_MATRIX_FILE), &mut writer).unwrap();
        let text = std::fs::read_to_string(writer.path(MST_FILE)).unwrap();
        assert!(text.contains("Total MST Cost,40.00"));
    }
}
