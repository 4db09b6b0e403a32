//! CLI: Compile a map directory into a PDDL problem file.
//!
//! Reads the node and edge list files of a map directory, compiles them into
//! a problem for the `exploration-game` domain, and writes the problem text.
//!
//! Usage: `compile_graph [OPTIONS] --start <NAME> --goal <NAME> <map-dir>`
//! Example: compile_graph --start "feu de camp" --goal bunker demos/maps/campagne
//!
//! Set RUST_LOG=map2pddl=trace for TRACE-level span enter/exit and events.

use clap::Parser;
use map2pddl::ProblemCompiler;
use map2pddl::map_file::{self, EDGE_LIST_FILENAME, NODE_LIST_FILENAME};
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Compile a map directory into a PDDL problem file.
#[derive(Parser, Debug)]
#[command(name = "compile_graph")]
#[command(
  after_help = r#"Map directory layout:
  graph-node-list.txt   One row per location: `name` or `name: attribute`.
  graph-edge-list.txt   One row per passage: `src, dst` or `src, dst: attribute`.

Examples:
  compile_graph --start "feu de camp" --goal bunker demos/maps/campagne
  compile_graph --start a --goal b --output /tmp/problem.pddl demos/maps/campagne"#
)]
struct Args {
  /// Location where the player starts
  #[arg(long, value_name = "NAME")]
  start: String,

  /// Location the player must reach
  #[arg(long, value_name = "NAME")]
  goal: String,

  /// Node list file. Default: <map-dir>/graph-node-list.txt
  #[arg(long, value_name = "FILE")]
  node_file: Option<PathBuf>,

  /// Edge list file. Default: <map-dir>/graph-edge-list.txt
  #[arg(long, value_name = "FILE")]
  edge_file: Option<PathBuf>,

  /// Where to write the problem text
  #[arg(long, value_name = "FILE", default_value = "problem.pddl")]
  output: PathBuf,

  /// Directory holding the map list files
  #[arg(value_name = "map-dir")]
  map_dir: PathBuf,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .init();

  info!("compile_graph starting");
  let args = Args::parse();

  let node_file = args
    .node_file
    .clone()
    .unwrap_or_else(|| args.map_dir.join(NODE_LIST_FILENAME));
  let edge_file = args
    .edge_file
    .clone()
    .unwrap_or_else(|| args.map_dir.join(EDGE_LIST_FILENAME));

  info!(node_file = %node_file.display(), edge_file = %edge_file.display(), output = %args.output.display(), "options");

  let node_data = match map_file::read_node_file(&node_file) {
    Ok(data) => data,
    Err(e) => {
      eprintln!("Error reading {}: {}", node_file.display(), e);
      process::exit(1);
    }
  };

  let edge_data = match map_file::read_edge_file(&edge_file) {
    Ok(data) => data,
    Err(e) => {
      eprintln!("Error reading {}: {}", edge_file.display(), e);
      process::exit(1);
    }
  };

  let mut compiler = ProblemCompiler::new();
  if let Err(e) = compiler.feed(&node_data, &edge_data) {
    eprintln!("Error compiling map: {}", e);
    process::exit(1);
  }
  let problem = compiler.digest(&args.start, &args.goal);

  if let Some(parent) = args.output.parent() {
    if !parent.as_os_str().is_empty() {
      if let Err(e) = fs::create_dir_all(parent) {
        eprintln!("Error creating {}: {}", parent.display(), e);
        process::exit(1);
      }
    }
  }
  if let Err(e) = fs::write(&args.output, &problem) {
    eprintln!("Error writing {}: {}", args.output.display(), e);
    process::exit(1);
  }

  info!(
    objects = compiler.object_count(),
    facts = compiler.fact_count(),
    output = %args.output.display(),
    "problem written"
  );
  println!("Problem compiled.");
  println!("  Objects: {}", compiler.object_count());
  println!("  Facts: {}", compiler.fact_count());
  println!("  Output: {}", args.output.display());
}
