//! Integration tests for the compile_graph CLI.
//!
//! Runs the binary via `cargo run --bin compile_graph` against the committed
//! demo map and temp input/output files.

use std::path::PathBuf;
use std::process::Command;

fn demo_map_dir() -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/maps/campagne")
}

fn run_compile_graph(args: &[&str]) -> std::process::Output {
  Command::new("cargo")
    .args(["run", "--bin", "compile_graph", "--"])
    .args(args)
    .output()
    .expect("run cargo run --bin compile_graph")
}

#[test]
fn compile_graph_prints_usage_without_args() {
  let out = run_compile_graph(&[]);
  assert!(!out.status.success());
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert!(stderr.contains("Usage") || stderr.contains("usage"));
  assert!(stderr.contains("--start"));
}

#[test]
fn compile_graph_exits_1_for_missing_map_dir() {
  let out = run_compile_graph(&["--start", "a", "--goal", "b", "/nonexistent/map"]);
  assert!(!out.status.success());
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert!(stderr.contains("Error reading"), "stderr: {}", stderr);
}

#[test]
fn compile_graph_writes_the_demo_problem() {
  let dir = tempfile::tempdir().expect("temp dir");
  let output = dir.path().join("pddl/problem.pddl");
  let map_dir = demo_map_dir();

  let out = run_compile_graph(&[
    "--start",
    "feu de camp",
    "--goal",
    "bunker",
    "--output",
    output.to_str().expect("output path"),
    map_dir.to_str().expect("map dir"),
  ]);
  assert!(
    out.status.success(),
    "stderr: {} stdout: {}",
    String::from_utf8_lossy(&out.stderr),
    String::from_utf8_lossy(&out.stdout)
  );
  let stdout = String::from_utf8_lossy(&out.stdout);
  assert!(stdout.contains("Problem compiled."));

  let problem = std::fs::read_to_string(&output).expect("read problem");
  assert!(problem.starts_with("(define (problem map) (:domain exploration-game)"));
  assert!(problem.contains("        p - player\n"));
  assert!(problem.contains("        feu_de_camp - location\n"));
  assert!(problem.contains("(possible_collect riviere filet)"));
  assert!(problem.contains("(possible_collect_if l_etang poisson filet)"));
  assert!(problem.contains("(possible_collect_if_2 grotte tresor epee bouclier)"));
  assert!(problem.contains("(possible_choice clairiere choice_clairiere)"));
  assert!(problem.contains("(offers choice_clairiere hache)"));
  assert!(problem.contains("(connected_if chapelle bunker cle)"));
  assert!(problem.contains("(is_at p feu_de_camp)"));
  assert!(problem.contains("(is_at p bunker)"));
}

#[test]
fn compile_graph_honors_node_and_edge_file_overrides() {
  let dir = tempfile::tempdir().expect("temp dir");
  let node_file = dir.path().join("nodes.txt");
  let edge_file = dir.path().join("edges.txt");
  let output = dir.path().join("problem.pddl");
  std::fs::write(&node_file, "a\nb: +key\n").expect("write nodes");
  std::fs::write(&edge_file, "a, b\n").expect("write edges");

  let out = run_compile_graph(&[
    "--start",
    "a",
    "--goal",
    "b",
    "--node-file",
    node_file.to_str().expect("node path"),
    "--edge-file",
    edge_file.to_str().expect("edge path"),
    "--output",
    output.to_str().expect("output path"),
    dir.path().to_str().expect("map dir"),
  ]);
  assert!(
    out.status.success(),
    "stderr: {}",
    String::from_utf8_lossy(&out.stderr)
  );
  let problem = std::fs::read_to_string(&output).expect("read problem");
  assert!(problem.contains("(connected a b)"));
  assert!(problem.contains("(possible_collect b key)"));
}

#[test]
fn compile_graph_exits_1_for_arity_overflow() {
  let dir = tempfile::tempdir().expect("temp dir");
  std::fs::write(dir.path().join("graph-node-list.txt"), "cave: ?a&b&c=>+x\n")
    .expect("write nodes");
  std::fs::write(dir.path().join("graph-edge-list.txt"), "").expect("write edges");

  let out = run_compile_graph(&[
    "--start",
    "cave",
    "--goal",
    "cave",
    "--output",
    dir.path().join("problem.pddl").to_str().expect("output path"),
    dir.path().to_str().expect("map dir"),
  ]);
  assert!(!out.status.success());
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert!(stderr.contains("Error compiling map"), "stderr: {}", stderr);
  assert!(!dir.path().join("problem.pddl").exists());
}
