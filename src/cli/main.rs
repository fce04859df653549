//! A thin command-line shell over the library.
//!
//! Reads a graph description, then either searches for the chromatic number (the default) or
//! tests a single color count (`--colors`), optionally dumping the encoded formula in DIMACS
//! form along the way.
//!
//! Output follows solver conventions: `c` lines are comments, the `s` line is the verdict,
//! and `v` lines carry the coloring as `v <vertex> <color>` pairs (vertices 1-indexed).

use std::{fs::File, io::BufReader, path::PathBuf, time::Duration};

use clap::Parser;

use chroma_sat::{
    config::Config,
    context::Context,
    io::{dimacs, graph::read_graph},
    procedures::encode::encode,
    structures::{coloring::Coloring, graph::Graph},
    types::err::ErrorKind,
};

#[derive(Parser)]
#[command(name = "chroma_cli", version, about = "Chromatic number of a graph, via SAT")]
struct Cli {
    /// Path to the graph description.
    graph: PathBuf,

    /// Test a single color count instead of searching for the chromatic number.
    #[arg(short = 'k', long)]
    colors: Option<u32>,

    /// Write the encoded formula in DIMACS form to the given path.
    #[arg(long, requires = "colors")]
    cnf: Option<PathBuf>,

    /// A bound on the total number of decisions made.
    #[arg(long)]
    decision_limit: Option<u64>,

    /// A wall-clock bound on each solve, in seconds.
    #[arg(long)]
    time_limit: Option<u64>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let file = match File::open(&cli.graph) {
        Ok(file) => file,
        Err(e) => {
            println!("c Failed to open graph file: {e}");
            std::process::exit(1);
        }
    };

    let graph = match read_graph(BufReader::new(file)) {
        Ok(graph) => graph,
        Err(e) => {
            println!("c Failed to read graph: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "c Graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let config = Config {
        decision_limit: cli.decision_limit,
        time_limit: cli.time_limit.map(Duration::from_secs),
    };
    let mut ctx = Context::from_config(config);

    match cli.colors {
        Some(color_count) => {
            if let Some(path) = &cli.cnf {
                dump_cnf(&graph, color_count, path);
            }
            single_test(&mut ctx, &graph, color_count);
        }

        None => chromatic_search(&mut ctx, &graph),
    }

    println!(
        "c {} decisions, {} conflicts, {:.3?}",
        ctx.counters.total_decisions, ctx.counters.total_conflicts, ctx.counters.time
    );
}

/// Encodes the graph at the given color count and writes the formula to `path`.
fn dump_cnf(graph: &Graph, color_count: u32, path: &PathBuf) {
    let formula = match encode(graph, color_count) {
        Ok(formula) => formula,
        Err(e) => {
            println!("c Failed to encode: {e}");
            std::process::exit(1);
        }
    };

    let mut file = match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            println!("c Failed to create CNF file: {e}");
            std::process::exit(1);
        }
    };

    match dimacs::write_dimacs(&formula, &mut file) {
        Ok(()) => println!("c Wrote the encoding to {path:?}"),
        Err(e) => {
            println!("c Failed to write CNF file: {e}");
            std::process::exit(1);
        }
    }
}

/// Decides colorability with exactly `color_count` colors.
fn single_test(ctx: &mut Context, graph: &Graph, color_count: u32) {
    match ctx.decide_coloring(graph, color_count) {
        Ok(Some(coloring)) => {
            println!("s Satisfiable");
            println!("c Colorable with {color_count} color(s)");
            print_coloring(&coloring);
        }

        Ok(None) => {
            println!("s Unsatisfiable");
            println!("c Not colorable with {color_count} color(s)");
        }

        Err(ErrorKind::Interrupted) => {
            println!("s Unknown");
            std::process::exit(2);
        }

        Err(e) => {
            println!("c Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Searches color counts upward for the chromatic number.
fn chromatic_search(ctx: &mut Context, graph: &Graph) {
    match ctx.find_chromatic_coloring(graph) {
        Ok(coloring) => {
            println!("s Satisfiable");
            println!("c Chromatic number {}", coloring.color_count());
            print_coloring(&coloring);
        }

        Err(ErrorKind::Interrupted) => {
            println!("s Unknown");
            std::process::exit(2);
        }

        Err(e) => {
            println!("c Error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_coloring(coloring: &Coloring) {
    for (vertex, color) in coloring.iter() {
        println!("v {vertex} {color}");
    }
}
