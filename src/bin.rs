//! Command-line driver: builds a graph, enumerates its cycles or subgraphs,
//! and runs timing sweeps that write CSV benchmark rows.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use rand::{rngs::SmallRng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cyclenum::{
    cycle::{count_cycles_in_range, cycles, distinct_cycles},
    generate::{random_graph, try_from_edges},
    graph::{Directedness, Graph},
    report::{BenchmarkRecord, CsvReport},
    subgraph::{generate_permutation_subgraphs, generate_subgraphs},
};

/// Past this the factorial blow-up makes a run impractically long.
const PRACTICAL_VERTEX_LIMIT: usize = 12;

#[derive(Parser, Debug)]
#[command(name = "cyclenum")]
#[command(version, about = "Brute-force enumeration of simple cycles in small graphs")]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count every ordering that closes into a cycle
    Cycles {
        #[command(flatten)]
        graph: GraphArgs,

        /// Print each cycle ordering
        #[arg(long)]
        print: bool,

        /// Identify rotations and orientations before counting
        #[arg(long, conflicts_with = "full_range")]
        distinct: bool,

        /// Only test orderings of the whole vertex range (Hamiltonian cycles)
        #[arg(long)]
        full_range: bool,
    },

    /// Materialise subgraphs with one of the generation policies
    Subgraphs {
        #[command(flatten)]
        graph: GraphArgs,

        #[arg(long, value_enum, default_value_t = Policy::AllSubsets)]
        policy: Policy,

        /// Also print the remapped dense graph and the traversal check
        #[arg(long)]
        remap: bool,

        /// Stop after this many subgraphs
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Time cycle counting over a range of vertex counts
    Bench {
        #[arg(long, default_value_t = 3)]
        from: usize,

        #[arg(long, default_value_t = 8)]
        to: usize,

        /// Edge probability of random graphs (complete graphs otherwise)
        #[arg(long)]
        random: Option<f64>,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        #[arg(long)]
        directed: bool,

        /// CSV output file (defaults to stdout)
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// One induced view per vertex subset of size >= 3
    AllSubsets,
    /// One path graph per ordering whose consecutive pairs are edges
    Orderings,
}

#[derive(Clone, Debug)]
struct EdgeList(Vec<(usize, usize)>);

fn parse_edges(s: &str) -> Result<EdgeList, String> {
    s.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| -> Result<(usize, usize), String> {
            let (a, b) = pair
                .split_once('-')
                .ok_or_else(|| format!("expected SRC-DST, got {pair:?}"))?;
            let parse = |v: &str| {
                v.trim()
                    .parse::<usize>()
                    .map_err(|e| format!("bad vertex {v:?} in {pair:?}: {e}"))
            };
            Ok((parse(a)?, parse(b)?))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(EdgeList)
}

#[derive(Args, Debug)]
struct GraphArgs {
    /// Number of vertices
    #[arg(short = 'n', long, default_value_t = 5)]
    vertices: usize,

    #[arg(long)]
    directed: bool,

    /// Edge list such as "0-1,1-2,2-0" (complete graph when no source is given)
    #[arg(long, value_parser = parse_edges, conflicts_with = "random")]
    edges: Option<EdgeList>,

    /// Edge probability for a random graph
    #[arg(long)]
    random: Option<f64>,

    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn directedness(directed: bool) -> Directedness {
    if directed {
        Directedness::Directed
    } else {
        Directedness::Undirected
    }
}

fn build_graph(
    vertices: usize,
    directed: bool,
    edges: Option<&EdgeList>,
    random: Option<f64>,
    seed: u64,
) -> Result<Graph> {
    if vertices > PRACTICAL_VERTEX_LIMIT {
        warn!(vertices, "enumeration grows factorially, expect a very long run");
    }
    let d = directedness(directed);
    let graph = match (edges, random) {
        (Some(EdgeList(edges)), _) => try_from_edges(vertices, d, edges.iter().copied())
            .context("invalid edge list")?,
        (None, Some(p)) => random_graph(vertices, d, p, &mut SmallRng::seed_from_u64(seed))
            .context("cannot build random graph")?,
        (None, None) => {
            let mut g = Graph::with_directedness(vertices, d);
            g.generate_complete_graph();
            g
        }
    };
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        directed,
        "graph ready"
    );
    Ok(graph)
}

impl GraphArgs {
    fn build(&self) -> Result<Graph> {
        build_graph(
            self.vertices,
            self.directed,
            self.edges.as_ref(),
            self.random,
            self.seed,
        )
    }
}

fn run_cycles(graph: &Graph, print: bool, distinct: bool, full_range: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let start = Instant::now();

    let count = if full_range {
        count_cycles_in_range(graph)
    } else if distinct {
        let found = distinct_cycles(graph);
        if print {
            for (i, c) in found.iter().enumerate() {
                writeln!(out, "Cycle {}: {}", i + 1, c.iter().join(" "))?;
            }
        }
        found.len()
    } else if print {
        let mut count = 0;
        for c in cycles(graph) {
            count += 1;
            writeln!(out, "Cycle {count}: {}", c.iter().join(" "))?;
        }
        count
    } else {
        cycles(graph).count()
    };

    writeln!(out, "Cycles found: {count}")?;
    writeln!(out, "Execution time: {:.3}s", start.elapsed().as_secs_f64())?;
    Ok(())
}

fn run_subgraphs(graph: &Graph, policy: Policy, remap: bool, limit: Option<usize>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let limit = limit.unwrap_or(usize::MAX);

    match policy {
        Policy::AllSubsets => {
            for (i, view) in generate_subgraphs(graph)?.take(limit).enumerate() {
                writeln!(out, "Subgraph {}:", i + 1)?;
                write!(out, "{view}")?;
                if remap {
                    writeln!(out, "Remapped:")?;
                    write!(out, "{}", view.remap())?;
                    writeln!(out, "Traversal closes: {}", view.is_cycle())?;
                }
            }
        }
        Policy::Orderings => {
            for (i, sub) in generate_permutation_subgraphs(graph).take(limit).enumerate() {
                writeln!(out, "Subgraph {}:", i + 1)?;
                write!(out, "{sub}")?;
            }
        }
    }
    Ok(())
}

fn run_bench(
    from: usize,
    to: usize,
    random: Option<f64>,
    seed: u64,
    directed: bool,
    csv: Option<PathBuf>,
) -> Result<()> {
    if from > to {
        bail!("empty vertex range {from}..={to}");
    }

    let writer: Box<dyn Write> = match &csv {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    let mut report = CsvReport::new(writer);

    for n in from..=to {
        let graph = build_graph(n, directed, None, random, seed.wrapping_add(n as u64))?;
        let record = BenchmarkRecord::measure(&graph);
        report
            .write_record(&record)
            .context("cannot write benchmark row")?;
    }
    report.flush()?;

    if let Some(path) = csv {
        info!(path = %path.display(), "benchmark written");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Cycles {
            graph,
            print,
            distinct,
            full_range,
        } => run_cycles(&graph.build()?, print, distinct, full_range),
        Commands::Subgraphs {
            graph,
            policy,
            remap,
            limit,
        } => run_subgraphs(&graph.build()?, policy, remap, limit),
        Commands::Bench {
            from,
            to,
            random,
            seed,
            directed,
            csv,
        } => run_bench(from, to, random, seed, directed, csv),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            for cause in err.chain().skip(1) {
                eprintln!("  caused by: {cause}");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn edge_list_parsing() {
        let EdgeList(edges) = parse_edges("0-1, 1-2,2-0,").unwrap();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 0)]);
        assert!(parse_edges("0:1").is_err());
        assert!(parse_edges("0-x").is_err());
    }

    #[test]
    fn builds_graph_sources() {
        let edges = parse_edges("0-1,1-2").unwrap();
        let g = build_graph(3, false, Some(&edges), None, 0).unwrap();
        assert_eq!(g.edge_count(), 2);

        let k = build_graph(4, false, None, None, 0).unwrap();
        assert_eq!(k, Graph::complete(4));

        assert!(build_graph(3, false, Some(&parse_edges("0-5").unwrap()), None, 0).is_err());
        assert!(build_graph(3, false, None, Some(2.0), 0).is_err());
    }
}
