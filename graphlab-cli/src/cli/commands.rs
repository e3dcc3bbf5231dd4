//! Command implementations and argument parsing for the graphlab CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use graphlab_core::{
    AdjacencyMatrix, DEFAULT_MAX_DEGREE, Directedness, GeneratorBuilder, Graph, GraphError,
    GraphStore, MinimumSpanningForest, RandomGraphGenerator, SparseGraph, VertexId, VertexPath,
    Weight, Weighting, kruskal,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "graphlab",
    about = "Generate random graphs and time path finding and spanning trees on them."
)]
pub struct Cli {
    /// Write the report to this file instead of stdout.
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Time BFS and DFS over a sweep of growing degree-bounded graphs.
    Traverse(TraverseCommand),
    /// Time Kruskal over connected weighted graphs of several sizes.
    Mst(MstCommand),
}

/// Graph representation used while running a command.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum StoreKind {
    /// Dense adjacency matrix ([`Graph`]).
    #[default]
    Matrix,
    /// Sparse adjacency lists ([`SparseGraph`]).
    List,
}

/// Options accepted by the `traverse` command.
#[derive(Debug, Args, Clone)]
pub struct TraverseCommand {
    /// Number of graphs in the sweep.
    #[arg(long, default_value_t = 10)]
    pub rounds: usize,

    /// Vertex count of the first graph.
    #[arg(long, default_value = "5")]
    pub initial_vertices: NonZeroUsize,

    /// Vertices added per round.
    #[arg(long, default_value_t = 5)]
    pub vertex_step: usize,

    /// Edge count of the first graph.
    #[arg(long, default_value_t = 8)]
    pub initial_edges: usize,

    /// Edges added per round.
    #[arg(long, default_value_t = 10)]
    pub edge_step: usize,

    /// Ceiling on edges leaving any vertex.
    #[arg(long, default_value_t = DEFAULT_MAX_DEGREE)]
    pub max_out_degree: usize,

    /// Ceiling on edges entering any vertex.
    #[arg(long, default_value_t = DEFAULT_MAX_DEGREE)]
    pub max_in_degree: usize,

    /// Generate directed graphs.
    #[arg(long)]
    pub directed: bool,

    /// Give generated edges random weights instead of 1.
    #[arg(long)]
    pub weighted: bool,

    /// Seed for reproducible graphs and endpoints.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Give up on a graph after this many random pair draws.
    #[arg(long)]
    pub max_attempts: Option<NonZeroUsize>,

    /// Graph representation to generate into.
    #[arg(long, value_enum, default_value_t = StoreKind::Matrix)]
    pub store: StoreKind,

    /// Include each graph's adjacency matrix in the report.
    #[arg(long)]
    pub show_matrix: bool,

    /// Include each graph's adjacency list in the report.
    #[arg(long)]
    pub show_list: bool,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Comma-separated vertex counts, one sweep entry each.
    #[arg(long, value_delimiter = ',', default_values_t = [10, 20, 50, 100])]
    pub sizes: Vec<usize>,

    /// Comma-separated minimum neighbour counts, paired with `--sizes`.
    #[arg(long, value_delimiter = ',', default_values_t = [3, 4, 10, 20])]
    pub min_neighbors: Vec<usize>,

    /// Graphs generated per sweep entry.
    #[arg(long, default_value = "5")]
    pub iterations: NonZeroUsize,

    /// Smallest edge weight.
    #[arg(long, default_value_t = 1)]
    pub min_weight: Weight,

    /// Largest edge weight.
    #[arg(long, default_value_t = 20)]
    pub max_weight: Weight,

    /// Seed for reproducible graphs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Graph representation to generate into.
    #[arg(long, value_enum, default_value_t = StoreKind::Matrix)]
    pub store: StoreKind,

    /// Include each graph's adjacency matrix in the report.
    #[arg(long)]
    pub show_matrix: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The report file could not be created.
    #[error("failed to create `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// `--sizes` and `--min-neighbors` list different numbers of entries.
    #[error("{sizes} sizes were given but {min_neighbors} minimum neighbour counts")]
    MismatchedSweep {
        /// Number of `--sizes` entries.
        sizes: usize,
        /// Number of `--min-neighbors` entries.
        min_neighbors: usize,
    },
    /// The graph engine rejected the request.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Report produced by `traverse`.
    Traverse(TraversalReport),
    /// Report produced by `mst`.
    Mst(MstReport),
}

/// Results of a `traverse` sweep.
#[derive(Debug, Clone)]
pub struct TraversalReport {
    /// Orientation of every generated graph.
    pub directedness: Directedness,
    /// One entry per generated graph, in sweep order.
    pub rounds: Vec<TraversalRound>,
}

/// One graph of a `traverse` sweep and the searches run on it.
#[derive(Debug, Clone)]
pub struct TraversalRound {
    /// Vertices in the generated graph.
    pub vertex_count: usize,
    /// Edges in the generated graph.
    pub edge_count: usize,
    /// Randomly chosen start vertex.
    pub start: VertexId,
    /// Randomly chosen end vertex.
    pub end: VertexId,
    /// Breadth-first result.
    pub bfs: TimedPath,
    /// Depth-first result.
    pub dfs: TimedPath,
    /// Adjacency matrix, when requested.
    pub matrix: Option<AdjacencyMatrix>,
    /// Adjacency list, when requested.
    pub adjacency: Option<Vec<Vec<VertexId>>>,
}

/// A path together with the time spent finding it.
#[derive(Debug, Clone)]
pub struct TimedPath {
    /// Path found, empty when the end is unreachable.
    pub path: VertexPath,
    /// Wall-clock search time.
    pub elapsed: Duration,
}

/// Results of an `mst` sweep.
#[derive(Debug, Clone)]
pub struct MstReport {
    /// One entry per `(size, min_neighbors)` pair.
    pub sweeps: Vec<MstSweep>,
}

/// Repeated Kruskal runs on graphs of one size.
#[derive(Debug, Clone)]
pub struct MstSweep {
    /// Vertices per generated graph.
    pub vertex_count: usize,
    /// Minimum neighbour count passed to the generator.
    pub min_neighbors: usize,
    /// One entry per iteration.
    pub trials: Vec<MstTrial>,
}

impl MstSweep {
    /// Returns the mean Kruskal time over all trials.
    #[must_use]
    pub fn mean_elapsed(&self) -> Duration {
        let total: Duration = self.trials.iter().map(|trial| trial.elapsed).sum();
        u32::try_from(self.trials.len())
            .ok()
            .and_then(|count| total.checked_div(count))
            .unwrap_or_default()
    }
}

/// A single generated graph and its spanning tree.
#[derive(Debug, Clone)]
pub struct MstTrial {
    /// Edges in the generated graph.
    pub edge_count: usize,
    /// Spanning tree found by Kruskal.
    pub forest: MinimumSpanningForest,
    /// Wall-clock Kruskal time.
    pub elapsed: Duration,
    /// Adjacency matrix, when requested.
    pub matrix: Option<AdjacencyMatrix>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the configuration is invalid or generation
/// fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use clap::Parser;
/// # use graphlab_cli::cli::{Cli, ExecutionSummary, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli::try_parse_from([
///     "graphlab", "traverse", "--rounds", "2", "--initial-edges", "4", "--edge-step", "5",
///     "--seed", "7",
/// ])?;
/// let ExecutionSummary::Traverse(report) = run_cli(cli)? else {
///     unreachable!("traverse yields a traversal report");
/// };
/// assert_eq!(report.rounds.len(), 2);
/// assert_eq!(report.rounds[1].vertex_count, 10);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Traverse(command) => {
            Span::current().record("command", field::display("traverse"));
            run_traverse(&command).map(ExecutionSummary::Traverse)
        }
        Command::Mst(command) => {
            Span::current().record("command", field::display("mst"));
            run_mst(&command).map(ExecutionSummary::Mst)
        }
    }
}

#[instrument(
    name = "cli.traverse",
    err,
    skip(command),
    fields(rounds = command.rounds, directed = command.directed, store = ?command.store),
)]
pub(super) fn run_traverse(command: &TraverseCommand) -> Result<TraversalReport, CliError> {
    let directedness = if command.directed {
        Directedness::Directed
    } else {
        Directedness::Undirected
    };
    let weighting = if command.weighted {
        Weighting::Weighted
    } else {
        Weighting::Unweighted
    };
    let mut builder = GeneratorBuilder::new()
        .with_max_out_degree(command.max_out_degree)
        .with_max_in_degree(command.max_in_degree)
        .with_directedness(directedness)
        .with_weighting(weighting);
    if let Some(seed) = command.seed {
        builder = builder.with_rng_seed(seed);
    }
    if let Some(limit) = command.max_attempts {
        builder = builder.with_max_attempts(limit);
    }
    let mut generator = builder.build()?;
    let mut picker = command
        .seed
        .map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);

    let mut rounds = Vec::with_capacity(command.rounds);
    for round in 0..command.rounds {
        let vertex_count = command
            .initial_vertices
            .get()
            .saturating_add(round.saturating_mul(command.vertex_step));
        let edge_count = command
            .initial_edges
            .saturating_add(round.saturating_mul(command.edge_step));
        let outcome = match command.store {
            StoreKind::Matrix => traverse_round::<Graph>(
                &mut generator,
                &mut picker,
                command,
                vertex_count,
                edge_count,
            )?,
            StoreKind::List => traverse_round::<SparseGraph>(
                &mut generator,
                &mut picker,
                command,
                vertex_count,
                edge_count,
            )?,
        };
        rounds.push(outcome);
    }

    info!(rounds = rounds.len(), "traversal sweep completed");
    Ok(TraversalReport {
        directedness,
        rounds,
    })
}

fn traverse_round<G: GraphStore>(
    generator: &mut RandomGraphGenerator,
    picker: &mut SmallRng,
    command: &TraverseCommand,
    vertex_count: usize,
    edge_count: usize,
) -> Result<TraversalRound, CliError> {
    let graph: G = generator.degree_bounded(vertex_count, edge_count)?;
    let start = picker.gen_range(0..vertex_count);
    let end = picker.gen_range(0..vertex_count);

    let timer = Instant::now();
    let bfs = graph.bfs_path(start, end)?;
    let bfs_elapsed = timer.elapsed();

    let timer = Instant::now();
    let dfs = graph.dfs_path(start, end)?;
    let dfs_elapsed = timer.elapsed();

    Ok(TraversalRound {
        vertex_count,
        edge_count,
        start,
        end,
        bfs: TimedPath {
            path: bfs,
            elapsed: bfs_elapsed,
        },
        dfs: TimedPath {
            path: dfs,
            elapsed: dfs_elapsed,
        },
        matrix: command
            .show_matrix
            .then(|| graph.adjacency_matrix().into_owned()),
        adjacency: command.show_list.then(|| graph.adjacency_list().to_vec()),
    })
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(iterations = command.iterations.get(), store = ?command.store),
)]
pub(super) fn run_mst(command: &MstCommand) -> Result<MstReport, CliError> {
    if command.sizes.len() != command.min_neighbors.len() {
        return Err(CliError::MismatchedSweep {
            sizes: command.sizes.len(),
            min_neighbors: command.min_neighbors.len(),
        });
    }
    let mut builder =
        GeneratorBuilder::new().with_weight_range(command.min_weight, command.max_weight);
    if let Some(seed) = command.seed {
        builder = builder.with_rng_seed(seed);
    }
    let mut generator = builder.build()?;

    let mut sweeps = Vec::with_capacity(command.sizes.len());
    for (&vertex_count, &min_neighbors) in command.sizes.iter().zip(&command.min_neighbors) {
        let mut trials = Vec::with_capacity(command.iterations.get());
        for _ in 0..command.iterations.get() {
            let trial = match command.store {
                StoreKind::Matrix => {
                    mst_trial::<Graph>(&mut generator, command, vertex_count, min_neighbors)?
                }
                StoreKind::List => {
                    mst_trial::<SparseGraph>(&mut generator, command, vertex_count, min_neighbors)?
                }
            };
            trials.push(trial);
        }
        let sweep = MstSweep {
            vertex_count,
            min_neighbors,
            trials,
        };
        info!(
            vertices = vertex_count,
            mean_micros = sweep.mean_elapsed().as_micros(),
            "kruskal sweep entry completed"
        );
        sweeps.push(sweep);
    }

    Ok(MstReport { sweeps })
}

fn mst_trial<G: GraphStore>(
    generator: &mut RandomGraphGenerator,
    command: &MstCommand,
    vertex_count: usize,
    min_neighbors: usize,
) -> Result<MstTrial, CliError> {
    let graph: G = generator.connected(vertex_count, min_neighbors)?;
    let timer = Instant::now();
    let forest = kruskal(&graph)?;
    let elapsed = timer.elapsed();
    Ok(MstTrial {
        edge_count: graph.edge_count(),
        forest,
        elapsed,
        matrix: command
            .show_matrix
            .then(|| graph.adjacency_matrix().into_owned()),
    })
}

/// Opens `path` for writing a report, truncating any existing file.
///
/// # Errors
/// Returns [`CliError::Io`] when the file cannot be created.
#[instrument(name = "cli.open_output", err, fields(path = field::Empty))]
pub fn open_output(path: &Path) -> Result<BufWriter<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use graphlab_cli::cli::{ExecutionSummary, MstReport, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Mst(MstReport { sweeps: Vec::new() });
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer.into_inner())?, "kruskal sweep: 0 sizes\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Traverse(report) => render_traversal(report, &mut writer),
        ExecutionSummary::Mst(report) => render_mst(report, &mut writer),
    }
}

fn render_traversal(report: &TraversalReport, writer: &mut impl Write) -> io::Result<()> {
    let orientation = if report.directedness.is_directed() {
        "directed"
    } else {
        "undirected"
    };
    writeln!(
        writer,
        "traversal sweep: {} rounds, {orientation}",
        report.rounds.len()
    )?;
    for (index, round) in report.rounds.iter().enumerate() {
        writeln!(
            writer,
            "== graph {}: {} vertices, {} edges ==",
            index + 1,
            round.vertex_count,
            round.edge_count
        )?;
        if let Some(matrix) = &round.matrix {
            writeln!(writer, "adjacency matrix:")?;
            render_matrix(matrix, writer)?;
        }
        if let Some(adjacency) = &round.adjacency {
            writeln!(writer, "adjacency list:")?;
            for (vertex, neighbours) in adjacency.iter().enumerate() {
                if neighbours.is_empty() {
                    writeln!(writer, "{vertex} ->")?;
                } else {
                    writeln!(writer, "{vertex} -> {}", join(neighbours, ", "))?;
                }
            }
        }
        writeln!(writer, "path search {} -> {}", round.start, round.end)?;
        render_timed_path("bfs", &round.bfs, writer)?;
        render_timed_path("dfs", &round.dfs, writer)?;
    }
    Ok(())
}

fn render_timed_path(label: &str, timed: &TimedPath, writer: &mut impl Write) -> io::Result<()> {
    let seconds = timed.elapsed.as_secs_f64();
    if timed.path.is_empty() {
        writeln!(writer, "{label}: no path ({seconds:.6}s)")
    } else {
        writeln!(
            writer,
            "{label}: {} ({seconds:.6}s)",
            join(timed.path.vertices(), " -> ")
        )
    }
}

fn render_mst(report: &MstReport, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "kruskal sweep: {} sizes", report.sweeps.len())?;
    for sweep in &report.sweeps {
        writeln!(
            writer,
            "== {} vertices, at least {} neighbours ==",
            sweep.vertex_count, sweep.min_neighbors
        )?;
        for (index, trial) in sweep.trials.iter().enumerate() {
            let forest = &trial.forest;
            writeln!(
                writer,
                "trial {}: {} edges, tree weight {} over {} edges ({:.6}s)",
                index + 1,
                trial.edge_count,
                forest.total_weight(),
                forest.edges().len(),
                trial.elapsed.as_secs_f64()
            )?;
            if let Some(matrix) = &trial.matrix {
                render_matrix(matrix, writer)?;
            }
            let tree: Vec<String> = forest
                .edges()
                .iter()
                .map(|edge| format!("{}-{}:{}", edge.source(), edge.target(), edge.weight()))
                .collect();
            writeln!(writer, "tree: {}", tree.join(" "))?;
        }
    }
    if !report.sweeps.is_empty() {
        writeln!(writer, "mean kruskal time:")?;
        for sweep in &report.sweeps {
            writeln!(
                writer,
                "{} vertices: {:.6}s",
                sweep.vertex_count,
                sweep.mean_elapsed().as_secs_f64()
            )?;
        }
    }
    Ok(())
}

fn render_matrix(matrix: &AdjacencyMatrix, writer: &mut impl Write) -> io::Result<()> {
    let width = matrix
        .rows()
        .flatten()
        .max()
        .map_or(1, |heaviest| heaviest.to_string().len());
    for row in matrix.rows() {
        let cells: Vec<String> = row.iter().map(|weight| format!("{weight:>width$}")).collect();
        writeln!(writer, "{}", cells.join(" "))?;
    }
    Ok(())
}

fn join<T: ToString>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
