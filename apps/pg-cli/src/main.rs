use clap::{Args, Parser, Subcommand};
use pg_app::{
    AppError, AppResult, DisplayGraph, IndexKind, IndexResult, IndexSelection, IndexSeries, PgConfig,
    SeriesProgressEvent, build_graph_for_display, compute_indices, compute_series_with_progress,
    load_config, parse_selection, validate_request,
};
use pg_graph::{IndexMap, PowerGraph};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "pg-cli")]
#[command(about = "PowerGraph CLI - topological indices of power graphs over (Z/p^kZ)*", long_about = None)]
struct Cli {
    /// YAML config file (k_max, parallel)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the exponent ceiling (k_max)
    #[arg(long = "k-max", global = true)]
    k_ceiling: Option<u32>,
    /// Run on a single thread
    #[arg(long, global = true)]
    sequential: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct IndexArgs {
    /// Index to compute (zagreb, wiener, gutman); repeatable, defaults to all
    #[arg(short, long = "index")]
    indices: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute indices for one exponent
    Indices {
        /// Prime p
        p: u64,
        /// Exponent k
        k: u32,
        #[command(flatten)]
        select: IndexArgs,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the power graph's nodes, degrees and edges
    Graph {
        /// Prime p
        p: u64,
        /// Exponent k
        k: u32,
        /// Also list the neighbours of this element
        #[arg(long)]
        node: Option<u64>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute indices for k = 1..=k_max
    Series {
        /// Prime p
        p: u64,
        /// Largest exponent
        k_max: u32,
        #[command(flatten)]
        select: IndexArgs,
        /// Print JSON
        #[arg(long, conflicts_with = "csv")]
        json: bool,
        /// Print CSV (k,modulus,<indices...>)
        #[arg(long)]
        csv: bool,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Indices { p, k, select, json } => cmd_indices(p, k, &select, json, &config),
        Commands::Graph { p, k, node, json } => cmd_graph(p, k, node, json, &config),
        Commands::Series {
            p,
            k_max,
            select,
            json,
            csv,
        } => cmd_series(p, k_max, &select, json, csv, &config),
    }
}

fn resolve_config(cli: &Cli) -> AppResult<PgConfig> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(k_ceiling) = cli.k_ceiling {
        config.k_max = k_ceiling;
    }
    if cli.sequential {
        config.parallel = false;
    }
    tracing::debug!(?config, "resolved config");
    Ok(config)
}

fn selection(args: &IndexArgs) -> AppResult<IndexSelection> {
    if args.indices.is_empty() {
        Ok(IndexSelection::all())
    } else {
        parse_selection(args.indices.as_slice())
    }
}

fn cmd_indices(
    p: u64,
    k: u32,
    select: &IndexArgs,
    json: bool,
    config: &PgConfig,
) -> AppResult<()> {
    validate_request(p, k, config)?;
    let selection = selection(select)?;

    let started = Instant::now();
    let result = compute_indices(p, k, &selection, config)?;
    tracing::debug!(p, k, elapsed_s = started.elapsed().as_secs_f64(), "indices computed");

    if json {
        print_json(&result)?;
    } else {
        println!("Power graph of (Z/{}^{}Z)*:", p, k);
        print_result(&result);
    }
    Ok(())
}

#[derive(Serialize)]
struct GraphReport<'a> {
    modulus: u64,
    nodes: &'a [u64],
    degrees: Vec<usize>,
    edges: Vec<(u64, u64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    node: Option<NodeReport>,
}

#[derive(Debug, PartialEq, Serialize)]
struct NodeReport {
    label: u64,
    degree: usize,
    neighbors: Vec<u64>,
}

fn cmd_graph(
    p: u64,
    k: u32,
    node: Option<u64>,
    json: bool,
    config: &PgConfig,
) -> AppResult<()> {
    validate_request(p, k, config)?;

    let graph = match build_graph_for_display(p, k, config)? {
        DisplayGraph::Graph(graph) => graph,
        DisplayGraph::EmptyGroup => {
            if json {
                println!("null");
            } else {
                println!(
                    "No graph for p={} k={}: (Z/{}Z)* is the trivial group {{1}}",
                    p, k, p
                );
            }
            return Ok(());
        }
    };

    let index_map = IndexMap::from_graph(&graph);
    let report = graph_report(&graph, &index_map, node)?;
    if json {
        print_json(&report)?;
    } else {
        print_graph(&graph);
        if let Some(focus) = &report.node {
            println!(
                "\nNeighbours of {} (degree {}): {:?}",
                focus.label, focus.degree, focus.neighbors
            );
        }
    }
    Ok(())
}

fn graph_report<'a>(
    graph: &PowerGraph,
    index_map: &'a IndexMap,
    node: Option<u64>,
) -> AppResult<GraphReport<'a>> {
    let node = node
        .map(|label| node_report(graph, index_map, label))
        .transpose()?;
    Ok(GraphReport {
        modulus: graph.modulus(),
        nodes: index_map.labels(),
        degrees: graph.degrees(),
        edges: graph.edges().collect(),
        node,
    })
}

fn node_report(graph: &PowerGraph, index_map: &IndexMap, label: u64) -> AppResult<NodeReport> {
    let idx = index_map.node_idx(label)?;
    Ok(NodeReport {
        label,
        degree: graph.degree(idx),
        neighbors: graph
            .neighbors(idx)
            .iter()
            .map(|&j| index_map.label(j))
            .collect(),
    })
}

fn print_graph(graph: &PowerGraph) {
    println!(
        "Power graph mod {}: {} nodes, {} edges",
        graph.modulus(),
        graph.node_count(),
        graph.edge_count()
    );
    println!("\nNodes (degree):");
    for (label, degree) in graph.nodes().iter().zip(graph.degrees()) {
        println!("  {:>6} ({})", label, degree);
    }
    println!("\nEdges:");
    for (u, v) in graph.edges() {
        println!("  {} - {}", u, v);
    }
}

fn cmd_series(
    p: u64,
    k_max: u32,
    select: &IndexArgs,
    json: bool,
    csv: bool,
    config: &PgConfig,
) -> AppResult<()> {
    validate_request(p, k_max, config)?;
    let selection = selection(select)?;

    let mut stderr = io::stderr();
    let mut progress_err: Option<io::Error> = None;
    let mut last_emit = Instant::now();
    let series = compute_series_with_progress(
        p,
        k_max,
        &selection,
        config,
        Some(&mut |event| {
            if progress_err.is_none() && (last_emit.elapsed().as_millis() >= 100 || event.k == 1) {
                if let Err(e) = render_progress(&mut stderr, &event) {
                    progress_err = Some(e);
                }
                last_emit = Instant::now();
            }
        }),
    )?;
    if let Some(e) = progress_err {
        return Err(AppError::Io(e));
    }
    clear_progress_line(&mut stderr)?;

    if json {
        print_json(&series)?;
    } else if csv {
        print!("{}", series_csv(&series, &selection));
    } else {
        print_series_table(&series, &selection);
    }
    Ok(())
}

fn clear_progress_line(out: &mut impl Write) -> io::Result<()> {
    write!(out, "\r{}\r", " ".repeat(100))?;
    out.flush()
}

fn render_progress(out: &mut impl Write, event: &SeriesProgressEvent) -> io::Result<()> {
    let width = 20usize;
    let filled = ((event.fraction_complete() * width as f64).round() as usize).min(width);
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    );
    let mut line = format!(
        "\r[{}] k={}/{}  {}  elapsed={:.2}s",
        bar,
        event.k,
        event.k_max,
        event.stage.label(),
        event.elapsed_wall_s
    );
    if let Some(msg) = &event.message {
        line.push_str(&format!("  {}", msg));
    }
    write!(out, "{}", line)?;
    out.flush()
}

fn print_result(result: &IndexResult) {
    for (kind, value) in result.iter() {
        println!("  {:<8} {}", kind, value);
    }
}

fn print_series_table(series: &IndexSeries, selection: &IndexSelection) {
    let kinds: Vec<IndexKind> = selection.iter().collect();
    let mut header = format!("{:>3} {:>10} {:>8}", "k", "modulus", "order");
    for kind in &kinds {
        header.push_str(&format!(" {:>14}", kind));
    }
    println!("{}", header);

    for point in series.points() {
        let mut row = format!("{:>3} {:>10} {:>8}", point.k, point.modulus, point.group_order);
        for &kind in &kinds {
            let value = point.indices.get(kind).unwrap_or(0);
            row.push_str(&format!(" {:>14}", value));
        }
        if point.empty_group {
            row.push_str("  (trivial group)");
        }
        println!("{}", row);
    }
}

fn series_csv(series: &IndexSeries, selection: &IndexSelection) -> String {
    let kinds: Vec<IndexKind> = selection.iter().collect();
    let mut csv = String::from("k,modulus");
    for kind in &kinds {
        csv.push_str(&format!(",{}", kind));
    }
    csv.push('\n');
    for point in series.points() {
        csv.push_str(&format!("{},{}", point.k, point.modulus));
        for &kind in &kinds {
            csv.push_str(&format!(",{}", point.indices.get(kind).unwrap_or(0)));
        }
        csv.push('\n');
    }
    csv
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Computation(e.to_string()))?;
    println!("{}", text);
    Ok(())
}
