//! Collab Finder CLI: command-line front-end for collaborator recommendations
//!
//! Builds the training co-authorship graph from a CSV dataset and prints
//! ranked candidates as a table, JSON or CSV.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use collab_finder::{
    pick_split_year, prepare_graph, recommend_for, run, CoauthorGraph, Recommendation, RunConfig,
    RunReport, Weights,
};
use comfy_table::{ContentArrangement, Table};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "collab-finder", version, about = "Recommend academic collaborators from a co-authorship graph")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Args, Clone)]
struct DatasetArgs {
    /// CSV dataset path
    dataset: Option<PathBuf>,

    /// YAML run configuration; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Authors column (`;`-delimited names)
    #[arg(long)]
    authors_col: Option<String>,

    /// Year / date column
    #[arg(long)]
    year_col: Option<String>,

    /// Venue column
    #[arg(long)]
    venue_col: Option<String>,

    /// Explicit split year; derived from --train-fraction when omitted
    #[arg(long)]
    split_year: Option<String>,

    /// Share of dated records used for training
    #[arg(long)]
    train_fraction: Option<f64>,

    /// Ceiling on training rows
    #[arg(long)]
    max_rows: Option<usize>,

    /// Rows read per batch
    #[arg(long)]
    batch_size: Option<usize>,
}

#[derive(Args, Clone)]
struct RankArgs {
    /// Number of recommendations
    #[arg(long, short = 'k')]
    top_k: Option<usize>,

    /// Score every author, including existing collaborators
    #[arg(long)]
    include_far_neighbors: bool,

    /// Journal Jaccard weight
    #[arg(long)]
    w_jj: Option<f64>,

    /// Adamic–Adar weight
    #[arg(long)]
    w_aa: Option<f64>,

    /// Common-neighbor weight
    #[arg(long)]
    w_cn: Option<f64>,

    /// `;`-separated venues a recommendation must share
    #[arg(long)]
    journals: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank new collaborators for an author
    Recommend {
        #[command(flatten)]
        data: DatasetArgs,

        /// Target author (matched case-insensitively, partial names allowed)
        #[arg(long, short = 't')]
        target: Option<String>,

        #[command(flatten)]
        rank: RankArgs,
    },
    /// Print the year that splits the dataset into train and test
    SplitYear {
        #[command(flatten)]
        data: DatasetArgs,
    },
    /// Build the graph and print its statistics
    Stats {
        #[command(flatten)]
        data: DatasetArgs,
    },
    /// Build the graph once and query authors interactively
    Shell {
        #[command(flatten)]
        data: DatasetArgs,

        #[command(flatten)]
        rank: RankArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Recommend { data, target, rank } => run_recommend(&data, target, &rank, &cli.format),
        Commands::SplitYear { data } => run_split_year(&data, &cli.format),
        Commands::Stats { data } => run_stats(&data, &cli.format),
        Commands::Shell { data, rank } => run_shell(&data, &rank, &cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(data: &DatasetArgs) -> Result<RunConfig> {
    let mut config = match &data.config {
        Some(path) => RunConfig::from_yaml_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => RunConfig::default(),
    };

    if let Some(dataset) = &data.dataset {
        config.dataset = dataset.clone();
    }
    if config.dataset.as_os_str().is_empty() {
        bail!("no dataset given (pass a path or set `dataset` in --config)");
    }
    if let Some(col) = &data.authors_col {
        config.columns.authors = col.clone();
    }
    if let Some(col) = &data.year_col {
        config.columns.year = col.clone();
    }
    if let Some(col) = &data.venue_col {
        config.columns.venue = col.clone();
    }
    if data.split_year.is_some() {
        config.split_year = data.split_year.clone();
    }
    if let Some(fraction) = data.train_fraction {
        config.train_fraction = fraction;
    }
    if let Some(max_rows) = data.max_rows {
        config.ingest.max_rows = max_rows;
    }
    if let Some(batch_size) = data.batch_size {
        config.ingest.batch_size = batch_size;
    }
    Ok(config)
}

fn apply_rank_args(config: &mut RunConfig, rank: &RankArgs) -> Result<()> {
    if let Some(k) = rank.top_k {
        config.top_k = k;
    }
    if rank.include_far_neighbors {
        config.include_far_neighbors = true;
    }
    if rank.w_jj.is_some() || rank.w_aa.is_some() || rank.w_cn.is_some() {
        let current = config.weights;
        config.weights = Weights::try_new(
            rank.w_jj.unwrap_or(current.journal),
            rank.w_aa.unwrap_or(current.adamic_adar),
            rank.w_cn.unwrap_or(current.common_neighbors),
        )?;
    }
    if rank.journals.is_some() {
        config.journal_filter = rank.journals.clone();
    }
    Ok(())
}

fn run_recommend(data: &DatasetArgs, target: Option<String>, rank: &RankArgs, format: &OutputFormat) -> Result<()> {
    let mut config = load_config(data)?;
    apply_rank_args(&mut config, rank)?;
    if let Some(target) = target {
        config.target = target;
    }

    let report = run(&config)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => {
            collab_finder::write_csv(std::io::stdout().lock(), &report.recommendations)?;
        }
        OutputFormat::Table => {
            print_summary(&report);
            print_recommendations(&report.recommendations);
        }
    }

    Ok(())
}

fn run_split_year(data: &DatasetArgs, format: &OutputFormat) -> Result<()> {
    let config = load_config(data)?;
    let year = pick_split_year(
        &config.dataset,
        &config.columns.year,
        config.train_fraction,
        config.ingest.batch_size,
    )?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "split_year": year })),
        _ => match year {
            Some(y) => println!("{}", y),
            None => bail!("no usable year in column '{}'", config.columns.year),
        },
    }
    Ok(())
}

fn run_stats(data: &DatasetArgs, format: &OutputFormat) -> Result<()> {
    let config = load_config(data)?;
    let (split_year, graph) = prepare_graph(&config)?;
    let stats = graph.statistics();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "split_year": split_year,
                    "statistics": stats,
                }))?
            );
        }
        _ => {
            println!("Split year:          {}", display_year(split_year));
            println!("Training rows used:  {}", stats.rows_used);
            println!("Nodes:               {}", stats.node_count);
            println!("Edges:               {}", stats.edge_count);
            println!("Connected authors:   {}", stats.connected_count);
        }
    }
    Ok(())
}

fn run_shell(data: &DatasetArgs, rank: &RankArgs, format: &OutputFormat) -> Result<()> {
    let mut config = load_config(data)?;
    apply_rank_args(&mut config, rank)?;

    let (split_year, graph) = prepare_graph(&config)?;
    let stats = graph.statistics();
    println!("Collab Finder Interactive Shell");
    println!(
        "Graph ready: {} nodes, {} edges (split year {}).",
        stats.node_count,
        stats.edge_count,
        display_year(split_year)
    );
    println!("Type an author name, or :help for commands. :quit to exit.\n");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        eprint!("collab> ");
        std::io::stderr().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (command, arg) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        match command {
            ":quit" | ":exit" | ":q" => break,
            ":help" | ":h" => {
                println!("Commands:");
                println!("  :weights JJ AA CN  — Set score weights (renormalized)");
                println!("  :topk N            — Number of recommendations");
                println!("  :far on|off        — Include existing collaborators");
                println!("  :filter V1; V2     — Require a shared venue (empty clears)");
                println!("  :stats             — Show graph statistics");
                println!("  :quit              — Exit shell");
                println!("  <author>           — Recommend collaborators");
            }
            ":weights" => match parse_weights(arg) {
                Ok(w) => {
                    config.weights = w;
                    println!("JJ={:.2}  AA={:.2}  CN={:.2}", w.journal, w.adamic_adar, w.common_neighbors);
                }
                Err(e) => eprintln!("Error: {:#}", e),
            },
            ":topk" => match arg.trim().parse::<usize>() {
                Ok(k) if k > 0 => config.top_k = k,
                _ => eprintln!("Error: top-k must be a positive integer"),
            },
            ":far" => config.include_far_neighbors = matches!(arg.trim(), "on" | "true" | "yes"),
            ":filter" => {
                let text = arg.trim();
                config.journal_filter = if text.is_empty() { None } else { Some(text.to_string()) };
            }
            ":stats" => {
                println!("Nodes: {}  Edges: {}  Rows: {}", stats.node_count, stats.edge_count, stats.rows_used);
            }
            _ => {
                config.target = trimmed.to_string();
                if let Err(e) = shell_query(&graph, &config, format) {
                    eprintln!("Error: {:#}", e);
                }
            }
        }
    }

    println!("Bye!");
    Ok(())
}

fn shell_query(graph: &CoauthorGraph, config: &RunConfig, format: &OutputFormat) -> Result<()> {
    let (target, how, recs) = recommend_for(graph, config)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&recs)?),
        OutputFormat::Csv => collab_finder::write_csv(std::io::stdout().lock(), &recs)?,
        OutputFormat::Table => {
            println!("Target: {} ({} match)", target, how);
            print_recommendations(&recs);
        }
    }
    Ok(())
}

fn parse_weights(arg: &str) -> Result<Weights> {
    let values: Vec<f64> = arg
        .split_whitespace()
        .map(|s| s.parse::<f64>().with_context(|| format!("'{}' is not a number", s)))
        .collect::<Result<_>>()?;
    match values.as_slice() {
        [jj, aa, cn] => Ok(Weights::try_new(*jj, *aa, *cn)?),
        _ => bail!("expected three weights: JJ AA CN"),
    }
}

fn display_year(year: Option<i32>) -> String {
    year.map_or_else(|| "none".to_string(), |y| y.to_string())
}

fn print_summary(report: &RunReport) {
    println!("Split year:          {}", display_year(report.split_year));
    println!("Training rows used:  {}", report.statistics.rows_used);
    println!("Nodes:               {}", report.statistics.node_count);
    println!("Edges:               {}", report.statistics.edge_count);
    println!("Resolved target:     {} ({} match)", report.target, report.target_match);
    println!("Recommendations:     {}", report.recommendations.len());
    println!();
}

fn print_recommendations(recs: &[Recommendation]) {
    if recs.is_empty() {
        println!("(no recommendations)");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Candidate",
        "Score",
        "Adamic–Adar",
        "Common Neighbors",
        "Journal Jaccard",
        "Common Journals",
        "Common Neighbors (names)",
        "Explanation",
    ]);

    for rec in recs {
        table.add_row(vec![
            rec.candidate.clone(),
            format!("{:.6}", rec.score),
            format!("{:.4}", rec.adamic_adar),
            rec.common_neighbor_count.to_string(),
            format!("{:.4}", rec.journal_jaccard),
            rec.common_journals.join("; "),
            rec.common_neighbors.join("; "),
            rec.explanation.clone(),
        ]);
    }

    println!("{}", table);
    println!("{} row(s)", recs.len());
}
