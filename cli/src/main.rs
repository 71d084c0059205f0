//! wobbegong CLI: inspect data frames and summarized experiments

mod commands;

use anyhow::Result;
use clap::CommandFactory;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wobbegong::Missing;

use commands::{print_column, print_info, print_reduced_dim, print_row, print_statistic};

#[derive(Parser)]
#[command(
    name = "wobbegong",
    version,
    about = "wobbegong CLI: inspect data frames and summarized experiments",
    long_about = "wobbegong CLI reads wobbegong directories lazily, fetching only the chunks needed.\n\nA directory holds either a data frame or a summarized experiment (assays, row data, column data and reduced dimensions).",
    author,
    propagate_version = true
)]
struct Cli {
    /// Log chunk fetches and decoding at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the structure of a wobbegong directory
    #[command(
        about = "Show the structure of a wobbegong directory.",
        long_about = "Display the object kind, dimensions, columns, assays and reduced dimensions of a wobbegong directory, with types and on-disk sizes.\n\nExample:\n  wobbegong info pbmc/\n"
    )]
    Info {
        #[arg(help = "Path to the wobbegong directory")]
        path: String,
    },
    /// Print one column of a data frame
    #[command(
        about = "Print one column of a data frame.",
        long_about = "Print one column of a data frame. For a summarized experiment the column data is used.\n\nExamples:\n  wobbegong column pbmc/column_data cell_type\n  wobbegong column pbmc 0 --missing nan --limit 20\n"
    )]
    Column {
        #[arg(help = "Path to the wobbegong directory")]
        path: String,
        #[arg(help = "Column name or index")]
        column: String,
        #[arg(long, value_name = "POLICY", default_value = "null", help = "Integer missing values: raw, null or nan")]
        missing: Missing,
        #[arg(long, value_name = "N", help = "Print at most N values")]
        limit: Option<usize>,
    },
    /// Print one row of an assay
    #[command(
        about = "Print one row of an assay.",
        long_about = "Print one row of an assay matrix. Sparse rows are shown as index/value pairs unless --dense is given.\n\nExample:\n  wobbegong row pbmc --assay counts 12 --dense\n"
    )]
    Row {
        #[arg(help = "Path to the summarized experiment")]
        path: String,
        #[arg(long, help = "Assay name or index")]
        assay: String,
        #[arg(help = "Row index")]
        row: usize,
        #[arg(long, help = "Expand sparse rows with explicit zeros")]
        dense: bool,
        #[arg(long, value_name = "POLICY", default_value = "null", help = "Integer missing values: raw, null or nan")]
        missing: Missing,
    },
    /// Print a per-row or per-column statistic of an assay
    #[command(
        about = "Print a per-row or per-column statistic of an assay.",
        long_about = "Print a statistic stored alongside an assay, such as row_sum or column_nonzero.\n\nExample:\n  wobbegong stat pbmc --assay logcounts column_sum\n"
    )]
    Stat {
        #[arg(help = "Path to the summarized experiment")]
        path: String,
        #[arg(long, help = "Assay name or index")]
        assay: String,
        #[arg(help = "Statistic name")]
        statistic: String,
    },
    /// Print one column of a reduced dimension result
    #[command(
        about = "Print one column of a reduced dimension result.",
        long_about = "Print one column of a reduced dimension result such as PCA or TSNE.\n\nExample:\n  wobbegong reduced-dim pbmc TSNE 0\n"
    )]
    ReducedDim {
        #[arg(help = "Path to the summarized experiment")]
        path: String,
        #[arg(help = "Reduced dimension name or index")]
        name: String,
        #[arg(help = "Column index")]
        column: usize,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "wobbegong=debug" } else { "wobbegong=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Info { path }) => print_info(path)?,
        Some(Commands::Column {
            path,
            column,
            missing,
            limit,
        }) => print_column(path, column, *missing, *limit)?,
        Some(Commands::Row {
            path,
            assay,
            row,
            dense,
            missing,
        }) => print_row(path, assay, *row, *dense, *missing)?,
        Some(Commands::Stat {
            path,
            assay,
            statistic,
        }) => print_statistic(path, assay, statistic)?,
        Some(Commands::ReducedDim { path, name, column }) => {
            print_reduced_dim(path, name, *column)?
        }
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
