//! Attriflow CLI: attribution journey aggregation.
//!
//! Usage:
//!   attriflow build --input rows.json [--pretty]
//!   attriflow summary --input rows.json [--advertiser id] [--from ts] [--to ts]

use std::path::PathBuf;
use std::sync::Arc;

use attriflow::{FlowBuilder, JourneyView, JsonFileSource, JourneySource, StatsQuery};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "attriflow",
    version,
    about = "Attribution journey aggregation engine"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the flow graph and print renderer JSON
    Build {
        /// Path to a JSON file of journey rows
        #[arg(long)]
        input: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Build the flow graph and print a human-readable summary
    Summary {
        /// Path to a JSON file of journey rows
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        filters: FilterArgs,
    },
}

/// Scope recorded with the fetch. The input file is treated as already
/// scoped; these flags describe the window and filters it was produced
/// under.
#[derive(Args)]
struct FilterArgs {
    /// Inclusive start of the window (RFC 3339)
    #[arg(long)]
    from: Option<DateTime<Utc>>,
    /// Inclusive end of the window (RFC 3339)
    #[arg(long)]
    to: Option<DateTime<Utc>>,
    /// Advertiser id the rows are scoped to
    #[arg(long)]
    advertiser: Option<i64>,
    /// Campaign id the rows are scoped to
    #[arg(long)]
    campaign: Option<i64>,
    /// Influencer id the rows are scoped to
    #[arg(long)]
    influencer: Option<i64>,
}

impl FilterArgs {
    fn query(&self) -> StatsQuery {
        StatsQuery {
            from: self.from,
            to: self.to,
            advertiser_id: self.advertiser,
            campaign_id: self.campaign,
            influencer_id: self.influencer,
        }
    }
}

async fn cmd_build(input: PathBuf, pretty: bool, query: StatsQuery) -> i32 {
    let source = JsonFileSource::new(&input);
    let rows = match source.fetch_journey(&query).await {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let mut builder = FlowBuilder::new();
    builder.push_rows(&rows);
    if builder.rejected() > 0 {
        eprintln!("Warning: dropped {} incomplete rows", builder.rejected());
    }
    let graph = builder.finish();

    let rendered = if pretty {
        serde_json::to_string_pretty(&graph)
    } else {
        serde_json::to_string(&graph)
    };
    match rendered {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn cmd_summary(input: PathBuf, query: StatsQuery) -> i32 {
    let view = JourneyView::new(Arc::new(JsonFileSource::new(&input)));
    match view.refresh(&query).await {
        Ok(state) => {
            println!("{}", attriflow::render::render_state(&state));
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let code = match cli.command {
        Commands::Build {
            input,
            pretty,
            filters,
        } => cmd_build(input, pretty, filters.query()).await,
        Commands::Summary { input, filters } => cmd_summary(input, filters.query()).await,
    };
    std::process::exit(code);
}
