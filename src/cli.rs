use clap::{Parser, Subcommand};

/// agro_fatten — A cattle-fattening CLI for ration costing, cost tracking, and profit projection.
#[derive(Parser, Debug)]
#[command(name = "agro_fatten")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the herd state JSON file.
    #[arg(short, long, default_value = "herd_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate the cost of a ration mix interactively.
    Ration,

    /// Register a new fattening batch.
    AddBatch,

    /// Record a cost entry for a batch.
    AddCost {
        /// Batch name (prompted if omitted).
        batch: Option<String>,
    },

    /// Show the cost ledger and monthly summaries for a batch.
    Costs {
        /// Batch name (prompted if omitted).
        batch: Option<String>,

        /// Export the cost ledger to a CSV file.
        #[arg(long)]
        export: Option<String>,
    },

    /// Project profit, ROI, and break-even price for a batch.
    Report {
        /// Batch name (prompted if omitted).
        batch: Option<String>,

        /// Simulate with this arroba price instead of the recorded one.
        #[arg(long)]
        arroba_price: Option<f64>,

        /// Export the report to a CSV file.
        #[arg(long)]
        export: Option<String>,
    },

    /// List all registered batches.
    List,
}

impl Default for Command {
    fn default() -> Self {
        Command::Ration
    }
}
