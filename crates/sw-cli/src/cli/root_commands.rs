use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Search PubMed for articles mentioning every given supplement.
    Search(SearchArgs),
    /// Show the NIH ODS medication-interaction passage for one supplement.
    Facts(FactsArgs),
    /// Build the fine-tuning dataset and write it as JSONL.
    Dataset(DatasetArgs),
    /// Upload the dataset, fine-tune, and wait for the model.
    Train(TrainArgs),
    /// Classify the interaction risk of a supplement combination.
    Analyze(AnalyzeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Supplement names (English).
    #[arg(required = true, num_args = 1..)]
    pub entities: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct FactsArgs {
    /// Supplement name as used by the fact-sheet service (e.g. "Iron").
    pub entity: String,
}

#[derive(Clone, Debug, Args)]
pub struct DatasetArgs {
    /// Output path (defaults to `training.dataset_path`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Supplements to include (defaults to `training.supplements`).
    pub entities: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TrainArgs {
    /// Dataset path (defaults to `training.dataset_path`).
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Upload the existing dataset file instead of rebuilding it.
    #[arg(long)]
    pub skip_build: bool,

    /// Override `training.max_polls`.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_polls: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Comma-separated supplement names, e.g. "철분, 칼슘".
    pub input: String,
}
