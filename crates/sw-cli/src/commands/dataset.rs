use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use sw_pipeline::DatasetBuilder;
use sw_pipeline::dataset::{DatasetSummary, write_jsonl};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DatasetArgs;
use crate::context::AppContext;
use crate::output::{TextView, output};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct DatasetResponse {
    path: PathBuf,
    #[serde(flatten)]
    summary: DatasetSummary,
}

impl TextView for DatasetResponse {
    fn to_text(&self) -> String {
        format!(
            "Wrote {} examples ({} reference, {} literature) for {} supplements to {}",
            self.summary.total(),
            self.summary.reference_examples,
            self.summary.article_examples,
            self.summary.entities,
            self.path.display()
        )
    }
}

/// Handle `swise dataset`.
pub async fn handle(args: &DatasetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| ctx.config.training.dataset_path.clone());
    let entities = if args.entities.is_empty() {
        ctx.config.training.supplements.clone()
    } else {
        args.entities.clone()
    };

    let summary = build_dataset(ctx, &entities, &path).await?;
    output(&DatasetResponse { path, summary }, flags.format)
}

/// Build the dataset for `entities` and write it to `path`.
pub async fn build_dataset(
    ctx: &AppContext,
    entities: &[String],
    path: &Path,
) -> anyhow::Result<DatasetSummary> {
    let builder = DatasetBuilder::new(ctx.ods()?, ctx.pubmed()?);

    let spinner = Progress::spinner(&format!("Collecting evidence for {} supplements...", entities.len()));
    let dataset = builder.build(entities).await;

    spinner.set_message("Writing dataset...");
    if let Err(error) = write_jsonl(path, &dataset.examples) {
        spinner.finish_err("Failed to write dataset");
        return Err(error).with_context(|| format!("failed to write dataset to {}", path.display()));
    }
    spinner.finish_clear();

    Ok(dataset.summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flattens_summary() {
        let response = DatasetResponse {
            path: PathBuf::from("out.jsonl"),
            summary: DatasetSummary {
                entities: 2,
                reference_examples: 1,
                article_examples: 4,
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["path"], "out.jsonl");
        assert_eq!(json["article_examples"], 4);
        assert!(response.to_text().starts_with("Wrote 5 examples"));
    }
}
