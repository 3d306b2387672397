use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use sw_pipeline::dataset::read_jsonl;
use sw_pipeline::{DatasetError, FineTuneSupervisor, PollPolicy};
use tokio_util::sync::CancellationToken;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TrainArgs;
use crate::commands::dataset::build_dataset;
use crate::context::AppContext;
use crate::output::{TextView, output};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct TrainResponse {
    model_id: String,
    model_id_path: PathBuf,
    dataset: PathBuf,
    records: usize,
}

impl TextView for TrainResponse {
    fn to_text(&self) -> String {
        format!(
            "Fine-tuned model {} (saved to {})",
            self.model_id,
            self.model_id_path.display()
        )
    }
}

/// Handle `swise train`.
pub async fn handle(args: &TrainArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let training = &ctx.config.training;
    let dataset = args
        .dataset
        .clone()
        .unwrap_or_else(|| training.dataset_path.clone());

    if !args.skip_build {
        build_dataset(ctx, &training.supplements, &dataset).await?;
    }

    let records = read_jsonl(&dataset)
        .with_context(|| format!("failed to read dataset {}", dataset.display()))?
        .len();
    if records == 0 {
        return Err(anyhow::Error::new(DatasetError::Empty).context("nothing to fine-tune on"));
    }

    let mut policy = PollPolicy::from_config(&ctx.config);
    if let Some(max_polls) = args.max_polls {
        policy.max_polls = max_polls;
    }
    let supervisor = FineTuneSupervisor::new(
        ctx.openai()?,
        ctx.config.openai.base_model.clone(),
        policy,
        training.model_id_path.clone(),
    );

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let spinner = Progress::spinner("Fine-tuning (Ctrl-C stops waiting)...");
    let model_id = match supervisor.submit_and_wait(&dataset, &cancel).await {
        Ok(model_id) => model_id,
        Err(error) => {
            spinner.finish_err("Fine-tuning did not complete");
            return Err(error.into());
        }
    };
    spinner.finish_clear();

    output(
        &TrainResponse {
            model_id,
            model_id_path: training.model_id_path.clone(),
            dataset,
            records,
        },
        flags.format,
    )
}
