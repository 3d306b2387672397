use std::fmt::Write as _;

use anyhow::{Context, bail};
use serde::Serialize;
use sw_core::enums::RiskLevel;
use sw_core::parse_entity_list;
use sw_pipeline::fine_tune::read_model_id;
use sw_pipeline::query::EvidenceCounts;
use sw_pipeline::{InteractionAnalysis, InteractionQueryPipeline, QueryOptions};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::context::AppContext;
use crate::output::{TextView, output};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    entities: Vec<String>,
    normalized_entities: Vec<String>,
    risk: RiskLevel,
    risk_description: &'static str,
    explanation: String,
    evidence: EvidenceCounts,
    notes: Vec<String>,
}

impl From<InteractionAnalysis> for AnalyzeResponse {
    fn from(analysis: InteractionAnalysis) -> Self {
        Self {
            risk_description: analysis.verdict.risk_description(),
            risk: analysis.verdict.risk,
            explanation: analysis.verdict.explanation,
            entities: analysis.entities,
            normalized_entities: analysis.normalized_entities,
            evidence: analysis.evidence,
            notes: analysis.notes,
        }
    }
}

impl TextView for AnalyzeResponse {
    fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "입력된 영양제: {}", self.entities.join(", "));
        let _ = writeln!(out, "위험도: {}", self.risk_description);
        let _ = write!(out, "설명: {}", self.explanation);
        for note in &self.notes {
            let _ = write!(out, "\nnote: {note}");
        }
        out
    }
}

/// Handle `swise analyze`.
pub async fn handle(args: &AnalyzeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entities = parse_entity_list(&args.input);
    if entities.is_empty() {
        bail!("no supplement names in {:?}; separate names with commas", args.input);
    }

    let model_id = resolve_model_id(ctx)?;
    let pipeline = InteractionQueryPipeline::new(
        ctx.ods()?,
        ctx.pubmed()?,
        ctx.openai()?,
        QueryOptions::from_config(&ctx.config, model_id),
    );

    let spinner = Progress::spinner("Analyzing interaction...");
    let analysis = pipeline.analyze(&entities).await;
    spinner.finish_clear();

    output(&AnalyzeResponse::from(analysis), flags.format)
}

/// Configured model id, else the one saved by `swise train`.
fn resolve_model_id(ctx: &AppContext) -> anyhow::Result<String> {
    let configured = ctx.config.query.model_id.trim();
    if !configured.is_empty() {
        return Ok(configured.to_string());
    }
    let path = &ctx.config.training.model_id_path;
    read_model_id(path).with_context(|| {
        format!(
            "no fine-tuned model id at {}; run `swise train` or set SWISE_QUERY__MODEL_ID",
            path.display()
        )
    })
}
