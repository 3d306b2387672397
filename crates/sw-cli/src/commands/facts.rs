use serde::Serialize;
use sw_core::entities::ReferenceFact;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FactsArgs;
use crate::context::AppContext;
use crate::output::{TextView, output};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct FactsResponse {
    entity: String,
    fact: ReferenceFact,
}

impl TextView for FactsResponse {
    fn to_text(&self) -> String {
        match &self.fact {
            ReferenceFact::Found(text) => text.clone(),
            ReferenceFact::Missing(reason) => format!("{}: {reason}", self.entity),
        }
    }
}

/// Handle `swise facts`.
pub async fn handle(args: &FactsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.ods()?;

    let spinner = Progress::spinner("Fetching NIH ODS fact sheet...");
    let fact = client.interaction_facts(&args.entity).await;
    spinner.finish_clear();

    output(
        &FactsResponse {
            entity: args.entity.clone(),
            fact,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use sw_core::enums::FactAbsence;

    use super::*;

    #[test]
    fn missing_fact_names_the_entity() {
        let response = FactsResponse {
            entity: "Zinc".into(),
            fact: ReferenceFact::Missing(FactAbsence::NoInteractionInfo),
        };
        assert_eq!(response.to_text(), "Zinc: 상호작용 정보가 없습니다.");
    }
}
