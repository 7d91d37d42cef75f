use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::survival::{self, SurvivalOutcome};

pub struct Stage5Survival;

impl Stage5Survival {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Survival {
    fn name(&self) -> &'static str {
        "stage5_survival"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let response = ctx.response.as_ref().context("prediction response missing")?;
        let outcome = survival::summarize(response);

        if let (Some(treatments), Some(curves)) = (&response.treatments, &response.km_curves) {
            for (treatment, curve) in treatments.iter().zip(curves) {
                ctx.warnings
                    .extend(survival::check_confidence_band(treatment, curve));
            }
        }

        match &outcome {
            SurvivalOutcome::Ranked(ranking) => info!(
                treatments = ranking.ranked.len(),
                recommended = ranking.recommended().map(|s| s.treatment.as_str()).unwrap_or(""),
                "survival_ready"
            ),
            SurvivalOutcome::NoData { reason } => warn!(reason = %reason, "no KM curve data"),
        }
        ctx.outcome = Some(outcome);
        Ok(())
    }
}
