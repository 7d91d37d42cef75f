use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::form::{self, PatientRecord};
use crate::pipeline::Stage;
use crate::treatment::Treatment;

pub struct Stage1Form;

impl Stage1Form {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Form {
    fn name(&self) -> &'static str {
        "stage1_form"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.sources.resume {
            match ctx.session.current() {
                Some(record) => ctx.form.apply_record(record),
                None => ctx
                    .warnings
                    .push("--resume given but the session slot is empty".to_string()),
            }
        }

        if let Some(path) = &ctx.sources.from {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let record: PatientRecord = serde_json::from_str(&content)
                .with_context(|| format!("invalid patient record in {}", path.display()))?;
            ctx.form.apply_record(&record);
        }

        for raw in &ctx.sources.assignments {
            let (field, value) = form::parse_assignment(raw)?;
            ctx.form.set(field, value);
        }
        for code in &ctx.sources.treatments {
            let treatment: Treatment = code.parse()?;
            ctx.form.toggle(treatment, true);
        }
        for code in &ctx.sources.unchecked {
            let treatment: Treatment = code.parse()?;
            ctx.form.toggle(treatment, false);
        }

        let record = ctx.form.record();
        ctx.warnings.extend(form::lint(&record));
        info!(
            fields = record.values().count(),
            treatments = record.treatments().len(),
            "patient_record_ready"
        );
        ctx.record = Some(record);
        Ok(())
    }
}
