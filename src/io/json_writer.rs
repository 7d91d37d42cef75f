use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::form::{self, ClinicalField};
use crate::schema::v1::{
    ClinicalFlag, HccSurvivalV1, PatientMeta, SCHEMA_VERSION, SurvivalReport, SurvivalStatus,
    TOOL_NAME, TreatmentSummary, ValidationMeta,
};
use crate::survival::SurvivalOutcome;

pub fn build_report(ctx: &Ctx) -> Result<HccSurvivalV1> {
    let patient = ctx.record.as_ref().map(|r| PatientMeta {
        name: r.get(ClinicalField::Name).map(str::to_string),
        age: r.get(ClinicalField::Age).map(str::to_string),
        sex: r.get(ClinicalField::Sex).map(str::to_string),
        treatments: r.treatments().iter().map(|t| t.code().to_string()).collect(),
    });

    let validation = ctx.record.as_ref().map(|r| ValidationMeta {
        missing_percentage: ctx.decision.as_ref().map(|d| d.missing_percentage()),
        missing_fields: form::missing_fields(r)
            .into_iter()
            .map(|f| f.code().to_string())
            .collect(),
        confirmed: ctx.confirmed,
    });

    let survival = match &ctx.outcome {
        Some(SurvivalOutcome::Ranked(ranking)) => SurvivalReport {
            status: SurvivalStatus::Ranked,
            reason: None,
            recommended: ranking.recommended().map(|s| s.treatment.clone()),
            treatments: ranking
                .ranked
                .iter()
                .enumerate()
                .map(|(i, s)| TreatmentSummary {
                    rank: i + 1,
                    treatment: s.treatment.clone(),
                    display_name: s.display_name.clone(),
                    median_survival_months: s.median_survival,
                    max_time_months: s.max_time,
                    risk: s.risk,
                    formatted: s.formatted(),
                })
                .collect(),
        },
        Some(SurvivalOutcome::NoData { reason }) => SurvivalReport {
            status: SurvivalStatus::NoData,
            reason: Some(reason.clone()),
            recommended: None,
            treatments: Vec::new(),
        },
        None => SurvivalReport {
            status: SurvivalStatus::Pending,
            reason: ctx.halt.as_ref().map(|h| h.describe()),
            recommended: None,
            treatments: Vec::new(),
        },
    };

    let clinical_flags = ctx
        .clinical_flags
        .iter()
        .map(|f| ClinicalFlag {
            name: f.name.clone(),
            fired: f.fired,
            threshold: Some(f.threshold.clone()),
            details: f.details.clone(),
        })
        .collect();

    Ok(HccSurvivalV1 {
        tool: TOOL_NAME.to_string(),
        version: ctx.report.version.clone(),
        schema_version: SCHEMA_VERSION.to_string(),
        patient,
        validation,
        survival,
        clinical_flags,
        warnings: ctx.warnings.clone(),
    })
}

pub fn write_json(path: &Path, report: &HccSurvivalV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
