use anyhow::Result;

use crate::ctx::Ctx;
use crate::form::{ClinicalField, PatientRecord, Section};
use crate::survival::SurvivalOutcome;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!("hcc-survival v{}\n", ctx.report.version));

    if let Some(record) = &ctx.record {
        out.push_str(&format!(
            "Patient: {}, age {}, sex {}, treatments: {}\n",
            record.display_name(),
            record.get(ClinicalField::Age).unwrap_or("-"),
            record.get(ClinicalField::Sex).unwrap_or("-"),
            record
                .treatments()
                .iter()
                .map(|t| t.code())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    if let Some(decision) = &ctx.decision {
        out.push_str(&format!(
            "Missing fields: {:.1}%{}\n",
            decision.missing_percentage(),
            if ctx.confirmed { " (confirmed)" } else { "" }
        ));
    }

    if let Some(halt) = &ctx.halt {
        out.push_str(&format!("Status: {}\n", halt.describe()));
        return Ok(out);
    }

    if ctx.record.is_some() {
        let fired: Vec<&str> = ctx
            .clinical_flags
            .iter()
            .filter(|f| f.fired)
            .map(|f| f.name.as_str())
            .collect();
        if fired.is_empty() {
            out.push_str("Flags: none\n");
        } else {
            out.push_str(&format!("Flags: {}\n", fired.join(", ")));
        }
    }

    match &ctx.outcome {
        Some(SurvivalOutcome::Ranked(ranking)) => {
            if let Some(best) = ranking.recommended() {
                out.push_str(&format!(
                    "Recommended: {} ({}), median survival {}\n",
                    best.display_name,
                    best.risk.label(),
                    best.formatted()
                ));
                if best.median_survival.is_none() {
                    out.push_str("  Survival stayed above 50% for the whole observed window.\n");
                } else {
                    out.push_str(&format!(
                        "  Survival is expected to stay above 50% for {}.\n",
                        best.formatted()
                    ));
                }
            }
            if !ranking.comparison().is_empty() {
                out.push_str("Other treatments:\n");
                for (i, s) in ranking.comparison().iter().enumerate() {
                    out.push_str(&format!(
                        "  {}. {} ({}): {}\n",
                        i + 2,
                        s.display_name,
                        s.risk.label(),
                        s.formatted()
                    ));
                }
            }
        }
        Some(SurvivalOutcome::NoData { reason }) => {
            out.push_str(&format!("No KM curve data available ({})\n", reason));
        }
        None => {}
    }

    Ok(out)
}

pub fn format_record(record: &PatientRecord) -> String {
    let mut out = String::new();
    for section in Section::ALL {
        out.push_str(&format!("[{}]\n", section.title()));
        for field in ClinicalField::ALL.iter().filter(|f| f.section() == section) {
            out.push_str(&format!(
                "  {:<26} {}\n",
                field.label(),
                record.get(*field).unwrap_or("-")
            ));
        }
    }
    out.push_str("[Treatments]\n");
    if record.treatments().is_empty() {
        out.push_str("  none selected\n");
    }
    for treatment in record.treatments() {
        out.push_str(&format!("  {} ({})\n", treatment.label(), treatment.code()));
    }
    out
}
