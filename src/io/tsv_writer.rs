use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::survival::SurvivalOutcome;

pub fn write_survival_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(
        w,
        "rank\ttreatment\tdisplay_name\tmedian_survival_months\tmax_time_months\trisk"
    )?;
    if let Some(SurvivalOutcome::Ranked(ranking)) = &ctx.outcome {
        for (i, s) in ranking.ranked.iter().enumerate() {
            let median = s
                .median_survival
                .map(|m| format!("{:.1}", m))
                .unwrap_or_else(|| "NA".to_string());
            writeln!(
                w,
                "{}\t{}\t{}\t{}\t{:.1}\t{}",
                i + 1,
                s.treatment,
                s.display_name,
                median,
                s.max_time,
                s.risk.label()
            )?;
        }
    }
    w.flush()?;
    Ok(())
}

pub fn write_curves_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "treatment\tx\tKM_estimate\tLower_CI\tUpper_CI")?;
    let Some(response) = &ctx.response else {
        w.flush()?;
        return Ok(());
    };
    let (Some(treatments), Some(curves)) = (&response.treatments, &response.km_curves) else {
        w.flush()?;
        return Ok(());
    };

    for (treatment, curve) in treatments.iter().zip(curves) {
        let n = curve.x.len().min(curve.km_estimate.len());
        for i in 0..n {
            writeln!(
                w,
                "{}\t{}\t{:.6}\t{}\t{}",
                treatment,
                curve.x[i],
                curve.km_estimate[i],
                band_value(&curve.lower_ci, i),
                band_value(&curve.upper_ci, i)
            )?;
        }
    }
    w.flush()?;
    Ok(())
}

fn band_value(band: &[f64], i: usize) -> String {
    band.get(i)
        .map(|v| format!("{:.6}", v))
        .unwrap_or_else(|| "NA".to_string())
}
