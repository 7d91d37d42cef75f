use std::cmp::Ordering;

use crate::survival::median::{check_curve, max_time, median_survival};
use crate::survival::{
    ResponseData, RiskTier, SurvivalOutcome, SurvivalRanking, TreatmentSurvivalSummary,
};

pub fn summarize(response: &ResponseData) -> SurvivalOutcome {
    if let Some(reason) = &response.malformed {
        return no_data(reason.clone());
    }
    let treatments = match response.treatments.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => return no_data("response has no Treatments"),
    };
    let curves = match response.km_curves.as_deref() {
        Some(c) if !c.is_empty() => c,
        _ => return no_data("response has no KM_curves"),
    };
    if treatments.len() != curves.len() {
        return no_data(format!(
            "{} treatments but {} KM curves",
            treatments.len(),
            curves.len()
        ));
    }

    let mut summaries = Vec::with_capacity(curves.len());
    for (treatment, curve) in treatments.iter().zip(curves) {
        if let Err(reason) = check_curve(curve) {
            return no_data(format!("{}: {}", treatment, reason));
        }
        let Some(max_time) = max_time(curve) else {
            return no_data(format!("{}: curve has no time points", treatment));
        };
        let median = median_survival(curve);
        summaries.push(TreatmentSurvivalSummary {
            treatment: treatment.clone(),
            display_name: treatment.replace('_', " "),
            median_survival: median,
            max_time,
            risk: RiskTier::from_median(median),
        });
    }

    SurvivalOutcome::Ranked(SurvivalRanking {
        ranked: rank(summaries),
    })
}

/// Stable sort: medians never reached first, then longer medians before
/// shorter ones. Ties keep input order.
pub fn rank(mut summaries: Vec<TreatmentSurvivalSummary>) -> Vec<TreatmentSurvivalSummary> {
    summaries.sort_by(|a, b| compare_goodness(a.median_survival, b.median_survival));
    summaries
}

fn compare_goodness(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => b.total_cmp(&a),
    }
}

pub fn format_survival_time(median_months: Option<f64>, max_time: f64) -> String {
    match median_months {
        Some(m) => format!("{:.1} months", m),
        None => format!(">{:.0} months", max_time),
    }
}

fn no_data(reason: impl Into<String>) -> SurvivalOutcome {
    SurvivalOutcome::NoData {
        reason: reason.into(),
    }
}
