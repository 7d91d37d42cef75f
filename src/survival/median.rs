use crate::survival::{KmCurve, MEDIAN_THRESHOLD};

const BAND_EPS: f64 = 1e-9;

pub fn max_time(curve: &KmCurve) -> Option<f64> {
    curve.x.iter().copied().reduce(f64::max)
}

/// First time point, in curve order, whose estimate is at or below 0.5.
/// No interpolation between points.
pub fn median_survival(curve: &KmCurve) -> Option<f64> {
    curve
        .km_estimate
        .iter()
        .zip(&curve.x)
        .find(|(est, _)| **est <= MEDIAN_THRESHOLD)
        .map(|(_, x)| *x)
}

pub fn check_curve(curve: &KmCurve) -> Result<(), String> {
    let n = curve.x.len();
    if n == 0 {
        return Err("curve has no time points".to_string());
    }
    if curve.km_estimate.len() != n {
        return Err(format!(
            "KM_estimate has {} points, x has {}",
            curve.km_estimate.len(),
            n
        ));
    }
    for (name, band) in [("Lower_CI", &curve.lower_ci), ("Upper_CI", &curve.upper_ci)] {
        if !band.is_empty() && band.len() != n {
            return Err(format!("{} has {} points, x has {}", name, band.len(), n));
        }
    }
    Ok(())
}

pub fn check_confidence_band(treatment: &str, curve: &KmCurve) -> Vec<String> {
    let mut warnings = Vec::new();
    if curve.lower_ci.len() != curve.km_estimate.len()
        || curve.upper_ci.len() != curve.km_estimate.len()
    {
        return warnings;
    }
    let mut violations = 0usize;
    let mut first = None;
    for i in 0..curve.km_estimate.len() {
        let est = curve.km_estimate[i];
        if curve.lower_ci[i] > est + BAND_EPS || est > curve.upper_ci[i] + BAND_EPS {
            violations += 1;
            first.get_or_insert(i);
        }
    }
    if let Some(i) = first {
        warnings.push(format!(
            "{}: confidence band does not enclose estimate at {} point(s), first at x={}",
            treatment, violations, curve.x[i]
        ));
    }
    warnings
}
