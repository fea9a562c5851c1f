use super::results::{ScopeSummary, Warning, WarningKind};

/// Scope 3 below this share of the total is unusual across industries.
const LOW_SCOPE3_THRESHOLD_PCT: f64 = 50.0;

/// Heuristic data-quality checks over the computed summary. Each rule is
/// independent and order-insensitive; new rules append here.
pub(crate) fn sanity_warnings(summary: &ScopeSummary) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if summary.total > 0.0 {
        let scope3_pct = summary.scope3 / summary.total * 100.0;
        if scope3_pct < LOW_SCOPE3_THRESHOLD_PCT {
            warnings.push(Warning {
                kind: WarningKind::LowScope3,
                message: "Scope 3 emissions appear low. For most companies, Scope 3 \
                          represents 70-90% of total emissions."
                    .to_string(),
            });
        }
    }

    warnings
}
