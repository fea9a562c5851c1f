use super::profile::CompanyProfile;
use super::results::{ComparisonBand, IndustryComparison, IntensityMetrics};
use super::value_or_zero;
use crate::factors::FactorTable;

/// Benchmark intensity in tCO2e per $M revenue applied when the declared
/// industry has no table entry.
pub(crate) const DEFAULT_INDUSTRY_INTENSITY: f64 = 100.0;

const VARIANCE_BAND_PCT: f64 = 10.0;

/// Per-employee and per-revenue intensity. Zero or missing denominators are
/// floored at one so sparse profiles never produce NaN or infinity.
pub(crate) fn intensity_metrics(profile: &CompanyProfile, total: f64) -> IntensityMetrics {
    let employees = value_or_zero(profile.basics.employees).max(1.0);
    let revenue = value_or_zero(profile.basics.revenue).max(1.0);

    IntensityMetrics {
        per_employee: total / employees,
        per_revenue_million: total / revenue * 1_000_000.0,
    }
}

/// Compares the company total against the declared industry's
/// revenue-intensity benchmark.
pub(crate) fn industry_comparison(
    profile: &CompanyProfile,
    factors: &FactorTable,
    company_total: f64,
) -> IndustryComparison {
    let revenue = value_or_zero(profile.basics.revenue).max(1.0);
    let revenue_millions = revenue / 1_000_000.0;

    let intensity = profile
        .basics
        .industry
        .as_deref()
        .and_then(|id| factors.industry(id))
        .map(|industry| industry.revenue_intensity)
        .unwrap_or(DEFAULT_INDUSTRY_INTENSITY);

    let industry_average = revenue_millions * intensity;
    let variance_pct = (company_total - industry_average) / industry_average * 100.0;

    let interpretation = if variance_pct < -VARIANCE_BAND_PCT {
        ComparisonBand::BelowAverage
    } else if variance_pct > VARIANCE_BAND_PCT {
        ComparisonBand::AboveAverage
    } else {
        ComparisonBand::Average
    };

    IndustryComparison {
        company_total: company_total.round(),
        industry_average: industry_average.round(),
        variance_pct,
        interpretation,
    }
}
