//! The footprint calculation engine.
//!
//! [`FootprintEngine::calculate`] is the single public entry point: it
//! sequences the scope calculators (Scope 3 consumes the already-computed
//! Scope 1 and 2 results), derives intensity metrics, the industry
//! comparison, the confidence score, and sanity warnings, and assembles an
//! immutable [`FootprintResults`] record. The whole pipeline is synchronous,
//! deterministic, and total: a sparse or malformed profile yields zeros and
//! a low confidence score, never an error.

mod checks;
mod confidence;
mod methodology;
mod metrics;
pub mod profile;
mod results;
mod scope1;
mod scope2;
mod scope3;

#[cfg(test)]
mod tests;

pub use methodology::{MethodologyReport, ScopeDefinition};
pub use results::{
    Assumption, AssumptionCategory, CalculationMetadata, ComparisonBand, ConfidenceLevel,
    ConfidenceReport, FootprintResults, IndustryComparison, IntensityMetrics, Scope1Breakdown,
    Scope2Breakdown, Scope3Breakdown, ScopeBreakdown, ScopeSummary, Warning, WarningKind,
};

use crate::factors::FactorTable;
use chrono::{DateTime, Utc};
use profile::CompanyProfile;
use tracing::debug;

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stateless calculator bound to one immutable factor table. Cheap to share
/// behind an `Arc`; concurrent calculations need no synchronization.
pub struct FootprintEngine {
    factors: FactorTable,
}

impl FootprintEngine {
    pub fn new(factors: FactorTable) -> Self {
        Self { factors }
    }

    /// Engine over the built-in baseline factor table.
    pub fn baseline() -> Self {
        Self::new(FactorTable::baseline())
    }

    pub fn factors(&self) -> &FactorTable {
        &self.factors
    }

    /// Runs a full footprint calculation stamped with the current time.
    pub fn calculate(&self, profile: &CompanyProfile) -> FootprintResults {
        self.calculate_at(profile, Utc::now())
    }

    /// Same as [`calculate`](Self::calculate) with an explicit clock value,
    /// so callers and tests can pin the timestamp.
    pub fn calculate_at(
        &self,
        profile: &CompanyProfile,
        calculated_at: DateTime<Utc>,
    ) -> FootprintResults {
        let (scope1, mut assumptions) = scope1::compute(profile, &self.factors);
        let (scope2, scope2_assumptions) = scope2::compute(profile, &self.factors);
        assumptions.extend(scope2_assumptions);

        let (scope3, scope3_assumptions) =
            scope3::compute(profile, &self.factors, &scope1, &scope2);
        assumptions.extend(scope3_assumptions);

        let summary = ScopeSummary {
            scope1: scope1.total(),
            scope2: scope2.total(),
            scope3: scope3.total(),
            total: scope1.total() + scope2.total() + scope3.total(),
        };

        let intensity = metrics::intensity_metrics(profile, summary.total);
        let industry_comparison =
            metrics::industry_comparison(profile, &self.factors, summary.total);
        let confidence = confidence::confidence_report(profile);
        let warnings = checks::sanity_warnings(&summary);

        debug!(
            total = summary.total,
            confidence = confidence.score,
            warnings = warnings.len(),
            "footprint calculation complete"
        );

        FootprintResults {
            summary,
            breakdown: ScopeBreakdown {
                scope1,
                scope2,
                scope3,
            },
            intensity,
            industry_comparison,
            confidence,
            assumptions,
            warnings,
            metadata: CalculationMetadata {
                calculated_at,
                engine_version: ENGINE_VERSION.to_string(),
            },
        }
    }

    /// Builds the methodology document for a finished calculation.
    pub fn methodology(&self, results: &FootprintResults) -> MethodologyReport {
        methodology::build_report(results, &self.factors)
    }
}

/// Coerces an optional numeric answer to a usable value: absent, non-finite,
/// or negative input counts as zero.
pub(crate) fn value_or_zero(value: Option<f64>) -> f64 {
    value
        .filter(|value| value.is_finite())
        .map(|value| value.max(0.0))
        .unwrap_or(0.0)
}

/// Coerces an optional share answer onto the 0.0–1.0 scale.
pub(crate) fn fraction_or_zero(value: Option<f64>) -> f64 {
    value
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 1.0))
        .unwrap_or(0.0)
}
