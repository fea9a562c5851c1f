use super::results::{Assumption, FootprintResults, Warning};
use crate::factors::FactorTable;
use serde::{Deserialize, Serialize};

/// Structured "show your work" document derived from a finished calculation.
/// Rendering (HTML, PDF, terminal) is left to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodologyReport {
    pub framework: String,
    pub scope_definitions: Vec<ScopeDefinition>,
    /// Provenance citations taken from the factor table's metadata.
    pub data_sources: Vec<String>,
    pub factor_table_version: String,
    /// The calculation's assumption trail, verbatim and in evaluation order.
    pub assumptions: Vec<Assumption>,
    pub warnings: Vec<Warning>,
    pub limitations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeDefinition {
    pub scope: u8,
    pub title: String,
    pub description: String,
}

pub(crate) fn build_report(
    results: &FootprintResults,
    factors: &FactorTable,
) -> MethodologyReport {
    MethodologyReport {
        framework: "GHG Protocol Corporate Standard, screening-level spend-based and \
                    average-data methodologies"
            .to_string(),
        scope_definitions: vec![
            ScopeDefinition {
                scope: 1,
                title: "Direct Emissions".to_string(),
                description: "Emissions from sources owned or controlled by the \
                              organization, such as facility heating and company vehicles."
                    .to_string(),
            },
            ScopeDefinition {
                scope: 2,
                title: "Indirect Emissions - Energy".to_string(),
                description: "Emissions from purchased electricity, steam, heating, and \
                              cooling."
                    .to_string(),
            },
            ScopeDefinition {
                scope: 3,
                title: "Indirect Emissions - Value Chain".to_string(),
                description: "All other indirect emissions in the value chain, including \
                              purchased goods, business travel, and product use."
                    .to_string(),
            },
        ],
        data_sources: factors.metadata.sources.clone(),
        factor_table_version: factors.metadata.version.clone(),
        assumptions: results.assumptions.clone(),
        warnings: results.warnings.clone(),
        limitations: vec![
            "Spend-based and average-data methodologies are less accurate than \
             activity-based calculations."
                .to_string(),
            "Emission factors are averages and may not reflect specific suppliers or \
             operations."
                .to_string(),
            "Some Scope 3 categories use simplified proxy calculations.".to_string(),
            "Building energy is estimated from floor area and building type, not metered \
             utility data."
                .to_string(),
            "Outputs are directional estimates, not audit-grade figures.".to_string(),
        ],
    }
}
