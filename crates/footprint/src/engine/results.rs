use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Assembled output of one footprint calculation. Constructed once per
/// invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintResults {
    pub summary: ScopeSummary,
    pub breakdown: ScopeBreakdown,
    pub intensity: IntensityMetrics,
    pub industry_comparison: IndustryComparison,
    pub confidence: ConfidenceReport,
    /// Audit trail of every materially contributing calculation step,
    /// in evaluation order.
    pub assumptions: Vec<Assumption>,
    pub warnings: Vec<Warning>,
    pub metadata: CalculationMetadata,
}

/// Per-scope totals in tCO2e.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeSummary {
    pub total: f64,
    pub scope1: f64,
    pub scope2: f64,
    pub scope3: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeBreakdown {
    pub scope1: Scope1Breakdown,
    pub scope2: Scope2Breakdown,
    pub scope3: Scope3Breakdown,
}

/// Direct emissions by category, tCO2e.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scope1Breakdown {
    pub facilities: f64,
    pub fleet: f64,
    /// Reserved for stationary process combustion; always zero in this
    /// screening methodology but kept for shape compatibility.
    pub on_site_combustion: f64,
}

impl Scope1Breakdown {
    pub fn total(&self) -> f64 {
        self.facilities + self.fleet + self.on_site_combustion
    }
}

/// Purchased-energy emissions, tCO2e.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scope2Breakdown {
    pub purchased_electricity: f64,
}

impl Scope2Breakdown {
    pub fn total(&self) -> f64 {
        self.purchased_electricity
    }
}

/// Value-chain emissions by GHG Protocol category, tCO2e. `upstream_transport`
/// and `investments` are reserved categories excluded from this screening
/// methodology and stay zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scope3Breakdown {
    pub purchased_goods: f64,
    pub capital_goods: f64,
    pub fuel_energy: f64,
    pub upstream_transport: f64,
    pub waste: f64,
    pub business_travel: f64,
    pub commuting: f64,
    pub downstream_transport: f64,
    pub use_of_products: f64,
    pub end_of_life: f64,
    pub investments: f64,
}

impl Scope3Breakdown {
    pub fn total(&self) -> f64 {
        self.purchased_goods
            + self.capital_goods
            + self.fuel_energy
            + self.upstream_transport
            + self.waste
            + self.business_travel
            + self.commuting
            + self.downstream_transport
            + self.use_of_products
            + self.end_of_life
            + self.investments
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntensityMetrics {
    /// tCO2e per employee.
    pub per_employee: f64,
    /// tCO2e per $M of revenue.
    pub per_revenue_million: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryComparison {
    pub company_total: f64,
    pub industry_average: f64,
    pub variance_pct: f64,
    pub interpretation: ComparisonBand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonBand {
    BelowAverage,
    Average,
    AboveAverage,
}

/// Coverage heuristic over the questionnaire, not a statistical confidence
/// interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceReport {
    /// 0–100.
    pub score: u8,
    pub level: ConfidenceLevel,
    pub questions_answered: u8,
    pub total_questions: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    MediumHigh,
    Medium,
    MediumLow,
    Low,
}

impl ConfidenceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::MediumHigh => "Medium-High",
            Self::Medium => "Medium",
            Self::MediumLow => "Medium-Low",
            Self::Low => "Low",
        }
    }
}

/// One applied calculation step that materially affected the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumption {
    pub category: AssumptionCategory,
    /// Human-readable formula with the substituted values.
    pub formula: String,
    pub source: String,
    /// Whether the step consumed a user-supplied answer rather than a fixed
    /// reference value.
    pub user_provided: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_point: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssumptionCategory {
    FacilitiesHeating,
    VehicleFleet,
    BuildingElectricity,
    ElectricVehicles,
    GridEmissionFactor,
    PurchasedGoods,
    CapitalGoods,
    FuelAndEnergy,
    Waste,
    BusinessTravel,
    Commuting,
    DownstreamTransport,
    UseOfSoldProducts,
    EndOfLife,
}

impl AssumptionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FacilitiesHeating => "Scope 1 - Facilities Heating",
            Self::VehicleFleet => "Scope 1 - Vehicle Fleet",
            Self::BuildingElectricity => "Scope 2 - Building Electricity",
            Self::ElectricVehicles => "Scope 2 - Electric Vehicles",
            Self::GridEmissionFactor => "Scope 2 - Grid Emission Factor",
            Self::PurchasedGoods => "Scope 3 - Purchased Goods",
            Self::CapitalGoods => "Scope 3 - Capital Goods",
            Self::FuelAndEnergy => "Scope 3 - Fuel & Energy Related",
            Self::Waste => "Scope 3 - Waste",
            Self::BusinessTravel => "Scope 3 - Business Travel",
            Self::Commuting => "Scope 3 - Employee Commuting",
            Self::DownstreamTransport => "Scope 3 - Downstream Transport",
            Self::UseOfSoldProducts => "Scope 3 - Use of Sold Products",
            Self::EndOfLife => "Scope 3 - End-of-Life",
        }
    }
}

/// Non-fatal data-quality observation. Part of the normal output, never an
/// error path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    LowScope3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationMetadata {
    pub calculated_at: DateTime<Utc>,
    pub engine_version: String,
}
