use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized questionnaire answers describing one organization.
///
/// Every leaf is optional: the upstream collection layer owns required-field
/// validation, and the engine treats absent numeric values as zero. All
/// fraction fields (`electric_fraction`, `remote_work_fraction`, renewable
/// `fraction`) are expressed on a 0.0–1.0 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub basics: CompanyBasics,
    pub operations: Operations,
    pub supply_chain: SupplyChain,
    pub travel: TravelProfile,
    pub energy: EnergyProfile,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyBasics {
    /// Annual revenue in USD.
    pub revenue: Option<f64>,
    /// Industry id matching the factor table's industry keys.
    pub industry: Option<String>,
    pub employees: Option<f64>,
    pub primary_region: Option<Region>,
    /// ISO 3166-1 alpha-2 country code of the headquarters.
    pub hq_country: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NorthAmerica,
    SouthAmerica,
    Europe,
    Africa,
    Asia,
    Oceania,
}

impl Region {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
            Self::Europe => "Europe",
            Self::Africa => "Africa",
            Self::Asia => "Asia",
            Self::Oceania => "Oceania",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingType {
    Office,
    Warehouse,
    Retail,
    ManufacturingLight,
    ManufacturingHeavy,
}

impl BuildingType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Office,
            Self::Warehouse,
            Self::Retail,
            Self::ManufacturingLight,
            Self::ManufacturingHeavy,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Office => "office",
            Self::Warehouse => "warehouse",
            Self::Retail => "retail",
            Self::ManufacturingLight => "light manufacturing",
            Self::ManufacturingHeavy => "heavy manufacturing",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Operations {
    /// Occupied floor area in square feet, keyed by building type.
    pub floor_area: BTreeMap<BuildingType, f64>,
    pub hvac: Option<HvacProfile>,
    /// Present only when the organization declared an owned fleet.
    pub fleet: Option<FleetProfile>,
}

impl Operations {
    /// Total declared floor area across all building types, negatives dropped.
    pub fn total_floor_area(&self) -> f64 {
        self.floor_area
            .values()
            .filter(|area| area.is_finite() && **area > 0.0)
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HvacProfile {
    pub heating: bool,
    pub air_conditioning: bool,
    pub cooling_intensity: Option<CoolingIntensity>,
    pub heating_source: Option<HeatingSource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoolingIntensity {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingSource {
    NaturalGas,
    HeatingOil,
    Propane,
    Electric,
    #[serde(rename = "dont_know")]
    Unknown,
}

impl HeatingSource {
    /// Factor-table fuel id for combustible sources. Electric heating is a
    /// Scope 2 concern and an unknown source cannot be attributed to a fuel.
    pub const fn fuel_id(self) -> Option<&'static str> {
        match self {
            Self::NaturalGas => Some("natural_gas"),
            Self::HeatingOil => Some("heating_oil"),
            Self::Propane => Some("propane"),
            Self::Electric | Self::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetProfile {
    pub vehicles: Option<f64>,
    /// Share of the fleet that is battery-electric, 0.0–1.0.
    pub electric_fraction: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplyChain {
    pub purchased_goods: PurchasedGoods,
    pub suppliers: SupplierGeography,
    pub distribution: Distribution,
    pub products: Option<SoldProducts>,
}

/// Annual spend in USD per procurement category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchasedGoods {
    pub raw_materials: Option<f64>,
    pub services: Option<f64>,
    pub capital_equipment: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplierGeography {
    pub domestic: bool,
    pub regional: bool,
    pub international: bool,
}

impl SupplierGeography {
    pub fn any_declared(&self) -> bool {
        self.domestic || self.regional || self.international
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Distribution {
    pub annual_shipments: Option<f64>,
    pub method: Option<DistributionMethod>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionMethod {
    Local,
    Regional,
    National,
    International,
}

impl DistributionMethod {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Regional => "regional",
            Self::National => "national",
            Self::International => "international",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoldProducts {
    pub kind: Option<ProductKind>,
    pub annual_units_sold: Option<f64>,
    pub average_lifetime_years: Option<f64>,
    /// Use-phase electricity tier for electric devices.
    pub energy_intensity: Option<EnergyIntensityTier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    ElectricDevices,
    FuelConsuming,
    /// Products with no use-phase energy draw (apparel, furniture, media).
    Passive,
}

impl ProductKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ElectricDevices => "electric devices",
            Self::FuelConsuming => "fuel-consuming",
            Self::Passive => "passive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyIntensityTier {
    Low,
    Medium,
    High,
}

impl EnergyIntensityTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelProfile {
    /// Annual business-travel spend in USD.
    pub travel_budget: Option<f64>,
    /// Share of the workforce working remotely, 0.0–1.0.
    pub remote_work_fraction: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyProfile {
    pub renewable: Option<RenewablePurchases>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenewablePurchases {
    pub purchases: bool,
    /// Share of purchased electricity covered by renewable contracts, 0.0–1.0.
    pub fraction: Option<f64>,
}

impl EnergyProfile {
    /// Effective renewable coverage; zero unless purchases were declared.
    pub fn renewable_fraction(&self) -> f64 {
        self.renewable
            .as_ref()
            .filter(|renewable| renewable.purchases)
            .and_then(|renewable| renewable.fraction)
            .filter(|fraction| fraction.is_finite())
            .map(|fraction| fraction.clamp(0.0, 1.0))
            .unwrap_or(0.0)
    }
}
