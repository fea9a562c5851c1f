//! Versioned emission-factor reference tables.
//!
//! The engine never mutates a [`FactorTable`]; a validated table may be
//! shared read-only across any number of concurrent calculations. Every
//! lookup is total: unknown keys resolve to the documented fallback instead
//! of failing.

use crate::engine::profile::{BuildingType, DistributionMethod, EnergyIntensityTier, Region};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Grid factors fall back to this country when the HQ country is unknown.
pub const DEFAULT_COUNTRY: &str = "US";
/// Building intensities fall back to this region when the profile's region
/// has no table entry.
pub const DEFAULT_REGION: Region = Region::NorthAmerica;

const BASELINE_JSON: &str = include_str!("data/emission_factors.json");

/// Immutable store of published emission factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorTable {
    pub industries: BTreeMap<String, IndustryFactor>,
    pub grid: BTreeMap<String, GridFactor>,
    pub fuels: BTreeMap<String, FuelFactor>,
    pub building_intensity: BuildingIntensityTable,
    pub transport: TransportFactors,
    pub spend_based: SpendFactors,
    pub operational: OperationalFactors,
    pub product_use: ProductUseFactors,
    pub end_of_life: EndOfLifeFactors,
    pub metadata: TableMetadata,
}

/// Industry benchmark keyed by industry id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryFactor {
    pub name: String,
    /// tCO2e per $M revenue.
    pub revenue_intensity: f64,
    /// Number of NAICS codes aggregated into this benchmark.
    pub naics_count: u32,
    pub source: String,
}

/// Electricity grid factors for one country, kg CO2e per kWh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridFactor {
    pub location_based: f64,
    pub upstream: f64,
    /// Transmission and distribution loss share.
    pub td_loss: f64,
    pub source: String,
    pub year: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelFactor {
    /// kg CO2e per unit of fuel (gallon for liquids, therm basis below).
    pub combustion: f64,
    /// kg CO2e per therm, for fuels metered by heat content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combustion_per_therm: Option<f64>,
    pub upstream: f64,
    pub source: String,
}

/// Annual electricity intensity by region and building type, kWh/sqft/year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingIntensityTable {
    pub by_region: BTreeMap<Region, BTreeMap<BuildingType, f64>>,
    pub source: String,
}

/// Freight and parcel factors, kg CO2e per shipment or tonne-mile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportFactors {
    pub truck: f64,
    pub rail: f64,
    pub air: f64,
    pub sea: f64,
    pub parcel_local: f64,
    pub parcel_regional: f64,
    pub parcel_national: f64,
    pub parcel_international: f64,
    pub source: String,
}

/// Spend-based factors, kg CO2e per USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendFactors {
    pub raw_materials_general: f64,
    pub professional_services: f64,
    pub capital_equipment: f64,
    pub goods_for_resale_general: f64,
    /// tCO2e per USD of business-travel spend.
    pub business_travel: f64,
    pub source: String,
}

/// Per-employee and per-vehicle operational averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalFactors {
    /// tCO2e per commuting employee per year.
    pub commute_per_employee: f64,
    /// tCO2e per employee per year from office waste.
    pub waste_per_employee: f64,
    /// tCO2e per internal-combustion fleet vehicle per year.
    pub fleet_vehicle_annual: f64,
    /// kWh charged per electric fleet vehicle per year.
    pub ev_kwh_annual: f64,
    pub source: String,
}

/// Use-phase factors for sold products, kg CO2e per unit per year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUseFactors {
    pub electric_low: f64,
    pub electric_medium: f64,
    pub electric_high: f64,
    pub fuel_consuming: f64,
    pub source: String,
}

impl ProductUseFactors {
    pub fn electric_tier(&self, tier: EnergyIntensityTier) -> f64 {
        match tier {
            EnergyIntensityTier::Low => self.electric_low,
            EnergyIntensityTier::Medium => self.electric_medium,
            EnergyIntensityTier::High => self.electric_high,
        }
    }
}

/// Disposal factors, kg CO2e per kg of waste.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndOfLifeFactors {
    /// Blended disposal-route factor used by the end-of-life screening term.
    pub mixed_waste: f64,
    pub landfill: f64,
    pub incineration: f64,
    pub recycling: f64,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    pub version: String,
    pub last_updated: NaiveDate,
    pub sources: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum FactorTableError {
    #[error("factor table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("grid table is missing the fallback country '{DEFAULT_COUNTRY}'")]
    MissingDefaultCountry,
    #[error("building intensity table is missing the fallback region '{}'", DEFAULT_REGION.label())]
    MissingDefaultRegion,
    #[error("building intensity for '{building}' is missing in the fallback region")]
    MissingDefaultIntensity { building: &'static str },
    #[error("{table} factor '{key}' must be a positive finite number, got {value}")]
    NonPositiveFactor {
        table: &'static str,
        key: String,
        value: f64,
    },
    #[error("{table} entry '{key}' has an empty provenance source")]
    MissingSource { table: &'static str, key: String },
}

impl FactorTable {
    /// The built-in reference table shipped with the crate.
    pub fn baseline() -> Self {
        Self::from_json_str(BASELINE_JSON).expect("embedded baseline factor table is valid")
    }

    /// Parses and validates an operator-supplied replacement table.
    pub fn from_json_str(raw: &str) -> Result<Self, FactorTableError> {
        let table: Self = serde_json::from_str(raw)?;
        table.validate()?;
        Ok(table)
    }

    /// Checks every factor is positive and carries provenance, and that the
    /// fallback rows the total lookups rely on actually exist.
    pub fn validate(&self) -> Result<(), FactorTableError> {
        for (id, industry) in &self.industries {
            check_positive("industry", id, industry.revenue_intensity)?;
            check_source("industry", id, &industry.source)?;
        }

        if !self.grid.contains_key(DEFAULT_COUNTRY) {
            return Err(FactorTableError::MissingDefaultCountry);
        }
        for (country, grid) in &self.grid {
            check_positive("grid", country, grid.location_based)?;
            check_positive("grid", country, grid.upstream)?;
            check_positive("grid", country, grid.td_loss)?;
            check_source("grid", country, &grid.source)?;
        }

        for (id, fuel) in &self.fuels {
            check_positive("fuel", id, fuel.combustion)?;
            if let Some(per_therm) = fuel.combustion_per_therm {
                check_positive("fuel", id, per_therm)?;
            }
            check_positive("fuel", id, fuel.upstream)?;
            check_source("fuel", id, &fuel.source)?;
        }

        let default_region = self
            .building_intensity
            .by_region
            .get(&DEFAULT_REGION)
            .ok_or(FactorTableError::MissingDefaultRegion)?;
        for building in BuildingType::ordered() {
            if !default_region.contains_key(&building) {
                return Err(FactorTableError::MissingDefaultIntensity {
                    building: building.label(),
                });
            }
        }
        for intensities in self.building_intensity.by_region.values() {
            for (building, intensity) in intensities {
                check_positive("building intensity", building.label(), *intensity)?;
            }
        }
        check_source("building intensity", "table", &self.building_intensity.source)?;

        let transport = &self.transport;
        for (key, value) in [
            ("truck", transport.truck),
            ("rail", transport.rail),
            ("air", transport.air),
            ("sea", transport.sea),
            ("parcel_local", transport.parcel_local),
            ("parcel_regional", transport.parcel_regional),
            ("parcel_national", transport.parcel_national),
            ("parcel_international", transport.parcel_international),
        ] {
            check_positive("transport", key, value)?;
        }
        check_source("transport", "table", &transport.source)?;

        let spend = &self.spend_based;
        for (key, value) in [
            ("raw_materials_general", spend.raw_materials_general),
            ("professional_services", spend.professional_services),
            ("capital_equipment", spend.capital_equipment),
            ("goods_for_resale_general", spend.goods_for_resale_general),
            ("business_travel", spend.business_travel),
        ] {
            check_positive("spend-based", key, value)?;
        }
        check_source("spend-based", "table", &spend.source)?;

        let operational = &self.operational;
        for (key, value) in [
            ("commute_per_employee", operational.commute_per_employee),
            ("waste_per_employee", operational.waste_per_employee),
            ("fleet_vehicle_annual", operational.fleet_vehicle_annual),
            ("ev_kwh_annual", operational.ev_kwh_annual),
        ] {
            check_positive("operational", key, value)?;
        }
        check_source("operational", "table", &operational.source)?;

        let product = &self.product_use;
        for (key, value) in [
            ("electric_low", product.electric_low),
            ("electric_medium", product.electric_medium),
            ("electric_high", product.electric_high),
            ("fuel_consuming", product.fuel_consuming),
        ] {
            check_positive("product use", key, value)?;
        }
        check_source("product use", "table", &product.source)?;

        let end_of_life = &self.end_of_life;
        for (key, value) in [
            ("mixed_waste", end_of_life.mixed_waste),
            ("landfill", end_of_life.landfill),
            ("incineration", end_of_life.incineration),
            ("recycling", end_of_life.recycling),
        ] {
            check_positive("end-of-life", key, value)?;
        }
        check_source("end-of-life", "table", &end_of_life.source)?;

        Ok(())
    }

    pub fn industry(&self, id: &str) -> Option<&IndustryFactor> {
        self.industries.get(id)
    }

    /// Grid factors for a country, falling back to [`DEFAULT_COUNTRY`].
    /// Validation guarantees the fallback row exists.
    pub fn grid_factor(&self, country: &str) -> &GridFactor {
        self.grid
            .get(country)
            .or_else(|| self.grid.get(DEFAULT_COUNTRY))
            .expect("validated table contains the fallback country")
    }

    pub fn fuel(&self, id: &str) -> Option<&FuelFactor> {
        self.fuels.get(id)
    }

    /// Electricity intensity for a building type in kWh/sqft/year, falling
    /// back to the [`DEFAULT_REGION`] row when the region or building has no
    /// entry.
    pub fn building_kwh_intensity(&self, region: Region, building: BuildingType) -> f64 {
        let lookup = |region: Region| {
            self.building_intensity
                .by_region
                .get(&region)
                .and_then(|intensities| intensities.get(&building))
                .copied()
        };
        lookup(region).or_else(|| lookup(DEFAULT_REGION)).expect(
            "validated table covers every building type in the fallback region",
        )
    }

    /// Per-shipment factor for a distribution method; an undeclared method
    /// is treated as regional parcel distribution.
    pub fn shipment_factor(&self, method: Option<DistributionMethod>) -> f64 {
        match method {
            Some(DistributionMethod::Local) => self.transport.parcel_local,
            Some(DistributionMethod::National) => self.transport.parcel_national,
            Some(DistributionMethod::International) => self.transport.parcel_international,
            Some(DistributionMethod::Regional) | None => self.transport.parcel_regional,
        }
    }
}

fn check_positive(table: &'static str, key: &str, value: f64) -> Result<(), FactorTableError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FactorTableError::NonPositiveFactor {
            table,
            key: key.to_string(),
            value,
        })
    }
}

fn check_source(table: &'static str, key: &str, source: &str) -> Result<(), FactorTableError> {
    if source.trim().is_empty() {
        Err(FactorTableError::MissingSource {
            table,
            key: key.to_string(),
        })
    } else {
        Ok(())
    }
}
