use super::profile::{BuildingType, CompanyProfile, CoolingIntensity, HeatingSource};
use super::results::{Assumption, AssumptionCategory, Scope2Breakdown};
use super::{fraction_or_zero, value_or_zero};
use crate::factors::{FactorTable, DEFAULT_COUNTRY, DEFAULT_REGION};

const HVAC_COOLING_HIGH: f64 = 0.30;
const HVAC_COOLING_MODERATE: f64 = 0.15;
const HVAC_ELECTRIC_HEATING: f64 = 0.30;

/// Purchased electricity: building demand modeled from floor area and
/// regional intensity benchmarks, EV charging, a renewable-purchase offset,
/// and the HQ country's location-based grid factor.
pub(crate) fn compute(
    profile: &CompanyProfile,
    factors: &FactorTable,
) -> (Scope2Breakdown, Vec<Assumption>) {
    let mut assumptions = Vec::new();
    let mut total_kwh = 0.0;

    let region = profile.basics.primary_region.unwrap_or(DEFAULT_REGION);
    let hvac = profile.operations.hvac.as_ref();

    let mut multiplier = 1.0;
    if let Some(hvac) = hvac {
        if hvac.air_conditioning {
            match hvac.cooling_intensity.unwrap_or(CoolingIntensity::Moderate) {
                CoolingIntensity::High => multiplier += HVAC_COOLING_HIGH,
                CoolingIntensity::Moderate => multiplier += HVAC_COOLING_MODERATE,
                CoolingIntensity::Low => {}
            }
        }
        if hvac.heating_source == Some(HeatingSource::Electric) {
            multiplier += HVAC_ELECTRIC_HEATING;
        }
    }

    for building in BuildingType::ordered() {
        let sqft = value_or_zero(profile.operations.floor_area.get(&building).copied());
        if sqft <= 0.0 {
            continue;
        }

        let base_intensity = factors.building_kwh_intensity(region, building);
        let annual_kwh = sqft * base_intensity * multiplier;
        total_kwh += annual_kwh;

        assumptions.push(Assumption {
            category: AssumptionCategory::BuildingElectricity,
            formula: format!(
                "{sqft:.0} sqft {} x {base_intensity} kWh/sqft/year x {multiplier:.2} HVAC = {annual_kwh:.0} kWh",
                building.label()
            ),
            source: factors.building_intensity.source.clone(),
            user_provided: true,
            data_point: Some(format!("{sqft:.0} sqft {}", building.label())),
        });
    }

    if let Some(fleet) = &profile.operations.fleet {
        let vehicles = value_or_zero(fleet.vehicles);
        let electric_vehicles = vehicles * fraction_or_zero(fleet.electric_fraction);

        if electric_vehicles > 0.0 {
            let kwh_per_vehicle = factors.operational.ev_kwh_annual;
            total_kwh += electric_vehicles * kwh_per_vehicle;

            assumptions.push(Assumption {
                category: AssumptionCategory::ElectricVehicles,
                formula: format!(
                    "{electric_vehicles:.1} EVs x {kwh_per_vehicle:.0} kWh/vehicle/year"
                ),
                source: factors.operational.source.clone(),
                user_provided: true,
                data_point: Some(format!("{electric_vehicles:.0} electric vehicles")),
            });
        }
    }

    let country = profile.basics.hq_country.as_deref().unwrap_or(DEFAULT_COUNTRY);
    let grid = factors.grid_factor(country);
    let renewable_fraction = profile.energy.renewable_fraction();
    let net_kwh = total_kwh * (1.0 - renewable_fraction);

    let breakdown = Scope2Breakdown {
        // Grid factor is kg CO2e per kWh; divide by 1000 for tonnes.
        purchased_electricity: net_kwh * grid.location_based / 1000.0,
    };

    // Recorded even when net energy is zero: the grid factor is a fixed
    // reference value, not a user answer.
    assumptions.push(Assumption {
        category: AssumptionCategory::GridEmissionFactor,
        formula: format!(
            "{net_kwh:.0} kWh x {} kg CO2e/kWh",
            grid.location_based
        ),
        source: grid.source.clone(),
        user_provided: false,
        data_point: None,
    });

    (breakdown, assumptions)
}
