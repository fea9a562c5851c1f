use super::profile::{CompanyProfile, HeatingSource, Region};
use super::results::{Assumption, AssumptionCategory, Scope1Breakdown};
use super::{fraction_or_zero, value_or_zero};
use crate::factors::{FactorTable, DEFAULT_REGION};

/// Annual heating demand in therms per square foot, by climate band.
const HEATING_THERMS_PER_SQFT_TEMPERATE: f64 = 0.8;
const HEATING_THERMS_PER_SQFT_MILD: f64 = 0.2;
const HEATING_THERMS_PER_SQFT_DEFAULT: f64 = 0.5;

fn heating_intensity(region: Region) -> f64 {
    match region {
        Region::NorthAmerica | Region::Europe => HEATING_THERMS_PER_SQFT_TEMPERATE,
        Region::SouthAmerica | Region::Africa => HEATING_THERMS_PER_SQFT_MILD,
        Region::Asia | Region::Oceania => HEATING_THERMS_PER_SQFT_DEFAULT,
    }
}

/// Direct emissions: facility heating fuel and the internal-combustion share
/// of an owned fleet. Total over any profile; a fuel id with no table entry
/// silently contributes zero.
pub(crate) fn compute(
    profile: &CompanyProfile,
    factors: &FactorTable,
) -> (Scope1Breakdown, Vec<Assumption>) {
    let mut breakdown = Scope1Breakdown::default();
    let mut assumptions = Vec::new();

    let total_sqft = profile.operations.total_floor_area();
    if total_sqft > 0.0 {
        if let Some(hvac) = profile.operations.hvac.as_ref().filter(|hvac| hvac.heating) {
            if let Some(fuel_id) = hvac.heating_source.and_then(HeatingSource::fuel_id) {
                let region = profile.basics.primary_region.unwrap_or(DEFAULT_REGION);
                let intensity = heating_intensity(region);
                let therms = total_sqft * intensity;

                if let Some(per_therm) = factors
                    .fuel(fuel_id)
                    .and_then(|fuel| fuel.combustion_per_therm)
                {
                    // Factor is kg CO2e per therm; divide by 1000 for tonnes.
                    breakdown.facilities = therms * per_therm / 1000.0;

                    let source = factors
                        .fuel(fuel_id)
                        .map(|fuel| fuel.source.clone())
                        .unwrap_or_default();
                    assumptions.push(Assumption {
                        category: AssumptionCategory::FacilitiesHeating,
                        formula: format!(
                            "{total_sqft:.0} sqft x {intensity} therms/sqft x {per_therm} kg CO2e/therm"
                        ),
                        source,
                        user_provided: true,
                        data_point: Some(format!("{total_sqft:.0} sqft, {fuel_id} heating")),
                    });
                }
            }
        }
    }

    if let Some(fleet) = &profile.operations.fleet {
        let vehicles = value_or_zero(fleet.vehicles);
        let electric = fraction_or_zero(fleet.electric_fraction);
        let ice_vehicles = vehicles * (1.0 - electric);

        if ice_vehicles > 0.0 {
            let per_vehicle = factors.operational.fleet_vehicle_annual;
            breakdown.fleet = ice_vehicles * per_vehicle;

            assumptions.push(Assumption {
                category: AssumptionCategory::VehicleFleet,
                formula: format!(
                    "{ice_vehicles:.1} ICE vehicles x {per_vehicle} tCO2e/vehicle/year"
                ),
                source: factors.operational.source.clone(),
                user_provided: true,
                data_point: Some(format!("{ice_vehicles:.0} ICE vehicles")),
            });
        }
    }

    (breakdown, assumptions)
}
