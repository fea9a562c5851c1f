use std::collections::BTreeMap;

use super::common::{assert_close, engine, tech_profile};
use crate::engine::profile::{
    BuildingType, CompanyProfile, CoolingIntensity, DistributionMethod, EnergyIntensityTier,
    FleetProfile, HeatingSource, HvacProfile, ProductKind, Region, RenewablePurchases,
    SoldProducts,
};
use crate::engine::results::AssumptionCategory;
use crate::engine::{scope1, scope2, scope3};

#[test]
fn gas_heated_office_in_north_america() {
    let engine = engine();
    let profile = tech_profile();

    let (breakdown, assumptions) = scope1::compute(&profile, engine.factors());

    // 10,000 sqft x 0.8 therms/sqft x 5.3 kg/therm = 42.4 tCO2e.
    assert_close(breakdown.facilities, 42.4);
    assert_close(breakdown.fleet, 0.0);
    assert!(assumptions
        .iter()
        .any(|assumption| assumption.category == AssumptionCategory::FacilitiesHeating));
}

#[test]
fn mild_climate_cuts_heating_demand_to_a_quarter() {
    let engine = engine();
    let mut profile = tech_profile();
    profile.basics.primary_region = Some(Region::SouthAmerica);

    let (breakdown, _) = scope1::compute(&profile, engine.factors());

    // 0.2 therms/sqft instead of 0.8.
    assert_close(breakdown.facilities, 42.4 / 4.0);
}

#[test]
fn electric_heating_produces_no_direct_emissions() {
    let engine = engine();
    let mut profile = tech_profile();
    if let Some(hvac) = profile.operations.hvac.as_mut() {
        hvac.heating_source = Some(HeatingSource::Electric);
    }

    let (breakdown, assumptions) = scope1::compute(&profile, engine.factors());

    assert_close(breakdown.facilities, 0.0);
    assert!(assumptions.is_empty());
}

#[test]
fn unknown_heating_source_contributes_nothing() {
    let engine = engine();
    let mut profile = tech_profile();
    if let Some(hvac) = profile.operations.hvac.as_mut() {
        hvac.heating_source = Some(HeatingSource::Unknown);
    }

    let (breakdown, _) = scope1::compute(&profile, engine.factors());

    assert_close(breakdown.facilities, 0.0);
}

#[test]
fn fleet_counts_only_internal_combustion_vehicles() {
    let engine = engine();
    let mut profile = CompanyProfile::default();
    profile.operations.fleet = Some(FleetProfile {
        vehicles: Some(10.0),
        electric_fraction: Some(0.2),
    });

    let (breakdown, _) = scope1::compute(&profile, engine.factors());

    // 8 ICE vehicles x 4.6 tCO2e/vehicle.
    assert_close(breakdown.fleet, 36.8);
}

#[test]
fn office_electricity_uses_hvac_multiplier_and_grid_factor() {
    let engine = engine();
    let profile = tech_profile();

    let (breakdown, assumptions) = scope2::compute(&profile, engine.factors());

    // 10,000 sqft x 15.5 kWh/sqft x 1.15 = 178,250 kWh x 0.386 kg/kWh.
    assert_close(breakdown.purchased_electricity, 178_250.0 * 0.386 / 1000.0);
    assert!(assumptions
        .iter()
        .any(|assumption| assumption.category == AssumptionCategory::BuildingElectricity));
}

#[test]
fn electric_heating_and_high_cooling_raise_the_multiplier() {
    let engine = engine();
    let mut profile = tech_profile();
    profile.operations.hvac = Some(HvacProfile {
        heating: true,
        air_conditioning: true,
        cooling_intensity: Some(CoolingIntensity::High),
        heating_source: Some(HeatingSource::Electric),
    });

    let (breakdown, _) = scope2::compute(&profile, engine.factors());

    // Multiplier 1.0 + 0.30 cooling + 0.30 electric heat = 1.60.
    assert_close(
        breakdown.purchased_electricity,
        10_000.0 * 15.5 * 1.6 * 0.386 / 1000.0,
    );
}

#[test]
fn renewable_purchases_offset_grid_electricity() {
    let engine = engine();
    let mut profile = tech_profile();
    profile.energy.renewable = Some(RenewablePurchases {
        purchases: true,
        fraction: Some(0.5),
    });

    let (full, _) = scope2::compute(&tech_profile(), engine.factors());
    let (halved, _) = scope2::compute(&profile, engine.factors());

    assert_close(halved.purchased_electricity, full.purchased_electricity / 2.0);
}

#[test]
fn electric_fleet_charges_from_the_grid() {
    let engine = engine();
    let mut profile = CompanyProfile::default();
    profile.operations.fleet = Some(FleetProfile {
        vehicles: Some(10.0),
        electric_fraction: Some(1.0),
    });

    let (breakdown, _) = scope2::compute(&profile, engine.factors());

    // 10 EVs x 3,500 kWh against the US fallback grid factor.
    assert_close(breakdown.purchased_electricity, 35_000.0 * 0.386 / 1000.0);
}

#[test]
fn grid_assumption_is_always_recorded_as_reference_data() {
    let engine = engine();
    let profile = CompanyProfile::default();

    let (_, assumptions) = scope2::compute(&profile, engine.factors());

    let grid = assumptions
        .iter()
        .find(|assumption| assumption.category == AssumptionCategory::GridEmissionFactor)
        .expect("grid assumption present");
    assert!(!grid.user_provided);
}

#[test]
fn unknown_country_falls_back_to_us_grid() {
    let engine = engine();
    let mut profile = tech_profile();
    profile.basics.hq_country = Some("ZZ".to_string());

    let (fallback, _) = scope2::compute(&profile, engine.factors());
    let (us, _) = scope2::compute(&tech_profile(), engine.factors());

    assert_close(fallback.purchased_electricity, us.purchased_electricity);
}

#[test]
fn value_chain_categories_for_the_tech_profile() {
    let engine = engine();
    let profile = tech_profile();

    let (scope1, _) = scope1::compute(&profile, engine.factors());
    let (scope2, _) = scope2::compute(&profile, engine.factors());
    let (breakdown, _) = scope3::compute(&profile, engine.factors(), &scope1, &scope2);

    // $500k services x 0.12 kg/$.
    assert_close(breakdown.purchased_goods, 60.0);
    // $200k capital equipment x 0.5 kg/$.
    assert_close(breakdown.capital_goods, 100.0);
    // 20% of both operational scopes.
    assert_close(breakdown.fuel_energy, 0.2 * (scope1.total() + scope2.total()));
    // 50 employees x 0.5 tCO2e.
    assert_close(breakdown.waste, 25.0);
    // $100k travel x 0.00015 tCO2e/$.
    assert_close(breakdown.business_travel, 15.0);
    // 50 employees x 60% in-office x 2.0 tCO2e.
    assert_close(breakdown.commuting, 60.0);
    // $5M revenue x 0.01 kg/$ x 0.034 kg CO2e/kg.
    assert_close(breakdown.end_of_life, 1.7);
    assert_close(breakdown.downstream_transport, 0.0);
    assert_close(breakdown.use_of_products, 0.0);
    assert_close(breakdown.upstream_transport, 0.0);
    assert_close(breakdown.investments, 0.0);
}

#[test]
fn shipments_default_to_the_regional_parcel_factor() {
    let engine = engine();
    let mut profile = CompanyProfile::default();
    profile.supply_chain.distribution.annual_shipments = Some(1_000.0);

    let (breakdown, _) = scope3::compute(
        &profile,
        engine.factors(),
        &Default::default(),
        &Default::default(),
    );

    // 1,000 shipments x 1.2 kg/shipment.
    assert_close(breakdown.downstream_transport, 1.2);
}

#[test]
fn international_shipping_is_the_heaviest_distribution_method() {
    let engine = engine();
    let mut profile = CompanyProfile::default();
    profile.supply_chain.distribution.annual_shipments = Some(1_000.0);
    profile.supply_chain.distribution.method = Some(DistributionMethod::International);

    let (breakdown, _) = scope3::compute(
        &profile,
        engine.factors(),
        &Default::default(),
        &Default::default(),
    );

    // 1,000 shipments x 10.0 kg/shipment.
    assert_close(breakdown.downstream_transport, 10.0);
}

#[test]
fn sold_electric_devices_accrue_use_phase_emissions_over_their_lifetime() {
    let engine = engine();
    let mut profile = CompanyProfile::default();
    profile.supply_chain.products = Some(SoldProducts {
        kind: Some(ProductKind::ElectricDevices),
        annual_units_sold: Some(1_000.0),
        average_lifetime_years: Some(4.0),
        energy_intensity: Some(EnergyIntensityTier::Medium),
    });

    let (breakdown, assumptions) = scope3::compute(
        &profile,
        engine.factors(),
        &Default::default(),
        &Default::default(),
    );

    // 1,000 units x 4 years x 50 kg/year.
    assert_close(breakdown.use_of_products, 200.0);

    let assumption = assumptions
        .iter()
        .find(|assumption| assumption.category == AssumptionCategory::UseOfSoldProducts)
        .expect("use-phase assumption present");
    assert_eq!(
        assumption.data_point.as_deref(),
        Some("1000 units, electric devices")
    );
}

#[test]
fn passive_products_have_no_use_phase() {
    let engine = engine();
    let mut profile = CompanyProfile::default();
    profile.supply_chain.products = Some(SoldProducts {
        kind: Some(ProductKind::Passive),
        annual_units_sold: Some(50_000.0),
        average_lifetime_years: Some(10.0),
        energy_intensity: None,
    });

    let (breakdown, _) = scope3::compute(
        &profile,
        engine.factors(),
        &Default::default(),
        &Default::default(),
    );

    assert_close(breakdown.use_of_products, 0.0);
}

#[test]
fn manufacturers_carry_a_heavier_end_of_life_mass_proxy() {
    let engine = engine();
    let mut profile = CompanyProfile::default();
    profile.basics.revenue = Some(1_000_000.0);
    profile.basics.industry = Some("manufacturing_machinery".to_string());

    let (breakdown, _) = scope3::compute(
        &profile,
        engine.factors(),
        &Default::default(),
        &Default::default(),
    );

    // $1M x 0.5 kg/$ x 0.034 kg CO2e/kg.
    assert_close(breakdown.end_of_life, 17.0);
}

#[test]
fn negative_and_non_finite_answers_are_treated_as_zero() {
    let engine = engine();
    let mut profile = CompanyProfile::default();
    profile.basics.employees = Some(-25.0);
    profile.travel.travel_budget = Some(f64::NAN);
    profile
        .operations
        .floor_area
        .insert(BuildingType::Warehouse, f64::INFINITY);

    let (scope1, _) = scope1::compute(&profile, engine.factors());
    let (scope2, _) = scope2::compute(&profile, engine.factors());
    let (scope3, _) = scope3::compute(&profile, engine.factors(), &scope1, &scope2);

    assert_close(scope1.total(), 0.0);
    assert_close(scope2.total(), 0.0);
    assert_close(scope3.total(), 0.0);
}
