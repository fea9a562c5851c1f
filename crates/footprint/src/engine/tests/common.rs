use std::collections::BTreeMap;

use crate::engine::profile::{
    BuildingType, CompanyBasics, CompanyProfile, CoolingIntensity, FleetProfile, HeatingSource,
    HvacProfile, Operations, PurchasedGoods, Region, SupplierGeography, TravelProfile,
};
use crate::engine::FootprintEngine;

pub(super) fn engine() -> FootprintEngine {
    FootprintEngine::baseline()
}

/// Mid-size US software company: one office, gas heat, moderate cooling,
/// no owned fleet, a services-heavy supply chain.
pub(super) fn tech_profile() -> CompanyProfile {
    let mut floor_area = BTreeMap::new();
    floor_area.insert(BuildingType::Office, 10_000.0);

    CompanyProfile {
        basics: CompanyBasics {
            revenue: Some(5_000_000.0),
            industry: Some("tech_software".to_string()),
            employees: Some(50.0),
            primary_region: Some(Region::NorthAmerica),
            hq_country: Some("US".to_string()),
        },
        operations: Operations {
            floor_area,
            hvac: Some(HvacProfile {
                heating: true,
                air_conditioning: true,
                cooling_intensity: Some(CoolingIntensity::Moderate),
                heating_source: Some(HeatingSource::NaturalGas),
            }),
            fleet: None,
        },
        supply_chain: crate::engine::profile::SupplyChain {
            purchased_goods: PurchasedGoods {
                raw_materials: None,
                services: Some(500_000.0),
                capital_equipment: Some(200_000.0),
            },
            suppliers: SupplierGeography {
                domestic: true,
                regional: false,
                international: false,
            },
            ..Default::default()
        },
        travel: TravelProfile {
            travel_budget: Some(100_000.0),
            remote_work_fraction: Some(0.4),
        },
        energy: Default::default(),
    }
}

/// Fleet-dominated operation with no supply-chain answers, so direct
/// emissions dwarf the value chain.
pub(super) fn fleet_heavy_profile() -> CompanyProfile {
    CompanyProfile {
        operations: Operations {
            fleet: Some(FleetProfile {
                vehicles: Some(100.0),
                electric_fraction: Some(0.0),
            }),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs().max(1.0) * 1e-9;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
