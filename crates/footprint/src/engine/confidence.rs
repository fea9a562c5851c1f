use super::profile::{BuildingType, CompanyProfile};
use super::results::{ConfidenceLevel, ConfidenceReport};

/// Fixed question inventory the coverage score is measured against.
const TOTAL_QUESTIONS: u8 = 27;

/// Counts how many of the recognized questionnaire fields were answered.
/// Grouped fields (fleet, sold products) only count when their group was
/// declared at all. This is a coverage heuristic, not a statistical
/// confidence interval.
pub(crate) fn confidence_report(profile: &CompanyProfile) -> ConfidenceReport {
    let mut answered: u8 = 0;

    let basics = &profile.basics;
    answered += u8::from(basics.revenue.is_some());
    answered += u8::from(basics.industry.is_some());
    answered += u8::from(basics.employees.is_some());
    answered += u8::from(basics.primary_region.is_some());
    answered += u8::from(basics.hq_country.is_some());

    for building in BuildingType::ordered() {
        let declared = profile
            .operations
            .floor_area
            .get(&building)
            .is_some_and(|area| *area > 0.0);
        answered += u8::from(declared);
    }

    if let Some(hvac) = &profile.operations.hvac {
        answered += u8::from(hvac.heating);
        answered += u8::from(hvac.air_conditioning);
        answered += u8::from(hvac.heating_source.is_some());
    }

    if let Some(fleet) = &profile.operations.fleet {
        answered += 1;
        answered += u8::from(fleet.vehicles.is_some());
        answered += u8::from(fleet.electric_fraction.is_some());
    }

    let purchased = &profile.supply_chain.purchased_goods;
    answered += u8::from(purchased.raw_materials.is_some());
    answered += u8::from(purchased.services.is_some());
    answered += u8::from(purchased.capital_equipment.is_some());

    answered += u8::from(profile.supply_chain.suppliers.any_declared());

    let distribution = &profile.supply_chain.distribution;
    answered += u8::from(distribution.annual_shipments.is_some());
    answered += u8::from(distribution.method.is_some());

    if let Some(products) = &profile.supply_chain.products {
        if products.kind.is_some() {
            answered += 1;
            answered += u8::from(products.annual_units_sold.is_some());
            answered += u8::from(products.average_lifetime_years.is_some());
        }
    }

    answered += u8::from(profile.travel.travel_budget.is_some());

    let renewable_declared = profile
        .energy
        .renewable
        .as_ref()
        .is_some_and(|renewable| renewable.purchases);
    answered += u8::from(renewable_declared);

    let score = (f64::from(answered) / f64::from(TOTAL_QUESTIONS) * 100.0).round() as u8;

    let level = if score >= 80 {
        ConfidenceLevel::High
    } else if score >= 60 {
        ConfidenceLevel::MediumHigh
    } else if score >= 40 {
        ConfidenceLevel::Medium
    } else if score >= 20 {
        ConfidenceLevel::MediumLow
    } else {
        ConfidenceLevel::Low
    };

    ConfidenceReport {
        score,
        level,
        questions_answered: answered,
        total_questions: TOTAL_QUESTIONS,
    }
}
