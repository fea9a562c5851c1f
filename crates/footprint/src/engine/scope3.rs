use super::profile::{CompanyProfile, EnergyIntensityTier, ProductKind};
use super::results::{
    Assumption, AssumptionCategory, Scope1Breakdown, Scope2Breakdown, Scope3Breakdown,
};
use super::{fraction_or_zero, value_or_zero};
use crate::factors::FactorTable;

/// Upstream fuel/energy supply-chain emissions modeled as a fixed share of
/// direct operational emissions (GHG Protocol category 3 screening proxy).
const UPSTREAM_ENERGY_SHARE: f64 = 0.20;

/// Product mass shipped per revenue dollar, kg/$: manufacturers and food
/// producers move substantially more physical goods than service firms.
const MASS_PER_DOLLAR_INDUSTRIAL: f64 = 0.5;
const MASS_PER_DOLLAR_DEFAULT: f64 = 0.01;

/// Value-chain emissions across eleven fixed categories. Categories are
/// evaluated in a fixed order; the fuel & energy term reads the
/// already-computed Scope 1 and Scope 2 results passed in as parameters.
/// `upstream_transport` and `investments` are reserved and stay zero.
pub(crate) fn compute(
    profile: &CompanyProfile,
    factors: &FactorTable,
    scope1: &Scope1Breakdown,
    scope2: &Scope2Breakdown,
) -> (Scope3Breakdown, Vec<Assumption>) {
    let mut breakdown = Scope3Breakdown::default();
    let mut assumptions = Vec::new();

    let spend = &factors.spend_based;

    // 1. Purchased goods and services, spend-based.
    let raw_materials = value_or_zero(profile.supply_chain.purchased_goods.raw_materials);
    let services = value_or_zero(profile.supply_chain.purchased_goods.services);
    breakdown.purchased_goods = (raw_materials * spend.raw_materials_general
        + services * spend.professional_services)
        / 1000.0;
    if breakdown.purchased_goods > 0.0 {
        assumptions.push(Assumption {
            category: AssumptionCategory::PurchasedGoods,
            formula: format!(
                "${raw_materials:.0} materials x {} kg/$; ${services:.0} services x {} kg/$",
                spend.raw_materials_general, spend.professional_services
            ),
            source: spend.source.clone(),
            user_provided: true,
            data_point: Some(format!("${:.0}", raw_materials + services)),
        });
    }

    // 2. Capital goods, spend-based.
    let capex = value_or_zero(profile.supply_chain.purchased_goods.capital_equipment);
    breakdown.capital_goods = capex * spend.capital_equipment / 1000.0;
    if capex > 0.0 {
        assumptions.push(Assumption {
            category: AssumptionCategory::CapitalGoods,
            formula: format!(
                "${capex:.0} capital equipment x {} kg CO2e/$",
                spend.capital_equipment
            ),
            source: spend.source.clone(),
            user_provided: true,
            data_point: Some(format!("${capex:.0}")),
        });
    }

    // 3. Fuel & energy related: fixed share of the scope 1 and 2 totals.
    let scope1_total = scope1.total();
    let scope2_total = scope2.total();
    breakdown.fuel_energy =
        scope1_total * UPSTREAM_ENERGY_SHARE + scope2_total * UPSTREAM_ENERGY_SHARE;
    if breakdown.fuel_energy > 0.0 {
        assumptions.push(Assumption {
            category: AssumptionCategory::FuelAndEnergy,
            formula: format!(
                "20% of Scope 1 ({scope1_total:.1} tCO2e) + 20% of Scope 2 ({scope2_total:.1} tCO2e) for upstream emissions"
            ),
            source: "GHG Protocol".to_string(),
            user_provided: false,
            data_point: None,
        });
    }

    // 4. Operational waste, per-employee average.
    let employees = value_or_zero(profile.basics.employees);
    let waste_rate = factors.operational.waste_per_employee;
    breakdown.waste = employees * waste_rate;
    if employees > 0.0 {
        assumptions.push(Assumption {
            category: AssumptionCategory::Waste,
            formula: format!("{employees:.0} employees x {waste_rate} tCO2e/employee/year"),
            source: factors.operational.source.clone(),
            user_provided: true,
            data_point: Some(format!("{employees:.0} employees")),
        });
    }

    // 5. Business travel, spend-based.
    let travel_budget = value_or_zero(profile.travel.travel_budget);
    let travel_rate = spend.business_travel;
    breakdown.business_travel = travel_budget * travel_rate;
    if travel_budget > 0.0 {
        assumptions.push(Assumption {
            category: AssumptionCategory::BusinessTravel,
            formula: format!("${travel_budget:.0} travel budget x {travel_rate} tCO2e/$"),
            source: spend.source.clone(),
            user_provided: true,
            data_point: Some(format!("${travel_budget:.0}")),
        });
    }

    // 6. Commuting, scaled by the in-office share of the workforce.
    let remote_fraction = fraction_or_zero(profile.travel.remote_work_fraction);
    let commute_rate = factors.operational.commute_per_employee;
    breakdown.commuting = employees * (1.0 - remote_fraction) * commute_rate;
    if breakdown.commuting > 0.0 {
        assumptions.push(Assumption {
            category: AssumptionCategory::Commuting,
            formula: format!(
                "{employees:.0} employees x {:.0}% in-office x {commute_rate} tCO2e/employee/year",
                (1.0 - remote_fraction) * 100.0
            ),
            source: factors.operational.source.clone(),
            user_provided: true,
            data_point: Some(format!(
                "{employees:.0} employees, {:.0}% remote",
                remote_fraction * 100.0
            )),
        });
    }

    // 7. Downstream transport, per-shipment.
    let shipments = value_or_zero(profile.supply_chain.distribution.annual_shipments);
    let method = profile.supply_chain.distribution.method;
    let per_shipment = factors.shipment_factor(method);
    breakdown.downstream_transport = shipments * per_shipment / 1000.0;
    if shipments > 0.0 {
        let method_label = method.map(|m| m.label()).unwrap_or("regional");
        assumptions.push(Assumption {
            category: AssumptionCategory::DownstreamTransport,
            formula: format!(
                "{shipments:.0} shipments x {per_shipment} kg CO2e/shipment ({method_label})"
            ),
            source: factors.transport.source.clone(),
            user_provided: true,
            data_point: Some(format!("{shipments:.0} shipments")),
        });
    }

    // 8. Use of sold products, only when a product type was declared.
    if let Some(products) = &profile.supply_chain.products {
        if let Some(kind) = products.kind {
            let units = value_or_zero(products.annual_units_sold);
            let lifetime = products
                .average_lifetime_years
                .filter(|years| years.is_finite() && *years > 0.0)
                .unwrap_or(1.0);

            let per_unit_annual = match kind {
                ProductKind::ElectricDevices => factors.product_use.electric_tier(
                    products
                        .energy_intensity
                        .unwrap_or(EnergyIntensityTier::Medium),
                ),
                ProductKind::FuelConsuming => factors.product_use.fuel_consuming,
                ProductKind::Passive => 0.0,
            };

            breakdown.use_of_products = units * lifetime * per_unit_annual / 1000.0;
            if breakdown.use_of_products > 0.0 {
                assumptions.push(Assumption {
                    category: AssumptionCategory::UseOfSoldProducts,
                    formula: format!(
                        "{units:.0} units x {lifetime} year lifetime x {per_unit_annual} kg CO2e/year"
                    ),
                    source: factors.product_use.source.clone(),
                    user_provided: true,
                    data_point: Some(format!("{units:.0} units, {}", kind.label())),
                });
            }
        }
    }

    // 9. End-of-life treatment of sold products, revenue-mass proxy.
    let revenue = value_or_zero(profile.basics.revenue);
    let industry = profile.basics.industry.as_deref().unwrap_or("");
    let mass_per_dollar = if industry.contains("manufacturing") || industry.contains("food") {
        MASS_PER_DOLLAR_INDUSTRIAL
    } else {
        MASS_PER_DOLLAR_DEFAULT
    };
    let waste_factor = factors.end_of_life.mixed_waste;
    breakdown.end_of_life = revenue * mass_per_dollar * waste_factor / 1000.0;
    if breakdown.end_of_life > 0.0 {
        assumptions.push(Assumption {
            category: AssumptionCategory::EndOfLife,
            formula: format!(
                "${revenue:.0} revenue x {mass_per_dollar} kg/$ x {waste_factor} kg CO2e/kg waste"
            ),
            source: factors.end_of_life.source.clone(),
            user_provided: false,
            data_point: None,
        });
    }

    (breakdown, assumptions)
}
