use crate::infra::{load_engine, load_factor_table};
use clap::Args;
use footprint::config::AppConfig;
use footprint::engine::profile::{
    BuildingType, CompanyBasics, CompanyProfile, CoolingIntensity, Distribution,
    DistributionMethod, FleetProfile, HeatingSource, HvacProfile, Operations, PurchasedGoods,
    Region, SupplierGeography, SupplyChain, TravelProfile,
};
use footprint::engine::{FootprintEngine, FootprintResults};
use footprint::error::AppError;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    /// Path to a company profile JSON file
    pub(crate) profile: PathBuf,
    /// Optional factor table JSON overriding the embedded baseline
    #[arg(long)]
    pub(crate) factors: Option<PathBuf>,
    /// Include the methodology document in the output
    #[arg(long)]
    pub(crate) methodology: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full assumption trail alongside the summary
    #[arg(long)]
    pub(crate) show_assumptions: bool,
}

pub(crate) fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let CalculateArgs {
        profile,
        factors,
        methodology,
    } = args;

    // An explicit --factors path wins over the APP_FACTORS_PATH override.
    let engine = match factors {
        Some(path) => FootprintEngine::new(load_factor_table(&path)?),
        None => load_engine(&AppConfig::load()?.factors)?,
    };

    let raw = fs::read_to_string(profile)?;
    let profile: CompanyProfile = serde_json::from_str(&raw).map_err(AppError::Profile)?;

    let results = engine.calculate(&profile);
    let output = if methodology {
        serde_json::json!({
            "results": results,
            "methodology": engine.methodology(&results),
        })
    } else {
        serde_json::json!({ "results": results })
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&output).map_err(AppError::Profile)?
    );
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = FootprintEngine::baseline();
    let profile = sample_company();
    let results = engine.calculate(&profile);

    println!("Footprint estimation demo");
    println!(
        "Sample company: growing US machinery manufacturer, {} employees",
        profile.basics.employees.unwrap_or_default()
    );
    render_results(&results);

    if args.show_assumptions {
        println!("\nAssumption trail ({} entries)", results.assumptions.len());
        for assumption in &results.assumptions {
            let flag = if assumption.user_provided {
                "user data"
            } else {
                "reference"
            };
            println!(
                "  [{flag}] {}: {} ({})",
                assumption.category.label(),
                assumption.formula,
                assumption.source
            );
        }
    }

    Ok(())
}

fn render_results(results: &FootprintResults) {
    let summary = &results.summary;
    println!("\nEstimated annual footprint: {:.1} tCO2e", summary.total);
    println!("  Scope 1 (direct):        {:.1} tCO2e", summary.scope1);
    println!("  Scope 2 (electricity):   {:.1} tCO2e", summary.scope2);
    println!("  Scope 3 (value chain):   {:.1} tCO2e", summary.scope3);

    println!(
        "\nIntensity: {:.1} tCO2e/employee, {:.1} tCO2e/$M revenue",
        results.intensity.per_employee, results.intensity.per_revenue_million
    );
    println!(
        "Industry benchmark: {:.0} tCO2e ({:+.1}% variance)",
        results.industry_comparison.industry_average, results.industry_comparison.variance_pct
    );
    println!(
        "Confidence: {} ({}% — {}/{} questions answered)",
        results.confidence.level.label(),
        results.confidence.score,
        results.confidence.questions_answered,
        results.confidence.total_questions
    );

    for warning in &results.warnings {
        println!("Warning: {}", warning.message);
    }
}

fn sample_company() -> CompanyProfile {
    let mut floor_area = BTreeMap::new();
    floor_area.insert(BuildingType::ManufacturingLight, 45_000.0);
    floor_area.insert(BuildingType::Office, 8_000.0);

    CompanyProfile {
        basics: CompanyBasics {
            revenue: Some(25_000_000.0),
            industry: Some("manufacturing_machinery".to_string()),
            employees: Some(120.0),
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
            fleet: Some(FleetProfile {
                vehicles: Some(12.0),
                electric_fraction: Some(0.25),
            }),
        },
        supply_chain: SupplyChain {
            purchased_goods: PurchasedGoods {
                raw_materials: Some(6_000_000.0),
                services: Some(800_000.0),
                capital_equipment: Some(1_200_000.0),
            },
            suppliers: SupplierGeography {
                domestic: true,
                regional: true,
                international: false,
            },
            distribution: Distribution {
                annual_shipments: Some(4_500.0),
                method: Some(DistributionMethod::National),
            },
            products: None,
        },
        travel: TravelProfile {
            travel_budget: Some(180_000.0),
            remote_work_fraction: Some(0.1),
        },
        energy: Default::default(),
    }
}
