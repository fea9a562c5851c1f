use super::common::{assert_close, engine, tech_profile};
use crate::engine::profile::CompanyProfile;
use crate::engine::results::{ComparisonBand, ConfidenceLevel};
use crate::engine::{confidence, metrics};
use chrono::Utc;

#[test]
fn intensity_is_normalized_by_headcount_and_revenue() {
    let profile = tech_profile();

    let intensity = metrics::intensity_metrics(&profile, 500.0);

    assert_close(intensity.per_employee, 10.0);
    assert_close(intensity.per_revenue_million, 100.0);
}

#[test]
fn intensity_denominators_are_floored_for_sparse_profiles() {
    let intensity = metrics::intensity_metrics(&CompanyProfile::default(), 500.0);

    assert_close(intensity.per_employee, 500.0);
    assert_close(intensity.per_revenue_million, 500.0 * 1_000_000.0);
}

#[test]
fn comparison_uses_the_declared_industry_benchmark() {
    let engine = engine();
    let profile = tech_profile();

    // $5M x 84.3 tCO2e/$M benchmark.
    let comparison = metrics::industry_comparison(&profile, engine.factors(), 421.5);

    assert_close(comparison.industry_average, 422.0);
    assert_eq!(comparison.interpretation, ComparisonBand::Average);
}

#[test]
fn comparison_bands_split_at_ten_percent_variance() {
    let engine = engine();
    let profile = tech_profile();

    let low = metrics::industry_comparison(&profile, engine.factors(), 200.0);
    assert_eq!(low.interpretation, ComparisonBand::BelowAverage);
    assert!(low.variance_pct < -10.0);

    let high = metrics::industry_comparison(&profile, engine.factors(), 600.0);
    assert_eq!(high.interpretation, ComparisonBand::AboveAverage);
    assert!(high.variance_pct > 10.0);
}

#[test]
fn unknown_industry_uses_the_default_benchmark_intensity() {
    let engine = engine();
    let mut profile = tech_profile();
    profile.basics.industry = Some("underwater_basket_weaving".to_string());

    let comparison = metrics::industry_comparison(&profile, engine.factors(), 500.0);

    // $5M x 100 tCO2e/$M default.
    assert_close(comparison.industry_average, 500.0);
    assert_eq!(comparison.interpretation, ComparisonBand::Average);
}

#[test]
fn confidence_counts_answered_questions_against_the_fixed_inventory() {
    let report = confidence::confidence_report(&tech_profile());

    // 5 basics + 1 building + 3 HVAC + 2 spend + 1 suppliers + 1 travel.
    assert_eq!(report.questions_answered, 13);
    assert_eq!(report.total_questions, 27);
    assert_eq!(report.score, 48);
    assert_eq!(report.level, ConfidenceLevel::Medium);
}

#[test]
fn empty_profile_scores_zero_confidence() {
    let report = confidence::confidence_report(&CompanyProfile::default());

    assert_eq!(report.questions_answered, 0);
    assert_eq!(report.score, 0);
    assert_eq!(report.level, ConfidenceLevel::Low);
}

#[test]
fn fully_answered_profile_reaches_high_confidence() {
    let engine = engine();
    let mut profile = tech_profile();
    profile.operations.fleet = Some(crate::engine::profile::FleetProfile {
        vehicles: Some(5.0),
        electric_fraction: Some(0.4),
    });
    profile.supply_chain.purchased_goods.raw_materials = Some(50_000.0);
    profile.supply_chain.distribution.annual_shipments = Some(200.0);
    profile.supply_chain.distribution.method =
        Some(crate::engine::profile::DistributionMethod::National);
    profile.supply_chain.products = Some(crate::engine::profile::SoldProducts {
        kind: Some(crate::engine::profile::ProductKind::Passive),
        annual_units_sold: Some(1_000.0),
        average_lifetime_years: Some(3.0),
        energy_intensity: None,
    });
    profile.energy.renewable = Some(crate::engine::profile::RenewablePurchases {
        purchases: true,
        fraction: Some(0.25),
    });

    let report = confidence::confidence_report(&profile);

    assert!(report.score >= 80, "score was {}", report.score);
    assert_eq!(report.level, ConfidenceLevel::High);

    // The score is reproducible through the full pipeline.
    let results = engine.calculate_at(&profile, Utc::now());
    assert_eq!(results.confidence.score, report.score);
}
