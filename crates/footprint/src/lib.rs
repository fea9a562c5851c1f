//! Screening-level corporate greenhouse-gas footprint engine.
//!
//! The engine takes a normalized [`engine::profile::CompanyProfile`] and a
//! validated [`factors::FactorTable`] and produces a
//! [`engine::FootprintResults`] record: emissions by GHG Protocol scope and
//! category, intensity metrics, an industry comparison, a data-confidence
//! score, and an auditable assumption trail. Every calculator is a pure,
//! total function; sparse or malformed input degrades to zeros and warnings,
//! never to an error.

pub mod config;
pub mod engine;
pub mod error;
pub mod factors;
pub mod telemetry;
