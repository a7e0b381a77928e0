//! A Rust library for validating household-census microdata and
//! computing chart-ready descriptive statistics: age pyramids, regional
//! distributions, infrastructure breakdowns and KPI summaries.
//!
//! The pipeline is raw records -> [`schema::validate_batch`] ->
//! [`models::CensusSnapshot`] -> [`aggregate`] primitives ->
//! [`report`] result sets. Everything past ingestion is pure and free
//! of shared mutable state, so reports can be assembled concurrently
//! from the same snapshot.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod report;
pub mod schema;

// Re-export the most common types for easier use
// Core types
pub use config::{AgeBands, AgeRounding, CensusConfig};
pub use error::{CensoError, Result, Violation};
pub use models::{CensusSnapshot, DeceasedRecord, Dwelling, Resident, ResponsiblePerson};
pub use registry::{Category, CodeRegistry};

// Validation
pub use schema::{RawDeceased, RawDwelling, RawResident, RawResponsible, validate_batch};
pub use schema::brackets::IncomeBrackets;

// Aggregation primitives
pub use aggregate::{Bin, CrossTab, Histogram, MeanOutcome, Stat};

// Report assembly
pub use report::format::Locale;
pub use report::{
    AgePyramid, CensusReport, InfrastructureBreakdown, InfrastructureField, KpiPanel,
    RegionalDistribution, assemble, literacy_rate,
};
