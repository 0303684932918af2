//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod lineage;

pub use lineage::{DescendantSummary, LineageService, YearFilter};
