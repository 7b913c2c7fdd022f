//! Risk Worksheet: deterministic risk prioritization and mitigation report.
//!
//! Scores risk events by probability x loss, ranks them into Low/Medium/High
//! tiers, assigns one mitigation action to each, applies re-assessed
//! post-mitigation estimates and reports the resulting reduction.
//!
//! No DB, no network, no input; pure computation over an embedded catalog.

pub mod catalog;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod plan;
pub mod prioritize;
pub mod report;
pub mod types;
pub mod worksheet;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{ReferenceKind, WorksheetError};
pub use types::{Effectiveness, MitigationAction, Priority, RiskEvent, WorksheetReport};
pub use worksheet::Worksheet;
