//! remedyx-common — Shared types and errors used across all Remedyx crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{CompoundRecord, DiseaseRecord, InvestigationResult};
pub use error::{ApiError, RemedyxError, Result};
