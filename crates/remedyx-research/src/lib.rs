//! remedyx-research — Lookup, mock investigation and export of disease results.
//!
//!   - `catalog`: fixed table of known diseases with substring search
//!   - `investigator`: synthesizes ranked therapeutic compounds for a target
//!   - `efficacy`: pluggable source of efficacy draws (seedable for tests)
//!   - `store`: process-lifetime storage of investigation results
//!   - `export`: CSV rendering of a stored result

pub mod catalog;
pub mod efficacy;
pub mod investigator;
pub mod store;
pub mod export;

pub use catalog::Catalog;
pub use efficacy::{EfficacySource, FixedEfficacy, SeededEfficacy};
pub use investigator::{InvestigationRequest, Investigator};
pub use store::{InMemoryResultStore, ResultStore};
