//! remedyx-web — HTTP API for Remedyx.
//! Provides:
//!   - Disease catalog search
//!   - Mock compound investigation
//!   - CSV download of stored results
//!   - Liveness check

pub mod router;
pub mod handlers;
pub mod state;
