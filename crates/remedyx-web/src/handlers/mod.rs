//! HTTP handlers for all API routes.

pub mod search;
pub mod investigate;
pub mod download;
pub mod health;
