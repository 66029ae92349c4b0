//! Persistence layer for the AgroScan server.
//!
//! Provides SQLite-backed storage for fields, missions, and observations.

pub mod db;
pub mod fields;
pub mod missions;
pub mod observations;

pub use db::{init_database, Database};
