//! Core types and shared functionality for the runbooks server.
//!
//! This crate provides:
//! - The runbook data model
//! - The lazy, process-lifetime runbook cache
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod runbook;

pub use cache::{RunbookCache, RunbookSource};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use runbook::{ExtractedRunbook, IndexEntry, RunbookEntry};
