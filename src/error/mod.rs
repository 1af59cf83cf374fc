//! Error types for the hangar read model.
//!
//! `AppError` is the top-level error that wraps the domain-specific errors. Read model
//! operations return the narrower `AircraftError` directly so callers can match on
//! `NotFound` without unwrapping the application-level enum.

pub mod aircraft;
pub mod config;

use thiserror::Error;

use crate::error::{aircraft::AircraftError, config::ConfigError};

/// Top-level application error type.
///
/// Aggregates every error that can occur while configuring, connecting to, or querying
/// the aircraft store. All variants use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while loading environment variables.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database error outside of a read model query (connecting, running migrations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Error returned by an aircraft read model operation.
    #[error(transparent)]
    AircraftErr(#[from] AircraftError),
}
