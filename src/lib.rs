//! Read-only query facade over stored aircraft records.
//!
//! This crate maps rows of the `aircraft` table into flat `Aircraft` projections and
//! offers a fixed menu of reads: all, paged, ordered by flight hours in either
//! direction, filtered by type or registration, and lookup by identifier. It never
//! writes.
//!
//! # Architecture
//!
//! - **Data Layer** (`data/`) - `AircraftRepository`, which turns query specifications
//!   into SeaORM selects and converts entity models to projections
//! - **Model Layer** (`model/`) - The `Aircraft` projection and the `AircraftQuery`
//!   specification (filter + ordering + page)
//! - **Error Layer** (`error/`) - `AppError` and the read model's `AircraftError`
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based database configuration
//! - **Startup** (`startup`) - Tracing setup, database connection, and migrations
//!
//! # Usage
//!
//! ```rust,ignore
//! use hangar::{config::Config, data::aircraft::AircraftRepository, startup};
//!
//! startup::init_tracing();
//! let config = Config::from_env()?;
//! let db = startup::connect_to_database(&config).await?;
//!
//! let repo = AircraftRepository::new(&db);
//! let a320s = repo.get_by_type("A320").await?;
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod startup;
