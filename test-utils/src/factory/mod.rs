//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating aircraft rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let aircraft = factory::create_aircraft(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::aircraft::AircraftFactory;
//!
//! let aircraft = AircraftFactory::new(&db)
//!     .registration("N320AB")
//!     .common_designation("A320")
//!     .current_flight_hours(Some(1200.5))
//!     .build()
//!     .await?;
//! ```

pub mod aircraft;
pub mod helpers;

pub use aircraft::{create_aircraft, create_aircraft_with_flight_hours};
