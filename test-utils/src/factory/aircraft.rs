//! Aircraft factory for creating test aircraft rows.
//!
//! The read model never writes, so tests seed the `aircraft` table through this
//! factory instead of through the repository.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test aircraft with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::aircraft::AircraftFactory;
///
/// let aircraft = AircraftFactory::new(&db)
///     .registration("G-EUPT")
///     .common_designation("A319")
///     .build()
///     .await?;
/// ```
pub struct AircraftFactory<'a> {
    db: &'a DatabaseConnection,
    model: entity::aircraft::Model,
}

impl<'a> AircraftFactory<'a> {
    /// Creates a new AircraftFactory with default values.
    ///
    /// Defaults:
    /// - aircraft_id / company_id: random v4 UUIDs
    /// - registration: `"N{id}TU"` where id is auto-incremented
    /// - common_designation: `"A320"`, common_name: `"Airbus A320"`
    /// - current_flight_hours: `Some(100.0)`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AircraftFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            model: entity::aircraft::Model {
                aircraft_id: Uuid::new_v4(),
                company_id: Uuid::new_v4(),
                current_flight_hours: Some(100.0),
                current_cycles: 50,
                registration: format!("N{}TU", id),
                base_airport_code: "KSEA".to_string(),
                manufacturer: "Airbus".to_string(),
                manufacturer_designator: "A320-214".to_string(),
                common_designation: "A320".to_string(),
                common_name: "Airbus A320".to_string(),
                pilots_required_to_fly: 2,
                default_values: "{}".to_string(),
                maximum_values: "{}".to_string(),
                current_landings: 50,
                fuel_details: "Jet A-1".to_string(),
                oil_details: "Mobil Jet Oil II".to_string(),
            },
        }
    }

    /// Sets the aircraft ID (primary key).
    pub fn aircraft_id(mut self, aircraft_id: Uuid) -> Self {
        self.model.aircraft_id = aircraft_id;
        self
    }

    /// Sets the owning company ID.
    pub fn company_id(mut self, company_id: Uuid) -> Self {
        self.model.company_id = company_id;
        self
    }

    /// Sets the current flight hours; `None` stores NULL.
    pub fn current_flight_hours(mut self, hours: Option<f64>) -> Self {
        self.model.current_flight_hours = hours;
        self
    }

    /// Sets the current cycle and landing counts.
    pub fn counters(mut self, cycles: i32, landings: i32) -> Self {
        self.model.current_cycles = cycles;
        self.model.current_landings = landings;
        self
    }

    pub fn registration(mut self, registration: impl Into<String>) -> Self {
        self.model.registration = registration.into();
        self
    }

    pub fn base_airport_code(mut self, code: impl Into<String>) -> Self {
        self.model.base_airport_code = code.into();
        self
    }

    /// Sets the type designation (e.g. `"B738"`).
    pub fn common_designation(mut self, designation: impl Into<String>) -> Self {
        self.model.common_designation = designation.into();
        self
    }

    pub fn common_name(mut self, name: impl Into<String>) -> Self {
        self.model.common_name = name.into();
        self
    }

    /// Sets the manufacturer and its model designator.
    pub fn manufacturer(
        mut self,
        manufacturer: impl Into<String>,
        designator: impl Into<String>,
    ) -> Self {
        self.model.manufacturer = manufacturer.into();
        self.model.manufacturer_designator = designator.into();
        self
    }

    /// Sets the opaque default/maximum value blobs.
    pub fn values(mut self, default_values: impl Into<String>, maximum_values: impl Into<String>) -> Self {
        self.model.default_values = default_values.into();
        self.model.maximum_values = maximum_values.into();
        self
    }

    /// Sets the opaque fuel/oil detail blobs.
    pub fn fluids(mut self, fuel_details: impl Into<String>, oil_details: impl Into<String>) -> Self {
        self.model.fuel_details = fuel_details.into();
        self.model.oil_details = oil_details.into();
        self
    }

    pub fn pilots_required_to_fly(mut self, pilots: i32) -> Self {
        self.model.pilots_required_to_fly = pilots;
        self
    }

    /// Builds and inserts the aircraft entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::aircraft::Model)` - Created aircraft entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::aircraft::Model, DbErr> {
        let m = self.model;
        entity::aircraft::ActiveModel {
            aircraft_id: ActiveValue::Set(m.aircraft_id),
            company_id: ActiveValue::Set(m.company_id),
            current_flight_hours: ActiveValue::Set(m.current_flight_hours),
            current_cycles: ActiveValue::Set(m.current_cycles),
            registration: ActiveValue::Set(m.registration),
            base_airport_code: ActiveValue::Set(m.base_airport_code),
            manufacturer: ActiveValue::Set(m.manufacturer),
            manufacturer_designator: ActiveValue::Set(m.manufacturer_designator),
            common_designation: ActiveValue::Set(m.common_designation),
            common_name: ActiveValue::Set(m.common_name),
            pilots_required_to_fly: ActiveValue::Set(m.pilots_required_to_fly),
            default_values: ActiveValue::Set(m.default_values),
            maximum_values: ActiveValue::Set(m.maximum_values),
            current_landings: ActiveValue::Set(m.current_landings),
            fuel_details: ActiveValue::Set(m.fuel_details),
            oil_details: ActiveValue::Set(m.oil_details),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an aircraft with default values.
///
/// Shorthand for `AircraftFactory::new(db).build().await`.
///
/// # Example
///
/// ```rust,ignore
/// let aircraft = create_aircraft(&db).await?;
/// ```
pub async fn create_aircraft(db: &DatabaseConnection) -> Result<entity::aircraft::Model, DbErr> {
    AircraftFactory::new(db).build().await
}

/// Creates an aircraft with the given flight hours, `None` storing NULL.
pub async fn create_aircraft_with_flight_hours(
    db: &DatabaseConnection,
    hours: Option<f64>,
) -> Result<entity::aircraft::Model, DbErr> {
    AircraftFactory::new(db)
        .current_flight_hours(hours)
        .build()
        .await
}
