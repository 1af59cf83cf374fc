//! Aircraft projection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flat, storage-agnostic view of a stored aircraft record.
///
/// Every column of the `aircraft` table appears here unchanged; nothing is derived or
/// recomputed. A value is built fresh for each query and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    /// Primary key.
    pub aircraft_id: Uuid,
    /// Owning company. Not checked against any company table here.
    pub company_id: Uuid,
    /// Accumulated flight hours, `None` when the store holds NULL.
    pub current_flight_hours: Option<f64>,
    pub current_cycles: i32,
    /// Registration mark (tail number).
    pub registration: String,
    pub base_airport_code: String,
    pub manufacturer: String,
    pub manufacturer_designator: String,
    /// Type designation such as `A320` or `B738`.
    pub common_designation: String,
    pub common_name: String,
    pub pilots_required_to_fly: i32,
    pub default_values: String,
    pub maximum_values: String,
    pub current_landings: i32,
    pub fuel_details: String,
    pub oil_details: String,
}

impl Aircraft {
    /// Converts an entity model to an aircraft projection at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Aircraft` - Field-for-field copy of the stored record
    pub fn from_entity(entity: entity::aircraft::Model) -> Self {
        Self {
            aircraft_id: entity.aircraft_id,
            company_id: entity.company_id,
            current_flight_hours: entity.current_flight_hours,
            current_cycles: entity.current_cycles,
            registration: entity.registration,
            base_airport_code: entity.base_airport_code,
            manufacturer: entity.manufacturer,
            manufacturer_designator: entity.manufacturer_designator,
            common_designation: entity.common_designation,
            common_name: entity.common_name,
            pilots_required_to_fly: entity.pilots_required_to_fly,
            default_values: entity.default_values,
            maximum_values: entity.maximum_values,
            current_landings: entity.current_landings,
            fuel_details: entity.fuel_details,
            oil_details: entity.oil_details,
        }
    }
}
