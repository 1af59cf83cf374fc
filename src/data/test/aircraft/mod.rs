use crate::{
    data::aircraft::AircraftRepository,
    error::{aircraft::AircraftError, AppError},
    model::query::{AircraftQuery, SortDirection},
};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory, factory::aircraft::AircraftFactory};
use uuid::Uuid;

mod get_all;
mod get_paged;

/// Seeds one aircraft per entry with the given flight hours and returns their IDs in
/// insertion order.
async fn seed_flight_hours(
    db: &DatabaseConnection,
    hours: &[Option<f64>],
) -> Result<Vec<Uuid>, DbErr> {
    let mut ids = Vec::new();
    for h in hours {
        let aircraft = factory::create_aircraft_with_flight_hours(db, *h).await?;
        ids.push(aircraft.aircraft_id);
    }
    Ok(ids)
}

/// Extracts flight hours in result order.
fn hours_of(aircraft: &[crate::model::aircraft::Aircraft]) -> Vec<Option<f64>> {
    aircraft.iter().map(|a| a.current_flight_hours).collect()
}
