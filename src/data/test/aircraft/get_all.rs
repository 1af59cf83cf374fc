use super::*;

/// Tests listing every stored aircraft.
///
/// Verifies that the repository returns one projection per stored row. Order is not
/// asserted because the unfiltered listing has no guaranteed order.
///
/// Expected: Ok with all three aircraft
#[tokio::test]
async fn returns_every_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_aircraft_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut expected = seed_flight_hours(db, &[Some(1.0), None, Some(3.0)]).await?;

    let repo = AircraftRepository::new(db);
    let result = repo.get_all().await?;

    let mut ids: Vec<Uuid> = result.iter().map(|a| a.aircraft_id).collect();
    ids.sort();
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests listing with an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_aircraft_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AircraftRepository::new(db);
    let result = repo.get_all().await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests that every stored column reaches the projection unchanged.
///
/// Seeds an aircraft with a distinct value in every column and compares each field of
/// the returned projection against the stored entity.
///
/// Expected: Ok with a field-for-field identical projection
#[tokio::test]
async fn projects_every_field_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new().with_aircraft_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = AircraftFactory::new(db)
        .company_id(Uuid::new_v4())
        .current_flight_hours(Some(4321.25))
        .counters(1800, 1795)
        .registration("D-AIZA")
        .base_airport_code("EDDF")
        .manufacturer("Airbus", "A320-214")
        .common_designation("A320")
        .common_name("Airbus A320-200")
        .pilots_required_to_fly(2)
        .values(r#"{"mtow":73500}"#, r#"{"fuel_kg":18730}"#)
        .fluids("Jet A-1", "Eastman 2380")
        .build()
        .await?;

    let repo = AircraftRepository::new(db);
    let result = repo.get_all().await?;

    assert_eq!(result.len(), 1);
    let aircraft = &result[0];
    assert_eq!(aircraft.aircraft_id, stored.aircraft_id);
    assert_eq!(aircraft.company_id, stored.company_id);
    assert_eq!(aircraft.current_flight_hours, Some(4321.25));
    assert_eq!(aircraft.current_cycles, 1800);
    assert_eq!(aircraft.current_landings, 1795);
    assert_eq!(aircraft.registration, "D-AIZA");
    assert_eq!(aircraft.base_airport_code, "EDDF");
    assert_eq!(aircraft.manufacturer, "Airbus");
    assert_eq!(aircraft.manufacturer_designator, "A320-214");
    assert_eq!(aircraft.common_designation, "A320");
    assert_eq!(aircraft.common_name, "Airbus A320-200");
    assert_eq!(aircraft.pilots_required_to_fly, 2);
    assert_eq!(aircraft.default_values, r#"{"mtow":73500}"#);
    assert_eq!(aircraft.maximum_values, r#"{"fuel_kg":18730}"#);
    assert_eq!(aircraft.fuel_details, "Jet A-1");
    assert_eq!(aircraft.oil_details, "Eastman 2380");

    Ok(())
}

/// Tests that a storage failure surfaces as a query error.
///
/// The aircraft table is never created, so the select fails inside SQLite.
///
/// Expected: Err(AircraftError::Query)
#[tokio::test]
async fn fails_with_query_error_without_table() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AircraftRepository::new(db);
    let result = repo.get_all().await;

    match result {
        Err(AircraftError::Query { query, .. }) => assert_eq!(query, "all"),
        other => panic!("expected AircraftError::Query, got {:?}", other),
    }

    Ok(())
}
