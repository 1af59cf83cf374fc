use super::*;

/// Tests a window that runs past the end of the table.
///
/// With four aircraft, skipping three and taking two leaves one.
///
/// Expected: Ok with exactly one aircraft
#[tokio::test]
async fn returns_partial_last_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_aircraft_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_flight_hours(db, &[Some(1.0), Some(2.0), Some(3.0), Some(4.0)]).await?;

    let repo = AircraftRepository::new(db);
    let result = repo.get_paged(2, 3).await?;

    assert_eq!(result.len(), 1);

    Ok(())
}

/// Tests an offset beyond the last row.
///
/// Expected: Ok with empty vector rather than an error
#[tokio::test]
async fn returns_empty_when_offset_past_end() -> Result<(), AppError> {
    let test = TestBuilder::new().with_aircraft_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_flight_hours(db, &[Some(1.0), Some(2.0)]).await?;

    let repo = AircraftRepository::new(db);
    let result = repo.get_paged(10, 5).await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests that a zero limit returns nothing.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_zero_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_aircraft_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_flight_hours(db, &[Some(1.0), Some(2.0)]).await?;

    let repo = AircraftRepository::new(db);
    let result = repo.get_paged(0, 0).await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests that every page is a contiguous slice of the unfiltered listing.
///
/// Walks every offset with a page size of two and compares each page against the
/// matching slice of `get_all`.
///
/// Expected: Ok with length `min(limit, remaining)` and matching IDs for every offset
#[tokio::test]
async fn pages_are_contiguous_slices_of_full_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_aircraft_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_flight_hours(db, &[Some(5.0), None, Some(1.0), Some(3.0), Some(2.0)]).await?;

    let repo = AircraftRepository::new(db);
    let all: Vec<Uuid> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|a| a.aircraft_id)
        .collect();

    let limit = 2u64;
    for offset in 0..=all.len() as u64 {
        let page: Vec<Uuid> = repo
            .get_paged(limit, offset)
            .await?
            .into_iter()
            .map(|a| a.aircraft_id)
            .collect();

        let start = offset as usize;
        let end = (start + limit as usize).min(all.len());
        assert_eq!(page, all[start..end].to_vec(), "offset {}", offset);
    }

    Ok(())
}

/// Tests a limit larger than the database driver can bind.
///
/// Limits above `i64::MAX` are clamped, so the largest `u64` behaves as "no limit".
///
/// Expected: Ok with every aircraft
#[tokio::test]
async fn returns_every_aircraft_for_maximum_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_aircraft_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_flight_hours(db, &[Some(1.0), None, Some(3.0)]).await?;

    let repo = AircraftRepository::new(db);
    let result = repo.get_paged(u64::MAX, 0).await?;

    assert_eq!(result.len(), 3);

    Ok(())
}

/// Tests an offset larger than the database driver can bind.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_maximum_offset() -> Result<(), AppError> {
    let test = TestBuilder::new().with_aircraft_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_flight_hours(db, &[Some(1.0), Some(2.0)]).await?;

    let repo = AircraftRepository::new(db);
    let result = repo.get_paged(1, u64::MAX).await?;

    assert!(result.is_empty());

    Ok(())
}
