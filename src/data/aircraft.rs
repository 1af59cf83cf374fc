//! Aircraft data repository for read-only database queries.
//!
//! This module provides the `AircraftRepository`, which turns an `AircraftQuery` into a
//! single SeaORM select and converts the resulting entity models into `Aircraft`
//! projections at the infrastructure boundary. No operation writes, retries, or caches.

use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Select,
};
use uuid::Uuid;

use crate::{
    error::aircraft::AircraftError,
    model::{
        aircraft::Aircraft,
        query::{AircraftFilter, AircraftQuery, SortDirection},
    },
};

use entity::aircraft::Column;

/// Largest LIMIT/OFFSET value the database driver accepts.
const MAX_SQL_BOUND: u64 = i64::MAX as u64;

/// Repository providing read-only access to aircraft records.
///
/// Holds a borrowed database connection; it keeps no other state, so any number of
/// repositories may share one connection pool concurrently.
pub struct AircraftRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftRepository<'a> {
    /// Creates a new AircraftRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AircraftRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Executes a query and returns every matching aircraft.
    ///
    /// # Arguments
    /// - `query` - Filter, ordering, and pagination of the read
    ///
    /// # Returns
    /// - `Ok(Vec<Aircraft>)` - Matching aircraft, possibly empty
    /// - `Err(AircraftError::Query)` - Database error during query
    pub async fn execute(&self, query: &AircraftQuery) -> Result<Vec<Aircraft>, AircraftError> {
        let entities = select(query)
            .all(self.db)
            .await
            .map_err(|e| query_error(query, e))?;

        tracing::debug!("Executed aircraft query {}: {} rows", query, entities.len());

        Ok(entities.into_iter().map(Aircraft::from_entity).collect())
    }

    /// Executes a query that must match exactly one aircraft.
    ///
    /// At most two rows are fetched, which is enough to tell "one" from "more than one".
    ///
    /// # Arguments
    /// - `query` - The lookup; any limit on it is replaced
    ///
    /// # Returns
    /// - `Ok(Aircraft)` - The single matching aircraft
    /// - `Err(AircraftError::NotFound)` - No row matched
    /// - `Err(AircraftError::MultipleResults)` - More than one row matched
    /// - `Err(AircraftError::Query)` - Database error during query
    pub async fn execute_one(&self, query: &AircraftQuery) -> Result<Aircraft, AircraftError> {
        let entities = select(query)
            .limit(2)
            .all(self.db)
            .await
            .map_err(|e| query_error(query, e))?;

        exactly_one(query, entities)
    }

    /// Gets all aircraft.
    ///
    /// No ordering is applied, so the order of the result is whatever the store returns
    /// and must not be relied upon.
    ///
    /// # Returns
    /// - `Ok(Vec<Aircraft>)` - Every stored aircraft
    /// - `Err(AircraftError::Query)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Aircraft>, AircraftError> {
        self.execute(&AircraftQuery::all()).await
    }

    /// Gets a window of the unfiltered listing.
    ///
    /// Skips `offset` rows and then returns at most `limit`. An offset past the end
    /// yields an empty vector.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of aircraft to return
    /// - `offset` - Number of aircraft to skip
    ///
    /// # Returns
    /// - `Ok(Vec<Aircraft>)` - Up to `limit` aircraft
    /// - `Err(AircraftError::Query)` - Database error during query
    pub async fn get_paged(&self, limit: u64, offset: u64) -> Result<Vec<Aircraft>, AircraftError> {
        self.execute(&AircraftQuery::paged(limit, offset)).await
    }

    /// Gets aircraft with known flight hours, lowest first.
    ///
    /// Aircraft whose flight hours are NULL are excluded.
    pub async fn get_by_flight_hours_ascending(&self) -> Result<Vec<Aircraft>, AircraftError> {
        self.execute(&AircraftQuery::by_flight_hours(SortDirection::Ascending))
            .await
    }

    /// Gets aircraft with known flight hours, highest first.
    ///
    /// Aircraft whose flight hours are NULL are excluded.
    pub async fn get_by_flight_hours_descending(&self) -> Result<Vec<Aircraft>, AircraftError> {
        self.execute(&AircraftQuery::by_flight_hours(SortDirection::Descending))
            .await
    }

    /// Gets aircraft of one type.
    ///
    /// # Arguments
    /// - `designation` - Type designation, matched case-insensitively and exactly
    ///
    /// # Returns
    /// - `Ok(Vec<Aircraft>)` - Matching aircraft, empty if none
    /// - `Err(AircraftError::Query)` - Database error during query
    pub async fn get_by_type(&self, designation: &str) -> Result<Vec<Aircraft>, AircraftError> {
        self.execute(&AircraftQuery::by_designation(designation))
            .await
    }

    /// Gets aircraft by registration mark.
    ///
    /// # Arguments
    /// - `registration` - Registration, matched case-insensitively and exactly
    ///
    /// # Returns
    /// - `Ok(Vec<Aircraft>)` - Matching aircraft, empty if none
    /// - `Err(AircraftError::Query)` - Database error during query
    pub async fn get_by_registration(
        &self,
        registration: &str,
    ) -> Result<Vec<Aircraft>, AircraftError> {
        self.execute(&AircraftQuery::by_registration(registration))
            .await
    }

    /// Gets one aircraft by its identifier.
    ///
    /// # Arguments
    /// - `aircraft_id` - Primary key of the aircraft
    ///
    /// # Returns
    /// - `Ok(Aircraft)` - The aircraft with that identifier
    /// - `Err(AircraftError::NotFound)` - No aircraft has that identifier
    /// - `Err(AircraftError::MultipleResults)` - The identifier is not unique in the store
    /// - `Err(AircraftError::Query)` - Database error during query
    pub async fn get_by_id(&self, aircraft_id: Uuid) -> Result<Aircraft, AircraftError> {
        self.execute_one(&AircraftQuery::by_id(aircraft_id)).await
    }
}

/// Builds the SeaORM select for a query specification.
fn select(query: &AircraftQuery) -> Select<entity::prelude::Aircraft> {
    let mut select = entity::prelude::Aircraft::find();

    select = match &query.filter {
        AircraftFilter::All => select,
        AircraftFilter::DesignationEq(designation) => {
            select.filter(eq_ignore_case(Column::CommonDesignation, designation))
        }
        AircraftFilter::RegistrationEq(registration) => {
            select.filter(eq_ignore_case(Column::Registration, registration))
        }
        AircraftFilter::IdEq(aircraft_id) => select.filter(Column::AircraftId.eq(*aircraft_id)),
    };

    // The id tiebreak keeps equal-hour rows in a fixed relative order, so the two
    // directions are exact reverses of each other.
    if let Some(direction) = query.order {
        select = select.filter(Column::CurrentFlightHours.is_not_null());
        select = match direction {
            SortDirection::Ascending => select
                .order_by_asc(Column::CurrentFlightHours)
                .order_by_asc(Column::AircraftId),
            SortDirection::Descending => select
                .order_by_desc(Column::CurrentFlightHours)
                .order_by_desc(Column::AircraftId),
        };
    }

    // SQLite binds LIMIT/OFFSET as i64; anything larger already means "no bound".
    if let Some(page) = query.page {
        select = select
            .offset(page.offset.min(MAX_SQL_BOUND))
            .limit(page.limit.min(MAX_SQL_BOUND));
    }

    select
}

/// `LOWER(aircraft.<column>) = LOWER(<value>)`
fn eq_ignore_case(column: Column, value: &str) -> SimpleExpr {
    // Called by path: bringing `ExprTrait` into scope makes `Column::eq` ambiguous.
    sea_orm::sea_query::ExprTrait::eq(
        Expr::expr(Func::lower(Expr::col((entity::prelude::Aircraft, column)))),
        Func::lower(Expr::val(value)),
    )
}

fn query_error(query: &AircraftQuery, source: DbErr) -> AircraftError {
    tracing::error!("Failed querying aircraft ({}): {}", query, source);

    AircraftError::Query {
        query: query.to_string(),
        source,
    }
}

/// Reduces a lookup result to its single row.
fn exactly_one(
    query: &AircraftQuery,
    mut entities: Vec<entity::aircraft::Model>,
) -> Result<Aircraft, AircraftError> {
    match entities.len() {
        0 => Err(AircraftError::NotFound {
            query: query.to_string(),
        }),
        1 => Ok(Aircraft::from_entity(entities.remove(0))),
        count => {
            tracing::warn!("Lookup {} matched {} aircraft", query, count);

            Err(AircraftError::MultipleResults {
                query: query.to_string(),
                count,
            })
        }
    }
}
