use sea_orm::DbErr;
use thiserror::Error;

/// Errors returned by the aircraft read model.
///
/// Each variant records the query that produced it in the display form of
/// `AircraftQuery` (for example `aircraft_id = 0b4e...`).
#[derive(Error, Debug)]
pub enum AircraftError {
    /// The storage layer failed while executing a query.
    ///
    /// Covers connectivity problems, malformed queries, and missing tables.
    #[error("failed querying aircraft ({query}): {source}")]
    Query {
        /// Description of the query that failed
        query: String,
        /// The underlying SeaORM error
        #[source]
        source: DbErr,
    },

    /// A single-row lookup matched no rows.
    #[error("no aircraft matched {query}")]
    NotFound {
        /// Description of the lookup
        query: String,
    },

    /// A single-row lookup matched more than one row.
    ///
    /// Lookups are by primary key, so this indicates a data-integrity violation in the
    /// underlying store rather than a caller error.
    #[error("expected exactly one aircraft for {query}, found {count}")]
    MultipleResults {
        /// Description of the lookup
        query: String,
        /// Number of rows seen, capped at the lookup's row limit
        count: usize,
    },
}
