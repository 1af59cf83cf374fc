//! Query specifications for the aircraft read model.
//!
//! An `AircraftQuery` bundles the filter, ordering, and pagination of one read. The
//! repository turns it into a single SeaORM select, so each public read operation is just
//! a constructor here plus one call to `execute` or `execute_one`.

use std::fmt;

use uuid::Uuid;

/// Row predicate applied to the `aircraft` table.
#[derive(Debug, Clone, PartialEq)]
pub enum AircraftFilter {
    /// No predicate.
    All,
    /// Case-insensitive exact match on `common_designation`.
    DesignationEq(String),
    /// Case-insensitive exact match on `registration`.
    RegistrationEq(String),
    /// Exact match on the primary key.
    IdEq(Uuid),
}

/// Direction for ordering by `current_flight_hours`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Offset/limit pagination bounds. The offset is applied before the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Maximum number of rows to return.
    pub limit: u64,
    /// Number of rows to skip.
    pub offset: u64,
}

/// A complete description of one aircraft read.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftQuery {
    pub filter: AircraftFilter,
    /// Ordering by flight hours. When set, rows with NULL flight hours are excluded.
    pub order: Option<SortDirection>,
    pub page: Option<Page>,
}

impl AircraftQuery {
    /// Every aircraft, in whatever order the store returns them.
    pub fn all() -> Self {
        Self {
            filter: AircraftFilter::All,
            order: None,
            page: None,
        }
    }

    /// A window of the unfiltered listing.
    pub fn paged(limit: u64, offset: u64) -> Self {
        Self {
            page: Some(Page { limit, offset }),
            ..Self::all()
        }
    }

    /// Aircraft with known flight hours, sorted in `direction`.
    pub fn by_flight_hours(direction: SortDirection) -> Self {
        Self {
            order: Some(direction),
            ..Self::all()
        }
    }

    pub fn by_designation(designation: impl Into<String>) -> Self {
        Self {
            filter: AircraftFilter::DesignationEq(designation.into()),
            ..Self::all()
        }
    }

    pub fn by_registration(registration: impl Into<String>) -> Self {
        Self {
            filter: AircraftFilter::RegistrationEq(registration.into()),
            ..Self::all()
        }
    }

    pub fn by_id(aircraft_id: Uuid) -> Self {
        Self {
            filter: AircraftFilter::IdEq(aircraft_id),
            ..Self::all()
        }
    }
}

impl fmt::Display for AircraftQuery {
    /// Short human readable form used in log lines and error context.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filter {
            AircraftFilter::All => write!(f, "all")?,
            AircraftFilter::DesignationEq(d) => write!(f, "common_designation ~= '{}'", d)?,
            AircraftFilter::RegistrationEq(r) => write!(f, "registration ~= '{}'", r)?,
            AircraftFilter::IdEq(id) => write!(f, "aircraft_id = {}", id)?,
        }

        match self.order {
            Some(SortDirection::Ascending) => write!(f, ", order by current_flight_hours asc")?,
            Some(SortDirection::Descending) => write!(f, ", order by current_flight_hours desc")?,
            None => {}
        }

        if let Some(page) = self.page {
            write!(f, ", offset {} limit {}", page.offset, page.limit)?;
        }

        Ok(())
    }
}
