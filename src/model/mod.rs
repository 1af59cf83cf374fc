//! Read model types.
//!
//! Projections are converted from entity models at the repository boundary and handed to
//! callers as plain, serializable structs. Query specifications describe a single read
//! (filter, ordering, and pagination) as a value instead of a chain of builder calls.

pub mod aircraft;
pub mod query;
