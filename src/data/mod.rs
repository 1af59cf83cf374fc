//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return projection models so the
//! rest of the crate never depends on the entity crate's types. Every query against the
//! `aircraft` table goes through `aircraft::AircraftRepository`.

pub mod aircraft;

#[cfg(test)]
mod test;
