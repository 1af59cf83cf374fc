//! SeaORM entity definitions for the hangar database.

pub mod prelude;

pub mod aircraft;
