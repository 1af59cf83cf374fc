use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "aircraft")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub aircraft_id: Uuid,
    pub company_id: Uuid,
    #[sea_orm(column_type = "Double", nullable)]
    pub current_flight_hours: Option<f64>,
    pub current_cycles: i32,
    pub registration: String,
    pub base_airport_code: String,
    pub manufacturer: String,
    pub manufacturer_designator: String,
    pub common_designation: String,
    pub common_name: String,
    pub pilots_required_to_fly: i32,
    pub default_values: String,
    pub maximum_values: String,
    pub current_landings: i32,
    pub fuel_details: String,
    pub oil_details: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
