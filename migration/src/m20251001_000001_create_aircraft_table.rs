use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Aircraft::Table)
                    .if_not_exists()
                    .col(pk_uuid(Aircraft::AircraftId))
                    .col(uuid(Aircraft::CompanyId))
                    .col(double_null(Aircraft::CurrentFlightHours))
                    .col(integer(Aircraft::CurrentCycles))
                    .col(string(Aircraft::Registration))
                    .col(string(Aircraft::BaseAirportCode))
                    .col(string(Aircraft::Manufacturer))
                    .col(string(Aircraft::ManufacturerDesignator))
                    .col(string(Aircraft::CommonDesignation))
                    .col(string(Aircraft::CommonName))
                    .col(integer(Aircraft::PilotsRequiredToFly))
                    .col(text(Aircraft::DefaultValues))
                    .col(text(Aircraft::MaximumValues))
                    .col(integer(Aircraft::CurrentLandings))
                    .col(text(Aircraft::FuelDetails))
                    .col(text(Aircraft::OilDetails))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_aircraft_registration")
                    .table(Aircraft::Table)
                    .col(Aircraft::Registration)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_aircraft_common_designation")
                    .table(Aircraft::Table)
                    .col(Aircraft::CommonDesignation)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Aircraft::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Aircraft {
    Table,
    AircraftId,
    CompanyId,
    CurrentFlightHours,
    CurrentCycles,
    Registration,
    BaseAirportCode,
    Manufacturer,
    ManufacturerDesignator,
    CommonDesignation,
    CommonName,
    PilotsRequiredToFly,
    DefaultValues,
    MaximumValues,
    CurrentLandings,
    FuelDetails,
    OilDetails,
}
