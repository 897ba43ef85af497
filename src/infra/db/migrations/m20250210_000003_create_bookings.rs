//! Migration: Create bookings and booking_services tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::ClientId).integer().not_null())
                    .col(ColumnDef::new(Bookings::StaffId).integer().not_null())
                    .col(ColumnDef::new(Bookings::BranchId).integer().not_null())
                    .col(
                        ColumnDef::new(Bookings::StartAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::EndAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::TotalDurationMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::TotalPrice)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Bookings::Status).string().not_null())
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_client_id")
                            .from(Bookings::Table, Bookings::ClientId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_staff_id")
                            .from(Bookings::Table, Bookings::StaffId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_branch_id")
                            .from(Bookings::Table, Bookings::BranchId)
                            .to(Branches::Table, Branches::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Booking history is queried per client, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_client_id")
                    .table(Bookings::Table)
                    .col(Bookings::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BookingServices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BookingServices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BookingServices::BookingId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingServices::ServiceId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingServices::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_services_booking_id")
                            .from(BookingServices::Table, BookingServices::BookingId)
                            .to(Bookings::Table, Bookings::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_services_service_id")
                            .from(BookingServices::Table, BookingServices::ServiceId)
                            .to(BarberServices::Table, BarberServices::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingServices::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_bookings_client_id")
                    .table(Bookings::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Bookings {
    Table,
    Id,
    ClientId,
    StaffId,
    BranchId,
    StartAt,
    EndAt,
    TotalDurationMinutes,
    TotalPrice,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum BookingServices {
    Table,
    Id,
    BookingId,
    ServiceId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Branches {
    Table,
    Id,
}

#[derive(Iden)]
enum BarberServices {
    Table,
    Id,
}
