//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20250210_000001_create_users_and_addresses;
mod m20250210_000002_create_branches_and_services;
mod m20250210_000003_create_bookings;
mod m20250210_000004_create_reviews_favorites_notifications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250210_000001_create_users_and_addresses::Migration),
            Box::new(m20250210_000002_create_branches_and_services::Migration),
            Box::new(m20250210_000003_create_bookings::Migration),
            Box::new(m20250210_000004_create_reviews_favorites_notifications::Migration),
        ]
    }
}
