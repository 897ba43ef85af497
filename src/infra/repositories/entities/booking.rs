//! Booking database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Booking, BookingStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_id: i32,
    pub staff_id: i32,
    pub branch_id: i32,
    pub start_at: DateTimeUtc,
    pub end_at: DateTimeUtc,
    pub total_duration_minutes: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_price: Decimal,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Booking {
    fn from(model: Model) -> Self {
        Booking {
            id: model.id,
            client_id: model.client_id,
            staff_id: model.staff_id,
            branch_id: model.branch_id,
            start_at: model.start_at,
            end_at: model.end_at,
            total_duration_minutes: model.total_duration_minutes,
            total_price: model.total_price,
            status: BookingStatus::from(model.status.as_str()),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
