//! Booking line-item database entity for SeaORM.
//!
//! Maps the `booking_services` join table pairing a booking with one
//! purchased service.

use sea_orm::entity::prelude::*;

use crate::domain::BookingItem;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking_services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub booking_id: i32,
    pub service_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for BookingItem {
    fn from(model: Model) -> Self {
        BookingItem {
            id: model.id,
            booking_id: model.booking_id,
            service_id: model.service_id,
            created_at: model.created_at,
        }
    }
}
