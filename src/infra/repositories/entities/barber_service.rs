//! Barber service database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::BarberService;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "barber_services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub duration_minutes: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for BarberService {
    fn from(model: Model) -> Self {
        BarberService {
            id: model.id,
            name: model.name,
            price: model.price,
            duration_minutes: model.duration_minutes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
