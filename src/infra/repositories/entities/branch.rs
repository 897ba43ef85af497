//! Branch database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Branch;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "branches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address_text: String,
    pub lat: f64,
    pub lng: f64,
    pub phone: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Branch {
    fn from(model: Model) -> Self {
        Branch {
            id: model.id,
            name: model.name,
            address_text: model.address_text,
            lat: model.lat,
            lng: model.lng,
            phone: model.phone,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
