//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{User, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub phone: String,
    pub password_hash: String,
    pub full_name: String,
    pub email: String,
    pub birth_date: Date,
    pub role: String,
    pub branch_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            phone: model.phone,
            password_hash: model.password_hash,
            full_name: model.full_name,
            email: model.email,
            birth_date: model.birth_date,
            role: UserRole::from(model.role.as_str()),
            branch_id: model.branch_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
