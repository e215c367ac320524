//! City database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::City;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cities")]
pub struct Model {
    /// Auto-increment key assigned by the database
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub additional_info: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for City {
    fn from(model: Model) -> Self {
        City {
            id: model.id,
            name: model.name,
            additional_info: model.additional_info,
        }
    }
}
