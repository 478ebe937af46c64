use chrono::{NaiveDateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use super::order;

/// A shopping cart. Created on its own and later attached to an order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "carts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// When the cart was opened.
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "order::Entity")]
    Order,
}

impl Related<order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModel {
    /// An unsaved cart stamped with the current time.
    pub fn opened_now() -> Self {
        Self {
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
