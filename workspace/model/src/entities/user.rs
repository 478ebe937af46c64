use sea_orm::entity::prelude::*;

use super::order;

/// A registered customer.
/// Owns the orders it placed; orders point back through `orders.user_id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub surname: String,
    /// Default delivery address used when placing orders.
    pub delivery_address: String,
    /// Login name. Not unique at the storage level.
    pub login: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // A user can place multiple orders.
    #[sea_orm(has_many = "order::Entity")]
    Order,
}

impl Related<order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
