use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

use super::{cart, user};
use crate::amount::Amount;

/// An order placed by a user for the contents of a cart.
///
/// The order only holds foreign keys to its user and cart. Removing an order
/// never touches either of them, while the schema refuses to remove a user or
/// cart that an order still references.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Free-form delivery method, e.g. "courier".
    pub delivery_method: String,
    pub delivery_address: String,
    /// Total value of the order. Exact decimal, kept as text.
    #[sea_orm(column_type = "Text")]
    pub value: Amount,
    pub order_date_time: NaiveDateTime,
    /// The user who placed the order.
    pub user_id: i32,
    /// The cart the order was placed from.
    pub cart_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "user::Entity",
        from = "Column::UserId",
        to = "user::Column::Id",
        on_delete = "Restrict"
    )]
    User,
    #[sea_orm(
        belongs_to = "cart::Entity",
        from = "Column::CartId",
        to = "cart::Column::Id",
        on_delete = "Restrict"
    )]
    Cart,
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cart.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
