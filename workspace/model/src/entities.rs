//! Root of the SeaORM entity modules.
//! Three independently stored records: users, carts and the orders that tie
//! a user to a cart through foreign keys.

pub mod cart;
pub mod order;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::cart::Entity as Cart;
    pub use super::order::Entity as Order;
    pub use super::user::Entity as User;
}
