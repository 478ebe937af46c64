//! SeaORM entities for the shop: users, carts and orders.

pub mod amount;
pub mod entities;

pub use amount::Amount;
