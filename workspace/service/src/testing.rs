//! Shared fixtures for the repository and service tests.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{NaiveDate, NaiveDateTime};
use migration::{Migrator, MigratorTrait};
use model::entities::{order, user};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Set};
use tracing::Level;

use crate::repository::{SeaOrmCartRepository, SeaOrmOrderRepository, SeaOrmUserRepository};
use crate::user::NewUser;

/// Log to stderr at the level named by `RUST_LOG`, WARN when unset. Only the
/// first call installs the subscriber.
pub fn init_test_tracing() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Fresh migrated in-memory database. Each test gets its own, which stands in
/// for a per-test transaction that is thrown away afterwards.
pub async fn setup_db() -> Result<DatabaseConnection, DbErr> {
    init_test_tracing();

    let db = Database::connect("sqlite::memory:").await?;

    // Enable foreign keys
    db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

    Migrator::up(&db, None).await.expect("Migrations failed.");
    Ok(db)
}

/// The three repositories over one connection.
pub fn repositories(
    db: &DatabaseConnection,
) -> (SeaOrmUserRepository, SeaOrmCartRepository, SeaOrmOrderRepository) {
    (
        SeaOrmUserRepository::new(db.clone()),
        SeaOrmCartRepository::new(db.clone()),
        SeaOrmOrderRepository::new(db.clone()),
    )
}

fn next_login() -> String {
    static LOGIN: AtomicU64 = AtomicU64::new(0);
    format!("{}", LOGIN.fetch_add(1, Ordering::SeqCst) * 31)
}

pub fn new_user() -> NewUser {
    NewUser {
        first_name: "John".to_string(),
        surname: "Smith".to_string(),
        delivery_address: "ul. Kasztanowa 14F/58 03-197 Warszawa".to_string(),
        login: next_login(),
        password: "john123456".to_string(),
    }
}

pub fn generate_user() -> user::ActiveModel {
    let new_user = new_user();
    user::ActiveModel {
        first_name: Set(new_user.first_name),
        surname: Set(new_user.surname),
        delivery_address: Set(new_user.delivery_address),
        login: Set(new_user.login),
        password: Set(new_user.password),
        ..Default::default()
    }
}

pub fn ordered_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 14)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap()
}

pub fn generate_order(user_id: i32, cart_id: i32) -> order::ActiveModel {
    order::ActiveModel {
        delivery_method: Set("courier".to_string()),
        delivery_address: Set("delivery address".to_string()),
        value: Set(Decimal::new(145, 0).into()),
        order_date_time: Set(ordered_at()),
        user_id: Set(user_id),
        cart_id: Set(cart_id),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_setup_db_installs_stderr_logging() {
    setup_db().await.unwrap();
    assert!(tracing::dispatcher::has_been_set());
}
