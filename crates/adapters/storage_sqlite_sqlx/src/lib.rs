//! # inventory-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `inventory-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Own identifier generation (`INTEGER PRIMARY KEY AUTOINCREMENT`)
//!
//! ## Dependency rule
//! Depends on `inventory-app` (for port traits) and `inventory-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod device_repo;
mod error;
mod health;
mod pool;

pub use device_repo::SqliteDeviceRepository;
pub use error::StorageError;
pub use health::SqliteReadinessProbe;
pub use pool::{Config, Database};
