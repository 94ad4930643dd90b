//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Repositories

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{ClienteRepository, ClienteStore, CrudRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockClienteRepository;
