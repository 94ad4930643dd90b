//! Cliente API - CRUD REST backend for customer records.
//!
//! A three-layer service: HTTP handlers delegate to a service, which
//! delegates to a generic repository backed by SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The `Cliente` entity, inbound payload and validation rules
//! - **services**: Application use cases
//! - **infra**: Database connection, migrations and repositories
//! - **api**: HTTP handlers, extractors, routes and CORS
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Cliente, ClientePayload};
pub use errors::{AppError, AppResult};
