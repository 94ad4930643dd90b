//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod base;
mod cliente_repository;
pub(crate) mod entities;

pub use base::CrudRepository;
pub use cliente_repository::{ClienteRepository, ClienteStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use cliente_repository::MockClienteRepository;
