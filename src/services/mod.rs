//! Application services layer - Use cases.
//!
//! Services depend on repository abstractions (traits) for
//! dependency inversion.

mod cliente_service;

pub use cliente_service::{ClienteManager, ClienteService};
