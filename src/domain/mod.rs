//! Domain layer - Core business entities
//!
//! This module contains the domain models that represent business
//! concepts independent of infrastructure concerns.

pub mod cliente;

pub use cliente::{format_validation_errors, Cliente, ClientePayload};
