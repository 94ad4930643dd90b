//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod cliente;
