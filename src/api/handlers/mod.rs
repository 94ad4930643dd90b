//! HTTP request handlers.

pub mod cliente_handler;

pub use cliente_handler::cliente_routes;
