//! Song-info API server library.
//!
//! Exposes the core building blocks (config, state, error handling, the
//! song resolver, routes) so integration tests and the binary entrypoint
//! can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod resolver;
pub mod router;
pub mod routes;
pub mod state;
