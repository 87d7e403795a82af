//! HTTP surface of the flashdeck data service.
//!
//! Exposes the router builder, configuration, and handler modules so the
//! binary (`main.rs`) and integration tests share the exact same stack.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod ownership;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
