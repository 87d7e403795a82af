//! Shared domain types for the flashdeck data service.
//!
//! This crate is I/O-free: it defines the id/timestamp aliases and the
//! error taxonomy that the persistence and HTTP layers build on.

pub mod error;
pub mod types;
