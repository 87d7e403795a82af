//! Token validation for the upstream identity provider's JWTs.

pub mod jwt;
