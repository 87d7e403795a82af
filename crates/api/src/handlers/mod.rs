//! Request handlers, one module per resource.

pub mod card;
pub mod deck;
pub mod review;
pub mod study_session;
