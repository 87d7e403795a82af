//! Shared response envelope types for API handlers.
//!
//! All success responses use a `{ "data": ... }` envelope. List endpoints
//! additionally report the item count via [`ListResponse`].

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// List envelope: `{ "data": [...], "total": n }`.
///
/// `total` is the number of returned items; the list operations have no
/// pagination, so it always equals `data.len()`.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub total: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let total = data.len();
        Self { data, total }
    }
}
