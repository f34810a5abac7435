//! Shared query parameter types for API handlers.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;
use trivia_core::pagination::parse_page;

/// Raw `?page=` value, kept as text so a malformed number is not a rejection.
#[derive(Debug, Default, Deserialize)]
struct PageParams {
    page: Option<String>,
}

/// Requested page of the question listing.
///
/// Never rejects: a query string that does not deserialize (for example a
/// repeated `page`) and an unusable value both resolve to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub i64);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| params)
            .unwrap_or_default();

        Ok(Page(parse_page(params.page.as_deref())))
    }
}
