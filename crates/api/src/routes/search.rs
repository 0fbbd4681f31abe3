//! Catalog search route handler.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use threadline_core::Product;

use crate::error::Result;
use crate::state::AppState;

/// Search query parameters.
///
/// An absent `query` parameter deserializes to the empty string and is
/// rejected by the catalog the same way an all-whitespace query is.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

/// Search the product catalog.
///
/// Returns every product whose name or brand contains the query as a
/// case-insensitive substring, in dataset order.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<Product>>> {
    let results = state.catalog().search(&params.query)?;

    tracing::debug!(hits = results.len(), "catalog search");

    Ok(Json(results))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_query_defaults_to_empty() {
        let params: SearchQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(params.query, "");
    }

    #[test]
    fn test_query_param_deserializes() {
        let params: SearchQuery = serde_json::from_str(r#"{"query": "nike"}"#).unwrap();
        assert_eq!(params.query, "nike");
    }
}
