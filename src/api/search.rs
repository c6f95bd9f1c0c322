use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::server::AppState;
use crate::db::models::Row;
use crate::db::repo;
use crate::error::Error;

// Input normalization only. Injection safety comes from binding the value as `$1`.
const STRIPPED: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '\'', '{', '}', '=', '-', '_',
    '`', '~', '(', ')', '<', '>',
];

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
}

pub fn sanitize_title(raw: &str) -> String {
    raw.chars().filter(|c| !STRIPPED.contains(c)).collect()
}

pub async fn search_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Row>>, Error> {
    let raw = params.title.ok_or(Error::MissingParameter("title"))?;
    let title = sanitize_title(&raw);
    tracing::debug!(%title, "searching movies");

    let rows = state
        .db
        .fetch_rows(&repo::movies_by_title(&title))
        .await
        .inspect_err(|err| tracing::error!("{err}"))?;
    tracing::debug!(matches = rows.len(), "search finished");

    Ok(Json(rows))
}
