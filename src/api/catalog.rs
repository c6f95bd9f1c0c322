use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::server::AppState;
use crate::db::models::{Row, Statement};
use crate::db::repo;
use crate::error::Error;

pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Row>>, Error> {
    fetch_all(&state, repo::all_users(), "users").await
}

pub async fn list_movies(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Row>>, Error> {
    fetch_all(&state, repo::all_movies(), "movies").await
}

async fn fetch_all(
    state: &AppState,
    statement: Statement,
    resource: &'static str,
) -> Result<Json<Vec<Row>>, Error> {
    match state.db.fetch_rows(&statement).await {
        Ok(rows) => Ok(Json(rows)),
        Err(err) => {
            tracing::error!("{err}");
            Err(Error::Fetch(resource))
        }
    }
}
