use async_trait::async_trait;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};

use crate::config;
use crate::db::models::{Row, Statement};
use crate::db::Database;
use crate::error::Error;

pub const ALL_USERS: &str = "SELECT to_jsonb(u) FROM users AS u";
pub const ALL_MOVIES: &str = "SELECT to_jsonb(m) FROM movies AS m";
// `ESCAPE ''` makes `\` an ordinary character, so a trailing one cannot swallow the closing `%`.
pub const MOVIES_BY_TITLE: &str =
    "SELECT to_jsonb(m) FROM movies AS m WHERE m.title ILIKE $1 ESCAPE ''";

pub fn all_users() -> Statement {
    Statement::new(ALL_USERS)
}

pub fn all_movies() -> Statement {
    Statement::new(ALL_MOVIES)
}

/// Case-insensitive substring match on `title`.
pub fn movies_by_title(title: &str) -> Statement {
    Statement::new(MOVIES_BY_TITLE).bind(format!("%{title}%"))
}

pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    /// The pool connects on first use, so an unreachable server surfaces per request.
    pub fn connect_lazy(config: &config::Database) -> Self {
        let mut options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.name)
            .username(&config.user);
        if let Some(password) = &config.password {
            options = options.password(password);
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy_with(options);

        Self { pool }
    }
}

#[async_trait]
impl Database for PgDatabase {
    async fn fetch_rows(&self, statement: &Statement) -> Result<Vec<Row>, Error> {
        let mut query = sqlx::query_scalar::<_, Row>(statement.sql);
        for param in &statement.params {
            query = query.bind(param.as_str());
        }
        Ok(query.fetch_all(&self.pool).await?)
    }
}
