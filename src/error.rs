use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("Failed to fetch {0}")]
    Fetch(&'static str),
    #[error("Missing required query parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Not allowed by CORS")]
    CorsRejected,
}

impl From<figment::Error> for Error {
    fn from(value: figment::Error) -> Self {
        Self::Config(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            // The list endpoints answer with a JSON envelope, search answers with the raw text.
            Error::Fetch(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            // Errors raised by the server answer with the server's own message.
            Error::Database(sqlx::Error::Database(err)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.message().to_string()).into_response()
            }
            Error::Database(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
            Error::MissingParameter(_) => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
            Error::CorsRejected => (StatusCode::FORBIDDEN, self.to_string()).into_response(),
            Error::Config(_) | Error::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
