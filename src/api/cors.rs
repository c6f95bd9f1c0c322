use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error::Error;

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(3600);

pub fn layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::exact(allowed_origin))
        .allow_methods([Method::GET])
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE)
}

/// Turns away requests from any other origin before they reach a handler.
/// Requests without an `Origin` header are same-origin and pass.
pub async fn reject_foreign_origin(
    State(allowed_origin): State<HeaderValue>,
    request: Request,
    next: Next,
) -> Response {
    match request.headers().get(header::ORIGIN) {
        Some(origin) if *origin != allowed_origin => {
            tracing::warn!(?origin, "rejected cross-origin request");
            Error::CorsRejected.into_response()
        }
        _ => next.run(request).await,
    }
}
