use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use enerterra_types::{LoginRequest, LoginResponse};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/api/auth/login", post(handle_login))
}

async fn handle_login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Some(account) = state.account_by_credentials(&body.email, &body.token) else {
        warn!(email = %body.email, "rejected sign-in");
        return Err(ApiError::InvalidCredentials);
    };

    info!(user_id = account.id, rol = ?account.rol, "signed in");
    Ok(Json(LoginResponse {
        user: account.user(),
        token: account.token.clone(),
    }))
}

/// Middleware for API routes: checks `Authorization: Bearer <token>` against
/// the configured accounts and stores the matching `User` in the request
/// extensions.
pub async fn require_api_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let authHeader = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let account = bearer_token(authHeader).and_then(|token| state.account_by_token(token));

    let Some(account) = account else {
        return ApiError::Unauthorized.into_response();
    };

    request.extensions_mut().insert(account.user());
    next.run(request).await
}

fn bearer_token(authHeader: Option<&str>) -> Option<&str> {
    authHeader
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
