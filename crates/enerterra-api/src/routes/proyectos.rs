use axum::{extract::State, middleware, routing::get, Extension, Json, Router};
use enerterra_types::{ProyectoApi, User};
use tracing::debug;

use crate::middleware::auth::require_api_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/proyectos", get(get_proyectos))
        .route_layer(middleware::from_fn_with_state(state, require_api_auth))
}

async fn get_proyectos(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Json<Vec<ProyectoApi>> {
    debug!(user_id = user.id, count = state.proyectos.len(), "listing proyectos");
    Json(state.proyectos.as_ref().clone())
}
