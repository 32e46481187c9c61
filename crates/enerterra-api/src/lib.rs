#![allow(non_snake_case)]

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;

pub use crate::state::{Account, AppState};

pub fn api_router(state: AppState) -> Router {
    let apiRoutes = routes::api_routes(state.clone());
    let authRoutes = middleware::auth::auth_routes();

    Router::new()
        .merge(apiRoutes)
        .merge(authRoutes)
        .with_state(state)
}
