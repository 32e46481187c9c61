pub mod contactos;
pub mod proyectos;

use axum::Router;

use crate::state::AppState;

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(contactos::routes())
        .merge(proyectos::routes(state))
}
