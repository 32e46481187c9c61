use axum::{http::StatusCode, routing::post, Json, Router};
use enerterra_types::{ContactData, ContactResponse};
use tracing::{info, warn};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/contactos", post(post_contacto))
}

async fn post_contacto(Json(contact): Json<ContactData>) -> (StatusCode, Json<ContactResponse>) {
    if let Some(field) = first_blank_field(&contact) {
        warn!(field, "rejected contact submission");
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ContactResponse {
                success: false,
                message: format!("El campo {field} es obligatorio"),
            }),
        );
    }

    info!(
        tipo = contact.tipo.as_str(),
        email = %contact.email,
        has_phone = contact.telefono.is_some(),
        "contact message received"
    );

    (
        StatusCode::OK,
        Json(ContactResponse {
            success: true,
            message: "Mensaje recibido. Te responderemos en breve.".into(),
        }),
    )
}

fn first_blank_field(contact: &ContactData) -> Option<&'static str> {
    [
        ("nombre", &contact.nombre),
        ("email", &contact.email),
        ("mensaje", &contact.mensaje),
    ]
    .into_iter()
    .find(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
}
