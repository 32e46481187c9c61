use enerterra_types::{ContactData, ContactResponse};
use http::Method;
use tracing::debug;

use super::client::HttpClient;

pub struct ContactService<C> {
    client: C,
}

impl<C: HttpClient> ContactService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// One `POST /contactos` with `data` as the body. The decoded reply and
    /// any client error are returned as they are.
    pub async fn send_message(&self, data: &ContactData) -> Result<ContactResponse, C::Error> {
        debug!(tipo = data.tipo.as_str(), "sending contact message");
        self.client
            .request(Method::POST, "/contactos", Some(data))
            .await
    }
}

#[cfg(test)]
mod tests {
    use enerterra_types::TipoContacto;
    use serde_json::json;

    use super::*;
    use crate::services::testing::RecordingClient;

    fn message() -> ContactData {
        ContactData {
            nombre: "Pilar".into(),
            email: "pilar@example.com".into(),
            telefono: None,
            tipo: TipoContacto::Soporte,
            mensaje: "No puedo acceder".into(),
        }
    }

    #[tokio::test]
    async fn posts_payload_and_returns_reply_verbatim() {
        let client = RecordingClient::replying(json!({
            "success": true,
            "message": "Recibido",
        }));
        let service = ContactService::new(client);

        let reply = service.send_message(&message()).await.unwrap();
        assert_eq!(
            reply,
            ContactResponse {
                success: true,
                message: "Recibido".into(),
            }
        );

        let call = service.client.single_call();
        assert_eq!(call.method, Method::POST);
        assert_eq!(call.path, "/contactos");
        assert_eq!(call.payload, Some(serde_json::to_value(message()).unwrap()));
    }

    #[tokio::test]
    async fn unsuccessful_reply_is_not_turned_into_an_error() {
        let client = RecordingClient::replying(json!({
            "success": false,
            "message": "Fuera de servicio",
        }));
        let reply = ContactService::new(client)
            .send_message(&message())
            .await
            .unwrap();
        assert!(!reply.success);
        assert_eq!(reply.message, "Fuera de servicio");
    }

    #[tokio::test]
    async fn client_error_propagates_unchanged() {
        let service = ContactService::new(RecordingClient::failing("connection reset"));
        let err = service.send_message(&message()).await.unwrap_err();
        assert_eq!(err, "connection reset");
        assert_eq!(service.client.calls.borrow().len(), 1);
    }
}
