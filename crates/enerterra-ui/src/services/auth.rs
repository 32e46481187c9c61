use enerterra_types::{LoginRequest, LoginResponse};
use http::Method;

use super::client::HttpClient;

pub struct AuthService<C> {
    client: C,
}

impl<C: HttpClient> AuthService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn login(&self, email: &str, token: &str) -> Result<LoginResponse, C::Error> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            token: token.to_string(),
        };
        self.client
            .request(Method::POST, "/auth/login", Some(&body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use enerterra_types::Rol;
    use serde_json::json;

    use super::*;
    use crate::services::testing::RecordingClient;

    #[tokio::test]
    async fn login_posts_trimmed_email() {
        let client = RecordingClient::replying(json!({
            "user": { "id": 4, "nombre": "Iker", "email": "iker@example.com", "rol": "promotor" },
            "token": "t-4",
        }));
        let service = AuthService::new(client);

        let response = service.login("  iker@example.com ", "t-4").await.unwrap();
        assert_eq!(response.user.rol, Rol::Promotor);

        let call = service.client.single_call();
        assert_eq!(call.method, Method::POST);
        assert_eq!(call.path, "/auth/login");
        assert_eq!(
            call.payload,
            Some(json!({ "email": "iker@example.com", "token": "t-4" }))
        );
    }
}
