use serde::{Deserialize, Serialize};

/// Platform roles used to gate the role-specific areas.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Rol {
    Propietario,
    Promotor,
}

impl Rol {
    pub fn label(&self) -> &'static str {
        match self {
            Rol::Propietario => "Propietario",
            Rol::Promotor => "Promotor",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub nombre: String,
    pub email: String,
    pub rol: Rol,
}

/// Current session pair. `user` and `token` are independent: either may be
/// present without the other.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl AuthState {
    pub fn role(&self) -> Option<Rol> {
        self.user.as_ref().map(|u| u.rol)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

impl From<LoginResponse> for AuthState {
    fn from(response: LoginResponse) -> Self {
        Self {
            user: Some(response.user),
            token: Some(response.token),
        }
    }
}
