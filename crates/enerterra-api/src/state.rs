use std::sync::Arc;

use enerterra_types::{ProyectoApi, Rol, User};
use serde::Deserialize;

/// A configured sign-in account. The token doubles as the bearer credential.
#[derive(Deserialize, Clone, Debug)]
pub struct Account {
    pub id: u64,
    pub nombre: String,
    pub email: String,
    pub rol: Rol,
    pub token: String,
}

impl Account {
    pub fn user(&self) -> User {
        User {
            id: self.id,
            nombre: self.nombre.clone(),
            email: self.email.clone(),
            rol: self.rol,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<Vec<Account>>,
    pub proyectos: Arc<Vec<ProyectoApi>>,
}

impl AppState {
    pub fn new(accounts: Vec<Account>, proyectos: Vec<ProyectoApi>) -> Self {
        Self {
            accounts: Arc::new(accounts),
            proyectos: Arc::new(proyectos),
        }
    }

    pub fn account_by_token(&self, token: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.token == token)
    }

    pub fn account_by_credentials(&self, email: &str, token: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email) && a.token == token)
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    let account = |id: u64, rol: Rol, who: &str| Account {
        id,
        nombre: format!("Cuenta {who}"),
        email: format!("{who}@example.com"),
        rol,
        token: format!("{who}-token"),
    };
    AppState::new(
        vec![
            account(1, Rol::Propietario, "propietario"),
            account(2, Rol::Promotor, "promotor"),
        ],
        vec![ProyectoApi {
            id: 1,
            nombre: "Planta La Solana".into(),
            tipo: "SOLAR_FOTOVOLTAICO".into(),
            potencia_mw: 12.5,
            ubicacion: "Ciudad Real".into(),
        }],
    )
}
