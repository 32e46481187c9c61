use enerterra_api::Account;
use enerterra_types::ProyectoApi;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub proyectos: Vec<ProyectoApi>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind: "0.0.0.0".into(),
                port: 3000,
            },
            accounts: Vec::new(),
            proyectos: Vec::new(),
        }
    }
}

pub fn load(path: &str) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to parse config {path}: {e}, using defaults");
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("failed to read config {path}: {e}, using defaults");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use enerterra_types::Rol;

    use super::*;

    #[test]
    fn parses_accounts_and_proyectos() {
        let config: Config = toml::from_str(
            r#"
            [server]
            bind = "127.0.0.1"
            port = 8080

            [[accounts]]
            id = 1
            nombre = "Elena"
            email = "elena@example.com"
            rol = "promotor"
            token = "secret"

            [[proyectos]]
            id = 10
            nombre = "Parque Sierra Alta"
            tipo = "EOLICO"
            potencia_mw = 48.0
            ubicacion = "Burgos"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.accounts.len(), 1);
        assert_eq!(config.accounts[0].rol, Rol::Promotor);
        assert_eq!(config.proyectos[0].tipo, "EOLICO");
    }

    #[test]
    fn lists_are_optional() {
        let config: Config = toml::from_str("[server]\nbind = \"0.0.0.0\"\nport = 3000\n").unwrap();
        assert!(config.accounts.is_empty());
        assert!(config.proyectos.is_empty());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load("/nonexistent/enerterra.toml");
        assert_eq!(config.server.port, 3000);
        assert!(config.accounts.is_empty());
    }
}
