use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TipoContacto {
    Propietario,
    Promotor,
    General,
    Soporte,
}

impl TipoContacto {
    pub const ALL: [TipoContacto; 4] = [
        TipoContacto::Propietario,
        TipoContacto::Promotor,
        TipoContacto::General,
        TipoContacto::Soporte,
    ];

    /// Wire value, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoContacto::Propietario => "propietario",
            TipoContacto::Promotor => "promotor",
            TipoContacto::General => "general",
            TipoContacto::Soporte => "soporte",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TipoContacto::Propietario => "Soy propietario",
            TipoContacto::Promotor => "Soy promotor",
            TipoContacto::General => "Consulta general",
            TipoContacto::Soporte => "Soporte",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl Default for TipoContacto {
    fn default() -> Self {
        TipoContacto::General
    }
}

/// Contact form payload sent to `POST /contactos`.
///
/// A missing `telefono` is omitted from the JSON body; an empty one is sent
/// as `""`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactData {
    pub nombre: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    pub tipo: TipoContacto,
    pub mensaje: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}
