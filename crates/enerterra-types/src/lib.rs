pub mod auth;
pub mod contacto;
pub mod proyecto;

pub use auth::*;
pub use contacto::*;
pub use proyecto::{Mapping, Proyecto, ProyectoApi, TipoProyecto};
