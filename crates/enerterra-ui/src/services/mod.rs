pub mod auth;
pub mod client;
pub mod contacto;
pub mod proyectos;

#[cfg(feature = "hydrate")]
pub use client::ApiClient;
pub use auth::AuthService;
pub use client::{ClientError, HttpClient};
pub use contacto::ContactService;
pub use proyectos::ProyectoService;
