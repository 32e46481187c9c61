pub mod acceso;
pub mod contacto;
pub mod home;
pub mod propietario;
pub mod proyectos;
