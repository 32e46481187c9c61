pub mod promotor;
pub mod propietario;
pub mod public;

pub use promotor::PromotorLayout;
pub use propietario::PropietarioLayout;
pub use public::PublicLayout;
