pub mod auth;
pub mod sidebar;

pub use auth::{provide_auth, use_auth, AuthContext, AuthProvider};
pub use sidebar::{provide_sidebar, use_sidebar, SidebarContext, SidebarProvider};
