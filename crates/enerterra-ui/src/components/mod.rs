pub mod navbar;
pub mod role_guard;
pub mod sidebar;
