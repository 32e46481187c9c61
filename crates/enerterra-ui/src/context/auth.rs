use enerterra_types::AuthState;
use leptos::prelude::*;

/// Handle to the session's auth pair.
///
/// Obtained through [`use_auth`]. A handle taken outside any [`AuthProvider`]
/// is detached: it always reads as `AuthState::default()` and ignores writes.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: Option<RwSignal<AuthState>>,
}

impl AuthContext {
    fn detached() -> Self {
        Self { state: None }
    }

    pub fn is_attached(&self) -> bool {
        self.state.is_some()
    }

    /// Reactive read of the current value.
    pub fn get(&self) -> AuthState {
        self.state.map(|s| s.get()).unwrap_or_default()
    }

    pub fn get_untracked(&self) -> AuthState {
        self.state.map(|s| s.get_untracked()).unwrap_or_default()
    }

    /// Replaces the whole value. Nothing from the previous state is kept.
    pub fn set(&self, next: AuthState) {
        if let Some(state) = self.state {
            state.set(next);
        }
    }

    pub fn clear(&self) {
        self.set(AuthState::default());
    }
}

/// Creates an empty auth state in the current owner and provides it to
/// descendants.
pub fn provide_auth() -> AuthContext {
    let ctx = AuthContext {
        state: Some(RwSignal::new(AuthState::default())),
    };
    provide_context(ctx);
    ctx
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(AuthContext::detached)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_auth();
    children()
}

#[cfg(test)]
mod tests {
    use enerterra_types::{Rol, User};

    use super::*;

    fn signed_in(id: u64, token: &str) -> AuthState {
        AuthState {
            user: Some(User {
                id,
                nombre: "Test".into(),
                email: "test@example.com".into(),
                rol: Rol::Propietario,
            }),
            token: Some(token.into()),
        }
    }

    #[test]
    fn accessor_without_provider_is_safe() {
        let owner = Owner::new();
        owner.with(|| {
            let auth = use_auth();
            assert!(!auth.is_attached());
            assert_eq!(auth.get(), AuthState::default());

            auth.set(signed_in(1, "abc"));
            assert_eq!(auth.get_untracked().user, None);
        });
    }

    #[test]
    fn set_replaces_whole_value() {
        let owner = Owner::new();
        owner.with(|| {
            provide_auth();
            let auth = use_auth();
            assert!(auth.is_attached());

            auth.set(signed_in(9, "old"));
            let next = signed_in(1, "abc");
            auth.set(next.clone());
            assert_eq!(auth.get_untracked(), next);

            // a token without a user is a valid state and does not keep the old user
            let tokenOnly = AuthState {
                user: None,
                token: Some("t".into()),
            };
            auth.set(tokenOnly.clone());
            assert_eq!(auth.get_untracked(), tokenOnly);
        });
    }

    #[test]
    fn descendants_share_one_value() {
        let owner = Owner::new();
        owner.with(|| {
            let root = provide_auth();
            let child = owner.child();
            child.with(|| {
                use_auth().set(signed_in(2, "shared"));
            });
            assert_eq!(root.get_untracked().token.as_deref(), Some("shared"));

            root.clear();
            assert_eq!(root.get_untracked(), AuthState::default());
        });
    }
}
