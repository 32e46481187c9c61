use enerterra_types::{AuthState, Rol};
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::context::{use_auth, AuthContext};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Deny,
}

/// Anonymous sessions are always denied; otherwise the user's role must be
/// in `allowed`.
pub fn guard_outcome(state: &AuthState, allowed: &[Rol]) -> GuardOutcome {
    match state.role() {
        Some(rol) if allowed.contains(&rol) => GuardOutcome::Allow,
        _ => GuardOutcome::Deny,
    }
}

/// Outcome that only notifies when it flips between allow and deny, so a new
/// token for the same role leaves the guarded subtree alone.
pub fn guard_memo(auth: AuthContext, allowed: Vec<Rol>) -> Memo<GuardOutcome> {
    Memo::new(move |_| guard_outcome(&auth.get(), &allowed))
}

/// Renders `children` only for the permitted roles and redirects everyone
/// else to `redirect_to`. Children are rebuilt only when the outcome flips.
#[component]
pub fn RoleGuard(
    allowed: Vec<Rol>,
    redirect_to: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let outcome = guard_memo(use_auth(), allowed);

    move || match outcome.get() {
        GuardOutcome::Allow => children().into_any(),
        GuardOutcome::Deny => view! { <Redirect path=redirect_to /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use enerterra_types::User;

    use super::*;
    use crate::context::provide_auth;

    fn as_role(rol: Rol) -> AuthState {
        AuthState {
            user: Some(User {
                id: 1,
                nombre: "N".into(),
                email: "n@example.com".into(),
                rol,
            }),
            token: Some("t".into()),
        }
    }

    #[test]
    fn anonymous_is_denied() {
        assert_eq!(guard_outcome(&AuthState::default(), &[Rol::Promotor]), GuardOutcome::Deny);

        let tokenOnly = AuthState {
            user: None,
            token: Some("t".into()),
        };
        assert_eq!(guard_outcome(&tokenOnly, &[Rol::Promotor]), GuardOutcome::Deny);
    }

    #[test]
    fn role_must_be_in_allowed_set() {
        assert_eq!(
            guard_outcome(&as_role(Rol::Propietario), &[Rol::Promotor]),
            GuardOutcome::Deny
        );
        assert_eq!(
            guard_outcome(&as_role(Rol::Promotor), &[Rol::Promotor]),
            GuardOutcome::Allow
        );
        assert_eq!(
            guard_outcome(&as_role(Rol::Propietario), &[Rol::Promotor, Rol::Propietario]),
            GuardOutcome::Allow
        );
        assert_eq!(guard_outcome(&as_role(Rol::Promotor), &[]), GuardOutcome::Deny);
    }

    #[test]
    fn subtree_rebuilds_only_when_outcome_flips() {
        let owner = Owner::new();
        owner.with(|| {
            let auth = provide_auth();
            let outcome = guard_memo(auth, vec![Rol::Promotor]);

            let builds = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&builds);
            let subtree = Memo::new(move |_| {
                let current = outcome.get();
                counter.fetch_add(1, Ordering::SeqCst);
                current
            });

            assert_eq!(subtree.get_untracked(), GuardOutcome::Deny);
            assert_eq!(builds.load(Ordering::SeqCst), 1);

            auth.set(as_role(Rol::Promotor));
            assert_eq!(subtree.get_untracked(), GuardOutcome::Allow);
            assert_eq!(builds.load(Ordering::SeqCst), 2);

            // same role, new token: outcome unchanged, nothing rebuilt
            let mut relogged = as_role(Rol::Promotor);
            relogged.token = Some("t2".into());
            auth.set(relogged);
            assert_eq!(subtree.get_untracked(), GuardOutcome::Allow);
            assert_eq!(builds.load(Ordering::SeqCst), 2);

            auth.clear();
            assert_eq!(subtree.get_untracked(), GuardOutcome::Deny);
            assert_eq!(builds.load(Ordering::SeqCst), 3);
        });
    }
}
