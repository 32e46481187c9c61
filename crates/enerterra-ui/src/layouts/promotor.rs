use enerterra_types::Rol;
use leptos::prelude::*;

use crate::components::role_guard::RoleGuard;
use crate::components::sidebar::{Sidebar, PROMOTOR_LINKS};
use crate::context::SidebarProvider;

/// Developer area shell. Only promotores get past the guard; the sidebar
/// collapse state lives inside it.
#[component]
pub fn PromotorLayout(children: ChildrenFn) -> impl IntoView {
    view! {
        <RoleGuard allowed=vec![Rol::Promotor] redirect_to="/acceso">
            {
                let children = children.clone();
                view! {
                    <SidebarProvider>
                        <div class="app-layout">
                            <Sidebar title="Promotores" links=PROMOTOR_LINKS />
                            <main class="main-content">{children()}</main>
                        </div>
                    </SidebarProvider>
                }
            }
        </RoleGuard>
    }
}
