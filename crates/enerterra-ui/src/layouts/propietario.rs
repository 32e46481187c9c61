use leptos::prelude::*;

use crate::components::sidebar::{Sidebar, PROPIETARIO_LINKS};

#[component]
pub fn PropietarioLayout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar title="Propietarios" links=PROPIETARIO_LINKS />
            <main class="main-content">{children()}</main>
        </div>
    }
}
