use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    view! {
        <div class="public-layout">
            <Navbar />
            <main class="public-content">{children()}</main>
            <footer class="footer">
                <span>"Enerterra \u{00B7} Proyectos renovables entre propietarios y promotores"</span>
                <a href="/contacto">"Contacto"</a>
            </footer>
        </div>
    }
}
