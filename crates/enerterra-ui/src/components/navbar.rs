use leptos::prelude::*;

use crate::app::panel_path;
use crate::context::use_auth;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();

    view! {
        <header class="navbar">
            <a href="/" class="navbar-brand">
                <div class="brand-icon">"E"</div>
                <span class="brand-text">"Enerterra"</span>
            </a>
            <nav class="navbar-menu">
                <a href="/" class="navbar-item">"Inicio"</a>
                <a href="/contacto" class="navbar-item">"Contacto"</a>
                {move || match auth.get().user {
                    Some(user) => {
                        view! {
                            <a href=panel_path(user.rol) class="navbar-item">
                                {user.nombre}
                            </a>
                            <button class="btn btn-secondary" on:click=move |_| auth.clear()>
                                "Salir"
                            </button>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <a href="/acceso" class="btn btn-primary">"Acceder"</a>
                        }
                            .into_any()
                    }
                }}
            </nav>
        </header>
    }
}
