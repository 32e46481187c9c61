use leptos::prelude::*;

use crate::context::use_auth;

#[component]
pub fn PropietarioPage() -> impl IntoView {
    let auth = use_auth();

    let greeting = move || match auth.get().user {
        Some(user) => format!("Hola, {}", user.nombre),
        None => "Hola".to_string(),
    };

    view! {
        <div class="dashboard-header">
            <h1>{greeting}</h1>
            <p class="subtitle">"Panel de propietario"</p>
        </div>
        <div class="dashboard-grid">
            <div class="card">
                <div class="card-title">"Tus terrenos"</div>
                <p>"Describe tu parcela y te pondremos en contacto con promotores interesados."</p>
                <a href="/contacto" class="btn btn-primary">"Ofrecer terreno"</a>
            </div>
            <div class="card">
                <div class="card-title">"Sesión"</div>
                {move || {
                    let state = auth.get();
                    view! {
                        <div class="metric-row">
                            <span class="metric-label">"Usuario"</span>
                            <span class="metric-value">
                                {state.user.map(|u| u.email).unwrap_or_else(|| "Invitado".into())}
                            </span>
                        </div>
                        <div class="metric-row">
                            <span class="metric-label">"Token"</span>
                            <span class="metric-value">
                                {if state.token.is_some() { "Activo" } else { "Sin token" }}
                            </span>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}
