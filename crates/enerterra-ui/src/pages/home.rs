use enerterra_types::TipoProyecto;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Energía renovable en tu terreno"</h1>
            <p class="subtitle">
                "Conectamos propietarios de suelo con promotores de proyectos renovables."
            </p>
            <div class="hero-actions">
                <a href="/acceso" class="btn btn-primary">"Acceder"</a>
                <a href="/contacto" class="btn btn-secondary">"Hablemos"</a>
            </div>
        </section>

        <section class="audience-grid">
            <div class="card">
                <div class="card-title">"Propietarios"</div>
                <p>"Ofrece tu terreno y recibe propuestas de arrendamiento o compra."</p>
            </div>
            <div class="card">
                <div class="card-title">"Promotores"</div>
                <p>"Encuentra suelo disponible y gestiona tu cartera de proyectos."</p>
            </div>
        </section>

        <section class="project-types">
            <h2>"Tipos de proyecto"</h2>
            <ul class="tag-list">
                {TipoProyecto::ALL
                    .into_iter()
                    .map(|tipo| view! { <li class="tag">{tipo.ui_label()}</li> })
                    .collect_view()}
            </ul>
        </section>
    }
}
