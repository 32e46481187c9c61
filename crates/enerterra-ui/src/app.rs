use enerterra_types::Rol;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::context::AuthProvider;
use crate::layouts::{PromotorLayout, PropietarioLayout, PublicLayout};
use crate::pages::acceso::AccesoPage;
use crate::pages::contacto::ContactoPage;
use crate::pages::home::HomePage;
use crate::pages::propietario::PropietarioPage;
use crate::pages::proyectos::ProyectosPage;

/// Landing route of each role area.
pub fn panel_path(rol: Rol) -> &'static str {
    match rol {
        Rol::Propietario => "/propietario",
        Rol::Promotor => "/promotor/proyectos",
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/enerterra-web.css" />
        <Title text="Enerterra" />
        <AuthProvider>
            <Router>
                <Routes fallback=|| view! { <p>"Página no encontrada."</p> }.into_any()>
                    <Route path=StaticSegment("") view=HomeView />
                    <Route path=StaticSegment("contacto") view=ContactoView />
                    <Route path=StaticSegment("acceso") view=AccesoView />
                    <Route path=StaticSegment("propietario") view=PropietarioView />
                    <Route
                        path=(StaticSegment("promotor"), StaticSegment("proyectos"))
                        view=ProyectosView
                    />
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn HomeView() -> impl IntoView {
    view! {
        <PublicLayout>
            <HomePage />
        </PublicLayout>
    }
}

#[component]
fn ContactoView() -> impl IntoView {
    view! {
        <PublicLayout>
            <ContactoPage />
        </PublicLayout>
    }
}

#[component]
fn AccesoView() -> impl IntoView {
    view! {
        <PublicLayout>
            <AccesoPage />
        </PublicLayout>
    }
}

#[component]
fn PropietarioView() -> impl IntoView {
    view! {
        <PropietarioLayout>
            <PropietarioPage />
        </PropietarioLayout>
    }
}

#[component]
fn ProyectosView() -> impl IntoView {
    view! {
        <PromotorLayout>
            <ProyectosPage />
        </PromotorLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_a_panel() {
        assert_eq!(panel_path(Rol::Propietario), "/propietario");
        assert_eq!(panel_path(Rol::Promotor), "/promotor/proyectos");
    }
}
