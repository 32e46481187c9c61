use enerterra_types::{Proyecto, TipoProyecto};
use leptos::prelude::*;

use crate::context::use_auth;
use crate::services::proyectos::filter_by_tipo;

#[component]
pub fn ProyectosPage() -> impl IntoView {
    let auth = use_auth();
    #[allow(unused_variables)]
    let (proyectos, setProyectos) = signal(Option::<Result<Vec<Proyecto>, String>>::None);
    let (filtro, setFiltro) = signal(Option::<TipoProyecto>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        use crate::services::{ApiClient, ProyectoService};

        // Refetch whenever the session token changes
        Effect::new(move |_| {
            let token = auth.get().token;
            spawn_local(async move {
                let service = ProyectoService::new(ApiClient::new(token));
                let result = service.list().await.map_err(|e| e.to_string());
                setProyectos.set(Some(result));
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }

    view! {
        <div class="dashboard-header">
            <h1>"Proyectos"</h1>
            <p class="subtitle">"Cartera de proyectos renovables"</p>
        </div>
        <div class="filter-bar">
            <label for="filtro-tipo">"Tipo"</label>
            <select
                id="filtro-tipo"
                on:change=move |ev| {
                    setFiltro.set(TipoProyecto::from_ui_label(&event_target_value(&ev)));
                }
            >
                <option value="" selected=move || filtro.get().is_none()>
                    "Todos"
                </option>
                {TipoProyecto::ALL
                    .into_iter()
                    .map(|tipo| {
                        view! {
                            <option value=tipo.ui_label() selected=move || filtro.get() == Some(tipo)>
                                {tipo.ui_label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
        {move || {
            match proyectos.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Cargando proyectos..."
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(list)) => {
                    let visible = filter_by_tipo(&list, filtro.get());
                    view! { <ProyectoTable proyectos=visible /> }.into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"No se pudieron cargar los proyectos: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}

#[component]
fn ProyectoTable(proyectos: Vec<Proyecto>) -> impl IntoView {
    view! {
        <div class="card">
            <table>
                <thead>
                    <tr>
                        <th>"Nombre"</th>
                        <th>"Tipo"</th>
                        <th>"Potencia"</th>
                        <th>"Ubicación"</th>
                    </tr>
                </thead>
                <tbody>
                    {if proyectos.is_empty() {
                        view! {
                            <tr>
                                <td colspan="4">"No hay proyectos de este tipo"</td>
                            </tr>
                        }
                            .into_any()
                    } else {
                        proyectos
                            .into_iter()
                            .map(|proyecto| {
                                view! {
                                    <tr>
                                        <td>{proyecto.nombre}</td>
                                        <td>
                                            <span class="tag">{proyecto.tipo}</span>
                                        </td>
                                        <td>{format!("{:.1} MW", proyecto.potencia_mw)}</td>
                                        <td>{proyecto.ubicacion}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}
