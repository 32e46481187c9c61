use leptos::prelude::*;

use crate::app::panel_path;
use crate::context::use_auth;

#[component]
pub fn AccesoPage() -> impl IntoView {
    let auth = use_auth();
    let (email, setEmail) = signal(String::new());
    let (token, setToken) = signal(String::new());
    #[allow(unused_variables)]
    let (error, setError) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let navigate = leptos_router::hooks::use_navigate();

    let onSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let emailValue = email.get_untracked();
        let tokenValue = token.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            use enerterra_types::AuthState;
            use wasm_bindgen_futures::spawn_local;

            use crate::services::{ApiClient, AuthService};

            let navigate = navigate.clone();
            setError.set(None);
            spawn_local(async move {
                let service = AuthService::new(ApiClient::new(None));
                match service.login(&emailValue, &tokenValue).await {
                    Ok(response) => {
                        let target = panel_path(response.user.rol);
                        auth.set(AuthState::from(response));
                        setToken.set(String::new());
                        navigate(target, Default::default());
                    }
                    Err(e) => {
                        tracing::warn!("sign-in failed: {e}");
                        setError.set(Some("Email o token incorrectos".to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (emailValue, tokenValue);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"E"</div>
                    <h1>"Acceso"</h1>
                    <p>"Introduce tu email y tu token de acceso"</p>
                </div>

                {move || {
                    auth.get()
                        .user
                        .map(|user| {
                            view! {
                                <div class="login-session">
                                    "Sesión iniciada como " {user.nombre} " (" {user.rol.label()} ")"
                                    <a href=panel_path(user.rol) class="btn btn-secondary">
                                        "Ir a mi panel"
                                    </a>
                                </div>
                            }
                        })
                }}

                {move || error.get().map(|message| view! { <div class="login-error">{message}</div> })}

                <form on:submit=onSubmit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| setEmail.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="token">"Token de acceso"</label>
                        <input
                            type="password"
                            id="token"
                            name="token"
                            required
                            prop:value=move || token.get()
                            on:input=move |ev| setToken.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">
                        "Entrar"
                    </button>
                </form>
            </div>
        </div>
    }
}
