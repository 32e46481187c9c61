use enerterra_types::{ContactData, ContactResponse, TipoContacto};
use leptos::prelude::*;

use crate::context::use_auth;
use crate::services::ClientError;

/// Builds the payload from raw form fields. An empty phone input means the
/// visitor gave no phone, so it is sent as absent.
fn contact_from_form(
    nombre: String,
    email: String,
    telefono: String,
    tipo: TipoContacto,
    mensaje: String,
) -> ContactData {
    let telefono = telefono.trim().to_string();
    ContactData {
        nombre: nombre.trim().to_string(),
        email: email.trim().to_string(),
        telefono: (!telefono.is_empty()).then_some(telefono),
        tipo,
        mensaje,
    }
}

/// Flattens the reply into the inline status shown under the form. Rejections
/// from the API carry a `ContactResponse` body whose message is shown as is.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn submission_status(result: Result<ContactResponse, ClientError>) -> Result<String, String> {
    match result {
        Ok(reply) if reply.success => Ok(reply.message),
        Ok(reply) => Err(reply.message),
        Err(ClientError::Status { status, body }) => {
            match serde_json::from_str::<ContactResponse>(&body) {
                Ok(reply) => Err(reply.message),
                Err(_) => Err(format!("No se pudo enviar el mensaje: HTTP {status}")),
            }
        }
        Err(e) => Err(format!("No se pudo enviar el mensaje: {e}")),
    }
}

#[derive(Clone, Copy)]
struct ContactForm {
    nombre: RwSignal<String>,
    email: RwSignal<String>,
    telefono: RwSignal<String>,
    tipo: RwSignal<TipoContacto>,
    mensaje: RwSignal<String>,
}

impl ContactForm {
    fn new() -> Self {
        Self {
            nombre: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            telefono: RwSignal::new(String::new()),
            tipo: RwSignal::new(TipoContacto::default()),
            mensaje: RwSignal::new(String::new()),
        }
    }

    fn to_data(&self) -> ContactData {
        contact_from_form(
            self.nombre.get_untracked(),
            self.email.get_untracked(),
            self.telefono.get_untracked(),
            self.tipo.get_untracked(),
            self.mensaje.get_untracked(),
        )
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn clear(&self) {
        self.nombre.set(String::new());
        self.email.set(String::new());
        self.telefono.set(String::new());
        self.tipo.set(TipoContacto::default());
        self.mensaje.set(String::new());
    }
}

#[component]
pub fn ContactoPage() -> impl IntoView {
    let form = ContactForm::new();
    #[allow(unused_variables)]
    let auth = use_auth();
    #[allow(unused_variables)]
    let (sending, setSending) = signal(false);
    #[allow(unused_variables)]
    let (status, setStatus) = signal(Option::<Result<String, String>>::None);

    let onSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let data = form.to_data();

        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            use crate::services::{ApiClient, ContactService};

            let token = auth.get_untracked().token;
            setSending.set(true);
            setStatus.set(None);
            spawn_local(async move {
                let service = ContactService::new(ApiClient::new(token));
                let outcome = submission_status(service.send_message(&data).await);
                if outcome.is_ok() {
                    form.clear();
                }
                setStatus.set(Some(outcome));
                setSending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = data;
        }
    };

    view! {
        <div class="dashboard-header">
            <h1>"Contacto"</h1>
            <p class="subtitle">"Cuéntanos tu caso y te responderemos en breve"</p>
        </div>
        <div class="card contact-card">
            {move || {
                status
                    .get()
                    .map(|outcome| match outcome {
                        Ok(message) => view! { <div class="form-success">{message}</div> }.into_any(),
                        Err(message) => view! { <div class="login-error">{message}</div> }.into_any(),
                    })
            }}
            <form on:submit=onSubmit>
                <div class="form-group">
                    <label for="nombre">"Nombre"</label>
                    <input
                        type="text"
                        id="nombre"
                        name="nombre"
                        required
                        prop:value=move || form.nombre.get()
                        on:input=move |ev| form.nombre.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        required
                        prop:value=move || form.email.get()
                        on:input=move |ev| form.email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="telefono">"Teléfono (opcional)"</label>
                    <input
                        type="tel"
                        id="telefono"
                        name="telefono"
                        prop:value=move || form.telefono.get()
                        on:input=move |ev| form.telefono.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="tipo">"Motivo"</label>
                    <select
                        id="tipo"
                        name="tipo"
                        prop:value=move || form.tipo.get().as_str()
                        on:change=move |ev| {
                            if let Some(selected) = TipoContacto::parse(&event_target_value(&ev)) {
                                form.tipo.set(selected);
                            }
                        }
                    >
                        {TipoContacto::ALL
                            .into_iter()
                            .map(|kind| {
                                view! { <option value=kind.as_str()>{kind.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="mensaje">"Mensaje"</label>
                    <textarea
                        id="mensaje"
                        name="mensaje"
                        rows="5"
                        required
                        prop:value=move || form.mensaje.get()
                        on:input=move |ev| form.mensaje.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                    {move || if sending.get() { "Enviando..." } else { "Enviar" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_phone_input_is_absent() {
        let data = contact_from_form(
            " Rosa ".into(),
            "rosa@example.com ".into(),
            "   ".into(),
            TipoContacto::Propietario,
            "Hola".into(),
        );
        assert_eq!(data.nombre, "Rosa");
        assert_eq!(data.email, "rosa@example.com");
        assert_eq!(data.telefono, None);

        let withPhone = contact_from_form(
            "Rosa".into(),
            "rosa@example.com".into(),
            "600 000 000".into(),
            TipoContacto::General,
            "Hola".into(),
        );
        assert_eq!(withPhone.telefono.as_deref(), Some("600 000 000"));
    }

    #[test]
    fn status_follows_success_flag() {
        let ok = ContactResponse {
            success: true,
            message: "Gracias".into(),
        };
        let rejected = ContactResponse {
            success: false,
            message: "Falta el email".into(),
        };
        assert_eq!(submission_status(Ok(ok)), Ok("Gracias".into()));
        assert_eq!(submission_status(Ok(rejected)), Err("Falta el email".into()));
        assert!(submission_status(Err(ClientError::Network("offline".into())))
            .unwrap_err()
            .contains("offline"));
    }

    #[test]
    fn rejected_status_shows_api_message() {
        let validation = ClientError::Status {
            status: 422,
            body: r#"{"success":false,"message":"El campo mensaje es obligatorio"}"#.into(),
        };
        assert_eq!(
            submission_status(Err(validation)),
            Err("El campo mensaje es obligatorio".into())
        );

        let gateway = ClientError::Status {
            status: 502,
            body: "<html>Bad Gateway</html>".into(),
        };
        assert_eq!(
            submission_status(Err(gateway)),
            Err("No se pudo enviar el mensaje: HTTP 502".into())
        );
    }

    #[test]
    fn clear_resets_every_field() {
        let owner = Owner::new();
        owner.with(|| {
            let form = ContactForm::new();
            form.nombre.set("Rosa".into());
            form.email.set("rosa@example.com".into());
            form.telefono.set("600000000".into());
            form.tipo.set(TipoContacto::Soporte);
            form.mensaje.set("Hola".into());
            assert_eq!(form.to_data().tipo, TipoContacto::Soporte);

            form.clear();
            let data = form.to_data();
            assert_eq!(data.nombre, "");
            assert_eq!(data.email, "");
            assert_eq!(data.telefono, None);
            assert_eq!(data.tipo, TipoContacto::default());
            assert_eq!(data.mensaje, "");
        });
    }
}
