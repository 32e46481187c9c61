use enerterra_types::{Proyecto, ProyectoApi, TipoProyecto};
use http::Method;

use super::client::HttpClient;

pub struct ProyectoService<C> {
    client: C,
}

impl<C: HttpClient> ProyectoService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetches `GET /proyectos` and maps every record to its UI form.
    pub async fn list(&self) -> Result<Vec<Proyecto>, C::Error> {
        let records: Vec<ProyectoApi> = self
            .client
            .request(Method::GET, "/proyectos", None::<&()>)
            .await?;
        Ok(records.into_iter().map(Proyecto::from).collect())
    }
}

/// Keeps the projects whose label matches `tipo`; `None` keeps all of them.
pub fn filter_by_tipo(proyectos: &[Proyecto], tipo: Option<TipoProyecto>) -> Vec<Proyecto> {
    match tipo {
        None => proyectos.to_vec(),
        Some(tipo) => proyectos
            .iter()
            .filter(|p| p.tipo == tipo.ui_label())
            .cloned()
            .collect(),
    }
}
