use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// UI label to API code. The inverse table is derived from this one, so the
/// two always stay exact inverses.
const UI_TO_API: [(&str, &str); 3] = [
    ("Solar", "SOLAR_FOTOVOLTAICO"),
    ("Eólico", "EOLICO"),
    ("Híbrido", "HIBRIDACION"),
];

static API_TO_UI: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| UI_TO_API.iter().map(|&(label, code)| (code, label)).collect());

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoProyecto {
    SolarFotovoltaico,
    Eolico,
    Hibridacion,
}

impl TipoProyecto {
    pub const ALL: [TipoProyecto; 3] = [
        TipoProyecto::SolarFotovoltaico,
        TipoProyecto::Eolico,
        TipoProyecto::Hibridacion,
    ];

    /// Row of this variant in the label/code table.
    fn table_index(&self) -> usize {
        match self {
            TipoProyecto::SolarFotovoltaico => 0,
            TipoProyecto::Eolico => 1,
            TipoProyecto::Hibridacion => 2,
        }
    }

    pub fn api_code(&self) -> &'static str {
        UI_TO_API[self.table_index()].1
    }

    pub fn ui_label(&self) -> &'static str {
        UI_TO_API[self.table_index()].0
    }

    pub fn from_api_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.api_code() == code)
    }

    pub fn from_ui_label(label: &str) -> Option<Self> {
        match lookup_api(label) {
            Mapping::Known(code) => Self::from_api_code(code),
            Mapping::Unrecognized(_) => None,
        }
    }
}

/// Result of a table lookup: a known counterpart, or the original input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mapping<'a> {
    Known(&'static str),
    Unrecognized(&'a str),
}

impl<'a> Mapping<'a> {
    pub fn is_known(&self) -> bool {
        matches!(self, Mapping::Known(_))
    }

    /// Collapses to the mapped value, or the untouched input on a miss.
    pub fn or_passthrough(self) -> &'a str {
        match self {
            Mapping::Known(value) => value,
            Mapping::Unrecognized(original) => original,
        }
    }
}

pub fn lookup_api(label: &str) -> Mapping<'_> {
    UI_TO_API
        .iter()
        .find(|(ui, _)| *ui == label)
        .map(|&(_, code)| Mapping::Known(code))
        .unwrap_or(Mapping::Unrecognized(label))
}

pub fn lookup_ui(code: &str) -> Mapping<'_> {
    API_TO_UI
        .get(code)
        .map(|&label| Mapping::Known(label))
        .unwrap_or(Mapping::Unrecognized(code))
}

/// UI label to API code. Unknown labels pass through unchanged.
pub fn to_api(label: &str) -> &str {
    lookup_api(label).or_passthrough()
}

/// API code to UI label. Unknown codes pass through unchanged.
pub fn to_ui(code: &str) -> &str {
    lookup_ui(code).or_passthrough()
}

/// Project record as exchanged with the API; `tipo` holds an API code.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProyectoApi {
    pub id: u64,
    pub nombre: String,
    pub tipo: String,
    pub potencia_mw: f64,
    pub ubicacion: String,
}

/// Project record as shown in the UI; `tipo` holds a display label.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Proyecto {
    pub id: u64,
    pub nombre: String,
    pub tipo: String,
    pub potencia_mw: f64,
    pub ubicacion: String,
}

impl From<ProyectoApi> for Proyecto {
    fn from(api: ProyectoApi) -> Self {
        Self {
            tipo: to_ui(&api.tipo).to_string(),
            id: api.id,
            nombre: api.nombre,
            potencia_mw: api.potencia_mw,
            ubicacion: api.ubicacion,
        }
    }
}

impl Proyecto {
    pub fn into_api(self) -> ProyectoApi {
        ProyectoApi {
            tipo: to_api(&self.tipo).to_string(),
            id: self.id,
            nombre: self.nombre,
            potencia_mw: self.potencia_mw,
            ubicacion: self.ubicacion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_codes() {
        for (label, _) in UI_TO_API {
            assert_eq!(to_ui(to_api(label)), label);
        }
    }

    #[test]
    fn codes_round_trip_through_labels() {
        for (_, code) in UI_TO_API {
            assert_eq!(to_api(to_ui(code)), code);
        }
    }

    #[test]
    fn tables_are_exact_inverses() {
        assert_eq!(API_TO_UI.len(), UI_TO_API.len());
        for (label, code) in UI_TO_API {
            assert_eq!(API_TO_UI.get(code), Some(&label));
        }
    }

    #[test]
    fn unknown_values_pass_through() {
        assert_eq!(to_api("unknown"), "unknown");
        assert_eq!(to_ui("unknown"), "unknown");
        // codes are not labels and vice versa
        assert_eq!(to_api("EOLICO"), "EOLICO");
        assert_eq!(to_ui("Eólico"), "Eólico");
    }

    #[test]
    fn lookup_reports_misses() {
        assert_eq!(lookup_api("Híbrido"), Mapping::Known("HIBRIDACION"));
        assert_eq!(lookup_ui("GEOTERMIA"), Mapping::Unrecognized("GEOTERMIA"));
        assert!(!lookup_api("solar").is_known());
    }

    #[test]
    fn enum_rows_cover_the_table() {
        let codes: Vec<&str> = TipoProyecto::ALL.iter().map(|t| t.api_code()).collect();
        let expected: Vec<&str> = UI_TO_API.iter().map(|&(_, code)| code).collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn enum_agrees_with_tables() {
        for tipo in TipoProyecto::ALL {
            assert_eq!(to_api(tipo.ui_label()), tipo.api_code());
            assert_eq!(TipoProyecto::from_ui_label(tipo.ui_label()), Some(tipo));
            assert_eq!(TipoProyecto::from_api_code(tipo.api_code()), Some(tipo));
        }
        assert_eq!(TipoProyecto::Eolico.ui_label(), "Eólico");
        assert_eq!(TipoProyecto::Hibridacion.api_code(), "HIBRIDACION");
        assert_eq!(
            serde_json::to_string(&TipoProyecto::SolarFotovoltaico).unwrap(),
            "\"SOLAR_FOTOVOLTAICO\""
        );
    }

    #[test]
    fn record_mapper_translates_only_tipo() {
        let api = ProyectoApi {
            id: 3,
            nombre: "Parque Los Llanos".into(),
            tipo: "EOLICO".into(),
            potencia_mw: 49.5,
            ubicacion: "Albacete".into(),
        };
        let ui = Proyecto::from(api.clone());
        assert_eq!(ui.tipo, "Eólico");
        assert_eq!(ui.nombre, api.nombre);
        assert_eq!(ui.potencia_mw, api.potencia_mw);
        assert_eq!(ui.into_api(), api);
    }

    #[test]
    fn record_mapper_keeps_unknown_tipo() {
        let api = ProyectoApi {
            id: 9,
            nombre: "Piloto".into(),
            tipo: "BIOMASA".into(),
            potencia_mw: 2.0,
            ubicacion: "Soria".into(),
        };
        assert_eq!(Proyecto::from(api).tipo, "BIOMASA");
    }
}
