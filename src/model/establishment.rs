use serde::{Deserialize, Serialize};

/// A storefront the launcher can send the user to.
///
/// Field names on the wire follow the service (`nome`, `descricao`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Establishment {
    pub id: String,

    #[serde(rename = "nome", default)]
    pub display_name: String,

    #[serde(rename = "descricao", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub url: String,
}

impl Establishment {
    pub fn new(id: &str, display_name: &str, description: Option<&str>, url: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            description: description.map(str::to_string),
            url: url.to_string(),
        }
    }
}
