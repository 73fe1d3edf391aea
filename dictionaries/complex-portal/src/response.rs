//! EBI Search JSON response, read permissively.
//!
//! Every `fields` value may be an array of strings or a single string;
//! anything else is treated as missing. Records that cannot be read at all
//! are dropped instead of failing the whole response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "lenient_entries")]
    pub entries: Vec<SearchEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchEntry {
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<String>,
    pub fields: SearchFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchFields {
    #[serde(deserialize_with = "field_values")]
    pub id: Vec<String>,
    #[serde(deserialize_with = "field_values")]
    pub name: Vec<String>,
    #[serde(deserialize_with = "field_values")]
    pub description: Vec<String>,
    #[serde(deserialize_with = "field_values")]
    pub complex_systematic_name: Vec<String>,
    #[serde(deserialize_with = "field_values")]
    pub complex_synonym: Vec<String>,
    #[serde(deserialize_with = "field_values")]
    pub organism: Vec<String>,
}

impl SearchResponse {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl SearchEntry {
    /// Complex accession, e.g. `CPX-2000`
    pub fn local_id(&self) -> Option<&str> {
        self.id
            .iter()
            .chain(self.fields.id.iter())
            .map(|id| id.trim())
            .find(|id| !id.is_empty())
    }
}

fn lenient_entries<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<SearchEntry>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let Value::Array(values) = value else {
        return Ok(Vec::new());
    };

    Ok(values
        .into_iter()
        .filter_map(|v| match serde_json::from_value(v) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable search record: {e}");
                None
            }
        })
        .collect())
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn field_values<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => vec![s],
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
