use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Port record as stored in the upstream collection
///
/// Everything but `id` may be missing in the store; fields this model does not
/// know about are kept in `extra` so an edit writes them back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    /// Longitude/latitude in degrees
    #[serde(default, deserialize_with = "coordinates_from_store")]
    pub coordinates: Vec<f64>,
    #[serde(default)]
    pub code: Option<PortCode>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub alias: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub regions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub unlocs: Vec<String>,
    /// Creation or last modification time (RFC 3339)
    #[serde(default)]
    pub time: Option<String>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCoordinate {
    Number(f64),
    Text(String),
}

/// Older records hold coordinates as the raw pieces of the form input
/// (`["55.5", " 25.4"]`); those are trimmed and parsed.
fn coordinates_from_store<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let stored: Option<Vec<StoredCoordinate>> = Option::deserialize(deserializer)?;
    stored
        .unwrap_or_default()
        .into_iter()
        .map(|c| match c {
            StoredCoordinate::Number(n) => Ok(n),
            StoredCoordinate::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                de::Error::custom(format!("invalid coordinate '{}'", text))
            }),
        })
        .collect()
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Port code, numeric in most of the dataset but free text when entered by hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PortCode {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl fmt::Display for PortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortCode::Integer(n) => write!(f, "{}", n),
            PortCode::Decimal(n) => write!(f, "{}", n),
            PortCode::Text(s) => f.write_str(s),
        }
    }
}

/// Joins list values for a single text input
pub fn join_list<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Splits a comma separated input back into list values
///
/// Pieces are not trimmed: "a, b" yields ["a", " b"].
pub fn split_list(input: &str) -> Vec<String> {
    input.split(',').map(|s| s.to_string()).collect()
}
