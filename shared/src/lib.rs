use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// A property value as a host page hands it to a widget.
///
/// Hosts either pass a native structured value or a JSON-encoded string
/// representing one. Both forms are accepted everywhere; the widget decodes
/// lazily, right before it normalizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// JSON-encoded text, e.g. `"[\"Jan\",\"Feb\"]"`
    Text(String),
    /// Native value (object, array, number...)
    Structured(Value),
}

impl RawValue {
    /// Encode a payload the way the server side sets element properties
    pub fn json<T: Serialize>(payload: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_string(payload).map(RawValue::Text)
    }

    /// Wrap a payload as a native value (no string round trip)
    pub fn structured<T: Serialize>(payload: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(payload).map(RawValue::Structured)
    }

    /// Decode into a JSON value. Text is parsed, structured values are borrowed as-is.
    pub fn decode(&self) -> Result<Cow<'_, Value>, serde_json::Error> {
        match self {
            RawValue::Text(text) => serde_json::from_str(text).map(Cow::Owned),
            RawValue::Structured(value) => Ok(Cow::Borrowed(value)),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, RawValue::Text(_))
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::Text(text)
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        RawValue::Structured(value)
    }
}

/// `chartData` payload shared by the category breakdown and account trend widgets
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    /// Category axis labels (slice names for the pie)
    #[serde(default)]
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One dataset inside a `chartData` payload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Series name; the account trend falls back to "Unnamed Series" when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub data: Vec<f64>,
    /// Per-slice colours (pie only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Vec<String>>,
}

impl Dataset {
    pub fn labelled(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: Some(label.into()),
            data,
            background_color: None,
        }
    }
}

/// Entry of the `series` property on the stacked trend widgets
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesPayload {
    pub name: String,
    #[serde(default)]
    pub data: Vec<f64>,
}

impl SeriesPayload {
    pub fn new(name: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// `headers` + `rows` for the data table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// Build table data from a JSON node carrying both `headers` and `rows`.
    ///
    /// Returns `None` when either key is missing or has the wrong shape. Cells
    /// that are not strings keep their JSON text (numbers, booleans).
    pub fn from_json_node(node: &Value) -> Option<Self> {
        let headers = node.get("headers")?.as_array()?;
        let rows = node.get("rows")?.as_array()?;

        let headers = headers.iter().map(cell_text).collect();
        let rows = rows
            .iter()
            .map(|row| row.as_array().map(|cells| cells.iter().map(cell_text).collect()))
            .collect::<Option<Vec<Vec<String>>>>()?;

        Some(Self { headers, rows })
    }

    /// The two property values (`headers`, `rows`) as JSON-encoded text
    pub fn to_properties(&self) -> Result<(RawValue, RawValue), serde_json::Error> {
        Ok((RawValue::json(&self.headers)?, RawValue::json(&self.rows)?))
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
