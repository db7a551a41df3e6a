//! # Input Normalizer
//!
//! Turns raw property values into validated, shape-checked structures. Every
//! widget kind has its own normalizer under `charts/`; this module holds the
//! shared result types and the tolerant decoding helpers they are built from.
//!
//! ## Policy:
//! - Strings are decoded as JSON; a decode failure makes the input not ready.
//! - Absent list properties default to empty lists; absent or `null` numbers
//!   default to 0; numeric strings are accepted.
//! - Structural problems (wrong container types, missing `datasets`) make the
//!   input not ready. Incomplete datasets are accepted with a warning.

use serde_json::{Map, Value};
use shared::{ChartData, Dataset, RawValue, SeriesPayload, TableData};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

use crate::kind::WidgetKind;
use crate::property::{Property, PropertyStore};

/// Name used for a series whose payload carries no usable name
pub const UNNAMED_SERIES: &str = "Unnamed Series";

/// Why an input could not be normalized. The widget keeps its last frame.
#[derive(Debug, Error)]
pub enum NormalizationError {
    /// Property was never set. Expected before the host has pushed data.
    #[error("{property} has not been provided yet")]
    Missing { property: Property },
    #[error("{property} is not valid JSON: {source}")]
    Decode {
        property: Property,
        #[source]
        source: serde_json::Error,
    },
    #[error("{property} has an invalid shape: {reason}")]
    Shape { property: Property, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Missing,
    Decode,
    Shape,
}

impl NormalizationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NormalizationError::Missing { .. } => ErrorKind::Missing,
            NormalizationError::Decode { .. } => ErrorKind::Decode,
            NormalizationError::Shape { .. } => ErrorKind::Shape,
        }
    }

    pub fn property(&self) -> Property {
        match self {
            NormalizationError::Missing { property }
            | NormalizationError::Decode { property, .. }
            | NormalizationError::Shape { property, .. } => *property,
        }
    }

    /// Missing input is a normal pre-data state rather than a fault
    pub fn is_expected(&self) -> bool {
        self.kind() == ErrorKind::Missing
    }

    pub(crate) fn shape(property: Property, reason: impl Into<String>) -> Self {
        NormalizationError::Shape {
            property,
            reason: reason.into(),
        }
    }
}

/// Partial data that was accepted with a fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputWarning {
    UnnamedSeries { index: usize },
    MissingValues { index: usize },
    RaggedLength {
        property: Property,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWarning::UnnamedSeries { index } => {
                write!(f, "series {} has no name, using \"{}\"", index, UNNAMED_SERIES)
            }
            InputWarning::MissingValues { index } => {
                write!(f, "series {} has no data, rendering it empty", index)
            }
            InputWarning::RaggedLength {
                property,
                expected,
                actual,
            } => write!(
                f,
                "{} has {} entries for a {}-long category axis",
                property, actual, expected
            ),
        }
    }
}

/// One named series aligned to its category axis
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries {
    pub name: String,
    pub points: Vec<(String, f64)>,
}

impl NormalizedSeries {
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, value)| *value).collect()
    }
}

/// Category axis plus the series drawn against it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesChart {
    pub categories: Vec<String>,
    pub series: Vec<NormalizedSeries>,
    /// Legend entries in display order
    pub legend: Vec<String>,
}

impl SeriesChart {
    /// Back to the `chartData` wire shape
    pub fn to_chart_data(&self) -> ChartData {
        ChartData {
            labels: self.categories.clone(),
            datasets: self
                .series
                .iter()
                .map(|series| Dataset::labelled(series.name.clone(), series.values()))
                .collect(),
        }
    }

    /// Back to the `series` wire shape of the stacked trends
    pub fn to_series_payloads(&self) -> Vec<SeriesPayload> {
        self.series
            .iter()
            .map(|series| SeriesPayload::new(series.name.clone(), series.values()))
            .collect()
    }
}

/// Pie-style input: one value and optional colour per label
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedDataset {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// `None` leaves the slice colour to the engine
    pub colors: Vec<Option<String>>,
}

impl NormalizedDataset {
    pub fn to_chart_data(&self) -> ChartData {
        let background_color = if self.colors.iter().any(Option::is_some) {
            Some(
                self.colors
                    .iter()
                    .map(|color| color.clone().unwrap_or_default())
                    .collect(),
            )
        } else {
            None
        };

        ChartData {
            labels: self.labels.clone(),
            datasets: vec![Dataset {
                label: None,
                data: self.values.clone(),
                background_color,
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableInput {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableInput {
    pub fn to_table_data(&self) -> TableData {
        TableData {
            headers: self.headers.clone(),
            rows: self.rows.clone(),
        }
    }
}

/// Normalized input, discriminated by the widget kind it belongs to
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Balance(SeriesChart),
    Table(TableInput),
    Category(NormalizedDataset),
    AccountTrend(SeriesChart),
    LegacyStackedTrend(SeriesChart),
    StackedTrend(SeriesChart),
    UnusualSpending(SeriesChart),
}

impl Payload {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Payload::Balance(_) => WidgetKind::BalanceChart,
            Payload::Table(_) => WidgetKind::DataTable,
            Payload::Category(_) => WidgetKind::CategoryBreakdown,
            Payload::AccountTrend(_) => WidgetKind::AccountTrend,
            Payload::LegacyStackedTrend(_) => WidgetKind::LegacyStackedTrend,
            Payload::StackedTrend(_) => WidgetKind::StackedTrend,
            Payload::UnusualSpending(_) => WidgetKind::UnusualSpending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub payload: Payload,
    pub warnings: Vec<InputWarning>,
}

impl Normalized {
    pub(crate) fn new(payload: Payload, warnings: Vec<InputWarning>) -> Self {
        Self { payload, warnings }
    }
}

/// Decode a property; `None` when it was never set or holds blank text
pub(crate) fn decode<'a>(
    store: &'a PropertyStore,
    property: Property,
) -> Result<Option<Cow<'a, Value>>, NormalizationError> {
    match store.get(property) {
        None => Ok(None),
        Some(RawValue::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .decode()
            .map(Some)
            .map_err(|source| NormalizationError::Decode { property, source }),
    }
}

/// Decode a property that must be present
pub(crate) fn decode_required<'a>(
    store: &'a PropertyStore,
    property: Property,
) -> Result<Cow<'a, Value>, NormalizationError> {
    decode(store, property)?.ok_or(NormalizationError::Missing { property })
}

/// Decode a list property; absent (or `null`) means empty
pub(crate) fn decode_list(
    store: &PropertyStore,
    property: Property,
) -> Result<Vec<Value>, NormalizationError> {
    match decode(store, property)? {
        None => Ok(Vec::new()),
        Some(value) => match value.into_owned() {
            Value::Array(items) => Ok(items),
            Value::Null => Ok(Vec::new()),
            other => Err(NormalizationError::shape(
                property,
                format!("expected an array, got {}", type_name(&other)),
            )),
        },
    }
}

/// Object member, treating `null` like an absent key
pub(crate) fn member<'v>(object: &'v Map<String, Value>, key: &str) -> Option<&'v Value> {
    object.get(key).filter(|value| !value.is_null())
}

pub(crate) fn as_object<'v>(
    property: Property,
    what: &str,
    value: &'v Value,
) -> Result<&'v Map<String, Value>, NormalizationError> {
    value.as_object().ok_or_else(|| {
        NormalizationError::shape(
            property,
            format!("{} must be an object, got {}", what, type_name(value)),
        )
    })
}

pub(crate) fn as_array<'v>(
    property: Property,
    what: &str,
    value: &'v Value,
) -> Result<&'v Vec<Value>, NormalizationError> {
    value.as_array().ok_or_else(|| {
        NormalizationError::shape(
            property,
            format!("{} must be an array, got {}", what, type_name(value)),
        )
    })
}

/// The `datasets` collection of a `chartData` object: present, an array, non-empty
pub(crate) fn datasets<'v>(
    property: Property,
    chart: &'v Map<String, Value>,
) -> Result<&'v Vec<Value>, NormalizationError> {
    let datasets = member(chart, "datasets")
        .ok_or_else(|| NormalizationError::shape(property, "datasets is missing"))?;
    let datasets = as_array(property, "datasets", datasets)?;
    if datasets.is_empty() {
        return Err(NormalizationError::shape(property, "datasets is empty"));
    }
    Ok(datasets)
}

/// Text of a label-like entry: strings as-is, numbers and booleans in JSON form, null as ""
pub(crate) fn text_entry(property: Property, index: usize, value: &Value) -> Result<String, NormalizationError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(NormalizationError::shape(
            property,
            format!("entry {} must be text, got {}", index, type_name(other)),
        )),
    }
}

pub(crate) fn text_list(property: Property, items: &[Value]) -> Result<Vec<String>, NormalizationError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| text_entry(property, index, item))
        .collect()
}

/// Lenient number: JSON numbers, numeric strings; null and junk strings become 0
pub(crate) fn number_entry(property: Property, index: usize, value: &Value) -> Result<f64, NormalizationError> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Null => None,
        other => {
            return Err(NormalizationError::shape(
                property,
                format!("entry {} must be a number, got {}", index, type_name(other)),
            ))
        }
    };
    Ok(number.filter(|n| n.is_finite()).unwrap_or(0.0))
}

pub(crate) fn number_list(property: Property, items: &[Value]) -> Result<Vec<f64>, NormalizationError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| number_entry(property, index, item))
        .collect()
}

/// Optional colour hints; anything that is not a non-empty string falls back to the engine
pub(crate) fn color_list(items: &[Value]) -> Vec<Option<String>> {
    items
        .iter()
        .map(|item| item.as_str().filter(|color| !color.trim().is_empty()).map(str::to_string))
        .collect()
}

/// Align series to one category axis. The axis is as long as the longest input;
/// missing labels become "" and missing values 0, so no supplied data is dropped.
pub(crate) fn align_series(
    labels: Vec<String>,
    raw_series: Vec<(String, Vec<f64>)>,
    values_property: Property,
    warnings: &mut Vec<InputWarning>,
) -> (Vec<String>, Vec<NormalizedSeries>) {
    let axis_len = raw_series
        .iter()
        .map(|(_, values)| values.len())
        .chain(std::iter::once(labels.len()))
        .max()
        .unwrap_or(0);

    let mut categories = labels;
    if categories.len() < axis_len {
        warnings.push(InputWarning::RaggedLength {
            property: Property::Labels,
            expected: axis_len,
            actual: categories.len(),
        });
        categories.resize(axis_len, String::new());
    }

    let series = raw_series
        .into_iter()
        .map(|(name, mut values)| {
            if !values.is_empty() && values.len() < axis_len {
                warnings.push(InputWarning::RaggedLength {
                    property: values_property,
                    expected: axis_len,
                    actual: values.len(),
                });
            }
            values.resize(axis_len, 0.0);
            let points = categories.iter().cloned().zip(values).collect();
            NormalizedSeries { name, points }
        })
        .collect();

    (categories, series)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
