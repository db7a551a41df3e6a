//! # Render Configuration
//!
//! Engine-facing values produced fresh on every render. Chart options serialize
//! to the ECharts option object layout; tables are a plain-text cell model.
//! Nothing here refers back to widget state.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RenderConfig {
    Chart(ChartOption),
    Table(TableModel),
}

impl RenderConfig {
    pub fn as_chart(&self) -> Option<&ChartOption> {
        match self {
            RenderConfig::Chart(option) => Some(option),
            RenderConfig::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableModel> {
        match self {
            RenderConfig::Table(model) => Some(model),
            RenderConfig::Chart(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    pub tooltip: Tooltip,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Axis>,
    pub series: Vec<Series>,
}

impl ChartOption {
    /// Category axis entries, empty for charts without one
    pub fn categories(&self) -> &[String] {
        self.x_axis
            .as_ref()
            .and_then(|axis| axis.data.as_deref())
            .unwrap_or(&[])
    }

    /// Plain values of the series at `index`; slice values for pies
    pub fn series_values(&self, index: usize) -> Option<Vec<f64>> {
        self.series.get(index).map(|series| match &series.data {
            SeriesData::Values(values) => values.clone(),
            SeriesData::Slices(slices) => slices.iter().map(|slice| slice.value).collect(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    #[default]
    Axis,
    Item,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Tooltip {
    pub trigger: Trigger,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
}

impl Tooltip {
    pub fn new(trigger: Trigger) -> Self {
        Self {
            trigger,
            formatter: None,
        }
    }

    pub fn formatted(trigger: Trigger, formatter: String) -> Self {
        Self {
            trigger,
            formatter: Some(formatter),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orient {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orient: Option<Orient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Category,
    Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type")]
    pub kind: AxisType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<AxisLabel>,
}

impl Axis {
    pub fn category(labels: Vec<String>) -> Self {
        Self {
            kind: AxisType::Category,
            name: None,
            data: Some(labels),
            min: None,
            max: None,
            axis_label: None,
        }
    }

    pub fn value() -> Self {
        Self {
            kind: AxisType::Value,
            name: None,
            data: None,
            min: None,
            max: None,
            axis_label: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn bounded(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn label_formatter(mut self, formatter: String) -> Self {
        self.axis_label = Some(AxisLabel { formatter });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub formatter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Line,
    Bar,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: SeriesType,
    pub data: SeriesData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<ColorStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<ColorStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ColorStyle>,
}

impl Series {
    pub fn new(kind: SeriesType, name: impl Into<String>, data: SeriesData) -> Self {
        Self {
            name: Some(name.into()),
            kind,
            data,
            smooth: None,
            stack: None,
            line_style: None,
            area_style: None,
            item_style: None,
        }
    }

    pub fn smooth(mut self, smooth: bool) -> Self {
        self.smooth = Some(smooth);
        self
    }

    pub fn stacked(mut self, group: impl Into<String>) -> Self {
        self.stack = Some(group.into());
        self
    }

    pub fn line_color(mut self, color: impl Into<String>) -> Self {
        self.line_style = Some(ColorStyle::new(color));
        self
    }

    pub fn area_color(mut self, color: impl Into<String>) -> Self {
        self.area_style = Some(ColorStyle::new(color));
        self
    }

    pub fn item_color(mut self, color: impl Into<String>) -> Self {
        self.item_style = Some(ColorStyle::new(color));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesData {
    Values(Vec<f64>),
    Slices(Vec<PieSlice>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ColorStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStyle {
    pub color: String,
}

impl ColorStyle {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

/// Table as rows of plain-text cells. Engines insert cell text as text, never markup.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TableModel {
    pub head: TableRow,
    pub body: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TableRow {
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }
}
