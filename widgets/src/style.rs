//! Static visual policy applied by the render adapters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("invalid style policy JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("confidence axis range is empty: min {min} >= max {max}")]
    EmptyConfidenceRange { min: f64, max: f64 },
}

/// Colours, axis bounds and label templates shared by every widget instance.
/// Unspecified keys keep their defaults when loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StylePolicy {
    pub currency_symbol: String,
    pub balance_line_color: String,
    pub balance_area_color: String,
    pub smooth_lines: bool,
    pub anomaly_bar_color: String,
    pub confidence_axis_name: String,
    pub confidence_axis_min: f64,
    pub confidence_axis_max: f64,
    /// Stack key shared by all bars of a stacked trend
    pub stack_group: String,
    pub legend_top: String,
    pub pie_legend_left: String,
}

impl Default for StylePolicy {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            balance_line_color: "#007bff".to_string(),
            balance_area_color: "rgba(0, 123, 255, 0.1)".to_string(),
            smooth_lines: true,
            anomaly_bar_color: "#f56c6c".to_string(),
            confidence_axis_name: "Confidence (%)".to_string(),
            confidence_axis_min: 0.0,
            confidence_axis_max: 100.0,
            stack_group: "total".to_string(),
            legend_top: "top".to_string(),
            pie_legend_left: "right".to_string(),
        }
    }
}

impl StylePolicy {
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let policy: StylePolicy = serde_json::from_str(json)?;
        if policy.confidence_axis_min >= policy.confidence_axis_max {
            return Err(StyleError::EmptyConfidenceRange {
                min: policy.confidence_axis_min,
                max: policy.confidence_axis_max,
            });
        }
        Ok(policy)
    }

    /// Value axis label template, e.g. `${value}`
    pub fn axis_currency_formatter(&self) -> String {
        format!("{}{{value}}", self.currency_symbol)
    }

    /// Item tooltip template for pies, e.g. `{b}: ${c}`
    pub fn item_currency_formatter(&self) -> String {
        format!("{{b}}: {}{{c}}", self.currency_symbol)
    }

    /// Axis tooltip template listing every series of a multi-series chart
    pub fn axis_currency_tooltip(&self, series_count: usize) -> String {
        let mut template = String::from("{b0}");
        for index in 0..series_count {
            template.push_str(&format!(
                "<br/>{{a{i}}}: {}{{c{i}}}",
                self.currency_symbol,
                i = index
            ));
        }
        template
    }
}
