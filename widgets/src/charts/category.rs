//! Spending by category as a pie, one slice per label.

use crate::config::{
    ChartOption, ColorStyle, Legend, Orient, PieSlice, Series, SeriesData, SeriesType, Tooltip,
    Trigger,
};
use crate::normalize::{
    as_array, as_object, color_list, datasets, decode_required, member, number_list, text_list,
    InputWarning, NormalizedDataset, Normalized, NormalizationError, Payload,
};
use crate::property::{Property, PropertyStore};
use crate::style::StylePolicy;

pub const SERIES_NAME: &str = "Spending by Category";

pub fn normalize(store: &PropertyStore) -> Result<Normalized, NormalizationError> {
    const P: Property = Property::ChartData;

    let raw = decode_required(store, P)?;
    let chart = as_object(P, "chartData", &raw)?;
    let datasets = datasets(P, chart)?;

    let labels = match member(chart, "labels") {
        Some(labels) => text_list(P, as_array(P, "labels", labels)?)?,
        None => Vec::new(),
    };

    // Only the first dataset feeds the pie
    let mut warnings = Vec::new();
    let first = as_object(P, "dataset 0", &datasets[0])?;
    let mut values = match member(first, "data") {
        Some(data) => number_list(P, as_array(P, "dataset 0 data", data)?)?,
        None => {
            warnings.push(InputWarning::MissingValues { index: 0 });
            Vec::new()
        }
    };
    let mut colors = match member(first, "backgroundColor") {
        Some(colors) => color_list(as_array(P, "backgroundColor", colors)?),
        None => Vec::new(),
    };

    if !values.is_empty() && values.len() != labels.len() {
        warnings.push(InputWarning::RaggedLength {
            property: P,
            expected: labels.len(),
            actual: values.len(),
        });
    }
    values.resize(labels.len(), 0.0);
    colors.resize(labels.len(), None);

    let dataset = NormalizedDataset {
        labels,
        values,
        colors,
    };
    Ok(Normalized::new(Payload::Category(dataset), warnings))
}

pub fn adapt(dataset: &NormalizedDataset, style: &StylePolicy) -> ChartOption {
    let slices = dataset
        .labels
        .iter()
        .zip(&dataset.values)
        .zip(&dataset.colors)
        .map(|((name, value), color)| PieSlice {
            name: name.clone(),
            value: *value,
            item_style: color.as_ref().map(ColorStyle::new),
        })
        .collect();

    ChartOption {
        tooltip: Tooltip::formatted(Trigger::Item, style.item_currency_formatter()),
        legend: Some(Legend {
            orient: Some(Orient::Vertical),
            left: Some(style.pie_legend_left.clone()),
            ..Legend::default()
        }),
        x_axis: None,
        y_axis: None,
        series: vec![Series::new(SeriesType::Pie, SERIES_NAME, SeriesData::Slices(slices))],
    }
}
