//! Unusual spending events as bars of detection confidence (percent).
//!
//! Values above the axis range are accepted as-is; the fixed axis bounds cap
//! what is displayed.

use crate::config::{Axis, ChartOption, Series, SeriesData, SeriesType, Tooltip, Trigger};
use crate::normalize::{
    align_series, decode_list, number_list, text_list, Normalized, NormalizationError, Payload,
    SeriesChart,
};
use crate::property::{Property, PropertyStore};
use crate::style::StylePolicy;

pub const SERIES_NAME: &str = "Confidence";

pub fn normalize(store: &PropertyStore) -> Result<Normalized, NormalizationError> {
    let labels = text_list(Property::Labels, &decode_list(store, Property::Labels)?)?;
    let data = number_list(Property::Data, &decode_list(store, Property::Data)?)?;

    let mut warnings = Vec::new();
    let (categories, series) = align_series(
        labels,
        vec![(SERIES_NAME.to_string(), data)],
        Property::Data,
        &mut warnings,
    );

    let chart = SeriesChart {
        categories,
        series,
        legend: Vec::new(),
    };
    Ok(Normalized::new(Payload::UnusualSpending(chart), warnings))
}

pub fn adapt(chart: &SeriesChart, style: &StylePolicy) -> ChartOption {
    ChartOption {
        tooltip: Tooltip::new(Trigger::Axis),
        legend: None,
        x_axis: Some(Axis::category(chart.categories.clone())),
        y_axis: Some(
            Axis::value()
                .named(style.confidence_axis_name.clone())
                .bounded(style.confidence_axis_min, style.confidence_axis_max),
        ),
        series: chart
            .series
            .iter()
            .map(|series| {
                Series::new(SeriesType::Bar, series.name.clone(), SeriesData::Values(series.values()))
                    .item_color(style.anomaly_bar_color.clone())
            })
            .collect(),
    }
}
