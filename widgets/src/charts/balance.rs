//! Account balance over time: one smoothed line with a light area fill.

use crate::config::{Axis, ChartOption, Series, SeriesData, SeriesType, Tooltip, Trigger};
use crate::normalize::{
    align_series, decode_list, number_list, text_list, Normalized, NormalizationError, Payload,
    SeriesChart,
};
use crate::property::{Property, PropertyStore};
use crate::style::StylePolicy;

pub const SERIES_NAME: &str = "Account Balance";

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
    Ok(Normalized::new(Payload::Balance(chart), warnings))
}

pub fn adapt(chart: &SeriesChart, style: &StylePolicy) -> ChartOption {
    ChartOption {
        tooltip: Tooltip::new(Trigger::Axis),
        legend: None,
        x_axis: Some(Axis::category(chart.categories.clone())),
        y_axis: Some(Axis::value().label_formatter(style.axis_currency_formatter())),
        series: chart
            .series
            .iter()
            .map(|series| {
                Series::new(SeriesType::Line, series.name.clone(), SeriesData::Values(series.values()))
                    .smooth(style.smooth_lines)
                    .line_color(style.balance_line_color.clone())
                    .area_color(style.balance_area_color.clone())
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::ErrorKind;
    use serde_json::json;
    use shared::RawValue;

    fn store(labels: &str, data: &str) -> PropertyStore {
        let mut store = PropertyStore::new();
        store.set(Property::Labels, RawValue::from(labels));
        store.set(Property::Data, RawValue::from(data));
        store
    }

    fn option_for(store: &PropertyStore) -> ChartOption {
        match normalize(store).unwrap().payload {
            Payload::Balance(chart) => adapt(&chart, &StylePolicy::default()),
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn test_labels_and_data_map_onto_axis_and_series() {
        let option = option_for(&store(r#"["Jan","Feb"]"#, "[100,200]"));

        assert_eq!(option.categories(), ["Jan", "Feb"]);
        assert_eq!(option.series_values(0), Some(vec![100.0, 200.0]));
        assert_eq!(option.series.len(), 1);
        assert_eq!(option.series[0].kind, SeriesType::Line);
        assert_eq!(option.series[0].name.as_deref(), Some(SERIES_NAME));
    }

    #[test]
    fn test_static_policy_is_applied() {
        let option = option_for(&store(r#"["01/02"]"#, "[5.5]"));
        let value = serde_json::to_value(&option).unwrap();

        assert_eq!(value["tooltip"], json!({"trigger": "axis"}));
        assert_eq!(value["yAxis"]["axisLabel"]["formatter"], "${value}");
        assert_eq!(value["series"][0]["smooth"], true);
        assert_eq!(value["series"][0]["lineStyle"]["color"], "#007bff");
        assert_eq!(value["series"][0]["areaStyle"]["color"], "rgba(0, 123, 255, 0.1)");
    }

    #[test]
    fn test_empty_inputs_render_empty_frame() {
        let normalized = normalize(&PropertyStore::new()).unwrap();
        assert!(normalized.warnings.is_empty());

        let option = option_for(&PropertyStore::new());
        assert!(option.categories().is_empty());
        assert_eq!(option.series_values(0), Some(vec![]));
    }

    #[test]
    fn test_structured_values_accepted() {
        let mut store = PropertyStore::new();
        store.set(Property::Labels, RawValue::from(json!(["Jan"])));
        store.set(Property::Data, RawValue::from(json!([42])));

        let option = option_for(&store);
        assert_eq!(option.series_values(0), Some(vec![42.0]));
    }

    #[test]
    fn test_malformed_data_is_a_decode_error() {
        let err = normalize(&store(r#"["Jan"]"#, "[100,")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.property(), Property::Data);
    }

    #[test]
    fn test_short_data_defaults_to_zero() {
        let normalized = normalize(&store(r#"["Jan","Feb","Mar"]"#, "[10]")).unwrap();
        assert_eq!(normalized.warnings.len(), 1);

        let Payload::Balance(chart) = normalized.payload else {
            panic!("expected balance payload");
        };
        assert_eq!(chart.series[0].values(), vec![10.0, 0.0, 0.0]);
    }
}
