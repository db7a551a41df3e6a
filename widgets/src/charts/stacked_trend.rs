//! # Stacked Spending Trends
//!
//! Monthly spending per envelope, drawn as bars stacked under one group key.
//!
//! Two widget variants share the adapter:
//! - legacy: `labels` plus a JSON-encoded `series` array of `{name, data}`
//! - current: `labels`, `series` and `envelopes` set as native arrays; a
//!   non-empty `envelopes` list becomes the legend
//!
//! Both accept either encoding, since `RawValue` already hides the difference.

use serde_json::Value;

use crate::config::{Axis, ChartOption, Legend, Series, SeriesData, SeriesType, Tooltip, Trigger};
use crate::normalize::{
    align_series, as_array, as_object, decode_list, member, number_list, text_entry, text_list,
    InputWarning, Normalized, NormalizationError, Payload, SeriesChart, UNNAMED_SERIES,
};
use crate::property::{Property, PropertyStore};
use crate::style::StylePolicy;

const S: Property = Property::Series;

pub fn normalize_legacy(store: &PropertyStore) -> Result<Normalized, NormalizationError> {
    let (chart, warnings) = series_chart(store)?;
    Ok(Normalized::new(Payload::LegacyStackedTrend(chart), warnings))
}

pub fn normalize(store: &PropertyStore) -> Result<Normalized, NormalizationError> {
    let (mut chart, warnings) = series_chart(store)?;

    let envelopes = text_list(
        Property::Envelopes,
        &decode_list(store, Property::Envelopes)?,
    )?;
    if !envelopes.is_empty() {
        chart.legend = envelopes;
    }

    Ok(Normalized::new(Payload::StackedTrend(chart), warnings))
}

fn series_chart(store: &PropertyStore) -> Result<(SeriesChart, Vec<InputWarning>), NormalizationError> {
    let labels = text_list(Property::Labels, &decode_list(store, Property::Labels)?)?;
    let entries = decode_list(store, S)?;

    let mut warnings = Vec::new();
    let raw_series = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| series_entry(index, entry, &mut warnings))
        .collect::<Result<Vec<_>, _>>()?;

    let legend = raw_series.iter().map(|(name, _)| name.clone()).collect();
    let (categories, series) = align_series(labels, raw_series, S, &mut warnings);

    let chart = SeriesChart {
        categories,
        series,
        legend,
    };
    Ok((chart, warnings))
}

fn series_entry(
    index: usize,
    entry: &Value,
    warnings: &mut Vec<InputWarning>,
) -> Result<(String, Vec<f64>), NormalizationError> {
    let entry = as_object(S, &format!("series {}", index), entry)?;

    let name = match member(entry, "name") {
        Some(name) => text_entry(S, index, name)?,
        None => String::new(),
    };
    let name = if name.is_empty() {
        warnings.push(InputWarning::UnnamedSeries { index });
        UNNAMED_SERIES.to_string()
    } else {
        name
    };

    let values = match member(entry, "data") {
        Some(data) => number_list(S, as_array(S, "series data", data)?)?,
        None => {
            warnings.push(InputWarning::MissingValues { index });
            Vec::new()
        }
    };

    Ok((name, values))
}

pub fn adapt(chart: &SeriesChart, style: &StylePolicy) -> ChartOption {
    ChartOption {
        tooltip: Tooltip::new(Trigger::Axis),
        legend: Some(Legend {
            data: Some(chart.legend.clone()),
            top: Some(style.legend_top.clone()),
            ..Legend::default()
        }),
        x_axis: Some(Axis::category(chart.categories.clone())),
        y_axis: Some(Axis::value().label_formatter(style.axis_currency_formatter())),
        series: chart
            .series
            .iter()
            .map(|series| {
                Series::new(SeriesType::Bar, series.name.clone(), SeriesData::Values(series.values()))
                    .stacked(style.stack_group.clone())
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::ErrorKind;
    use serde_json::json;
    use shared::{RawValue, SeriesPayload};

    fn legacy_store(labels: &str, series: &str) -> PropertyStore {
        let mut store = PropertyStore::new();
        store.set(Property::Labels, RawValue::from(labels));
        store.set(Property::Series, RawValue::from(series));
        store
    }

    fn chart_of(normalized: Normalized) -> SeriesChart {
        match normalized.payload {
            Payload::LegacyStackedTrend(chart) | Payload::StackedTrend(chart) => chart,
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn test_legacy_series_stack_under_one_group() {
        let store = legacy_store(
            r#"["Jan","Feb"]"#,
            r#"[{"name":"Groceries","data":[200,180]},{"name":"Fuel","data":[60,75]}]"#,
        );
        let normalized = normalize_legacy(&store).unwrap();
        assert!(normalized.warnings.is_empty());

        let option = adapt(&chart_of(normalized), &StylePolicy::default());
        let value = serde_json::to_value(&option).unwrap();

        assert_eq!(value["legend"], json!({"data": ["Groceries", "Fuel"], "top": "top"}));
        assert_eq!(value["series"][0]["stack"], "total");
        assert_eq!(value["series"][1]["stack"], "total");
        assert_eq!(value["series"][1]["type"], "bar");
        assert_eq!(option.series_values(1), Some(vec![60.0, 75.0]));
        assert_eq!(option.categories(), ["Jan", "Feb"]);
    }

    #[test]
    fn test_envelopes_drive_the_legend() {
        let mut store = PropertyStore::new();
        store.set(Property::Labels, RawValue::from(json!(["Jan"])));
        store.set(Property::Series, RawValue::from(json!([{"name": "Rent", "data": [900]}])));
        store.set(Property::Envelopes, RawValue::from(json!(["Rent", "Savings"])));

        let chart = chart_of(normalize(&store).unwrap());
        assert_eq!(chart.legend, vec!["Rent", "Savings"]);

        // Without envelopes the series names are listed
        store.remove(Property::Envelopes);
        let chart = chart_of(normalize(&store).unwrap());
        assert_eq!(chart.legend, vec!["Rent"]);
    }

    #[test]
    fn test_server_envelope_list_text_is_rejected() {
        // List.toString() output is not JSON
        let mut store = legacy_store("[]", "[]");
        store.set(Property::Envelopes, RawValue::from("[Rent, Savings]"));
        let err = normalize(&store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.property(), Property::Envelopes);
    }

    #[test]
    fn test_incomplete_series_entries() {
        let store = legacy_store(r#"["Jan","Feb"]"#, r#"[{"data":[1,2]},{"name":"Fuel"}]"#);
        let normalized = normalize_legacy(&store).unwrap();

        assert_eq!(
            normalized.warnings,
            vec![
                InputWarning::UnnamedSeries { index: 0 },
                InputWarning::MissingValues { index: 1 },
            ]
        );
        let chart = chart_of(normalized);
        assert_eq!(chart.series[0].name, UNNAMED_SERIES);
        assert_eq!(chart.series[1].values(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_series_shape_errors() {
        for series in [r#"{"name":"x"}"#, r#"["Groceries"]"#, r#"[{"name":"x","data":5}]"#] {
            let err = normalize_legacy(&legacy_store("[]", series)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Shape);
            assert_eq!(err.property(), Property::Series);
        }
    }

    #[test]
    fn test_no_series_renders_empty_frame() {
        let normalized = normalize_legacy(&legacy_store(r#"["Jan"]"#, "[]")).unwrap();
        let option = adapt(&chart_of(normalized), &StylePolicy::default());
        assert!(option.series.is_empty());
        assert_eq!(option.categories(), ["Jan"]);
    }

    #[test]
    fn test_normalizing_twice_is_stable() {
        let series = vec![
            SeriesPayload::new("Groceries", vec![200.0, 180.0]),
            SeriesPayload::new("Fuel", vec![60.0]),
        ];
        let mut store = PropertyStore::new();
        store.set(Property::Labels, RawValue::structured(&["Jan", "Feb"]).unwrap());
        store.set(Property::Series, RawValue::structured(&series).unwrap());
        let first = chart_of(normalize(&store).unwrap());

        store.set(Property::Labels, RawValue::structured(&first.categories).unwrap());
        store.set(Property::Series, RawValue::structured(&first.to_series_payloads()).unwrap());
        let again = chart_of(normalize(&store).unwrap());
        assert_eq!(first, again);
    }
}
