//! Monthly spending for one account as lines, fed by a `chartData` payload.

use serde_json::Value;

use crate::config::{Axis, ChartOption, Series, SeriesData, SeriesType, Tooltip, Trigger};
use crate::normalize::{
    align_series, as_array, as_object, datasets, decode_required, member, number_list,
    text_entry, text_list, InputWarning, Normalized, NormalizationError, Payload, SeriesChart,
    UNNAMED_SERIES,
};
use crate::property::{Property, PropertyStore};
use crate::style::StylePolicy;

const P: Property = Property::ChartData;

pub fn normalize(store: &PropertyStore) -> Result<Normalized, NormalizationError> {
    let raw = decode_required(store, P)?;
    let chart = as_object(P, "chartData", &raw)?;
    let datasets = datasets(P, chart)?;

    let labels = match member(chart, "labels") {
        Some(labels) => text_list(P, as_array(P, "labels", labels)?)?,
        None => Vec::new(),
    };

    let mut warnings = Vec::new();
    let raw_series = datasets
        .iter()
        .enumerate()
        .map(|(index, dataset)| dataset_series(index, dataset, &mut warnings))
        .collect::<Result<Vec<_>, _>>()?;

    let (categories, series) = align_series(labels, raw_series, P, &mut warnings);

    let chart = SeriesChart {
        categories,
        series,
        legend: Vec::new(),
    };
    Ok(Normalized::new(Payload::AccountTrend(chart), warnings))
}

/// Name and values of one dataset, flagging the parts that had to be filled in
fn dataset_series(
    index: usize,
    dataset: &Value,
    warnings: &mut Vec<InputWarning>,
) -> Result<(String, Vec<f64>), NormalizationError> {
    let dataset = as_object(P, "dataset", dataset)?;

    let name = match member(dataset, "label") {
        Some(label) => text_entry(P, index, label)?,
        None => String::new(),
    };
    let name = if name.is_empty() {
        warnings.push(InputWarning::UnnamedSeries { index });
        UNNAMED_SERIES.to_string()
    } else {
        name
    };

    let values = match member(dataset, "data") {
        Some(data) => number_list(P, as_array(P, "dataset data", data)?)?,
        None => {
            warnings.push(InputWarning::MissingValues { index });
            Vec::new()
        }
    };

    Ok((name, values))
}

pub fn adapt(chart: &SeriesChart, style: &StylePolicy) -> ChartOption {
    ChartOption {
        tooltip: Tooltip::formatted(Trigger::Axis, style.axis_currency_tooltip(chart.series.len())),
        legend: None,
        x_axis: Some(Axis::category(chart.categories.clone())),
        y_axis: Some(Axis::value().label_formatter(style.axis_currency_formatter())),
        series: chart
            .series
            .iter()
            .map(|series| {
                Series::new(SeriesType::Line, series.name.clone(), SeriesData::Values(series.values()))
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::ErrorKind;
    use serde_json::json;
    use shared::{ChartData, Dataset, RawValue};

    fn normalize_value(value: RawValue) -> Result<Normalized, NormalizationError> {
        let mut store = PropertyStore::new();
        store.set(Property::ChartData, value);
        normalize(&store)
    }

    fn chart_of(normalized: Normalized) -> SeriesChart {
        match normalized.payload {
            Payload::AccountTrend(chart) => chart,
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn test_monthly_spending_payload() {
        // Shape produced by the account view: one labelled dataset
        let text = r#"{"labels":["Jan 2025","Feb 2025"],"datasets":[{"label":"Monthly Spending","data":[310.4,287.0]}]}"#;
        let normalized = normalize_value(RawValue::from(text)).unwrap();
        assert!(normalized.warnings.is_empty());

        let option = adapt(&chart_of(normalized), &StylePolicy::default());
        assert_eq!(option.categories(), ["Jan 2025", "Feb 2025"]);
        assert_eq!(option.series_values(0), Some(vec![310.4, 287.0]));
        assert_eq!(option.series[0].name.as_deref(), Some("Monthly Spending"));
        assert!(option.legend.is_none());
        assert_eq!(
            option.tooltip.formatter.as_deref(),
            Some("{b0}<br/>{a0}: ${c0}")
        );
    }

    #[test]
    fn test_incomplete_datasets_use_fallbacks() {
        let normalized = normalize_value(RawValue::from(json!({
            "labels": ["Jan"],
            "datasets": [{"data": [5]}, {"label": "Fees"}]
        })))
        .unwrap();

        assert_eq!(
            normalized.warnings,
            vec![
                InputWarning::UnnamedSeries { index: 0 },
                InputWarning::MissingValues { index: 1 },
            ]
        );
        let chart = chart_of(normalized);
        assert_eq!(chart.series[0].name, UNNAMED_SERIES);
        assert_eq!(chart.series[1].name, "Fees");
        assert_eq!(chart.series[1].values(), vec![0.0]);
        assert!(chart.legend.is_empty());
    }

    #[test]
    fn test_rejects_bad_structures() {
        assert_eq!(
            normalize_value(RawValue::from(json!({"labels": ["Jan"], "datasets": []})))
                .unwrap_err()
                .kind(),
            ErrorKind::Shape
        );
        assert_eq!(
            normalize_value(RawValue::from(json!({"datasets": ["oops"]})))
                .unwrap_err()
                .kind(),
            ErrorKind::Shape
        );
        assert_eq!(
            normalize_value(RawValue::from("{\"datasets\": [")).unwrap_err().kind(),
            ErrorKind::Decode
        );
    }

    #[test]
    fn test_normalizing_twice_is_stable() {
        let payload = ChartData {
            labels: vec!["Jan".to_string(), "Feb".to_string()],
            datasets: vec![
                Dataset::labelled("Checking", vec![10.0, 20.0]),
                Dataset::labelled("Savings", vec![1.0]),
            ],
        };
        let first = chart_of(normalize_value(RawValue::structured(&payload).unwrap()).unwrap());
        let again = chart_of(
            normalize_value(RawValue::structured(&first.to_chart_data()).unwrap()).unwrap(),
        );
        assert_eq!(first, again);
    }
}
