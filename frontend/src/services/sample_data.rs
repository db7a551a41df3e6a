//! Demo payloads for the dashboard page, encoded the way the server side sets
//! widget properties: JSON text for most widgets, native arrays for the
//! envelope trends chart.

use chrono::{Datelike, Duration, Months, NaiveDate};
use shared::{ChartData, Dataset, RawValue, SeriesPayload, TableData};

/// Truncated `data` for the balance chart, used by the "push malformed data" control
pub const MALFORMED_BALANCE_DATA: &str = "[1200.50, 1185.25,";

const CATEGORIES: [(&str, f64); 5] = [
    ("Groceries", 412.35),
    ("Dining Out", 186.40),
    ("Fuel", 121.10),
    ("Utilities", 240.00),
    ("Entertainment", 64.99),
];

const ENVELOPES: [(&str, [f64; 6]); 3] = [
    ("Groceries", [380.0, 402.5, 365.2, 410.0, 398.7, 412.3]),
    ("Dining Out", [150.0, 210.4, 175.0, 160.3, 190.0, 186.4]),
    ("Fuel", [95.0, 110.2, 130.8, 120.0, 115.5, 121.1]),
];

const DAILY_BALANCES: [f64; 7] = [1320.0, 1295.5, 1295.5, 1248.1, 1410.1, 1388.6, 1352.9];

/// Confidence scores (0..1) of detected unusual spending events
const UNUSUAL_EVENTS: [f64; 4] = [0.92, 0.67, 0.81, 1.05];

/// Property values for every widget on the demo page
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub balance_labels: RawValue,
    pub balance_data: RawValue,
    pub table_headers: RawValue,
    pub table_rows: RawValue,
    pub category_chart: RawValue,
    pub account_trend_chart: RawValue,
    pub trend_labels: RawValue,
    pub trend_series: RawValue,
    pub envelope_labels: RawValue,
    pub envelope_series: RawValue,
    pub envelopes: RawValue,
    pub unusual_labels: RawValue,
    pub unusual_data: RawValue,
}

/// Month labels (`Jan 2025`) ending with the month of `today`, oldest first
pub fn month_labels(today: NaiveDate, count: u32) -> Vec<String> {
    let Some(first_of_month) = today.with_day(1) else {
        return Vec::new();
    };
    (0..count)
        .rev()
        .filter_map(|back| first_of_month.checked_sub_months(Months::new(back)))
        .map(|month| month.format("%b %Y").to_string())
        .collect()
}

/// Day labels (`01/15`) for the last `count` days up to `today`, oldest first
pub fn day_labels(today: NaiveDate, count: i64) -> Vec<String> {
    (0..count)
        .rev()
        .map(|back| (today - Duration::days(back)).format("%m/%d").to_string())
        .collect()
}

impl DashboardData {
    pub fn build(today: NaiveDate) -> anyhow::Result<Self> {
        let months = month_labels(today, ENVELOPES[0].1.len() as u32);

        let category = ChartData {
            labels: CATEGORIES.iter().map(|(name, _)| name.to_string()).collect(),
            datasets: vec![Dataset {
                label: None,
                data: CATEGORIES.iter().map(|(_, amount)| *amount).collect(),
                background_color: Some(
                    (0..CATEGORIES.len())
                        .map(|i| format!("hsla({}, 70%, 60%, 0.8)", i * 360 / CATEGORIES.len()))
                        .collect(),
                ),
            }],
        };

        let monthly_totals: Vec<f64> = (0..months.len())
            .map(|month| ENVELOPES.iter().map(|(_, amounts)| amounts[month]).sum::<f64>())
            .collect();
        let account_trend = ChartData {
            labels: months.clone(),
            datasets: vec![Dataset::labelled("Monthly Spending", monthly_totals)],
        };

        let series: Vec<SeriesPayload> = ENVELOPES
            .iter()
            .map(|(name, amounts)| SeriesPayload::new(*name, amounts.to_vec()))
            .collect();
        let envelope_names: Vec<&str> = ENVELOPES.iter().map(|(name, _)| *name).collect();

        let table = TableData {
            headers: vec!["Date".into(), "Description".into(), "Amount".into()],
            rows: vec![
                vec![today.format("%Y-%m-%d").to_string(), "Corner Grocery".into(), "-54.20".into()],
                vec![today.format("%Y-%m-%d").to_string(), "<Payroll Deposit>".into(), "2,150.00".into()],
                vec![(today - Duration::days(1)).format("%Y-%m-%d").to_string(), "Fuel Stop".into(), "-38.75".into()],
            ],
        };
        let (table_headers, table_rows) = table.to_properties()?;

        // Percent values written with two decimals, as the server formats them
        let unusual_labels: Vec<String> = (1..=UNUSUAL_EVENTS.len()).map(|n| format!("Event {}", n)).collect();
        let unusual_values: Vec<String> = UNUSUAL_EVENTS
            .iter()
            .map(|confidence| format!("{:.2}", confidence * 100.0))
            .collect();

        Ok(Self {
            balance_labels: RawValue::json(&day_labels(today, DAILY_BALANCES.len() as i64))?,
            balance_data: RawValue::json(&DAILY_BALANCES)?,
            table_headers,
            table_rows,
            category_chart: RawValue::json(&category)?,
            account_trend_chart: RawValue::structured(&account_trend)?,
            trend_labels: RawValue::json(&months)?,
            trend_series: RawValue::json(&series)?,
            envelope_labels: RawValue::structured(&months)?,
            envelope_series: RawValue::structured(&series)?,
            envelopes: RawValue::structured(&envelope_names)?,
            unusual_labels: RawValue::json(&unusual_labels)?,
            unusual_data: RawValue::from(format!("[{}]", unusual_values.join(","))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_widgets::{ErrorKind, Property, PropertyStore, WidgetKind};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
    }

    fn store(bindings: &[(Property, &RawValue)]) -> PropertyStore {
        let mut store = PropertyStore::new();
        for (property, value) in bindings {
            store.set(*property, (*value).clone());
        }
        store
    }

    #[test]
    fn test_month_labels_cross_year_boundary() {
        assert_eq!(
            month_labels(today(), 4),
            vec!["Nov 2024", "Dec 2024", "Jan 2025", "Feb 2025"]
        );
    }

    #[test]
    fn test_day_labels() {
        assert_eq!(day_labels(today(), 3), vec!["02/12", "02/13", "02/14"]);
    }

    #[test]
    fn test_every_sample_payload_normalizes_cleanly() {
        let data = DashboardData::build(today()).unwrap();
        let cases = [
            (
                WidgetKind::BalanceChart,
                store(&[(Property::Labels, &data.balance_labels), (Property::Data, &data.balance_data)]),
            ),
            (
                WidgetKind::DataTable,
                store(&[(Property::Headers, &data.table_headers), (Property::Rows, &data.table_rows)]),
            ),
            (
                WidgetKind::CategoryBreakdown,
                store(&[(Property::ChartData, &data.category_chart)]),
            ),
            (
                WidgetKind::AccountTrend,
                store(&[(Property::ChartData, &data.account_trend_chart)]),
            ),
            (
                WidgetKind::LegacyStackedTrend,
                store(&[(Property::Labels, &data.trend_labels), (Property::Series, &data.trend_series)]),
            ),
            (
                WidgetKind::StackedTrend,
                store(&[
                    (Property::Labels, &data.envelope_labels),
                    (Property::Series, &data.envelope_series),
                    (Property::Envelopes, &data.envelopes),
                ]),
            ),
            (
                WidgetKind::UnusualSpending,
                store(&[(Property::Labels, &data.unusual_labels), (Property::Data, &data.unusual_data)]),
            ),
        ];

        for (kind, store) in cases {
            let normalized = kind.normalize(&store).unwrap();
            assert_eq!(normalized.payload.kind(), kind);
            assert!(normalized.warnings.is_empty(), "{:?}: {:?}", kind, normalized.warnings);
        }
    }

    #[test]
    fn test_unusual_values_are_percentages() {
        let data = DashboardData::build(today()).unwrap();
        assert_eq!(data.unusual_data, RawValue::from("[92.00,67.00,81.00,105.00]"));
    }

    #[test]
    fn test_malformed_balance_data_is_a_decode_error() {
        let data = DashboardData::build(today()).unwrap();
        let malformed = RawValue::from(MALFORMED_BALANCE_DATA);
        let store = store(&[(Property::Labels, &data.balance_labels), (Property::Data, &malformed)]);

        let err = WidgetKind::BalanceChart.normalize(&store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
