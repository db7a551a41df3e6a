//! Typed chart elements. Each one names the properties its widget binds and
//! forwards whatever the host has set to a `BoundWidget`.

use dashboard_widgets::{Property, RawValue, WidgetKind};
use yew::prelude::*;

use super::bind;
use super::bound_widget::BoundWidget;

#[derive(Properties, PartialEq)]
pub struct LabelledDataProps {
    #[prop_or_default]
    pub labels: Option<RawValue>,
    #[prop_or_default]
    pub data: Option<RawValue>,
    #[prop_or(320.0)]
    pub height: f64,
}

#[function_component(AccountBalanceChart)]
pub fn account_balance_chart(props: &LabelledDataProps) -> Html {
    let bindings = bind(&[(Property::Labels, &props.labels), (Property::Data, &props.data)]);
    html! {
        <BoundWidget kind={WidgetKind::BalanceChart} {bindings} height={props.height} />
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartDataProps {
    #[prop_or_default]
    pub chart_data: Option<RawValue>,
    #[prop_or(320.0)]
    pub height: f64,
}

#[function_component(SpendingCategoryChart)]
pub fn spending_category_chart(props: &ChartDataProps) -> Html {
    let bindings = bind(&[(Property::ChartData, &props.chart_data)]);
    html! {
        <BoundWidget kind={WidgetKind::CategoryBreakdown} {bindings} height={props.height} />
    }
}

#[function_component(SpendingTrendsChartAccounts)]
pub fn spending_trends_chart_accounts(props: &ChartDataProps) -> Html {
    let bindings = bind(&[(Property::ChartData, &props.chart_data)]);
    html! {
        <BoundWidget kind={WidgetKind::AccountTrend} {bindings} height={props.height} />
    }
}

#[derive(Properties, PartialEq)]
pub struct SpendingTrendsChartProps {
    #[prop_or_default]
    pub labels: Option<RawValue>,
    #[prop_or_default]
    pub series: Option<RawValue>,
    #[prop_or(360.0)]
    pub height: f64,
}

/// Stacked envelope bars fed with JSON-encoded `labels` and `series`
#[function_component(SpendingTrendsChart)]
pub fn spending_trends_chart(props: &SpendingTrendsChartProps) -> Html {
    let bindings = bind(&[(Property::Labels, &props.labels), (Property::Series, &props.series)]);
    html! {
        <BoundWidget kind={WidgetKind::LegacyStackedTrend} {bindings} height={props.height} />
    }
}

#[derive(Properties, PartialEq)]
pub struct EnvelopeTrendsChartProps {
    #[prop_or_default]
    pub labels: Option<RawValue>,
    #[prop_or_default]
    pub series: Option<RawValue>,
    #[prop_or_default]
    pub envelopes: Option<RawValue>,
    #[prop_or(360.0)]
    pub height: f64,
}

/// Stacked envelope bars fed with native arrays; `envelopes` sets the legend
#[function_component(EnvelopeTrendsChart)]
pub fn envelope_trends_chart(props: &EnvelopeTrendsChartProps) -> Html {
    let bindings = bind(&[
        (Property::Labels, &props.labels),
        (Property::Series, &props.series),
        (Property::Envelopes, &props.envelopes),
    ]);
    html! {
        <BoundWidget kind={WidgetKind::StackedTrend} {bindings} height={props.height} />
    }
}

#[function_component(UnusualSpendingChart)]
pub fn unusual_spending_chart(props: &LabelledDataProps) -> Html {
    let bindings = bind(&[(Property::Labels, &props.labels), (Property::Data, &props.data)]);
    html! {
        <BoundWidget kind={WidgetKind::UnusualSpending} {bindings} height={props.height} />
    }
}
