mod components;
mod engine;
mod services;

use chrono::Local;
use dashboard_widgets::RawValue;
use yew::prelude::*;

use components::{
    AccountBalanceChart, DataTable, EnvelopeTrendsChart, SpendingCategoryChart,
    SpendingTrendsChart, SpendingTrendsChartAccounts, UnusualSpendingChart,
};
use services::sample_data::{DashboardData, MALFORMED_BALANCE_DATA};
use services::{logging, Logger};

#[function_component(App)]
fn app() -> Html {
    let data = use_memo((), |_| {
        DashboardData::build(Local::now().date_naive()).map_err(|err| {
            Logger::error_with_component("dashboard", &format!("sample data unavailable: {:#}", err));
            err.to_string()
        })
    });
    // Replaces the balance chart's `data` while set
    let balance_override = use_state(|| Option::<RawValue>::None);
    let show_table = use_state(|| true);

    let push_malformed = {
        let balance_override = balance_override.clone();
        Callback::from(move |_: MouseEvent| {
            Logger::warn_with_component("dashboard", "pushing truncated balance data");
            balance_override.set(Some(RawValue::from(MALFORMED_BALANCE_DATA)));
        })
    };
    let restore = {
        let balance_override = balance_override.clone();
        Callback::from(move |_: MouseEvent| balance_override.set(None))
    };
    let toggle_table = {
        let show_table = show_table.clone();
        Callback::from(move |_: MouseEvent| show_table.set(!*show_table))
    };

    let data = match data.as_ref() {
        Ok(data) => data,
        Err(message) => {
            return html! {
                <div class="dashboard-error">{format!("Sample data could not be built: {}", message)}</div>
            };
        }
    };
    let balance_data = (*balance_override)
        .clone()
        .unwrap_or_else(|| data.balance_data.clone());

    html! {
        <main class="dashboard">
            <section class="dashboard-card">
                <h2>{"Account Balance"}</h2>
                <div class="dashboard-controls">
                    <button onclick={push_malformed}>{"Push malformed data"}</button>
                    <button onclick={restore}>{"Restore data"}</button>
                </div>
                <AccountBalanceChart labels={data.balance_labels.clone()} data={balance_data} />
            </section>

            <section class="dashboard-card">
                <h2>{"Spending by Category"}</h2>
                <SpendingCategoryChart chart_data={data.category_chart.clone()} />
            </section>

            <section class="dashboard-card">
                <h2>{"Monthly Spending"}</h2>
                <SpendingTrendsChartAccounts chart_data={data.account_trend_chart.clone()} />
            </section>

            <section class="dashboard-card">
                <h2>{"Spending Trends"}</h2>
                <SpendingTrendsChart labels={data.trend_labels.clone()} series={data.trend_series.clone()} />
            </section>

            <section class="dashboard-card">
                <h2>{"Envelope Trends"}</h2>
                <EnvelopeTrendsChart
                    labels={data.envelope_labels.clone()}
                    series={data.envelope_series.clone()}
                    envelopes={data.envelopes.clone()}
                />
            </section>

            <section class="dashboard-card">
                <h2>{"Unusual Spending"}</h2>
                <UnusualSpendingChart labels={data.unusual_labels.clone()} data={data.unusual_data.clone()} />
            </section>

            <section class="dashboard-card">
                <h2>{"Recent Transactions"}</h2>
                <div class="dashboard-controls">
                    <button onclick={toggle_table}>
                        {if *show_table { "Hide table" } else { "Show table" }}
                    </button>
                </div>
                {if *show_table {
                    html! { <DataTable headers={data.table_headers.clone()} rows={data.table_rows.clone()} /> }
                } else {
                    html! {}
                }}
            </section>
        </main>
    }
}

fn main() {
    logging::init(log::LevelFilter::Debug);
    Logger::info_with_component("dashboard", "📊 starting finance dashboard");
    yew::Renderer::<App>::new().render();
}
