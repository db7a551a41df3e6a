//! # Widget Charts
//!
//! One module per widget kind. Each pairs a normalizer (raw properties into a
//! validated payload) with an adapter (payload plus style policy into a fresh
//! render configuration).
//!
//! ## Modules:
//! - `balance` - account balance line with area fill
//! - `table` - plain-text data table
//! - `category` - spending-by-category pie
//! - `account_trend` - monthly spending lines from `chartData`
//! - `stacked_trend` - stacked envelope bars (legacy JSON and current native variants)
//! - `unusual` - unusual-spending confidence bars

pub mod account_trend;
pub mod balance;
pub mod category;
pub mod stacked_trend;
pub mod table;
pub mod unusual;

use crate::config::RenderConfig;
use crate::normalize::Payload;
use crate::style::StylePolicy;

impl Payload {
    /// Build the engine configuration for this payload
    pub fn to_config(&self, style: &StylePolicy) -> RenderConfig {
        match self {
            Payload::Balance(chart) => RenderConfig::Chart(balance::adapt(chart, style)),
            Payload::Table(input) => RenderConfig::Table(table::adapt(input)),
            Payload::Category(dataset) => RenderConfig::Chart(category::adapt(dataset, style)),
            Payload::AccountTrend(chart) => RenderConfig::Chart(account_trend::adapt(chart, style)),
            Payload::LegacyStackedTrend(chart) | Payload::StackedTrend(chart) => {
                RenderConfig::Chart(stacked_trend::adapt(chart, style))
            }
            Payload::UnusualSpending(chart) => RenderConfig::Chart(unusual::adapt(chart, style)),
        }
    }
}
