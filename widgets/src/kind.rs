use crate::charts::{account_trend, balance, category, stacked_trend, table, unusual};
use crate::engine::SurfaceKind;
use crate::normalize::{Normalized, NormalizationError};
use crate::property::{Property, PropertyStore};

/// The concrete widgets of the dashboard. Each one binds its own set of
/// properties and normalizes them into its own payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// `labels` + `data`, single balance line
    BalanceChart,
    /// `headers` + `rows`
    DataTable,
    /// `chartData` pie
    CategoryBreakdown,
    /// `chartData` multi-line monthly spending
    AccountTrend,
    /// `labels` + JSON `series`, stacked bars
    LegacyStackedTrend,
    /// `labels` + `series` + `envelopes`, stacked bars from native arrays
    StackedTrend,
    /// `labels` + `data`, confidence bars
    UnusualSpending,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 7] = [
        WidgetKind::BalanceChart,
        WidgetKind::DataTable,
        WidgetKind::CategoryBreakdown,
        WidgetKind::AccountTrend,
        WidgetKind::LegacyStackedTrend,
        WidgetKind::StackedTrend,
        WidgetKind::UnusualSpending,
    ];

    /// Custom element name, also used as the log component
    pub fn tag(&self) -> &'static str {
        match self {
            WidgetKind::BalanceChart => "account-balance-chart",
            WidgetKind::DataTable => "data-table",
            WidgetKind::CategoryBreakdown => "spending-category-chart",
            WidgetKind::AccountTrend => "spending-trends-chart-accounts",
            WidgetKind::LegacyStackedTrend => "spending-trends-chart",
            WidgetKind::StackedTrend => "envelope-trends-chart",
            WidgetKind::UnusualSpending => "unusual-spending-chart",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn properties(&self) -> &'static [Property] {
        match self {
            WidgetKind::BalanceChart | WidgetKind::UnusualSpending => {
                &[Property::Labels, Property::Data]
            }
            WidgetKind::DataTable => &[Property::Headers, Property::Rows],
            WidgetKind::CategoryBreakdown | WidgetKind::AccountTrend => &[Property::ChartData],
            WidgetKind::LegacyStackedTrend => &[Property::Labels, Property::Series],
            WidgetKind::StackedTrend => &[Property::Labels, Property::Series, Property::Envelopes],
        }
    }

    pub fn binds(&self, property: Property) -> bool {
        self.properties().contains(&property)
    }

    pub fn surface_kind(&self) -> SurfaceKind {
        match self {
            WidgetKind::DataTable => SurfaceKind::Table,
            _ => SurfaceKind::Chart,
        }
    }

    pub fn normalize(&self, store: &PropertyStore) -> Result<Normalized, NormalizationError> {
        match self {
            WidgetKind::BalanceChart => balance::normalize(store),
            WidgetKind::DataTable => table::normalize(store),
            WidgetKind::CategoryBreakdown => category::normalize(store),
            WidgetKind::AccountTrend => account_trend::normalize(store),
            WidgetKind::LegacyStackedTrend => stacked_trend::normalize_legacy(store),
            WidgetKind::StackedTrend => stacked_trend::normalize(store),
            WidgetKind::UnusualSpending => unusual::normalize(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for kind in WidgetKind::ALL {
            assert_eq!(WidgetKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(WidgetKind::from_tag("pie-chart"), None);
    }

    #[test]
    fn test_bindings() {
        assert!(WidgetKind::BalanceChart.binds(Property::Data));
        assert!(!WidgetKind::BalanceChart.binds(Property::ChartData));
        assert!(WidgetKind::StackedTrend.binds(Property::Envelopes));
        assert!(!WidgetKind::LegacyStackedTrend.binds(Property::Envelopes));
        assert_eq!(WidgetKind::DataTable.surface_kind(), SurfaceKind::Table);
        assert_eq!(WidgetKind::CategoryBreakdown.surface_kind(), SurfaceKind::Chart);
    }

    #[test]
    fn test_normalize_produces_matching_payload() {
        // Empty stores are valid for every list-bound kind
        let store = PropertyStore::new();
        for kind in WidgetKind::ALL {
            match kind.normalize(&store) {
                Ok(normalized) => assert_eq!(normalized.payload.kind(), kind),
                Err(err) => {
                    assert!(kind.binds(Property::ChartData));
                    assert!(err.is_expected());
                }
            }
        }
    }
}
