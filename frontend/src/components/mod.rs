pub mod bound_widget;
pub mod charts;
pub mod data_table;

pub use bound_widget::{Bindings, BoundWidget};
pub use charts::{
    AccountBalanceChart, EnvelopeTrendsChart, SpendingCategoryChart, SpendingTrendsChart,
    SpendingTrendsChartAccounts, UnusualSpendingChart,
};
pub use data_table::DataTable;

use dashboard_widgets::{Property, RawValue};

/// Bindings for the properties a host actually set, in declaration order
pub(crate) fn bind(properties: &[(Property, &Option<RawValue>)]) -> Bindings {
    properties
        .iter()
        .filter_map(|(property, value)| value.as_ref().map(|value| (*property, value.clone())))
        .collect()
}

/// Properties bound before that `current` no longer carries
pub(crate) fn dropped(previous: &Bindings, current: &Bindings) -> Vec<Property> {
    previous
        .iter()
        .map(|(property, _)| *property)
        .filter(|property| !current.iter().any(|(bound, _)| bound == property))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_properties_are_not_bound() {
        let labels = Some(RawValue::from(r#"["Jan"]"#));
        let data = None;

        let bindings = bind(&[(Property::Labels, &labels), (Property::Data, &data)]);
        assert_eq!(bindings, vec![(Property::Labels, RawValue::from(r#"["Jan"]"#))]);
    }

    #[test]
    fn test_bindings_keep_declaration_order() {
        let series = Some(RawValue::from("[]"));
        let labels = Some(RawValue::from("[]"));

        let bindings = bind(&[(Property::Series, &series), (Property::Labels, &labels)]);
        let order: Vec<Property> = bindings.iter().map(|(property, _)| *property).collect();
        assert_eq!(order, vec![Property::Series, Property::Labels]);
    }

    #[test]
    fn test_dropped_bindings() {
        let labels = Some(RawValue::from(r#"["Jan"]"#));
        let data = Some(RawValue::from("[10]"));
        let before = bind(&[(Property::Labels, &labels), (Property::Data, &data)]);
        let after = bind(&[(Property::Labels, &labels), (Property::Data, &None)]);

        assert_eq!(dropped(&before, &after), vec![Property::Data]);
        assert!(dropped(&after, &before).is_empty());
    }
}
