//! # Property Store
//!
//! Holds the raw values a host has bound to a widget. Values are stored exactly
//! as given (JSON text or native value) and handed back unchanged on read;
//! decoding only happens in the normalizer.

use shared::RawValue;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bindable fields across all widget kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    Labels,
    Data,
    Series,
    Envelopes,
    Headers,
    Rows,
    ChartData,
}

impl Property {
    /// Attribute/property name as used by host pages
    pub fn name(&self) -> &'static str {
        match self {
            Property::Labels => "labels",
            Property::Data => "data",
            Property::Series => "series",
            Property::Envelopes => "envelopes",
            Property::Headers => "headers",
            Property::Rows => "rows",
            Property::ChartData => "chartData",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown property: {0}")]
pub struct UnknownProperty(pub String);

impl FromStr for Property {
    type Err = UnknownProperty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "labels" => Ok(Property::Labels),
            "data" => Ok(Property::Data),
            "series" => Ok(Property::Series),
            "envelopes" => Ok(Property::Envelopes),
            "headers" => Ok(Property::Headers),
            "rows" => Ok(Property::Rows),
            // Attribute form as written in markup
            "chartData" | "chart-data" | "chartdata" => Ok(Property::ChartData),
            other => Err(UnknownProperty(other.to_string())),
        }
    }
}

/// Current raw inputs of one widget instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyStore {
    values: BTreeMap<Property, RawValue>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last stored value, exactly as it was set
    pub fn get(&self, property: Property) -> Option<&RawValue> {
        self.values.get(&property)
    }

    /// Store a value, returning the one it replaced
    pub fn set(&mut self, property: Property, value: RawValue) -> Option<RawValue> {
        self.values.insert(property, value)
    }

    pub fn remove(&mut self, property: Property) -> Option<RawValue> {
        self.values.remove(&property)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_property_names_round_trip() {
        let all = [
            Property::Labels,
            Property::Data,
            Property::Series,
            Property::Envelopes,
            Property::Headers,
            Property::Rows,
            Property::ChartData,
        ];
        for property in all {
            assert_eq!(property.name().parse::<Property>().unwrap(), property);
        }
    }

    #[test]
    fn test_attribute_spelling_of_chart_data() {
        assert_eq!("chart-data".parse::<Property>().unwrap(), Property::ChartData);
        assert_eq!(
            "colour".parse::<Property>().unwrap_err(),
            UnknownProperty("colour".to_string())
        );
    }

    #[test]
    fn test_get_returns_value_unchanged() {
        let mut store = PropertyStore::new();
        store.set(Property::Labels, RawValue::from("not even json"));
        store.set(Property::Data, RawValue::from(json!([1, 2])));

        // No coercion on read
        assert_eq!(
            store.get(Property::Labels),
            Some(&RawValue::Text("not even json".to_string()))
        );
        assert_eq!(store.get(Property::Data), Some(&RawValue::Structured(json!([1, 2]))));
        assert_eq!(store.get(Property::Rows), None);
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let mut store = PropertyStore::new();
        assert!(store.set(Property::Data, RawValue::from("[1]")).is_none());

        let previous = store.set(Property::Data, RawValue::from("[2]"));
        assert_eq!(previous, Some(RawValue::from("[1]")));
        assert_eq!(store.len(), 1);

        assert_eq!(store.remove(Property::Data), Some(RawValue::from("[2]")));
        assert!(store.is_empty());
    }
}
