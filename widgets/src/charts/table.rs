//! Plain-text data table from `headers` and `rows`.

use serde_json::Value;

use crate::config::{TableModel, TableRow};
use crate::normalize::{decode_list, text_list, Normalized, NormalizationError, Payload, TableInput};
use crate::property::{Property, PropertyStore};

pub fn normalize(store: &PropertyStore) -> Result<Normalized, NormalizationError> {
    let headers = text_list(Property::Headers, &decode_list(store, Property::Headers)?)?;
    let rows = decode_list(store, Property::Rows)?
        .iter()
        .enumerate()
        .map(|(index, row)| match row {
            Value::Array(cells) => Ok(cells.iter().map(cell_text).collect()),
            _ => Err(NormalizationError::shape(
                Property::Rows,
                format!("row {} is not an array", index),
            )),
        })
        .collect::<Result<Vec<Vec<String>>, _>>()?;

    Ok(Normalized::new(
        Payload::Table(TableInput { headers, rows }),
        Vec::new(),
    ))
}

/// Textual form of a cell. Nested values are shown as their JSON text.
fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn adapt(input: &TableInput) -> TableModel {
    TableModel {
        head: TableRow::new(input.headers.clone()),
        body: input.rows.iter().cloned().map(TableRow::new).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::ErrorKind;
    use serde_json::json;
    use shared::{RawValue, TableData};

    fn store(headers: RawValue, rows: RawValue) -> PropertyStore {
        let mut store = PropertyStore::new();
        store.set(Property::Headers, headers);
        store.set(Property::Rows, rows);
        store
    }

    fn model_for(store: &PropertyStore) -> TableModel {
        match normalize(store).unwrap().payload {
            Payload::Table(input) => adapt(&input),
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn test_one_header_row_and_one_row_per_input() {
        let model = model_for(&store(
            RawValue::from(r#"["A","B"]"#),
            RawValue::from(r#"[["1","2"],["3","4"]]"#),
        ));

        assert_eq!(model.head.cells, vec!["A", "B"]);
        assert_eq!(model.body.len(), 2);
        assert_eq!(model.body[0].cells, vec!["1", "2"]);
        assert_eq!(model.body[1].cells, vec!["3", "4"]);
    }

    #[test]
    fn test_markup_is_kept_as_text() {
        let model = model_for(&store(
            RawValue::from(json!(["<b>Name</b>"])),
            RawValue::from(json!([["<img src=x onerror=alert(1)>"]])),
        ));
        assert_eq!(model.head.cells[0], "<b>Name</b>");
        assert_eq!(model.body[0].cells[0], "<img src=x onerror=alert(1)>");
    }

    #[test]
    fn test_non_string_cells_use_textual_form() {
        let model = model_for(&store(
            RawValue::from(json!(["Amount", "Posted", "Meta"])),
            RawValue::from(json!([[12.5, null, {"k": 1}], [true]])),
        ));
        assert_eq!(model.body[0].cells, vec!["12.5", "", r#"{"k":1}"#]);
        assert_eq!(model.body[1].cells, vec!["true"]);
    }

    #[test]
    fn test_rows_must_be_arrays() {
        let err = normalize(&store(RawValue::from("[]"), RawValue::from(r#"["1","2"]"#))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
        assert_eq!(err.property(), Property::Rows);
    }

    #[test]
    fn test_empty_table() {
        let model = model_for(&PropertyStore::new());
        assert!(model.head.cells.is_empty());
        assert!(model.body.is_empty());
    }

    #[test]
    fn test_server_table_properties() {
        let data = TableData {
            headers: vec!["Date".to_string(), "Amount".to_string()],
            rows: vec![vec!["2025-01-02".to_string(), "-12.00".to_string()]],
        };
        let (headers, rows) = data.to_properties().unwrap();
        let Payload::Table(input) = normalize(&store(headers, rows)).unwrap().payload else {
            panic!("expected table payload");
        };
        assert_eq!(input.to_table_data(), data);
    }
}
