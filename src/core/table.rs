use crate::domain::model::{Record, Table};
use crate::utils::error::{ExportError, Result};
use serde_json::Value;
use std::collections::HashSet;

/// All distinct keys across the records, in first-discovery order.
pub fn column_union(records: &[Record]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for record in records {
        for key in record.data.keys() {
            if seen.insert(key.clone()) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Strings render verbatim, numbers and booleans via their display form.
/// Null and missing cells come out empty; nested values as compact JSON.
fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn to_csv(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if !table.columns.is_empty() {
        writer.write_record(&table.columns)?;
        for record in &table.records {
            let row: Vec<String> = table
                .columns
                .iter()
                .map(|column| render_cell(record.data.get(column)))
                .collect();
            writer.write_record(&row)?;
        }
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => Record::new(map),
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_column_union_first_seen_order() {
        let records = vec![
            record(json!({"b": 1, "a": 2})),
            record(json!({"a": 3, "c": 4})),
        ];
        assert_eq!(column_union(&records), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_column_union_empty() {
        assert!(column_union(&[]).is_empty());
    }

    #[test]
    fn test_disjoint_keys_render_empty_cells() {
        let records = vec![record(json!({"x": 1})), record(json!({"y": 2}))];
        let table = Table {
            columns: column_union(&records),
            records,
        };

        let csv_data = to_csv(&table).unwrap();
        let content = String::from_utf8(csv_data).unwrap();
        assert_eq!(content, "x,y\n1,\n,2\n");
    }

    #[test]
    fn test_cell_rendering() {
        let records = vec![record(json!({
            "ticker": "HGLG11",
            "price": 160.5,
            "active": true,
            "segment": null,
            "range": {"min": 0, "max": 20}
        }))];
        let table = Table {
            columns: column_union(&records),
            records,
        };

        let csv_data = to_csv(&table).unwrap();
        let content = String::from_utf8(csv_data).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "ticker,price,active,segment,range");
        assert_eq!(
            lines.next().unwrap(),
            r#"HGLG11,160.5,true,,"{""min"":0,""max"":20}""#
        );
    }

    #[test]
    fn test_empty_table_produces_no_output() {
        let table = Table {
            columns: vec![],
            records: vec![],
        };
        assert!(to_csv(&table).unwrap().is_empty());
    }

    #[test]
    fn test_round_trip_row_count_and_header() {
        let records = vec![
            record(json!({"a": 1, "b": "one"})),
            record(json!({"a": 2, "b": "two"})),
            record(json!({"a": 3, "c": "three"})),
        ];
        let table = Table {
            columns: column_union(&records),
            records,
        };

        let csv_data = to_csv(&table).unwrap();
        let mut reader = csv::Reader::from_reader(csv_data.as_slice());
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(|h| h.to_string())
            .collect();
        assert_eq!(headers, table.columns);

        let rows: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), table.records.len());
    }
}
