//! Record codec: application records ↔ wire table
//!
//! Pure data transformation. Encoding assigns column positions in
//! first-seen order; decoding zips positional values back onto names.
//!
//! Round-tripping a list of records with a uniform key set gives back the
//! same records. With heterogeneous key sets the decoded rows carry every
//! column in first-seen order (unset positions come back as `Null`), so
//! field order and presence can differ from the input.

use std::collections::HashMap;

use responsys_domain::types::wire::{ReceivedRecord, ReceivedRecordData};
use responsys_domain::{OneOrMany, Record, RecordData, WireRecord};
use serde_json::Value;

/// Convert records into a wire table.
///
/// Column positions are assigned the first time a name is seen and reused
/// afterwards. Every row is padded with `Null` to the final column count.
pub fn encode(records: &[Record]) -> RecordData {
    let mut field_names: Vec<String> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(records.len());

    for record in records {
        let mut row = vec![Value::Null; field_names.len()];

        for (name, value) in record.iter() {
            let position = *positions.entry(name).or_insert_with(|| {
                field_names.push(name.to_string());
                field_names.len() - 1
            });

            if position >= row.len() {
                row.resize(position + 1, Value::Null);
            }
            row[position] = value.clone();
        }

        rows.push(row);
    }

    let width = field_names.len();
    let records = rows
        .into_iter()
        .map(|mut field_values| {
            field_values.resize(width, Value::Null);
            WireRecord { field_values }
        })
        .collect();

    RecordData { field_names, records }
}

/// Convert a received wire table back into records.
///
/// - A single (bare) column name means one column was requested; each row's
///   value is keyed by that name.
/// - Otherwise values are zipped against the names by position.
/// - A bare row is treated as a one-row table; no rows gives an empty list.
pub fn decode(field_names: OneOrMany<String>, rows: Option<OneOrMany<ReceivedRecord>>) -> Vec<Record> {
    let rows = rows.map(OneOrMany::into_vec).unwrap_or_default();

    match field_names {
        OneOrMany::One(name) => rows
            .into_iter()
            .map(|row| Record::new().with(name.clone(), single_value(row.field_values)))
            .collect(),
        OneOrMany::Many(names) => rows
            .into_iter()
            .map(|row| {
                let values = row.field_values.map(OneOrMany::into_vec).unwrap_or_default();
                names.iter().cloned().zip(values).collect()
            })
            .collect(),
    }
}

/// [`decode`] applied to a whole received table.
pub fn decode_table(table: ReceivedRecordData) -> Vec<Record> {
    decode(table.field_names, table.records)
}

fn single_value(values: Option<OneOrMany<Value>>) -> Value {
    match values {
        None => Value::Null,
        Some(OneOrMany::One(value)) => value,
        Some(OneOrMany::Many(mut values)) => {
            if values.len() == 1 {
                values.remove(0)
            } else {
                Value::Array(values)
            }
        }
    }
}
