use serde_json::Value;
use std::io;

use crate::output::{result_payload, scalar_to_string};

/// Write output as CSV to stdout. Offer sets become one row per duration;
/// arrays of objects keep their own columns; plain objects fall back to
/// field/value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    let payload = result_payload(value);

    if let Some(offers) = payload.get("offers").and_then(Value::as_array) {
        let columns = [
            "duration",
            "monthly_payment_ht",
            "monthly_payment_ttc",
            "min_annual_revenue",
            "solvability",
        ];
        let _ = wtr.write_record(columns);
        for offer in offers {
            let row: Vec<String> = columns
                .iter()
                .map(|c| offer.get(*c).map(scalar_to_string).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&row);
        }
    } else {
        match payload {
            Value::Array(rows) => write_rows(&mut wtr, rows),
            Value::Object(map) => {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &scalar_to_string(val)]);
                }
            }
            other => {
                let _ = wtr.write_record([&scalar_to_string(other)]);
            }
        }
    }

    let _ = wtr.flush();
}

fn write_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, rows: &[Value]) {
    if rows.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = rows.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);
        for row in rows {
            if let Value::Object(map) = row {
                let record: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(scalar_to_string).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&record);
            }
        }
    } else {
        for row in rows {
            let _ = wtr.write_record([&scalar_to_string(row)]);
        }
    }
}
