use serde_json::Value;

use crate::output::{result_payload, scalar_to_string};

/// Print just the key answer: per-duration tax-inclusive payments for an
/// offer set, the single figure for a payment, the first field otherwise.
pub fn print_minimal(value: &Value) {
    let payload = result_payload(value);

    if let Some(offers) = payload.get("offers").and_then(Value::as_array) {
        for offer in offers {
            let years = offer.get("duration").map(scalar_to_string).unwrap_or_default();
            let ttc = offer
                .get("monthly_payment_ttc")
                .map(scalar_to_string)
                .unwrap_or_default();
            println!("{years} years: {ttc} €/month TTC");
        }
        return;
    }

    if let Value::Array(rows) = payload {
        // A bare savings projection: one line per span.
        if rows.iter().all(|r| r.get("total_gross_savings").is_some()) && !rows.is_empty() {
            for row in rows {
                let years = row.get("duration_years").map(scalar_to_string).unwrap_or_default();
                let savings = row
                    .get("total_gross_savings")
                    .map(scalar_to_string)
                    .unwrap_or_default();
                println!("{years} years: {savings} € gross savings");
            }
            return;
        }
    }

    let priority_keys = ["monthly_payment", "total_gross_savings", "value_ht"];
    if let Value::Object(map) = payload {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", scalar_to_string(val));
                    return;
                }
            }
        }
        if let Some((key, val)) = map.iter().next() {
            println!("{key}: {}", scalar_to_string(val));
            return;
        }
    }

    println!("{}", scalar_to_string(payload));
}
