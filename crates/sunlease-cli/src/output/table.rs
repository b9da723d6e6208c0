use serde_json::Value;
use tabled::{builder::Builder, Table};

use crate::output::{result_payload, scalar_to_string};

/// Render output as tables. Offer sets get one comparison row per duration
/// plus the savings projection; anything else falls back to a field/value
/// listing.
pub fn print_table(value: &Value) {
    let payload = result_payload(value);

    if let Some(offers) = payload.get("offers").and_then(Value::as_array) {
        print_offers(offers);
        if let Some(economics) = payload.get("economics").and_then(Value::as_array) {
            println!();
            print_economics(economics);
        }
        print_envelope_notes(value);
        return;
    }

    match payload {
        Value::Array(rows) => print_rows(rows),
        Value::Object(_) => {
            print_fields(payload);
            print_envelope_notes(value);
        }
        other => println!("{other}"),
    }
}

fn print_offers(offers: &[Value]) {
    let mut builder = Builder::default();
    builder.push_record([
        "Years",
        "Monthly HT €",
        "Monthly TTC €",
        "Min revenue €/yr",
        "Solvability",
    ]);
    for offer in offers {
        builder.push_record([
            field(offer, "duration"),
            field(offer, "monthly_payment_ht"),
            field(offer, "monthly_payment_ttc"),
            field(offer, "min_annual_revenue"),
            field(offer, "solvability"),
        ]);
    }
    println!("{}", Table::from(builder));
}

fn print_economics(economics: &[Value]) {
    let mut builder = Builder::default();
    builder.push_record([
        "Years",
        "Production kWh",
        "Self-consumed kWh",
        "Surplus kWh",
        "Gross savings €",
    ]);
    for analysis in economics {
        builder.push_record([
            field(analysis, "duration_years"),
            field(analysis, "total_production_kwh"),
            field(analysis, "total_self_consumption_kwh"),
            field(analysis, "total_surplus_kwh"),
            field(analysis, "total_gross_savings"),
        ]);
    }
    println!("{}", Table::from(builder));
}

/// Generic table for an array of flat objects (residual schedules and the
/// like): columns from the first row's keys.
fn print_rows(rows: &[Value]) {
    if rows.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = rows.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);
        for row in rows {
            if let Value::Object(map) = row {
                let record: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(scalar_to_string).unwrap_or_default())
                    .collect();
                builder.push_record(record);
            }
        }
        println!("{}", Table::from(builder));
    } else {
        for row in rows {
            println!("{}", scalar_to_string(row));
        }
    }
}

fn print_fields(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.clone(), scalar_to_string(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

/// Warnings and methodology from the computation envelope, when present.
fn print_envelope_notes(value: &Value) {
    let Some(envelope) = value.as_object() else {
        return;
    };

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for warning in warnings {
                if let Value::String(text) = warning {
                    println!("  - {text}");
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {methodology}");
    }
}

fn field(value: &Value, key: &str) -> String {
    value.get(key).map(scalar_to_string).unwrap_or_default()
}
