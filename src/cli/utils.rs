use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(output_format: &OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(data_value) = data {
                response["data"] = data_value;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Print a raw API envelope as-is (JSON) or its message/data (text)
pub fn output_envelope(output_format: &OutputFormat, envelope: &Value, fallback: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(envelope)?);
        }
        OutputFormat::Text => {
            let message = envelope.get("message").and_then(Value::as_str).unwrap_or(fallback);
            println!("✓ {}", message);
            if let Some(id) = envelope.pointer("/data/_id").and_then(Value::as_str) {
                println!("ID: {}", id);
            }
        }
    }
    Ok(())
}

/// Print a list envelope. Text mode shows one line per record with the given columns.
pub fn output_records(
    output_format: &OutputFormat,
    envelope: &Value,
    collection_name: &str,
    columns: &[&str],
) -> anyhow::Result<()> {
    if let OutputFormat::Json = output_format {
        println!("{}", serde_json::to_string_pretty(envelope)?);
        return Ok(());
    }

    let records = envelope
        .get("data")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    if records.is_empty() {
        println!("No {} found", collection_name);
        return Ok(());
    }

    for record in records {
        println!("{}", record_line(record, columns));
    }
    println!("{} {}", records.len(), collection_name);
    Ok(())
}

fn record_line(record: &Value, columns: &[&str]) -> String {
    let id = record.get("_id").and_then(Value::as_str).unwrap_or("-");
    let mut parts = vec![id.to_string()];

    for column in columns {
        let value = match record.get(*column) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => "-".to_string(),
            Some(other) => other.to_string(),
        };
        parts.push(value);
    }

    parts.join("  ")
}
