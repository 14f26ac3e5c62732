use serde_json::Value;
use std::io;

/// Write output as CSV to stdout.
///
/// A projection's schedule (or a sensitivity sweep's rows) is the part worth
/// importing into a spreadsheet, so when one is present it becomes the CSV
/// body; otherwise the result flattens to field,value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            let result = map.get("result").unwrap_or(value);
            if let Some(rows) = detail_rows(result) {
                write_array_csv(&mut wtr, rows);
            } else if let Value::Object(result_map) = result {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in result_map {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            } else {
                let _ = wtr.write_record([&format_csv_value(result)]);
            }
        }
        Value::Array(arr) => {
            write_array_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

/// The per-month or per-step detail inside a result, when there is one.
fn detail_rows(result: &Value) -> Option<&Vec<Value>> {
    let map = result.as_object()?;
    for key in ["monthly_amortization", "rows"] {
        if let Some(Value::Array(rows)) = map.get(key) {
            if !rows.is_empty() {
                return Some(rows);
            }
        }
    }
    None
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    // Extract headers from first object
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(*h)
                            .map(format_csv_value)
                            .unwrap_or_default()
                    })
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
