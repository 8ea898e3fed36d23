use serde_json::Value;

use super::display_amount;

/// Print only the headline figure of a quote.
pub fn print_minimal(value: &Value) {
    let result_obj = match value {
        Value::Object(map) => map.get("result").unwrap_or(value),
        _ => value,
    };

    let priority_keys = [
        "monthly_emi",
        "emi",
        "maturity_amount",
        "future_value",
        "total",
    ];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => display_amount(s),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
