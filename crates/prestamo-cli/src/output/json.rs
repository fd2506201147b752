use serde_json::Value;

/// Pretty-print the result as JSON to stdout. Falls back to compact output
/// if pretty serialization fails.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(_) => println!("{}", value),
    }
}
