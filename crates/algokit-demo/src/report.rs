//! Printable results.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// One operation's result, renderable as text or JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub operation: &'static str,
    pub input: Value,
    pub output: Value,
}

impl Report {
    pub fn new(operation: &'static str, input: impl Serialize, output: impl Serialize) -> Self {
        Self {
            operation,
            input: to_value(input),
            output: to_value(output),
        }
    }
}

fn to_value(value: impl Serialize) -> Value {
    // Only non-string map keys can fail; reports never carry one.
    serde_json::to_value(value).unwrap_or(Value::Null)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<14} {} => {}",
            self.operation,
            render(&self.input),
            render(&self.output)
        )
    }
}

/// Compact human rendering: bare strings, `none` for null.
fn render(value: &Value) -> String {
    match value {
        Value::Null => "none".to_string(),
        Value::String(s) => format!("{s:?}"),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(render).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{k}: {}", render(v)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
        other => other.to_string(),
    }
}
