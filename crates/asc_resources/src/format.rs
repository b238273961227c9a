//! Display formatting shared by the attribute getters.
//!
//! Missing values always format as an empty string; the renderers decide
//! whether that means a suppressed column or a `-` placeholder.

use chrono::{DateTime, Utc};

/// `YYYY-MM-DD HH:MM:SS UTC`.
pub fn time(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_default()
}

pub fn count(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

/// `Yes` / `No` label for an optional flag.
pub fn yes_no(value: Option<bool>) -> String {
    label(value, "Yes", "No")
}

pub fn label(value: Option<bool>, yes: &str, no: &str) -> String {
    match value {
        Some(true) => yes.to_string(),
        Some(false) => no.to_string(),
        None => String::new(),
    }
}

/// Join non-empty items with `, `.
pub fn join<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|s| AsRef::<str>::as_ref(s))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resource name embedded in an ELB-style ARN (`.../<type>/<name>/<id>`).
pub fn arn_name(arn: &str) -> String {
    let parts: Vec<&str> = arn.split('/').collect();
    if parts.len() >= 3 {
        parts[parts.len() - 2].to_string()
    } else {
        arn.to_string()
    }
}
