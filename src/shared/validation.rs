//! Validation Utilities

use validator::ValidationErrors;

/// Render validation errors as `field: message` pairs, sorted by field.
///
/// Field names are reported in their camelCase wire form.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", wire_name(field), message)
            })
        })
        .collect();

    if messages.is_empty() {
        return "Validation failed".into();
    }

    messages.sort();
    messages.join(", ")
}

fn wire_name(field: &str) -> String {
    let mut parts = field.split('_');
    let mut name = parts.next().unwrap_or_default().to_owned();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}
