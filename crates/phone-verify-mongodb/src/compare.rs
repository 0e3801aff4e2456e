//! Field comparison logic.

use crate::report::FieldMismatch;
use phone_core::PhoneRecord;
use serde_json::Value;
use std::collections::BTreeSet;

/// Top-level fields left out of comparison. Release dates depend on the
/// instant a batch was generated, so two runs never agree on them.
pub const IGNORED_FIELDS: [&str; 1] = ["releaseDate"];

/// Compare two records field by field.
///
/// Mismatches are reported by dotted path in stored-field naming,
/// e.g. `specs.display.resolution` or `carrierCompatibility[1].compatible`.
pub fn compare_records(
    expected: &PhoneRecord,
    actual: &PhoneRecord,
) -> Result<Vec<FieldMismatch>, serde_json::Error> {
    let mut expected = serde_json::to_value(expected)?;
    let mut actual = serde_json::to_value(actual)?;

    for field in IGNORED_FIELDS {
        for value in [&mut expected, &mut actual] {
            if let Value::Object(map) = value {
                map.remove(field);
            }
        }
    }

    let mut mismatches = Vec::new();
    compare_values("", &expected, &actual, &mut mismatches);
    Ok(mismatches)
}

fn compare_values(path: &str, expected: &Value, actual: &Value, out: &mut Vec<FieldMismatch>) {
    match (expected, actual) {
        (Value::Object(e), Value::Object(a)) => {
            let keys: BTreeSet<&String> = e.keys().chain(a.keys()).collect();
            for key in keys {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                match (e.get(key), a.get(key)) {
                    (Some(ev), Some(av)) => compare_values(&child, ev, av, out),
                    (ev, av) => out.push(FieldMismatch {
                        field: child,
                        expected: describe(ev),
                        actual: describe(av),
                    }),
                }
            }
        }
        (Value::Array(e), Value::Array(a)) if e.len() == a.len() => {
            for (i, (ev, av)) in e.iter().zip(a).enumerate() {
                compare_values(&format!("{path}[{i}]"), ev, av, out);
            }
        }
        _ if expected == actual => {}
        _ => out.push(FieldMismatch {
            field: path.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }),
    }
}

fn describe(value: Option<&Value>) -> String {
    value.map_or_else(|| "<missing>".to_string(), Value::to_string)
}
