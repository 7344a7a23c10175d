//! The JSON-tree-to-assertion traversal

use crate::assertion::{Assertion, Literal};
use crate::error::GenerateError;
use crate::path::JsonPath;
use serde::Serialize;
use serde_json::Value;

/// Generate assertions for a JSON tree rooted at `path`
///
/// Depth-first, pre-order: a node's own assertions are emitted before its
/// children, object members in document insertion order, array elements in
/// index order.
///
/// # Rules
///
/// - Null: one `value(nullValue())` assertion
/// - Object with N members: one `hasSize(N)` assertion against `path.*`,
///   then one block per member
/// - Array of length N: one `hasSize(N)` assertion against `path`; a
///   string-only array additionally collapses into a single ordered
///   `contains(...)` assertion with no per-element recursion, any other
///   array recurses element by element at `path[i]`
/// - Number and boolean leaves: one `value(...)` assertion, literal unquoted
/// - String leaves: one `value("...")` assertion, literal quoted
///
/// # Example
///
/// ```rust
/// use assertgen_core::{generate, JsonPath};
///
/// let value = serde_json::json!({"id": "123456", "age": 33});
/// let assertions = generate(&value, JsonPath::root());
///
/// let lines: Vec<String> = assertions.iter().map(|a| a.to_string()).collect();
/// assert_eq!(lines, vec![
///     r#"jsonPath("$.*", hasSize(2))"#,
///     r#"jsonPath("$.id").value("123456")"#,
///     r#"jsonPath("$.age").value(33)"#,
/// ]);
/// ```
pub fn generate(value: &Value, path: JsonPath) -> Vec<Assertion> {
    let mut assertions = Vec::new();
    traverse(value, &path, &mut assertions);
    assertions
}

/// Generate assertions for any serializable value, rooted at `$`
///
/// # Errors
///
/// Returns `GenerateError::Json` if the value cannot be represented as a
/// JSON tree.
pub fn assertions_for<T: Serialize>(value: &T) -> Result<Vec<Assertion>, GenerateError> {
    let tree = serde_json::to_value(value)?;
    Ok(generate(&tree, JsonPath::root()))
}

/// Parse JSON text and generate assertions rooted at `$`
///
/// # Errors
///
/// Returns `GenerateError::Json` if the text is not well-formed JSON.
pub fn assertions_from_json(text: &str) -> Result<Vec<Assertion>, GenerateError> {
    let tree: Value = serde_json::from_str(text)?;
    Ok(generate(&tree, JsonPath::root()))
}

fn traverse(value: &Value, path: &JsonPath, out: &mut Vec<Assertion>) {
    match value {
        Value::Null => {
            out.push(Assertion::Null { path: path.clone() });
        }
        Value::Object(members) => {
            out.push(Assertion::ObjectSize {
                path: path.clone(),
                size: members.len(),
            });
            for (key, child) in members {
                traverse(child, &path.key(key), out);
            }
        }
        Value::Array(elements) => {
            out.push(Assertion::ArraySize {
                path: path.clone(),
                size: elements.len(),
            });
            if let Some(strings) = as_string_elements(elements) {
                out.push(Assertion::Contains {
                    path: path.clone(),
                    elements: strings,
                });
            } else {
                for (i, element) in elements.iter().enumerate() {
                    traverse(element, &path.index(i), out);
                }
            }
        }
        Value::Number(n) => {
            out.push(Assertion::Value {
                path: path.clone(),
                literal: Literal::Number(n.clone()),
            });
        }
        Value::Bool(b) => {
            out.push(Assertion::Value {
                path: path.clone(),
                literal: Literal::Bool(*b),
            });
        }
        Value::String(s) => {
            out.push(Assertion::Value {
                path: path.clone(),
                literal: Literal::Text(s.clone()),
            });
        }
    }
}

/// The elements of a string-only array, or `None` if any element is not a
/// string
///
/// An empty array counts as string-only and collapses to `contains()`.
fn as_string_elements(elements: &[Value]) -> Option<Vec<String>> {
    elements
        .iter()
        .map(|e| e.as_str().map(str::to_string))
        .collect()
}
