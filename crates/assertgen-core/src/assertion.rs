//! Assertion statements and their MockMvc rendering

use crate::path::JsonPath;
use serde_json::Number;
use std::fmt::{Display, Formatter};

/// A scalar literal as it appears in a generated assertion
///
/// Numbers and booleans render unquoted, exactly as the source literal;
/// strings render double-quoted with the original text inside, unescaped.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(Number),
    Bool(bool),
    Text(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// One generated assertion statement
///
/// Each variant characterizes one structural or value property of the JSON
/// document at a given path. `Display` renders the MockMvc snippet, e.g.
///
/// ```text
/// jsonPath("$.name").value("Peter")
/// jsonPath("$.*", hasSize(3))
/// jsonPath("$.tags", contains("a", "b", "c"))
/// ```
///
/// # Examples
///
/// ```rust
/// use assertgen_core::{Assertion, JsonPath};
///
/// let a = Assertion::Null { path: JsonPath::root().key("note") };
/// assert_eq!(a.to_string(), r#"jsonPath("$.note").value(nullValue())"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Assertion {
    /// The value at `path` is JSON null
    Null { path: JsonPath },

    /// The object at `path` has exactly `size` members
    ///
    /// Rendered against the wildcard form `path.*`.
    ObjectSize { path: JsonPath, size: usize },

    /// The array at `path` has exactly `size` elements
    ArraySize { path: JsonPath, size: usize },

    /// The array at `path` contains exactly these strings, in order
    ///
    /// The collapsed form used for string-only arrays instead of
    /// per-element assertions.
    Contains { path: JsonPath, elements: Vec<String> },

    /// The scalar at `path` equals `literal`
    Value { path: JsonPath, literal: Literal },
}

impl Assertion {
    /// The path expression this assertion checks
    ///
    /// For [`Assertion::ObjectSize`] this is the object's own path, not the
    /// wildcard form it renders with.
    pub fn path(&self) -> &JsonPath {
        match self {
            Assertion::Null { path }
            | Assertion::ObjectSize { path, .. }
            | Assertion::ArraySize { path, .. }
            | Assertion::Contains { path, .. }
            | Assertion::Value { path, .. } => path,
        }
    }
}

impl Display for Assertion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Assertion::Null { path } => {
                write!(f, "jsonPath(\"{}\").value(nullValue())", path)
            }
            Assertion::ObjectSize { path, size } => {
                write!(f, "jsonPath(\"{}\", hasSize({}))", path.wildcard(), size)
            }
            Assertion::ArraySize { path, size } => {
                write!(f, "jsonPath(\"{}\", hasSize({}))", path, size)
            }
            Assertion::Contains { path, elements } => {
                let quoted: Vec<String> =
                    elements.iter().map(|e| format!("\"{}\"", e)).collect();
                write!(f, "jsonPath(\"{}\", contains({}))", path, quoted.join(", "))
            }
            Assertion::Value { path, literal } => {
                write!(f, "jsonPath(\"{}\").value({})", path, literal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(expr_key: &str) -> JsonPath {
        JsonPath::root().key(expr_key)
    }

    #[test]
    fn test_null_rendering() {
        let a = Assertion::Null { path: at("note") };
        assert_eq!(a.to_string(), r#"jsonPath("$.note").value(nullValue())"#);
    }

    #[test]
    fn test_object_size_uses_wildcard() {
        let a = Assertion::ObjectSize {
            path: JsonPath::root(),
            size: 3,
        };
        assert_eq!(a.to_string(), r#"jsonPath("$.*", hasSize(3))"#);
    }

    #[test]
    fn test_array_size_no_wildcard() {
        let a = Assertion::ArraySize {
            path: at("tags"),
            size: 4,
        };
        assert_eq!(a.to_string(), r#"jsonPath("$.tags", hasSize(4))"#);
    }

    #[test]
    fn test_contains_quotes_each_element() {
        let a = Assertion::Contains {
            path: at("tags"),
            elements: vec!["a".into(), "b".into(), "c".into()],
        };
        assert_eq!(
            a.to_string(),
            r#"jsonPath("$.tags", contains("a", "b", "c"))"#
        );
    }

    #[test]
    fn test_contains_empty() {
        let a = Assertion::Contains {
            path: at("tags"),
            elements: vec![],
        };
        assert_eq!(a.to_string(), r#"jsonPath("$.tags", contains())"#);
    }

    #[test]
    fn test_number_unquoted() {
        let a = Assertion::Value {
            path: at("age"),
            literal: Literal::Number(33.into()),
        };
        assert_eq!(a.to_string(), r#"jsonPath("$.age").value(33)"#);
    }

    #[test]
    fn test_bool_unquoted() {
        let a = Assertion::Value {
            path: at("flag"),
            literal: Literal::Bool(true),
        };
        assert_eq!(a.to_string(), r#"jsonPath("$.flag").value(true)"#);
    }

    #[test]
    fn test_string_quoted_unescaped() {
        let a = Assertion::Value {
            path: at("name"),
            literal: Literal::Text("Peter".into()),
        };
        assert_eq!(a.to_string(), r#"jsonPath("$.name").value("Peter")"#);
    }

    #[test]
    fn test_path_accessor() {
        let a = Assertion::ObjectSize {
            path: at("user"),
            size: 1,
        };
        assert_eq!(a.path().as_str(), "$.user");
    }
}
