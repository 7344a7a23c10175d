//! JSON path expression building

use std::fmt::{Display, Formatter};

/// The root marker every path expression starts from
pub const ROOT_PATH: &str = "$";

/// A JSON path expression
///
/// Path expressions identify a location inside a JSON document using
/// dot-separated keys and bracketed indices:
///
/// ```text
/// $.user.tags[2]
/// ```
///
/// A path grows from the root marker `$` as the traversal descends; it has
/// no identity beyond its text.
///
/// # Examples
///
/// ```rust
/// use assertgen_core::JsonPath;
///
/// let path = JsonPath::root().key("user").key("tags").index(2);
/// assert_eq!(path.to_string(), "$.user.tags[2]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonPath(String);

impl JsonPath {
    /// The root path expression `$`
    pub fn root() -> Self {
        JsonPath(ROOT_PATH.to_string())
    }

    /// Descend into an object member, appending `.<key>`
    pub fn key(&self, key: &str) -> Self {
        JsonPath(format!("{}.{}", self.0, key))
    }

    /// Descend into an array element, appending `[<index>]`
    pub fn index(&self, index: usize) -> Self {
        JsonPath(format!("{}[{}]", self.0, index))
    }

    /// The wildcard form `<path>.*`, matching all direct children
    ///
    /// Used by object-size assertions: `jsonPath("$.user.*", hasSize(3))`
    /// counts the members of `$.user`.
    pub fn wildcard(&self) -> String {
        format!("{}.*", self.0)
    }

    /// The expression text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Default for JsonPath {
    fn default() -> Self {
        Self::root()
    }
}
