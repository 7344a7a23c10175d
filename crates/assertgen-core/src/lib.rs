//! # assertgen-core
//!
//! Generate Spring MockMvc `jsonPath(...)` assertions from a JSON document
//! captured during manual testing.
//!
//! Given a server response obtained via
//!
//! ```text
//! mockMvc
//!     .perform(...)
//!     .andDo(print());
//! ```
//!
//! this crate walks the JSON tree and produces the assertions that
//! characterize it, ready to append to the `.perform` chain:
//!
//! ```text
//! .andExpectAll(
//!     jsonPath("$.*", hasSize(3)),
//!     jsonPath("$.id").value("123456"),
//!     jsonPath("$.name").value("Peter"),
//!     jsonPath("$.age").value(33)
//! );
//! ```
//!
//! The traversal is a pure function of the parsed tree; all I/O belongs to
//! the caller. Rendering is decoupled from generation, so the same
//! assertion sequence can be laid out as one grouped block, a flat list, or
//! independent `.andExpect(...)` statements.
//!
//! ## Example
//!
//! ```rust
//! use assertgen_core::{assertions_from_json, render, OutputFormat};
//!
//! let json = r#"{"id": "123456", "name": "Peter", "age": 33}"#;
//! let assertions = assertions_from_json(json)?;
//! let snippet = render(&assertions, OutputFormat::Grouped);
//!
//! assert!(snippet.starts_with(".andExpectAll("));
//! assert!(snippet.contains(r#"jsonPath("$.name").value("Peter")"#));
//! # Ok::<(), assertgen_core::GenerateError>(())
//! ```
//!
//! ## Traversal order
//!
//! Depth-first and pre-order, with object members visited in document
//! insertion order (`serde_json` with `preserve_order`). Output is
//! deterministic: the same input always renders to identical bytes.

pub mod assertion;
pub mod error;
pub mod format;
pub mod generate;
pub mod path;

// Re-exports for convenience
pub use assertion::{Assertion, Literal};
pub use error::GenerateError;
pub use format::{render, write_assertions, OutputFormat};
pub use generate::{assertions_for, assertions_from_json, generate};
pub use path::{JsonPath, ROOT_PATH};
