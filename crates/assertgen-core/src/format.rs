//! Rendering assertions into pasteable snippet text
//!
//! The traversal decides WHAT to assert; this module decides how the
//! resulting statements are laid out. Three conventions are supported, all
//! sharing the same underlying assertion sequence.

use crate::assertion::Assertion;
use std::io;

/// Indentation used for lines inside a grouped or flat block
const INDENT: &str = "    ";

/// How generated assertions are laid out in the output
///
/// # Example
///
/// ```rust
/// use assertgen_core::{assertions_from_json, render, OutputFormat};
///
/// let assertions = assertions_from_json(r#"{"age": 33}"#).unwrap();
/// let block = render(&assertions, OutputFormat::Grouped);
/// assert_eq!(block, concat!(
///     ".andExpectAll(\n",
///     "    jsonPath(\"$.*\", hasSize(1)),\n",
///     "    jsonPath(\"$.age\").value(33)\n",
///     ");\n",
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One combined `.andExpectAll(...)` block, lines joined with `,`
    #[default]
    Grouped,

    /// Bare assertion lines, one per line, no wrapper
    Flat,

    /// Independent `.andExpect(...)` statements, one per line
    Statements,
}

/// Render an assertion sequence in the given format
pub fn render(assertions: &[Assertion], format: OutputFormat) -> String {
    let mut out = Vec::new();
    write_assertions(&mut out, assertions, format)
        .expect("writing to an in-memory buffer cannot fail");
    // Safe because assertion text is always valid UTF-8
    String::from_utf8(out).expect("rendered assertions are always valid UTF-8")
}

/// Stream assertions to a writer without buffering the whole rendering
///
/// Produces the same bytes as [`render`] for the same inputs.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn write_assertions<W: io::Write>(
    writer: &mut W,
    assertions: &[Assertion],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Grouped => {
            writeln!(writer, ".andExpectAll(")?;
            for (i, assertion) in assertions.iter().enumerate() {
                let separator = if i + 1 < assertions.len() { "," } else { "" };
                writeln!(writer, "{}{}{}", INDENT, assertion, separator)?;
            }
            writeln!(writer, ");")
        }
        OutputFormat::Flat => {
            for assertion in assertions {
                writeln!(writer, "{}{}", INDENT, assertion)?;
            }
            Ok(())
        }
        OutputFormat::Statements => {
            for assertion in assertions {
                writeln!(writer, ".andExpect({})", assertion)?;
            }
            Ok(())
        }
    }
}
