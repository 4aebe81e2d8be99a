use tracing::{debug};

use super::model::{Value};
use super::names::{quote};
use super::registry::{Registry};

/// The indentation added per nesting level by [`dump`].
pub const DEFAULT_INDENT: &str = "  ";

/// Dump `value`, indenting each nesting level by [`DEFAULT_INDENT`].
pub fn dump(value: &Value) -> String { dump_indented(value, DEFAULT_INDENT) }

/// Dump `value`, indenting each nesting level by `unit`.
///
/// Every call is a fresh session: container ids start again from `1`.
pub fn dump_indented(value: &Value, unit: &str) -> String {
    let mut session = Session {unit, visited: Registry::default()};
    debug!(indent = ?unit, "dump started");
    let text = session.render(value, "", "");
    debug!(containers = session.visited.len(), length = text.len(), "dump finished");
    text
}

// ----------------------------------------------------------------------------

/// The state of one call to [`dump_indented()`].
struct Session<'a> {
    /// The indentation per nesting level.
    unit: &'a str,

    /// The containers seen so far.
    visited: Registry,
}

impl<'a> Session<'a> {
    /// Render `value` on a line starting with `indent` and `prefix`.
    fn render(&mut self, value: &Value, indent: &str, prefix: &str) -> String {
        match value {
            Value::Str(string) => format!("{}{}{}", indent, prefix, quote(string)),
            Value::Array(array) => self.render_sequence(array, indent, prefix),
            Value::RegExp(regexp) => format!("{}{}{}", indent, prefix, regexp),
            Value::Object(object) => self.render_composite(object, indent, prefix),
            Value::Function(function) => callable::render_callable(function, indent, prefix),
            Value::Undefined => format!("{}{}undefined", indent, prefix),
            Value::Null => format!("{}{}null", indent, prefix),
            Value::Bool(b) => format!("{}{}{}", indent, prefix, b),
            Value::Number(n) => format!("{}{}{}", indent, prefix, number_text(*n)),
            Value::BigInt(i) => format!("{}{}{}", indent, prefix, i),
            Value::Symbol(description) => format!(
                "{}{}Symbol({})", indent, prefix, description.as_deref().unwrap_or(""),
            ),
        }
    }

    /// The indentation of the children of a container indented by `indent`.
    fn nested(&self, indent: &str) -> String { format!("{}{}", indent, self.unit) }
}

/// Format `n` the way a script would print it.
///
/// Whole numbers have no fractional part, both zeros are `0`, and very large
/// or very small magnitudes use an exponent with an explicit sign.
fn number_text(n: f64) -> String {
    if n.is_nan() { return "NaN".into(); }
    if n.is_infinite() { return if n > 0.0 { "Infinity" } else { "-Infinity" }.into(); }
    if n == 0.0 { return "0".into(); }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) { return n.to_string(); }
    let text = format!("{:e}", n);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        },
        _ => text,
    }
}

// ----------------------------------------------------------------------------

mod callable;
mod composite;
mod sequence;
