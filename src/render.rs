//! Rendering resolved value trees to JSON text.
//!
//! The encoder core produces a [`Value`] and performs no formatting of its
//! own; this module is the text-output collaborator. Output is plain JSON,
//! compact by default, with an opt-in pretty mode.
//!
//! ## Examples
//!
//! ```rust
//! use graft::{graft, render::render, RenderOptions};
//!
//! let value = graft!({"a": 1, "b": [true, null, "x"]});
//!
//! let compact = render(&value, &RenderOptions::default());
//! assert_eq!(compact, r#"{"a":1,"b":[true,null,"x"]}"#);
//!
//! let pretty = render(&value, &RenderOptions::pretty());
//! assert!(pretty.contains("\n  \"a\": 1"));
//! ```

use crate::error::{Error, Result};
use crate::value::{Number, Value};
use std::io;

/// Configuration options for rendered output.
///
/// # Examples
///
/// ```rust
/// use graft::RenderOptions;
///
/// // Default compact output
/// let options = RenderOptions::new();
/// assert!(!options.pretty);
///
/// // Pretty-printed with 4-space indentation
/// let options = RenderOptions::pretty().with_indent(4);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Insert newlines and indentation.
    pub pretty: bool,
    /// Number of spaces per indentation level. Only affects pretty output.
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            pretty: false,
            indent: 2,
        }
    }
}

impl RenderOptions {
    /// Creates default options (compact output).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output.
    #[must_use]
    pub fn pretty() -> Self {
        RenderOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Renders `value` to a string.
#[must_use]
pub fn render(value: &Value, options: &RenderOptions) -> String {
    // 256 bytes covers typical small documents without reallocation
    let mut output = String::with_capacity(256);
    write_value(&mut output, value, options, 0);
    output
}

/// Renders `value` into an [`io::Write`] sink.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to the sink fails.
pub fn render_to_writer<W: io::Write>(
    mut writer: W,
    value: &Value,
    options: &RenderOptions,
) -> Result<()> {
    let rendered = render(value, options);
    writer
        .write_all(rendered.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

fn write_value(output: &mut String, value: &Value, options: &RenderOptions, depth: usize) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(output, n),
        Value::String(s) => write_string(output, s),
        Value::Array(arr) => {
            if arr.is_empty() {
                output.push_str("[]");
                return;
            }
            output.push('[');
            for (i, element) in arr.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_break(output, options, depth + 1);
                write_value(output, element, options, depth + 1);
            }
            write_break(output, options, depth);
            output.push(']');
        }
        Value::Object(obj) => {
            if obj.is_empty() {
                output.push_str("{}");
                return;
            }
            output.push('{');
            for (i, (key, entry)) in obj.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_break(output, options, depth + 1);
                write_string(output, key);
                output.push(':');
                if options.pretty {
                    output.push(' ');
                }
                write_value(output, entry, options, depth + 1);
            }
            write_break(output, options, depth);
            output.push('}');
        }
    }
}

fn write_break(output: &mut String, options: &RenderOptions, depth: usize) {
    if options.pretty {
        output.push('\n');
        for _ in 0..depth * options.indent {
            output.push(' ');
        }
    }
}

fn write_number(output: &mut String, number: &Number) {
    match number {
        Number::Integer(i) => output.push_str(&i.to_string()),
        // Non-finite doubles have no JSON literal; they render as null.
        Number::Float(f) if !f.is_finite() => output.push_str("null"),
        Number::Float(f) => output.push_str(&f.to_string()),
        Number::Decimal(d) => output.push_str(&d.to_string()),
    }
}

fn write_string(output: &mut String, s: &str) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\u{0008}' => output.push_str("\\b"), // backspace
            '\u{000C}' => output.push_str("\\f"), // form feed
            c if (c as u32) < 0x20 => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => output.push(ch),
        }
    }
    output.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graft;
    use rust_decimal::Decimal;

    #[test]
    fn test_compact_rendering() {
        let value = graft!({"a": 1, "b": [true, null, "x"]});
        assert_eq!(
            render(&value, &RenderOptions::default()),
            r#"{"a":1,"b":[true,null,"x"]}"#
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(render(&graft!({}), &RenderOptions::pretty()), "{}");
        assert_eq!(render(&graft!([]), &RenderOptions::pretty()), "[]");
    }

    #[test]
    fn test_pretty_rendering() {
        let value = graft!({"a": [1, 2]});
        let expected = "{\n  \"a\": [\n    1,\n    2\n  ]\n}";
        assert_eq!(render(&value, &RenderOptions::pretty()), expected);
    }

    #[test]
    fn test_string_escaping() {
        let value = graft!("line\nwith \"quotes\" and \\ tab\t");
        assert_eq!(
            render(&value, &RenderOptions::default()),
            r#""line\nwith \"quotes\" and \\ tab\t""#
        );

        let control = Value::String("\u{0001}".to_string());
        assert_eq!(render(&control, &RenderOptions::default()), "\"\\u0001\"");
    }

    #[test]
    fn test_number_rendering() {
        assert_eq!(render(&graft!(42), &RenderOptions::default()), "42");
        assert_eq!(render(&graft!(3.5), &RenderOptions::default()), "3.5");
        assert_eq!(
            render(&Value::from(f64::NAN), &RenderOptions::default()),
            "null"
        );
        assert_eq!(
            render(&Value::from(f64::INFINITY), &RenderOptions::default()),
            "null"
        );
        assert_eq!(
            render(&Value::from(Decimal::new(1999, 2)), &RenderOptions::default()),
            "19.99"
        );
    }

    #[test]
    fn test_render_to_writer() {
        let value = graft!([1, 2, 3]);
        let mut buffer = Vec::new();
        render_to_writer(&mut buffer, &value, &RenderOptions::default()).unwrap();
        assert_eq!(buffer, b"[1,2,3]");
    }
}
