//! Go constants file, one `const` per declared constant.

use std::fmt::{self, Write as _};

use crate::model::{Collection, Registry};

use super::generated_header;

/// Render one collection as a Go source file in `package`.
#[must_use]
pub fn render_go(registry: &Registry, collection: &Collection, package: &str) -> String {
    let mut out = generated_header(registry);
    // Writing into a String cannot fail.
    let _ = write_body(&mut out, collection, package);
    out
}

fn write_body(out: &mut String, collection: &Collection, package: &str) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "package {package}")?;
    writeln!(out)?;
    for constant in &collection.constants {
        writeln!(
            out,
            "const {} string = {}",
            constant.name,
            quote(&constant.value)
        )?;
    }
    Ok(())
}

/// Quote `value` as a Go interpreted string literal.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            ch if ch.is_control() => {
                let _ = write!(quoted, "\\u{:04x}", u32::from(ch));
            }
            ch => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
