//! C# constants file: a static class of `const string` members.

use std::fmt::{self, Write as _};

use crate::model::{Collection, Registry};

use super::generated_header;

/// Render one collection as a C# source file in `namespace`.
#[must_use]
pub fn render_csharp(registry: &Registry, collection: &Collection, namespace: &str) -> String {
    let mut out = generated_header(registry);
    // Writing into a String cannot fail.
    let _ = write_body(&mut out, collection, namespace);
    out
}

fn write_body(out: &mut String, collection: &Collection, namespace: &str) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "namespace {namespace}")?;
    writeln!(out, "{{")?;
    writeln!(out, "    public static class {}", collection.type_name)?;
    writeln!(out, "    {{")?;
    for constant in &collection.constants {
        writeln!(
            out,
            "        public const string {} = {};",
            constant.name,
            quote(&constant.value)
        )?;
    }
    out.push_str("    }\n}\n");
    Ok(())
}

fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\0' => quoted.push_str("\\0"),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Constant;

    #[test]
    fn renders_namespace_and_class() {
        let registry = Registry {
            source_name: "constants.yaml".to_string(),
            source_digest: "abc123".to_string(),
            collections: Vec::new(),
        };
        let collection = Collection {
            name: "extVarNames".to_string(),
            module: "ext_var_names".to_string(),
            type_name: "ExtVarNames".to_string(),
            constants: vec![Constant {
                name: "PhpOrigin".to_string(),
                ident: "PHP_ORIGIN".to_string(),
                value: "PHP_ORIGIN".to_string(),
                category: "Php".to_string(),
            }],
            outputs: Vec::new(),
        };
        let rendered = render_csharp(&registry, &collection, "Microsoft.Oryx.Common");
        assert!(rendered.contains("namespace Microsoft.Oryx.Common\n{\n"));
        assert!(rendered.contains("    public static class ExtVarNames\n    {\n"));
        assert!(rendered.contains("        public const string PhpOrigin = \"PHP_ORIGIN\";\n"));
        assert!(rendered.ends_with("    }\n}\n"));
        assert_eq!(
            rendered,
            "// Code generated from constants.yaml (sha256:abc123). DO NOT EDIT.\n\
             \n\
             namespace Microsoft.Oryx.Common\n\
             {\n    \
             public static class ExtVarNames\n    \
             {\n        \
             public const string PhpOrigin = \"PHP_ORIGIN\";\n    \
             }\n\
             }\n"
        );
    }

    #[test]
    fn quote_escapes_csharp_specials() {
        assert_eq!(quote("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(quote("\u{1b}"), r#""\u001b""#);
    }
}
