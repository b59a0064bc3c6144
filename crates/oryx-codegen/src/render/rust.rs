//! Rust registry module, included by the registry crate's build script.
//!
//! The rendered module expects the including crate to define `ConstantEntry` at its root.

use std::fmt::{self, Write as _};

use crate::model::Registry;

use super::generated_header;

/// Render the registry as a Rust module body.
#[must_use]
pub fn render_rust(registry: &Registry) -> String {
    let mut out = generated_header(registry);
    // Writing into a String cannot fail.
    let _ = write_body(&mut out, registry);
    out
}

fn write_body(out: &mut String, registry: &Registry) -> fmt::Result {
    writeln!(out)?;
    writeln!(
        out,
        "/// File name of the declarative source this registry was generated from."
    )?;
    writeln!(out, "pub const SOURCE_NAME: &str = {:?};", registry.source_name)?;
    writeln!(out)?;
    writeln!(out, "/// SHA-256 digest of the declarative source.")?;
    writeln!(
        out,
        "pub const SOURCE_DIGEST: &str = {:?};",
        registry.source_digest
    )?;

    for collection in &registry.collections {
        writeln!(out)?;
        writeln!(
            out,
            "/// Constants declared in the `{}` collection.",
            collection.name
        )?;
        writeln!(out, "pub mod {} {{", collection.module)?;
        for (index, constant) in collection.constants.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "    /// `{}`", constant.name)?;
            writeln!(
                out,
                "    pub const {}: &str = {:?};",
                constant.ident, constant.value
            )?;
        }
        writeln!(out, "}}")?;
    }

    writeln!(out)?;
    writeln!(out, "/// Every declared constant, in declaration order.")?;
    writeln!(out, "pub static ENTRIES: &[crate::ConstantEntry] = &[")?;
    for (collection, constant) in registry.constants() {
        writeln!(out, "    crate::ConstantEntry {{")?;
        writeln!(out, "        name: {:?},", constant.name)?;
        writeln!(out, "        ident: {:?},", constant.ident)?;
        writeln!(
            out,
            "        value: {}::{},",
            collection.module, constant.ident
        )?;
        writeln!(out, "        collection: {:?},", collection.name)?;
        writeln!(out, "        category: {:?},", constant.category)?;
        writeln!(out, "    }},")?;
    }
    writeln!(out, "];")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Collection, Constant};

    fn constant(name: &str, ident: &str, value: &str, category: &str) -> Constant {
        Constant {
            name: name.to_string(),
            ident: ident.to_string(),
            value: value.to_string(),
            category: category.to_string(),
        }
    }

    fn registry() -> Registry {
        Registry {
            source_name: "constants.yaml".to_string(),
            source_digest: "abc123".to_string(),
            collections: vec![Collection {
                name: "extVarNames".to_string(),
                module: "ext_var_names".to_string(),
                type_name: "ExtVarNames".to_string(),
                constants: vec![
                    constant("EnvironmentType", "ENVIRONMENT_TYPE", "ORYX_ENV_TYPE", "Environment"),
                    constant("Quoted", "QUOTED", "say \"hi\"\t\\", "Quoted"),
                ],
                outputs: Vec::new(),
            }],
        }
    }

    #[test]
    fn renders_module_constants_and_entries() {
        let rendered = render_rust(&registry());
        assert!(rendered.starts_with("// Code generated from constants.yaml (sha256:abc123)."));
        assert!(rendered.contains("pub const SOURCE_DIGEST: &str = \"abc123\";"));
        assert!(rendered.contains("pub mod ext_var_names {"));
        assert!(rendered.contains("    pub const ENVIRONMENT_TYPE: &str = \"ORYX_ENV_TYPE\";"));
        assert!(rendered.contains("        value: ext_var_names::ENVIRONMENT_TYPE,"));
        assert!(rendered.contains("        category: \"Environment\","));
    }

    #[test]
    fn escapes_values_as_rust_literals() {
        let rendered = render_rust(&registry());
        assert!(rendered.contains(r#"pub const QUOTED: &str = "say \"hi\"\t\\";"#));
    }

    #[test]
    fn renders_exact_module_text() {
        let mut registry = registry();
        registry.collections[0].constants.truncate(1);
        assert_eq!(
            render_rust(&registry),
            "// Code generated from constants.yaml (sha256:abc123). DO NOT EDIT.\n\
             \n\
             /// File name of the declarative source this registry was generated from.\n\
             pub const SOURCE_NAME: &str = \"constants.yaml\";\n\
             \n\
             /// SHA-256 digest of the declarative source.\n\
             pub const SOURCE_DIGEST: &str = \"abc123\";\n\
             \n\
             /// Constants declared in the `extVarNames` collection.\n\
             pub mod ext_var_names {\n    \
             /// `EnvironmentType`\n    \
             pub const ENVIRONMENT_TYPE: &str = \"ORYX_ENV_TYPE\";\n\
             }\n\
             \n\
             /// Every declared constant, in declaration order.\n\
             pub static ENTRIES: &[crate::ConstantEntry] = &[\n    \
             crate::ConstantEntry {\n        \
             name: \"EnvironmentType\",\n        \
             ident: \"ENVIRONMENT_TYPE\",\n        \
             value: ext_var_names::ENVIRONMENT_TYPE,\n        \
             collection: \"extVarNames\",\n        \
             category: \"Environment\",\n    \
             },\n\
             ];\n"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_rust(&registry()), render_rust(&registry()));
    }
}
