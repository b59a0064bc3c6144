//! Identifier conversions between declared names and per-language bindings.

/// Rust keywords that cannot be used as module names.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Names the registry crate already defines or depends on at its root. A generated module
/// with one of these names would be shadowed by, or shadow, the crate's own item.
const RESERVED_MODULES: &[&str] = &[
    "alloc",
    "core",
    "error",
    "generated",
    "once_cell",
    "serde",
    "std",
    "thiserror",
];

/// Split a `camelCase` or `PascalCase` name into its words.
///
/// A word starts at an uppercase letter that follows a lowercase letter or digit, or at the
/// last capital of an acronym run (`PHPOrigin` splits as `PHP`, `Origin`).
fn split_words(name: &str) -> Vec<&str> {
    let chars = name.char_indices().collect::<Vec<_>>();
    let mut words = Vec::new();
    let mut start = 0;
    for (pos, &(index, ch)) in chars.iter().enumerate().skip(1) {
        let prev = chars[pos - 1].1;
        let next = chars.get(pos + 1).map(|&(_, next)| next);
        let boundary = ch.is_uppercase()
            && (prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next.is_some_and(char::is_lowercase)));
        if boundary {
            words.push(&name[start..index]);
            start = index;
        }
    }
    if start < name.len() {
        words.push(&name[start..]);
    }
    words
}

/// `EnvironmentType` → `ENVIRONMENT_TYPE`.
#[must_use]
pub fn screaming_snake(name: &str) -> String {
    split_words(name)
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// `extVarNames` → `ext_var_names`.
#[must_use]
pub fn snake(name: &str) -> String {
    split_words(name)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// `extVarNames` → `ExtVarNames`.
#[must_use]
pub fn pascal(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Leading word of a constant name, used as its informational category.
///
/// `FpmMaxChildrenEnvVarName` → `Fpm`, `UserAppInsightsKeyEnv` → `User`.
#[must_use]
pub fn category(name: &str) -> &str {
    split_words(name).first().copied().unwrap_or(name)
}

/// Whether `name` is reserved in Rust and would not compile as a module name.
#[must_use]
pub fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Whether `module` is taken at the registry crate's root.
#[must_use]
pub fn is_reserved_module(module: &str) -> bool {
    RESERVED_MODULES.contains(&module)
}
