//! Known fixups applied to the upstream declaration file
//!
//! Upstream `global.d.ts` is written for TypeScript's checker; Deno's is
//! stricter about a couple of constructs. The rules here rewrite those
//! spots. Rules apply in declaration order and each sees the output of the
//! previous one.

use std::sync::LazyLock;

use regex::Regex;

/// An ordered text substitution applied to the fetched declaration text.
pub struct TransformRule {
    /// Regex source matched against the declaration text.
    pub pattern: &'static str,
    /// Text substituted for every match.
    pub replacement: &'static str,
}

/// Directive lines prepended to the fetched file before the fixups run.
/// The first disables type checking for the whole file, the second lint
/// checking.
pub const DIRECTIVE_HEADER: &str =
    "// @ts-nocheck This file is automatically generated by stew.\n// deno-lint-ignore-file\n";

/// Corrected global declaration: upstream types the `SillyTavern` global as
/// an inline object literal, which loses the name for interface merging.
const GLOBAL_DECLARATION: &str = "\ndeclare interface SillyTavern {\n    getContext(): any;\n    llm: any;\n};\ndeclare var SillyTavern: SillyTavern;\n";

/// Fixups in application order.
pub const TRANSFORMATIONS: &[TransformRule] = &[
    TransformRule {
        pattern: r": function",
        replacement: ": () => void",
    },
    TransformRule {
        pattern: r"declare var SillyTavern: \{\s*getContext\(\): any;\s*llm: any;\s*\};",
        replacement: GLOBAL_DECLARATION,
    },
];

/// Compiled rule table. Compiled once, reused for the process lifetime.
static COMPILED: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    TRANSFORMATIONS
        .iter()
        .map(|rule| {
            (
                Regex::new(rule.pattern).expect("valid fixup pattern"),
                rule.replacement,
            )
        })
        .collect()
});

/// Prepend the generated-file directives to `content`.
pub fn prepend_directives(content: &str) -> String {
    format!("{DIRECTIVE_HEADER}{content}")
}

/// Apply every fixup rule to `content`, in declaration order.
///
/// A rule that matches nothing is silently skipped: the upstream file
/// changes shape over time and a stale rule must not fail the sync.
pub fn apply_fixups(content: &str) -> String {
    let mut text = content.to_string();
    for (re, replacement) in COMPILED.iter() {
        text = re.replace_all(&text, *replacement).into_owned();
    }
    text
}
