//! The module-resolution import map
//!
//! Extensions load their dependencies through an import map instead of a
//! package manager; the map pins each bare specifier to the URL (or local
//! file) that serves it. The table is fixed; regeneration exists so the
//! checked-in file can always be rebuilt from one source of truth.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Specifier table, in emission order. Keys are unique.
pub const IMPORTS: &[(&str, &str)] = &[
    ("react", "https://esm.sh/react@18.3.1"),
    ("react/jsx-runtime", "https://esm.sh/react@18.3.1/jsx-runtime"),
    ("react-dom", "https://esm.sh/react-dom"),
    ("react-dom/client", "https://esm.sh/react-dom/client"),
    ("jquery", "https://esm.sh/jquery@latest"),
    ("sillytavern/global", "./types/sillytavern_global.d.ts"),
    (
        "sillytavern/script",
        "https://raw.githubusercontent.com/SillyTavern/SillyTavern/release/public/script.js",
    ),
];

/// The serialized `import_map.json` document: a single top-level `imports`
/// object holding the specifier table.
#[derive(Serialize)]
struct ImportMapDoc {
    imports: SpecifierTable,
}

/// Serializes [`IMPORTS`] as a JSON object preserving table order (a plain
/// map type would re-sort the keys).
struct SpecifierTable;

impl Serialize for SpecifierTable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(IMPORTS.len()))?;
        for (specifier, target) in IMPORTS {
            map.serialize_entry(specifier, target)?;
        }
        map.end()
    }
}

/// Render the import map document, pretty-printed with 2-space indentation.
pub fn render() -> String {
    serde_json::to_string_pretty(&ImportMapDoc {
        imports: SpecifierTable,
    })
    .expect("static import map serializes")
}
