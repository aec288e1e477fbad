//! `sync:globalTypes` task
//!
//! Fetches the authoritative SillyTavern global type declarations and
//! adapts them for this workspace:
//! 1. GET the upstream `global.d.ts`
//! 2. Prepend the generated-file directives
//! 3. Apply the known fixups
//! 4. Write the result under `types/`

use std::path::Path;

use crate::error::Result;
use crate::fetch;
use crate::file_ops;
use crate::fixups;
use crate::ui;

/// Upstream source of the global type declarations.
pub const GLOBAL_TYPES_URL: &str =
    "https://raw.githubusercontent.com/SillyTavern/SillyTavern/release/public/global.d.ts";

/// Local path the adapted declaration file is written to.
pub const GLOBAL_TYPES_PATH: &str = "./types/sillytavern_global.d.ts";

/// Run the task against the fixed upstream URL and output path.
pub fn run() -> Result<()> {
    ui::step("Fetching the latest type definitions from SillyTavern...");
    sync_to(GLOBAL_TYPES_URL, Path::new(GLOBAL_TYPES_PATH))?;
    ui::success(&format!(
        "Updated type definition file saved at {GLOBAL_TYPES_PATH}"
    ));
    Ok(())
}

/// Fetch `url`, adapt the declaration text, and write it to `out_path`.
///
/// Nothing is written unless the fetch succeeded and the whole adapted
/// document is in memory, so a failure never leaves a partial file behind.
fn sync_to(url: &str, out_path: &Path) -> Result<()> {
    let body = fetch::get_text(url)?;
    let content = fixups::prepend_directives(&body);
    let content = fixups::apply_fixups(&content);
    file_ops::write_text_file(out_path, &content)
}
