//! `sync:importMap` task
//!
//! Regenerates `import_map.json` from the fixed specifier table. The task
//! takes no input; it exists so the checked-in map can always be rebuilt.

use std::path::Path;

use crate::error::Result;
use crate::file_ops;
use crate::import_map;
use crate::ui;

/// Local path the import map is written to.
pub const IMPORT_MAP_PATH: &str = "./import_map.json";

/// Run the task against the fixed output path.
pub fn run() -> Result<()> {
    ui::step("Updating import map...");
    write_to(Path::new(IMPORT_MAP_PATH))?;
    ui::success("Import map updated successfully.");
    Ok(())
}

fn write_to(out_path: &Path) -> Result<()> {
    file_ops::write_text_file(out_path, &import_map::render())
}
