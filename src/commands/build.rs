//! `build` task
//!
//! Bundles the extension entry point into `dist/extension.js`. This is the
//! one task whose failure makes the whole process exit non-zero.

use crate::bundler;
use crate::error::Result;
use crate::ui;

/// Run the fixed extension build.
pub fn run() -> Result<()> {
    ui::step("Building the project with esbuild...");
    bundler::run_build(&bundler::EXTENSION_BUILD)?;
    ui::success("Build succeeded.");
    Ok(())
}
