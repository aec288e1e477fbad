//! esbuild invocation
//!
//! The extension ships as a single browser-loadable ESM file. esbuild
//! resolves the module graph from the fixed entry point and bundles it;
//! the modules SillyTavern itself provides at load time stay external.

use std::path::PathBuf;
use std::process::Command;

use crate::error::{Result, StewError};

/// Bundler binary looked up on PATH.
pub const BUNDLER_BIN: &str = "esbuild";

/// Bundler configuration: one entry point in, one self-contained file out.
pub struct BuildConfig {
    pub entry_point: &'static str,
    pub outfile: &'static str,
    pub format: &'static str,
    pub platform: &'static str,
    pub sourcemap: bool,
    /// Specifiers left as unresolved imports, supplied by the host at load
    /// time.
    pub external: &'static [&'static str],
}

/// The one build stew performs.
pub const EXTENSION_BUILD: BuildConfig = BuildConfig {
    entry_point: "src/index.ts",
    outfile: "dist/extension.js",
    format: "esm",
    platform: "browser",
    sourcemap: true,
    external: &["sillytavern/global", "sillytavern/script"],
};

impl BuildConfig {
    /// Render the esbuild argument vector for this configuration.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            self.entry_point.to_string(),
            "--bundle".to_string(),
            format!("--outfile={}", self.outfile),
            format!("--format={}", self.format),
            format!("--platform={}", self.platform),
        ];
        if self.sourcemap {
            args.push("--sourcemap".to_string());
        }
        for specifier in self.external {
            args.push(format!("--external:{specifier}"));
        }
        args
    }
}

/// Locate the bundler binary on PATH.
pub fn find_bundler() -> Result<PathBuf> {
    which::which(BUNDLER_BIN).map_err(|_| StewError::BundlerNotFound)
}

/// Run the bundler with `config`, surfacing its stderr on failure.
pub fn run_build(config: &BuildConfig) -> Result<()> {
    let bundler = find_bundler()?;

    let output = Command::new(&bundler)
        .args(config.to_args())
        .output()
        .map_err(|e| StewError::BundlerFailed {
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(StewError::BundlerFailed {
            reason: stderr.trim().to_string(),
        });
    }

    Ok(())
}
