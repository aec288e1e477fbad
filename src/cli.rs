//! CLI definitions using clap derive API
//!
//! The surface is a single positional task name. Task dispatch stays a
//! string match so unknown and missing tasks can be reported without a
//! failing exit status.

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

/// Task name: sync the upstream global type declarations.
pub const TASK_SYNC_GLOBAL_TYPES: &str = "sync:globalTypes";

/// Task name: regenerate the import map.
pub const TASK_SYNC_IMPORT_MAP: &str = "sync:importMap";

/// Task name: bundle the extension.
pub const TASK_BUILD: &str = "build";

/// stew - SillyTavern extension workspace tasks
#[derive(Parser, Debug)]
#[command(
    name = "stew",
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Workspace task runner for SillyTavern extension development",
    long_about = "stew keeps a SillyTavern extension workspace in shape: it syncs the upstream \
                  global type declarations, regenerates the import map, and bundles the \
                  extension with esbuild.",
    after_help = "\x1b[1m\x1b[32mTasks:\x1b[0m\n   \
                  stew sync:globalTypes   \x1b[90m# Fetch and adapt upstream global.d.ts\x1b[0m\n   \
                  stew sync:importMap     \x1b[90m# Rewrite import_map.json\x1b[0m\n   \
                  stew build              \x1b[90m# Bundle src/index.ts into dist/extension.js\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Task to run: sync:globalTypes, sync:importMap, or build
    pub task: Option<String>,
}
