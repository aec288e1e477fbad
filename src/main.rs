//! stew - SillyTavern extension workspace tasks
//!
//! A small task runner for SillyTavern extension development: syncs the
//! upstream global type declarations, regenerates the import map, and
//! bundles the extension with esbuild. One task per invocation.

use clap::Parser;

mod bundler;
mod cli;
mod commands;
mod error;
mod fetch;
mod file_ops;
mod fixups;
mod import_map;
#[cfg(test)]
mod test_support;
mod ui;

use cli::Cli;
use error::StewError;

fn main() {
    let cli = Cli::parse();

    let Some(task) = cli.task else {
        eprintln!("Error: {}", StewError::MissingTask);
        return;
    };

    let result = match task.as_str() {
        cli::TASK_SYNC_GLOBAL_TYPES => commands::sync_global_types::run(),
        cli::TASK_SYNC_IMPORT_MAP => commands::sync_import_map::run(),
        cli::TASK_BUILD => commands::build::run(),
        unknown => {
            eprintln!(
                "Error: {}",
                StewError::UnknownTask {
                    name: unknown.to_string(),
                }
            );
            return;
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        // Only a failed build makes the process exit non-zero; the sync
        // tasks report their failure and leave the exit status alone.
        if task == cli::TASK_BUILD {
            std::process::exit(1);
        }
    }
}
