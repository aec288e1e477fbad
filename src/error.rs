//! Error types and handling for stew
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! The taxonomy follows the failure points of the three tasks: the upstream
//! fetch, the local file writes, the bundler subprocess, and the task
//! dispatch itself.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for stew tasks
#[derive(Error, Diagnostic, Debug)]
pub enum StewError {
    // Fetch errors
    #[error("Request to '{url}' failed: {reason}")]
    #[diagnostic(
        code(stew::fetch::request_failed),
        help("Check that you are online and the host is reachable")
    )]
    RequestFailed { url: String, reason: String },

    #[error("Failed to fetch '{url}': {status} {reason}")]
    #[diagnostic(
        code(stew::fetch::bad_status),
        help("The upstream file may have moved; check the URL in a browser")
    )]
    FetchFailed {
        url: String,
        status: u16,
        reason: String,
    },

    // File system errors
    #[error("Failed to write file '{path}': {reason}")]
    #[diagnostic(code(stew::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    // Bundler errors
    #[error("esbuild not found on PATH")]
    #[diagnostic(
        code(stew::build::bundler_not_found),
        help("Install esbuild (e.g. `npm install -g esbuild`) and make sure it is on PATH")
    )]
    BundlerNotFound,

    #[error("Build failed: {reason}")]
    #[diagnostic(code(stew::build::failed))]
    BundlerFailed { reason: String },

    // Task dispatch errors
    #[error("Unknown task: {name}. Available tasks are: sync:globalTypes, sync:importMap, build")]
    #[diagnostic(code(stew::task::unknown))]
    UnknownTask { name: String },

    #[error("No task provided. Available tasks are: sync:globalTypes, sync:importMap, build")]
    #[diagnostic(
        code(stew::task::missing),
        help("Run e.g. `stew sync:globalTypes` or `stew build`")
    )]
    MissingTask,
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, StewError>;
