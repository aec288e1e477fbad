//! Task implementations for the stew CLI

pub mod build;
pub mod sync_global_types;
pub mod sync_import_map;
