//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`; these
//! helpers translate user-supplied paths and locate the plugin's data files.

pub mod paths;

pub use paths::{data_dir, expand_tilde, trace_file};
