// src/loader/mod.rs
// =============================================================================
// This module finds and reads the markdown file we are going to scan.
//
// Submodules:
// - file: path resolution, existence/size check, and the actual read
// =============================================================================

mod file;

pub use file::{read_content, resolve_input};
