//! Core module - Data structures and pure logic behind a scan
//!
//! This module provides:
//! - Feature set, summary and error types
//! - Suffix filtering and path display helpers
//! - Feature reference extraction
//! - File reading under a read policy
//! - Rendering and writing the feature list

pub mod extract;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
