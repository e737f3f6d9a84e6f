//! Backends module - Filesystem traversal and the scan pipeline
//!
//! Provides:
//! - walk: Path collection with walkdir / ignore
//! - scan: Feature scanning and output writing

pub mod scan;
pub mod walk;
