//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent the
//! molecular inputs of a comparison run.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom records with element kind, coordinates, and identity fields
//! - [`residue`] - Residue-name mapping to single-letter amino-acid codes
//! - [`sequence`] - Derivation of per-residue views (sequences, representative atoms) from atom lists
//!
//! All values here are immutable once produced by the parsing layer; pipeline
//! stages create new values rather than mutating their inputs.

pub mod atom;
pub mod residue;
pub mod sequence;
