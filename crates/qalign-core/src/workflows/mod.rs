//! # Workflows Module
//!
//! The highest-level, user-facing layer. A workflow ties the `core` and
//! `engine` layers together to run a complete scientific procedure end to end
//! and hand back one result value.
//!
//! - [`compare`] - Full comparison of two structures: sequence alignment,
//!   gap filtering, rigid-body superposition, and per-residue similarity
//!   scoring.

pub mod compare;
