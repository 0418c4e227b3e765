//! # Engine Module
//!
//! The analytical pipeline stages of a structure comparison, each a pure,
//! deterministic computation over immutable inputs:
//!
//! - [`align`] - Needleman-Wunsch global sequence alignment
//! - [`filter`] - Extraction of residue pairs aligned without gaps
//! - [`superpose`] - Kabsch rigid-body superposition
//! - [`contact`] - Pairwise residue distance matrices
//! - [`similarity`] - Per-residue contact-based similarity scores
//!
//! Stage failures are reported through the shared [`error::EngineError`]
//! taxonomy; run parameters live in [`config`].

pub mod align;
pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod similarity;
pub mod superpose;
