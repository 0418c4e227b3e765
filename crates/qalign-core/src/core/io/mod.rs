//! # File I/O Module
//!
//! Reading structure files into atom records and writing the persisted
//! comparison artifact.
//!
//! - [`pdb`] - Whitespace-tokenized parsing of `ATOM` records with a
//!   configurable residue filtering policy
//! - [`report`] - The four-line result artifact consumed by reporting tools

pub mod pdb;
pub mod report;
