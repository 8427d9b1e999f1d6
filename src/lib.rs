//! isbncheck - ISBN-10 validation
//!
//! This library provides the core validation routine for ISBN-10
//! identifiers plus the output types used by the CLI. Validation is a
//! pure function of the input string: a malformed candidate is reported
//! as a typed error, while a well-formed candidate whose checksum fails
//! is a normal `Ok(false)` result.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod isbn;
pub mod output;
