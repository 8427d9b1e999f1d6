//! Check a single ISBN-10 candidate

use isbncheck::isbn::check_isbn;
use isbncheck::output::{CheckReport, OutputMode};

/// Check one candidate and render the outcome
///
/// A malformed candidate propagates as an error (reported on stderr by
/// the entry point). A well-formed candidate whose checksum fails is
/// rendered as a normal result, then the process exits with code 1 so
/// scripts can tell the two outcomes apart.
pub fn check(candidate: &str, mode: OutputMode) -> anyhow::Result<()> {
    let valid = check_isbn(candidate)?;

    log::debug!("candidate {candidate:?} checksum valid: {valid}");

    let report = CheckReport {
        candidate: candidate.to_string(),
        valid,
    };
    report.render(mode);

    if !valid {
        std::process::exit(1);
    }

    Ok(())
}
