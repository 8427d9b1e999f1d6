//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of checking one candidate
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// The candidate that was checked
    pub candidate: String,
    /// Whether the checksum holds
    pub valid: bool,
}

impl CheckReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.valid {
            println!("{} is a {} ISBN-10", self.candidate, "valid".green());
        } else {
            println!(
                "{} is {}: checksum does not hold",
                self.candidate,
                "not valid".red()
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
