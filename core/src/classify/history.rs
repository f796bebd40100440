//! Recently validated inputs, newest first.

use std::collections::VecDeque;

use serde::Serialize;

use super::{ValidationResult, classify, get_format, Format};

/// Number of entries kept before the oldest is dropped.
pub const HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// The trimmed input as it was validated.
    pub input: String,
    pub format: Format,
    /// Message of the first result.
    pub summary: String,
    /// Every result message, comma separated.
    pub details: String,
}

#[derive(Debug, Default)]
pub struct ValidationHistory {
    entries: VecDeque<HistoryEntry>,
}

impl ValidationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `input` and records it when at least one rule matched.
    pub fn validate(&mut self, input: &str) -> Vec<ValidationResult> {
        let results = classify(input);
        self.record(input, &results);
        results
    }

    /// Pushes an entry for `input` unless every result is a failure.
    ///
    /// Returns whether an entry was added.
    pub fn record(&mut self, input: &str, results: &[ValidationResult]) -> bool {
        if !results.iter().any(|r| r.is_valid) {
            return false;
        }

        let input = input.trim();
        let summary = results.first().map(|r| r.message.clone()).unwrap_or_default();
        let details = results
            .iter()
            .map(|r| r.message.as_str())
            .collect::<Vec<&str>>()
            .join(", ");

        self.entries.push_front(HistoryEntry {
            input: input.to_string(),
            format: get_format(input),
            summary,
            details,
        });
        self.entries.truncate(HISTORY_LIMIT);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
