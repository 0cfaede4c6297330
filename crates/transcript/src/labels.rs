//! Break labels delimiting context windows.
//!
//! Labels follow Table 4 of the Buckeye corpus manual:
//!
//! | Label         | Meaning                                |
//! |---------------|----------------------------------------|
//! | `<SIL>`       | pause                                  |
//! | `<LAUGH>`     | laughter without producing a word      |
//! | `<IVER>`      | interviewer's turn                     |
//! | `<VOCNOISE>`  | non-speech vocalization                |
//! | `<UNKNOWN>`   | audible but unintelligible speech      |
//! | `<NOISE>`     | environmental noise                    |
//! | `{B_TRANS}`   | beginning of transcript                |
//! | `{E_TRANS}`   | end of transcript                      |
//!
//! Entries are prefixes, so `<HES-` ends a window at any hesitantly
//! produced word.

use serde::{Deserialize, Serialize};

/// Default break labels of the Buckeye corpus.
pub const DEFAULT_BREAK_LABELS: &[&str] = &[
    "<SIL>",
    "<LAUGH>",
    "<IVER>",
    "<UNKNOWN>",
    "<VOCNOISE>",
    "<NOISE>",
    "{B_TRANS}",
    "{E_TRANS}",
];

/// Ordered set of case-insensitive label prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct BreakLabels {
    prefixes: Vec<String>,
}

impl BreakLabels {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut labels = Self {
            prefixes: Vec::new(),
        };
        for prefix in prefixes {
            labels.push(prefix.as_ref());
        }
        labels
    }

    /// Append a prefix. Duplicates and empty prefixes are ignored.
    pub fn push(&mut self, prefix: &str) {
        let prefix = prefix.trim().to_uppercase();
        // An empty prefix would match every label.
        if prefix.is_empty() || self.prefixes.contains(&prefix) {
            return;
        }
        self.prefixes.push(prefix);
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.push(prefix);
        self
    }

    /// Returns the first prefix the label starts with, ignoring case.
    pub fn matching(&self, label: &str) -> Option<&str> {
        let label = label.to_uppercase();
        self.prefixes
            .iter()
            .find(|p| label.starts_with(p.as_str()))
            .map(String::as_str)
    }

    pub fn is_break(&self, label: &str) -> bool {
        self.matching(label).is_some()
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl Default for BreakLabels {
    fn default() -> Self {
        Self::new(DEFAULT_BREAK_LABELS)
    }
}

impl From<Vec<String>> for BreakLabels {
    fn from(prefixes: Vec<String>) -> Self {
        Self::new(prefixes)
    }
}

impl From<BreakLabels> for Vec<String> {
    fn from(labels: BreakLabels) -> Self {
        labels.prefixes
    }
}
