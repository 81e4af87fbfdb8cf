//! Issue and issue-collection types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single defect or concern found in a header.
///
/// Two issues are equal when their codes are equal; summary and message are
/// free text and may change between releases.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Stable machine-readable identifier (e.g. `header.preloadable.preload.missing`).
    pub code: String,

    /// Short title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Human-readable detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Issue {
    /// Create an issue carrying only a code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            summary: None,
            message: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl PartialEq for Issue {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(summary) = &self.summary {
            write!(f, " ({})", summary)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

/// Errors and warnings produced by one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issues {
    /// Rule violations; any entry means the header fails the rule set.
    pub errors: Vec<Issue>,

    /// Non-blocking concerns.
    pub warnings: Vec<Issue>,
}

impl Issues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues holding a single error.
    pub fn from_error(issue: Issue) -> Self {
        Self {
            errors: vec![issue],
            warnings: Vec::new(),
        }
    }

    /// True when there are neither errors nor warnings.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn add_error(&mut self, issue: Issue) {
        self.errors.push(issue);
    }

    pub fn add_warning(&mut self, issue: Issue) {
        self.warnings.push(issue);
    }

    /// Append `other` after the issues already collected, keeping each list's order.
    pub fn merge(mut self, other: Issues) -> Self {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self
    }

    /// Order-insensitive comparison against an expected set.
    ///
    /// Codes are compared as multisets. An expected issue that carries a
    /// message must also match the actual message exactly.
    pub fn matches_expected(&self, expected: &Issues) -> bool {
        lists_match(&self.errors, &expected.errors)
            && lists_match(&self.warnings, &expected.warnings)
    }
}

fn lists_match(actual: &[Issue], expected: &[Issue]) -> bool {
    if actual.len() != expected.len() {
        return false;
    }

    let mut unmatched: Vec<&Issue> = actual.iter().collect();
    for want in expected {
        let position = unmatched.iter().position(|got| {
            got.code == want.code
                && want
                    .message
                    .as_ref()
                    .map_or(true, |message| got.message.as_ref() == Some(message))
        });
        match position {
            Some(i) => {
                unmatched.swap_remove(i);
            }
            None => return false,
        }
    }
    true
}

impl fmt::Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "no issues");
        }
        for issue in &self.errors {
            writeln!(f, "error: {}", issue)?;
        }
        for issue in &self.warnings {
            writeln!(f, "warning: {}", issue)?;
        }
        Ok(())
    }
}
