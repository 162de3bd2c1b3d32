//! Advisory reviews. None of them mutate a look; each one returns feedback
//! lines and, for every warning, an improvement suggestion.
//!
//! Looks are numbered from 1 in feedback, in their post-dedup order.

pub mod body_shape;
pub mod color;
pub mod occasion;
pub mod shoes;

pub const PASS_PREFIX: &str = "[pass]";
pub const WARN_PREFIX: &str = "[warn]";

/// Feedback and improvement lines collected by one or more reviews.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewNotes {
    pub feedback: Vec<String>,
    pub improvements: Vec<String>,
}

impl ReviewNotes {
    pub fn pass(&mut self, line: impl AsRef<str>) {
        self.feedback.push(format!("{PASS_PREFIX} {}", line.as_ref()));
    }

    pub fn warn(&mut self, line: impl AsRef<str>, improvement: impl Into<String>) {
        self.feedback.push(format!("{WARN_PREFIX} {}", line.as_ref()));
        self.improvements.push(improvement.into());
    }

    pub fn append(&mut self, other: ReviewNotes) {
        self.feedback.extend(other.feedback);
        self.improvements.extend(other.improvements);
    }

    pub fn warnings(&self) -> usize {
        self.feedback
            .iter()
            .filter(|line| line.starts_with(WARN_PREFIX))
            .count()
    }
}
