//! Task labels.

use serde::{Deserialize, Serialize};

/// Colour used for labels without a palette entry.
pub const DEFAULT_LABEL_COLOR: &str = "#8B5CF6";

/// Ordered set of task labels.
///
/// Labels are trimmed; blank labels are dropped and repeats keep only their
/// first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Labels(Vec<String>);

impl Labels {
    /// Creates an empty label set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a label, returning `false` when it was blank or already present.
    pub fn insert(&mut self, label: &str) -> bool {
        let trimmed = label.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.0.push(trimmed.to_owned());
        true
    }

    /// Removes a label, returning `true` when it was present.
    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != label.trim());
        self.0.len() != before
    }

    /// Returns `true` when the label is present.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|existing| existing == label)
    }

    /// Returns the first label, which determines a task's accent colour.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Iterates over the labels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the accent colour of the first label.
    #[must_use]
    pub fn accent_color(&self) -> &'static str {
        self.first().map_or(DEFAULT_LABEL_COLOR, label_color)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Labels {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut labels = Self::new();
        for label in iter {
            labels.insert(label.as_ref());
        }
        labels
    }
}

impl From<Vec<String>> for Labels {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<Labels> for Vec<String> {
    fn from(value: Labels) -> Self {
        value.0
    }
}

/// Returns the palette colour of a well-known label.
#[must_use]
pub fn label_color(label: &str) -> &'static str {
    match label {
        "design" => "#8B5CF6",
        "frontend" => "#0EA5E9",
        "backend" | "improvement" => "#10B981",
        "documentation" => "#F59E0B",
        "high-priority" => "#EF4444",
        "security" => "#EC4899",
        "devops" => "#6366F1",
        "marketing" => "#F97316",
        "content" => "#A855F7",
        "bug" => "#DC2626",
        "feature" => "#2563EB",
        _ => DEFAULT_LABEL_COLOR,
    }
}
