//! # Learning Progress
//!
//! Which lessons a user has finished, per category, and the completion
//! percentage shown on each category tab.
//!
//! The progress map lives on the user's device, not in the backend. This
//! module is only the data and its arithmetic; loading and saving belong to
//! the client's progress store.
//!
//! ```text
//! { "gstBasics": { "What is GST?": true, "Registration": true },
//!   "itc":       { "Claiming ITC": true } }
//!
//! completion(gstBasics, 5 topics) = round(2 / 5 × 100) = 40%
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Category;

/// Completed topics per category, keyed by topic title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LearningProgress {
    categories: BTreeMap<Category, BTreeMap<String, bool>>,
}

impl LearningProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a topic as done. Idempotent.
    pub fn mark_complete(&mut self, category: Category, topic_title: &str) {
        self.categories
            .entry(category)
            .or_default()
            .insert(topic_title.to_string(), true);
    }

    pub fn is_complete(&self, category: Category, topic_title: &str) -> bool {
        self.categories
            .get(&category)
            .and_then(|topics| topics.get(topic_title))
            .copied()
            .unwrap_or(false)
    }

    /// Topics marked done in `category`.
    pub fn completed_count(&self, category: Category) -> usize {
        self.categories
            .get(&category)
            .map(|topics| topics.values().filter(|done| **done).count())
            .unwrap_or(0)
    }

    /// Percentage of `total_topics` completed, rounded to a whole number.
    ///
    /// Returns 0 when the category has no topics. Not clamped: if topics
    /// were removed from the backend after being completed, this can
    /// exceed 100.
    ///
    /// ## Example
    /// ```rust
    /// use smartassist_core::learning::LearningProgress;
    /// use smartassist_core::Category;
    ///
    /// let mut progress = LearningProgress::new();
    /// progress.mark_complete(Category::Itc, "Claiming ITC");
    /// assert_eq!(progress.completion_percentage(Category::Itc, 3), 33);
    /// assert_eq!(progress.completion_percentage(Category::Filing, 0), 0);
    /// ```
    pub fn completion_percentage(&self, category: Category, total_topics: usize) -> u32 {
        if total_topics == 0 {
            return 0;
        }
        let ratio = self.completed_count(category) as f64 / total_topics as f64;
        (ratio * 100.0).round() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(|topics| topics.is_empty())
    }
}

/// Checks a quiz answer: surrounding whitespace and letter case are ignored.
pub fn check_quiz_answer(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.to_lowercase()
}
