//! # Learning Service
//!
//! Lessons come from the backend; which ones the user has finished lives
//! on the device, in a [`ProgressStore`].

use std::sync::Arc;

use serde::Serialize;
use smartassist_core::learning::{check_quiz_answer, LearningProgress};
use smartassist_core::{Category, LearningTopic};
use tracing::debug;

use crate::backend::Backend;
use crate::error::{ClientError, ClientResult};
use crate::progress_store::ProgressStore;

/// One category tab: its lessons in display order and how far along the
/// user is.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub category: Category,
    pub topics: Vec<LearningTopic>,
    pub completion_percentage: u32,
}

/// Result of answering a topic's quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOutcome {
    pub correct: bool,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

pub struct LearningService {
    backend: Arc<dyn Backend>,
    store: Arc<dyn ProgressStore>,
}

impl LearningService {
    pub fn new(backend: Arc<dyn Backend>, store: Arc<dyn ProgressStore>) -> Self {
        LearningService { backend, store }
    }

    pub async fn category(&self, category: Category) -> ClientResult<CategoryView> {
        let mut topics = self
            .backend
            .get_learning_content_by_category(category)
            .await?;
        topics.sort_by_key(|t| t.display_order);

        let completion_percentage = self
            .store
            .load()
            .completion_percentage(category, topics.len());

        Ok(CategoryView {
            category,
            topics,
            completion_percentage,
        })
    }

    pub fn progress(&self) -> LearningProgress {
        self.store.load()
    }

    /// Marks a lesson as finished and persists the progress.
    pub fn complete_topic(&self, category: Category, topic_title: &str) -> ClientResult<()> {
        let mut progress = self.store.load();
        progress.mark_complete(category, topic_title);
        self.store.save(&progress)?;
        debug!(category = category.label(), topic = topic_title, "Topic completed");
        Ok(())
    }

    /// Checks an answer against the topic's quiz.
    ///
    /// A correct answer also completes the topic.
    pub async fn check_quiz(
        &self,
        category: Category,
        topic_title: &str,
        answer: &str,
    ) -> ClientResult<QuizOutcome> {
        let topics = self
            .backend
            .get_learning_content_by_category(category)
            .await?;
        let topic = topics
            .into_iter()
            .find(|t| t.topic_title == topic_title)
            .ok_or_else(|| ClientError::not_found("Topic", topic_title))?;

        let expected = topic
            .correct_answer
            .ok_or_else(|| ClientError::not_found("Quiz", topic_title))?;

        let correct = check_quiz_answer(answer, &expected);
        if correct {
            self.complete_topic(category, topic_title)?;
        }

        Ok(QuizOutcome {
            correct,
            correct_answer: expected,
            explanation: topic.explanation,
        })
    }
}
