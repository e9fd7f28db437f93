//! Heuristic summarization: segmentation, key-point/follow-up extraction, tagging.

pub mod extract;
pub mod segment;
pub mod tags;

pub use extract::{extract_follow_up, extract_key_points};
pub use segment::segment;
pub use tags::{generate_tags, primary_tag};

use crate::config::SummaryConfig;

/// Fields derived from a question/answer pair at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    pub key_points: Vec<String>,
    pub tags: Vec<String>,
    pub follow_up: Vec<String>,
}

impl Summary {
    /// Run every heuristic over the input using the configured limits.
    pub fn derive(question: &str, answer: &str, limits: &SummaryConfig) -> Self {
        Self {
            key_points: extract::key_points_with_limits(
                answer,
                limits.max_key_points,
                limits.fallback_key_points,
            ),
            tags: generate_tags(question, answer),
            follow_up: extract::follow_up_with_limit(answer, limits.max_follow_up),
        }
    }
}
