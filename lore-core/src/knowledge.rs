//! The static question/answer table.
//!
//! A [`KnowledgeStore`] maps canonical question text to answer text. It is
//! built once and never mutated afterwards; lookups are exact, case- and
//! whitespace-sensitive string equality. A miss is not an error: it resolves
//! to the constant [`FALLBACK_ANSWER`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Answer returned for any question with no entry in the table.
pub const FALLBACK_ANSWER: &str =
    "Sorry, I couldn't find that. Try asking #ml-platform or check Confluence.";

/// Errors from building a knowledge table.
///
/// These surface at construction time only; `lookup` itself cannot fail.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("invalid knowledge JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate question: {0:?}")]
    DuplicateQuestion(String),

    #[error("entry has an empty question")]
    EmptyQuestion,
}

/// One question/answer pair in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Canonical question text, the exact-match key.
    pub question: String,
    /// Answer text returned on a hit.
    pub answer: String,
}

impl KnowledgeEntry {
    /// Create an entry from question and answer text.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// An immutable question→answer table with a fixed fallback.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    entries: HashMap<String, String>,
    fallback: String,
}

impl KnowledgeStore {
    /// Build a store from entries.
    ///
    /// Duplicate or empty questions are rejected rather than silently
    /// overwriting each other.
    pub fn from_entries(
        entries: impl IntoIterator<Item = KnowledgeEntry>,
    ) -> Result<Self, KnowledgeError> {
        let mut map = HashMap::new();
        for entry in entries {
            if entry.question.is_empty() {
                return Err(KnowledgeError::EmptyQuestion);
            }
            if map.contains_key(&entry.question) {
                return Err(KnowledgeError::DuplicateQuestion(entry.question));
            }
            map.insert(entry.question, entry.answer);
        }
        Ok(Self {
            entries: map,
            fallback: FALLBACK_ANSWER.to_string(),
        })
    }

    /// Build a store from a JSON array of `{question, answer}` objects.
    pub fn from_json(json: &str) -> Result<Self, KnowledgeError> {
        let entries: Vec<KnowledgeEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Replace the fallback answer.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Resolve a question to its answer.
    ///
    /// Exact match only: no trimming, no case folding. Unknown questions
    /// resolve to the fallback answer; this never fails.
    pub fn lookup(&self, question: &str) -> &str {
        self.entries
            .get(question)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// Whether the table has an entry for this exact question.
    pub fn contains(&self, question: &str) -> bool {
        self.entries.contains_key(question)
    }

    /// The fallback answer returned on a miss.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the stored questions.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for KnowledgeStore {
    /// The built-in ML platform table.
    fn default() -> Self {
        BUILTIN.clone()
    }
}

lazy_static::lazy_static! {
    /// The built-in ML platform knowledge table.
    pub static ref BUILTIN: KnowledgeStore = KnowledgeStore::from_entries([
        KnowledgeEntry::new(
            "How do we handle model versioning?",
            "We use MLflow with Git SHAs and dataset hashes to track model versions.",
        ),
        KnowledgeEntry::new(
            "Where is the customer churn model deployed?",
            "It's deployed on Vertex AI in the us-east1 region, managed via CI/CD (Cloud Build + Terraform).",
        ),
        KnowledgeEntry::new(
            "Why did we move away from LangChain?",
            "LangChain was too opaque for debugging agent chains. We migrated to LlamaIndex + tools.",
        ),
        KnowledgeEntry::new(
            "What is our MLOps strategy?",
            "Our MLOps strategy focuses on automation of CI/CD, robust model monitoring, and scalable infrastructure using Google Cloud Platform services.",
        ),
        KnowledgeEntry::new(
            "How do we ensure data quality?",
            "We implement automated data validation checks at ingestion and before model training, using tools like Great Expectations to define data contracts.",
        ),
        KnowledgeEntry::new(
            "Tell me about our CI/CD for ML models.",
            "Our CI/CD pipeline for ML models uses Cloud Build for continuous integration, automating testing and packaging, and Terraform for continuous deployment to target environments like Vertex AI.",
        ),
        KnowledgeEntry::new(
            "What is the process for model retraining?",
            "Model retraining is triggered automatically based on data drift detection or a scheduled cron job. The new model undergoes a validation phase before being promoted to production.",
        ),
        KnowledgeEntry::new(
            "Do we use a feature store?",
            "Yes, we utilize a managed feature store solution to centralize feature creation, storage, and serving, ensuring consistency between training and inference.",
        ),
    ])
    .expect("built-in knowledge table is valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup_hit() {
        let store = KnowledgeStore::default();
        assert_eq!(
            store.lookup("Do we use a feature store?"),
            "Yes, we utilize a managed feature store solution to centralize feature creation, storage, and serving, ensuring consistency between training and inference.",
        );
    }

    #[test]
    fn test_builtin_lookup_miss() {
        let store = KnowledgeStore::default();
        assert_eq!(
            store.lookup("What is the meaning of life?"),
            FALLBACK_ANSWER
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        let store = KnowledgeStore::default();
        // Trailing whitespace and case differences are misses.
        assert_eq!(store.lookup("Do we use a feature store? "), FALLBACK_ANSWER);
        assert_eq!(store.lookup("do we use a feature store?"), FALLBACK_ANSWER);
    }

    #[test]
    fn test_builtin_size() {
        assert_eq!(KnowledgeStore::default().len(), 8);
    }

    #[test]
    fn test_from_json() {
        let store = KnowledgeStore::from_json(
            r#"[{"question": "Who owns the airflow DAGs?", "answer": "The data-eng team."}]"#,
        )
        .unwrap();
        assert_eq!(store.lookup("Who owns the airflow DAGs?"), "The data-eng team.");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            KnowledgeStore::from_json("not json"),
            Err(KnowledgeError::Json(_))
        ));
    }

    #[test]
    fn test_duplicate_question_rejected() {
        let result = KnowledgeStore::from_entries([
            KnowledgeEntry::new("Q?", "A1"),
            KnowledgeEntry::new("Q?", "A2"),
        ]);
        assert!(matches!(
            result,
            Err(KnowledgeError::DuplicateQuestion(q)) if q == "Q?"
        ));
    }

    #[test]
    fn test_empty_question_rejected() {
        let result = KnowledgeStore::from_entries([KnowledgeEntry::new("", "A")]);
        assert!(matches!(result, Err(KnowledgeError::EmptyQuestion)));
    }

    #[test]
    fn test_custom_fallback() {
        let store = KnowledgeStore::from_entries([])
            .unwrap()
            .with_fallback("Ask in #help.");
        assert_eq!(store.lookup("anything"), "Ask in #help.");
    }
}
