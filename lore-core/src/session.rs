//! ChatSession - the primary public API for conversations.
//!
//! A session owns the transcript and the knowledge table it answers from.
//! There is exactly one mutating operation, [`ChatSession::submit`], which
//! appends a (user, assistant) pair of turns. The transcript is append-only
//! and lives only as long as the session.

use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeStore;

/// Default greeting seeded as the first assistant turn.
pub const DEFAULT_GREETING: &str = "Hello! I'm your Institutional Memory Agent. \
     How can I help you today regarding our ML platform and processes?";

/// Who spoke a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the transcript. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Configuration for creating a new chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Greeting text for the seed assistant turn.
    pub greeting: String,

    /// The knowledge table to answer from.
    pub store: KnowledgeStore,
}

impl SessionConfig {
    /// Create a config with the built-in table and default greeting.
    pub fn new() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            store: KnowledgeStore::default(),
        }
    }

    /// Set the greeting text.
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    /// Set the knowledge table.
    pub fn with_store(mut self, store: KnowledgeStore) -> Self {
        self.store = store;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Response from a submitted question.
#[derive(Debug, Clone)]
pub struct Response {
    /// The answer text, already appended to the transcript.
    pub answer: String,

    /// Whether the question matched a stored entry (false = fallback).
    pub matched: bool,
}

/// A chat session.
///
/// This is the main entry point for conversations. It manages:
/// - The knowledge table (immutable after construction)
/// - The transcript (append-only, seeded with one greeting turn)
pub struct ChatSession {
    config: SessionConfig,
    transcript: Vec<Turn>,
}

impl ChatSession {
    /// Create a new session with the given configuration.
    ///
    /// The transcript starts with one assistant turn holding the greeting.
    pub fn new(config: SessionConfig) -> Self {
        let transcript = vec![Turn::new(Role::Assistant, config.greeting.clone())];
        Self { config, transcript }
    }

    /// Submit a question and record both sides of the exchange.
    ///
    /// The input is trimmed once; the trimmed text is what gets echoed into
    /// the transcript and looked up. Empty or whitespace-only input is
    /// ignored: the transcript is left unchanged and `None` is returned.
    pub fn submit(&mut self, input: &str) -> Option<Response> {
        let question = input.trim();
        if question.is_empty() {
            return None;
        }

        let matched = self.config.store.contains(question);
        let answer = self.config.store.lookup(question).to_string();

        self.transcript.push(Turn::new(Role::User, question));
        self.transcript.push(Turn::new(Role::Assistant, answer.clone()));

        Some(Response { answer, matched })
    }

    /// Discard the transcript and start over with a fresh greeting.
    ///
    /// The in-process equivalent of reloading the page: the knowledge table
    /// and greeting are kept, the history is not.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.transcript
            .push(Turn::new(Role::Assistant, self.config.greeting.clone()));
    }

    /// The full transcript, oldest turn first.
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Number of turns in the transcript (including the greeting).
    pub fn turn_count(&self) -> usize {
        self.transcript.len()
    }

    /// The most recent turn.
    pub fn last_turn(&self) -> Option<&Turn> {
        self.transcript.last()
    }

    /// Number of (user, assistant) exchanges so far.
    pub fn exchange_count(&self) -> usize {
        (self.transcript.len() - 1) / 2
    }

    /// The knowledge table this session answers from.
    pub fn store(&self) -> &KnowledgeStore {
        &self.config.store
    }

    /// The greeting text used for the seed turn.
    pub fn greeting(&self) -> &str {
        &self.config.greeting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::FALLBACK_ANSWER;

    #[test]
    fn test_session_config() {
        let config = SessionConfig::new().with_greeting("Hi there!");
        assert_eq!(config.greeting, "Hi there!");
        assert_eq!(config.store.len(), 8);
    }

    #[test]
    fn test_seed_turn() {
        let session = ChatSession::new(SessionConfig::default());
        assert_eq!(session.turn_count(), 1);
        let seed = session.last_turn().unwrap();
        assert_eq!(seed.role, Role::Assistant);
        assert_eq!(seed.text, DEFAULT_GREETING);
    }

    #[test]
    fn test_submit_known_question() {
        let mut session = ChatSession::new(SessionConfig::default());
        let response = session
            .submit("How do we handle model versioning?")
            .unwrap();

        assert!(response.matched);
        assert_eq!(
            response.answer,
            "We use MLflow with Git SHAs and dataset hashes to track model versions."
        );
        assert_eq!(session.turn_count(), 3);
        assert_eq!(session.last_turn().unwrap().text, response.answer);
    }

    #[test]
    fn test_submit_unknown_question() {
        let mut session = ChatSession::new(SessionConfig::default());
        let response = session.submit("What is the meaning of life?").unwrap();

        assert!(!response.matched);
        assert_eq!(response.answer, FALLBACK_ANSWER);
    }

    #[test]
    fn test_submit_empty_is_noop() {
        let mut session = ChatSession::new(SessionConfig::default());
        assert!(session.submit("").is_none());
        assert!(session.submit("   \t\n").is_none());
        assert_eq!(session.turn_count(), 1);
    }

    #[test]
    fn test_submit_trims_before_lookup() {
        let mut session = ChatSession::new(SessionConfig::default());
        let response = session.submit("  Do we use a feature store?  ").unwrap();

        assert!(response.matched);
        // The echoed user turn holds the trimmed text.
        assert_eq!(
            session.transcript()[1].text,
            "Do we use a feature store?"
        );
    }

    #[test]
    fn test_reset() {
        let mut session = ChatSession::new(SessionConfig::default());
        session.submit("Do we use a feature store?");
        assert_eq!(session.turn_count(), 3);

        session.reset();
        assert_eq!(session.turn_count(), 1);
        assert_eq!(session.last_turn().unwrap().text, DEFAULT_GREETING);
    }

    #[test]
    fn test_exchange_count() {
        let mut session = ChatSession::new(SessionConfig::default());
        assert_eq!(session.exchange_count(), 0);
        session.submit("a");
        session.submit("b");
        assert_eq!(session.exchange_count(), 2);
    }
}
