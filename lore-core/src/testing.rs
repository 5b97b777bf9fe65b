//! Testing utilities.
//!
//! This module provides tools for integration testing:
//! - `sample_store` for a tiny deterministic knowledge table
//! - `TestHarness` for scripted conversations
//! - Assertion helpers for verifying transcript state

use crate::knowledge::{KnowledgeEntry, KnowledgeStore};
use crate::session::{ChatSession, Response, Role, SessionConfig};

/// A small fixed table for tests that don't care about the built-in data.
pub fn sample_store() -> KnowledgeStore {
    KnowledgeStore::from_entries([
        KnowledgeEntry::new("ping", "pong"),
        KnowledgeEntry::new("Who is on call?", "Check the PagerDuty rotation."),
    ])
    .expect("sample table is valid")
}

/// Test harness for running conversation scenarios.
pub struct TestHarness {
    /// The session under test.
    pub session: ChatSession,
}

impl TestHarness {
    /// Create a harness over the sample table.
    pub fn new() -> Self {
        Self {
            session: ChatSession::new(SessionConfig::new().with_store(sample_store())),
        }
    }

    /// Create a harness over a custom table.
    pub fn with_store(store: KnowledgeStore) -> Self {
        Self {
            session: ChatSession::new(SessionConfig::new().with_store(store)),
        }
    }

    /// Submit a question and get the response (None for rejected input).
    pub fn ask(&mut self, text: &str) -> Option<Response> {
        self.session.submit(text)
    }

    /// The text of the last turn in the transcript.
    pub fn last_text(&self) -> &str {
        self.session
            .last_turn()
            .map(|t| t.text.as_str())
            .unwrap_or_default()
    }

    /// Number of turns in the transcript.
    pub fn turn_count(&self) -> usize {
        self.session.turn_count()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that the last turn is an assistant turn with the given text.
#[track_caller]
pub fn assert_last_answer(harness: &TestHarness, expected: &str) {
    let last = harness
        .session
        .last_turn()
        .expect("transcript is never empty");
    assert_eq!(
        last.role,
        Role::Assistant,
        "Expected last turn to be an assistant turn"
    );
    assert_eq!(
        last.text, expected,
        "Expected last answer {expected:?}, got {:?}",
        last.text
    );
}

/// Assert the transcript alternates correctly: one seed assistant turn,
/// then (user, assistant) pairs.
#[track_caller]
pub fn assert_well_formed(harness: &TestHarness) {
    let transcript = harness.session.transcript();
    assert!(!transcript.is_empty(), "transcript is never empty");
    assert_eq!(
        transcript[0].role,
        Role::Assistant,
        "Expected the transcript to start with the greeting"
    );
    assert_eq!(
        transcript.len() % 2,
        1,
        "Expected seed turn plus whole (user, assistant) pairs"
    );
    for pair in transcript[1..].chunks(2) {
        assert_eq!(pair[0].role, Role::User, "Expected a user turn");
        assert_eq!(pair[1].role, Role::Assistant, "Expected an assistant turn");
    }
}
