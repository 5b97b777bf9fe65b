//! QA tests for the conversation flow.
//!
//! These tests verify the transcript contract:
//! - Known questions resolve to their stored answers
//! - Unknown questions resolve to the fallback
//! - Empty input is a no-op
//! - Turn order and pairing are preserved
//!
//! Run with: `cargo test -p lore-core qa_conversation`

use lore_core::testing::{assert_last_answer, assert_well_formed, TestHarness};
use lore_core::{
    ChatSession, KnowledgeStore, Role, SessionConfig, DEFAULT_GREETING, FALLBACK_ANSWER,
};

// =============================================================================
// LOOKUP TESTS
// =============================================================================

#[test]
fn test_every_builtin_question_answers_exactly() {
    let store = KnowledgeStore::default();
    let questions: Vec<String> = store.questions().map(str::to_string).collect();
    assert_eq!(questions.len(), 8);

    let mut session = ChatSession::new(SessionConfig::default());
    for question in &questions {
        let response = session.submit(question).expect("non-empty input");
        assert!(response.matched, "expected {question:?} to match");
        assert_eq!(response.answer, store.lookup(question));
        assert_eq!(session.last_turn().unwrap().text, response.answer);
    }
}

#[test]
fn test_unknown_question_gets_fallback() {
    let mut harness = TestHarness::with_store(KnowledgeStore::default());
    let response = harness.ask("What is the meaning of life?").unwrap();

    assert!(!response.matched);
    assert_last_answer(
        &harness,
        "Sorry, I couldn't find that. Try asking #ml-platform or check Confluence.",
    );
}

#[test]
fn test_near_miss_is_still_a_miss() {
    // Matching is exact: case and punctuation differences fall back.
    let mut session = ChatSession::new(SessionConfig::default());
    for near_miss in [
        "do we use a feature store?",
        "Do we use a feature store",
        "Do we use a Feature Store?",
    ] {
        let response = session.submit(near_miss).unwrap();
        assert!(!response.matched, "expected {near_miss:?} to miss");
        assert_eq!(response.answer, FALLBACK_ANSWER);
    }
}

// =============================================================================
// TRANSCRIPT SHAPE TESTS
// =============================================================================

#[test]
fn test_feature_store_example() {
    // The worked example: seed greeting, then one exchange.
    let mut session = ChatSession::new(SessionConfig::default());
    session.submit("Do we use a feature store?");

    let transcript = session.transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[0].role, Role::Assistant);
    assert_eq!(transcript[0].text, DEFAULT_GREETING);
    assert_eq!(transcript[1].role, Role::User);
    assert_eq!(transcript[1].text, "Do we use a feature store?");
    assert_eq!(transcript[2].role, Role::Assistant);
    assert_eq!(
        transcript[2].text,
        "Yes, we utilize a managed feature store solution to centralize feature creation, storage, and serving, ensuring consistency between training and inference.",
    );
}

#[test]
fn test_transcript_grows_by_two_per_submit() {
    let mut harness = TestHarness::new();
    assert_eq!(harness.turn_count(), 1);

    harness.ask("ping");
    assert_eq!(harness.turn_count(), 3);

    harness.ask("not a known question");
    assert_eq!(harness.turn_count(), 5);

    // Rejected input grows by zero.
    harness.ask("");
    harness.ask("   ");
    assert_eq!(harness.turn_count(), 5);

    assert_well_formed(&harness);
}

#[test]
fn test_turn_order_preserved() {
    let questions = ["first", "second", "third", "fourth"];
    let mut session = ChatSession::new(SessionConfig::default());
    for q in questions {
        session.submit(q);
    }

    let transcript = session.transcript();
    assert_eq!(transcript.len(), 1 + 2 * questions.len());
    for (i, q) in questions.iter().enumerate() {
        let user_turn = &transcript[1 + 2 * i];
        assert_eq!(user_turn.role, Role::User);
        assert_eq!(user_turn.text, *q);
        assert_eq!(transcript[2 + 2 * i].role, Role::Assistant);
    }
}

#[test]
fn test_repeated_question_appends_fresh_turns() {
    // No dedup: asking twice records two full exchanges.
    let mut harness = TestHarness::new();
    harness.ask("ping");
    harness.ask("ping");
    assert_eq!(harness.turn_count(), 5);
    assert_last_answer(&harness, "pong");
}

// =============================================================================
// SESSION LIFECYCLE TESTS
// =============================================================================

#[test]
fn test_reset_restores_seed_state() {
    let mut session = ChatSession::new(SessionConfig::default());
    session.submit("Do we use a feature store?");
    session.submit("something else");
    session.reset();

    assert_eq!(session.turn_count(), 1);
    assert_eq!(session.exchange_count(), 0);
    assert_eq!(session.last_turn().unwrap().text, DEFAULT_GREETING);

    // The table survives a reset.
    let response = session.submit("Do we use a feature store?").unwrap();
    assert!(response.matched);
}

#[test]
fn test_custom_greeting_and_store() {
    let store = KnowledgeStore::from_json(
        r#"[{"question": "Where are the runbooks?", "answer": "In the wiki, under /ops."}]"#,
    )
    .unwrap();
    let config = SessionConfig::new()
        .with_greeting("Ops bot ready.")
        .with_store(store);

    let mut session = ChatSession::new(config);
    assert_eq!(session.transcript()[0].text, "Ops bot ready.");

    let response = session.submit("Where are the runbooks?").unwrap();
    assert!(response.matched);
    assert_eq!(response.answer, "In the wiki, under /ops.");
}
