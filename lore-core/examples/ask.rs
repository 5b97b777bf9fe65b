//! Quick smoke test for the conversation core

use lore_core::{ChatSession, SessionConfig};

fn main() {
    println!("=== Testing lore-core ===\n");

    // Test 1: Create a session
    println!("1. Creating chat session...");
    let mut session = ChatSession::new(SessionConfig::default());
    println!("   Greeting: {}", session.greeting());
    println!("   Table size: {} entries", session.store().len());

    // Test 2: Ask a known question
    println!("\n2. Asking a known question...");
    let response = session
        .submit("Do we use a feature store?")
        .expect("non-empty input");
    println!("   Matched: {}", response.matched);
    println!("   Answer: {}", response.answer);

    // Test 3: Ask an unknown question
    println!("\n3. Asking an unknown question...");
    let response = session
        .submit("What is the meaning of life?")
        .expect("non-empty input");
    println!("   Matched: {}", response.matched);
    println!("   Answer: {}", response.answer);

    // Test 4: Transcript shape
    println!("\n4. Transcript:");
    for turn in session.transcript() {
        println!("   [{:?}] {}", turn.role, turn.text);
    }
    println!(
        "\n   {} turns, {} exchanges",
        session.turn_count(),
        session.exchange_count()
    );

    println!("\n=== Done ===");
}
