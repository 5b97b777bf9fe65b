//! Institutional memory chat engine.
//!
//! This crate provides:
//! - A static, exact-match question/answer table ([`KnowledgeStore`])
//! - An append-only conversation transcript ([`ChatSession`])
//! - Testing helpers for scripted conversations
//!
//! # Quick Start
//!
//! ```
//! use lore_core::{ChatSession, SessionConfig};
//!
//! let mut session = ChatSession::new(SessionConfig::default());
//!
//! let response = session.submit("Do we use a feature store?").unwrap();
//! println!("{}", response.answer);
//!
//! // The transcript holds the greeting plus one (user, assistant) pair.
//! assert_eq!(session.transcript().len(), 3);
//! ```

pub mod knowledge;
pub mod session;
pub mod testing;

// Primary public API
pub use knowledge::{KnowledgeEntry, KnowledgeError, KnowledgeStore, FALLBACK_ANSWER};
pub use session::{ChatSession, Response, Role, SessionConfig, Turn, DEFAULT_GREETING};
