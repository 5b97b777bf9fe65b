//! Headless mode for the chat agent.
//!
//! This module provides a simple text-based interface for running the agent
//! without a TUI. It's designed for scripting and automated testing. All
//! per-line handling goes through [`handle_line`], which writes to any
//! `Write` sink so the protocol is testable without a terminal.

use std::io::{self, BufRead, Write};

use lore_core::{ChatSession, Role, SessionConfig};

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineOutcome {
    Continue,
    Quit,
}

/// Run the agent in headless mode.
///
/// This provides a simple line-oriented protocol:
/// - Plain lines are submitted as questions
/// - Lines starting with `#` are commands (quit, help, history, new)
/// - Answers are printed with `[AGENT]` tags, misses also get `[MISS]`
pub fn run_headless() -> io::Result<()> {
    let mut session = ChatSession::new(SessionConfig::default());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    print_banner(&session, &mut out)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        };

        if handle_line(&mut session, &line, &mut out)? == LineOutcome::Quit {
            break;
        }
        out.flush().ok();
    }

    Ok(())
}

fn print_banner(session: &ChatSession, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Institutional Memory Agent (headless) ===")?;
    writeln!(out, "Knowledge table: {} entries", session.store().len())?;
    writeln!(out)?;
    print_command_help(out)?;
    writeln!(out)?;
    writeln!(out, "[AGENT] {}", session.greeting())?;
    writeln!(out)?;
    writeln!(out, "Enter your questions (one per line):")?;
    writeln!(out)
}

fn print_command_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  #quit     - Exit")?;
    writeln!(out, "  #history  - Print the transcript so far")?;
    writeln!(out, "  #new      - Start a new conversation")?;
    writeln!(out, "  #help     - Show this help")
}

/// Handle one input line: dispatch `#` commands, submit everything else.
fn handle_line(
    session: &mut ChatSession,
    line: &str,
    out: &mut impl Write,
) -> io::Result<LineOutcome> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(LineOutcome::Continue);
    }

    if let Some(command) = line.strip_prefix('#') {
        return handle_command(session, command, out);
    }

    if let Some(response) = session.submit(line) {
        if !response.matched {
            writeln!(out, "[MISS]")?;
        }
        writeln!(out, "[AGENT] {}", response.answer)?;
        writeln!(out)?;
    }
    Ok(LineOutcome::Continue)
}

/// Handle a `#` command (already stripped of its sigil).
fn handle_command(
    session: &mut ChatSession,
    command: &str,
    out: &mut impl Write,
) -> io::Result<LineOutcome> {
    match command.split_whitespace().next() {
        Some("quit") | Some("exit") => {
            writeln!(out, "Goodbye!")?;
            return Ok(LineOutcome::Quit);
        }
        Some("history") => {
            writeln!(out, "[HISTORY] {} turns", session.turn_count())?;
            for turn in session.transcript() {
                let tag = match turn.role {
                    Role::User => "[YOU]",
                    Role::Assistant => "[AGENT]",
                };
                writeln!(out, "  {tag} {}", turn.text)?;
            }
        }
        Some("new") => {
            session.reset();
            writeln!(out, "[NEW] Conversation reset")?;
            writeln!(out, "[AGENT] {}", session.greeting())?;
        }
        Some("help") => {
            writeln!(out, "[HELP]")?;
            print_command_help(out)?;
            writeln!(out, "  (anything else is submitted as a question)")?;
        }
        _ => {
            writeln!(out, "[ERROR] Unknown command. Type #help for help.")?;
        }
    }
    Ok(LineOutcome::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lore_core::FALLBACK_ANSWER;

    fn new_session() -> ChatSession {
        ChatSession::new(SessionConfig::default())
    }

    fn run_line(session: &mut ChatSession, line: &str) -> (String, LineOutcome) {
        let mut out = Vec::new();
        let outcome = handle_line(session, line, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), outcome)
    }

    #[test]
    fn test_hit_prints_agent_tag() {
        let mut session = new_session();
        let (output, outcome) = run_line(&mut session, "Do we use a feature store?");
        assert_eq!(outcome, LineOutcome::Continue);
        assert!(output.starts_with("[AGENT] Yes, we utilize"));
        assert!(!output.contains("[MISS]"));
        assert_eq!(session.turn_count(), 3);
    }

    #[test]
    fn test_miss_is_tagged() {
        let mut session = new_session();
        let (output, _) = run_line(&mut session, "What is the meaning of life?");
        assert!(output.starts_with("[MISS]\n"));
        assert!(output.contains(&format!("[AGENT] {FALLBACK_ANSWER}")));
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut session = new_session();
        let (output, outcome) = run_line(&mut session, "   ");
        assert_eq!(outcome, LineOutcome::Continue);
        assert!(output.is_empty());
        assert_eq!(session.turn_count(), 1);
    }

    #[test]
    fn test_quit_command() {
        let mut session = new_session();
        let (output, outcome) = run_line(&mut session, "#quit");
        assert_eq!(outcome, LineOutcome::Quit);
        assert!(output.contains("Goodbye!"));
        assert_eq!(session.turn_count(), 1);
    }

    #[test]
    fn test_new_command_resets() {
        let mut session = new_session();
        run_line(&mut session, "anything at all");
        assert_eq!(session.turn_count(), 3);

        let (output, outcome) = run_line(&mut session, "#new");
        assert_eq!(outcome, LineOutcome::Continue);
        assert!(output.contains("[NEW] Conversation reset"));
        assert!(output.contains("[AGENT]"));
        assert_eq!(session.turn_count(), 1);
    }

    #[test]
    fn test_history_tags_both_roles() {
        let mut session = new_session();
        run_line(&mut session, "Do we use a feature store?");
        let (output, _) = run_line(&mut session, "#history");
        assert!(output.contains("[HISTORY] 3 turns"));
        assert!(output.contains("[YOU] Do we use a feature store?"));
        assert!(output.contains("[AGENT]"));
        // Reading history must not grow the transcript.
        assert_eq!(session.turn_count(), 3);
    }

    #[test]
    fn test_unknown_command() {
        let mut session = new_session();
        let (output, outcome) = run_line(&mut session, "#bogus");
        assert_eq!(outcome, LineOutcome::Continue);
        assert!(output.contains("[ERROR] Unknown command"));
        assert_eq!(session.turn_count(), 1);
    }

    #[test]
    fn test_help_command_lists_protocol() {
        let mut session = new_session();
        let (output, _) = run_line(&mut session, "#help");
        assert!(output.contains("[HELP]"));
        assert!(output.contains("#history"));
        assert!(output.contains("#new"));
    }
}
