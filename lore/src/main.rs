//! Institutional Memory Agent TUI.
//!
//! A vim-style terminal chat interface over a static, exact-match
//! question/answer table about the ML platform.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for scripting
//! and automated testing:
//!
//! ```bash
//! cargo run -p lore -- --headless
//! ```

mod app;
mod events;
mod headless;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lore_core::{ChatSession, SessionConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present. No keys are consumed by the lookup logic;
    // the table is built in and answers locally.
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --headless mode
    if args.iter().any(|a| a == "--headless") {
        return headless::run_headless().map_err(|e| e.into());
    }

    // Check for --help
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the session and run the app
    let session = ChatSession::new(SessionConfig::default());
    let result = run_app(&mut terminal, App::new(session));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|f| render(f, &app))?;

        // Poll for events; lookups are synchronous, so event handling
        // resolves submissions before the next draw
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;

            match handle_event(&mut app, ev) {
                EventResult::Quit => {
                    return Ok(());
                }
                EventResult::NeedsRedraw | EventResult::Continue => {
                    // Just continue the loop
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn print_help() {
    println!("Institutional Memory Agent - exact-match ML platform Q&A");
    println!();
    println!("USAGE:");
    println!("  lore [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!("  --headless       Run in headless mode (line-oriented, no TUI)");
    println!();
    println!("EXAMPLES:");
    println!("  lore                        # Interactive TUI mode");
    println!("  echo 'Do we use a feature store?' | lore --headless");
}
