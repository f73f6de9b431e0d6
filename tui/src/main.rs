//! CareFinder — interactive Ratatui TUI
//!
//! Layout:
//!   ┌─ sidebar ──────┬─── page ────────────────────────────────────────────┐
//!   │ [1] Home       │  Home / Guidance / Symptom Questionnaire            │
//!   │ [2] Guidance   │                                                     │
//!   │ [3] Questionn… ├─── result (questionnaire only) ─────────────────────┤
//!   │                │  Recommendation, advice, NHS 111 line               │
//!   ├────────────────┴─────────────────────────────────────────────────────┤
//!   │  disclaimer                                                          │
//!   ├──────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings)                                               │
//!   └──────────────────────────────────────────────────────────────────────┘

mod app;
mod ui;

use std::{io, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use carefinder_core::{Assessor, Page};
use carefinder_rules::RuleEngine;

use app::{Action, App};

// ── Key mapping ───────────────────────────────────────────────────────────────

fn action_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    let action = match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        // Ctrl-C also quits.
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,

        KeyCode::Char('1') => Action::Goto(Page::Home),
        KeyCode::Char('2') => Action::Goto(Page::Guidance),
        KeyCode::Char('3') => Action::Goto(Page::Questionnaire),
        KeyCode::Tab => Action::NextPage,
        KeyCode::BackTab => Action::PreviousPage,

        KeyCode::Up | KeyCode::Char('k') => Action::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => Action::CursorDown,
        KeyCode::Char(' ') | KeyCode::Enter => Action::Activate,
        KeyCode::Char('s') | KeyCode::Char('S') => Action::Submit,
        KeyCode::Char('x') | KeyCode::Char('X') => Action::ClearForm,

        _ => return None,
    };
    Some(action)
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(Assessor::new(Box::new(RuleEngine::standard())));

    while !app.should_quit {
        terminal.draw(|f| ui::ui(f, &app))?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                // Ignore key releases on platforms that report them.
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = action_for(key.code, key.modifiers) {
                    app.apply(action);
                }
            }
        }
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}
