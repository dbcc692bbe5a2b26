use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::{
    error::QuizError,
    handlers::input_handler::{handle_key, Flow},
    models::{game::Pack, state::QuizState},
    views,
};

type SessionTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs one quiz session over the whole terminal. The terminal is
/// restored before returning, also when the loop itself fails.
pub fn run_session(pack: Pack) -> Result<(), QuizError> {
    pack.validate()?;

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, pack);
    restore_terminal(&mut terminal)?;
    result
}

fn event_loop(terminal: &mut SessionTerminal, pack: Pack) -> Result<(), QuizError> {
    info!(
        "Session started: pack '{}' with {} questions",
        pack.name,
        pack.questions.len()
    );

    let mut state = QuizState::new(pack);
    let mut selected = 0usize;

    loop {
        terminal.draw(|frame| views::render(frame, &state, selected))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Flow::Quit = handle_key(&mut state, &mut selected, key.code) {
                break;
            }
        }
    }

    info!(
        "Session ended at question {} with score {}",
        state.current_index(),
        state.score()
    );
    Ok(())
}

fn setup_terminal() -> Result<SessionTerminal, QuizError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut SessionTerminal) -> Result<(), QuizError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
