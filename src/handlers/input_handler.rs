use crossterm::event::KeyCode;
use log::info;

use crate::models::state::{Phase, QuizState};

/// Verdict of a single key dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs one key event against the state machine. `selected` is the
/// highlighted option of the active question; it is owned by the session
/// loop, not by the renderer.
pub fn handle_key(state: &mut QuizState, selected: &mut usize, key: KeyCode) -> Flow {
    match state.snapshot() {
        Phase::InProgress { .. } => handle_question_key(state, selected, key),
        Phase::Completed { .. } => handle_summary_key(state, selected, key),
    }
}

fn handle_question_key(state: &mut QuizState, selected: &mut usize, key: KeyCode) -> Flow {
    let option_count = match state.current_question() {
        Some(question) => question.options.len(),
        None => return Flow::Continue,
    };

    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            *selected = (*selected + option_count - 1) % option_count;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            *selected = (*selected + 1) % option_count;
        }
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit as usize - '1' as usize;
            if index < option_count {
                *selected = index;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let option = match state.current_question() {
                Some(question) => question.options[*selected].clone(),
                None => return Flow::Continue,
            };
            state.answer(&option);
            *selected = 0;
        }
        KeyCode::Char('r') => {
            info!("Restart requested mid-run");
            state.restart();
            *selected = 0;
        }
        KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
        _ => (),
    }

    Flow::Continue
}

fn handle_summary_key(state: &mut QuizState, selected: &mut usize, key: KeyCode) -> Flow {
    match key {
        KeyCode::Char('r') | KeyCode::Enter => {
            info!("Restart requested from summary, score was {}", state.score());
            state.restart();
            *selected = 0;
            Flow::Continue
        }
        KeyCode::Char('q') | KeyCode::Esc => Flow::Quit,
        _ => Flow::Continue,
    }
}
