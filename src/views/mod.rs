use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::models::state::{Phase, QuizState};

/// Draws the whole screen from a state snapshot. Holds no state of its
/// own; `selected` is the highlighted option owned by the session loop.
pub fn render(frame: &mut Frame, state: &QuizState, selected: usize) {
    match state.snapshot() {
        Phase::InProgress { index, .. } => render_question(frame, state, index, selected),
        Phase::Completed { score } => render_summary(frame, state, score),
    }
}

fn render_question(frame: &mut Frame, state: &QuizState, index: usize, selected: usize) {
    let question = match state.current_question() {
        Some(question) => question,
        None => return,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title(frame, state, chunks[0]);

    let progress = format!("Question {} of {}", index + 1, state.question_count());
    let card = Paragraph::new(question.prompt.clone())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(progress, Style::default().fg(Color::Gray))),
        );
    frame.render_widget(card, chunks[1]);

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(position, option)| {
            let line = format!("{}. {}", position + 1, option);
            if position == selected {
                ListItem::new(Line::from(Span::styled(
                    line,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )))
            } else {
                ListItem::new(line)
            }
        })
        .collect();

    let options = List::new(items).block(Block::default().borders(Borders::ALL).title("Options"));
    frame.render_widget(options, chunks[2]);

    let hints = Paragraph::new("up/down or 1-4 select, enter answer, r restart, q quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[3]);
}

fn render_summary(frame: &mut Frame, state: &QuizState, score: usize) {
    let total = state.question_count();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(frame.area());

    render_title(frame, state, chunks[0]);

    let score_color = if score * 2 > total {
        Color::Green
    } else {
        Color::Red
    };
    let score_line = Paragraph::new(Line::from(vec![
        Span::raw("Quiz completed! Score: "),
        Span::styled(
            format!("{} / {}", score, total),
            Style::default()
                .fg(score_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(score_line, chunks[1]);

    let flavor = if score == total {
        "Perfect score."
    } else if score * 2 > total {
        "Not bad at all."
    } else {
        "Room for improvement."
    };
    let flavor_line = Paragraph::new(flavor).alignment(Alignment::Center);
    frame.render_widget(flavor_line, chunks[2]);

    let hints = Paragraph::new("r or enter to try again, q to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[3]);
}

fn render_title(frame: &mut Frame, state: &QuizState, area: Rect) {
    let title = Paragraph::new(Span::styled(
        state.pack().name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}
