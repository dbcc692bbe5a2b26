use log::warn;

use crate::models::game::{Pack, Question};

/// Immutable view of the state machine handed to the rendering layer
/// after each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress { index: usize, score: usize },
    Completed { score: usize },
}

/// The quiz session state machine. The question index is the single
/// source of truth; completion is derived from it and can never
/// disagree with it.
pub struct QuizState {
    pack: Pack,
    current_index: usize,
    score: usize,
}

impl QuizState {
    pub fn new(pack: Pack) -> Self {
        Self {
            pack,
            current_index: 0,
            score: 0,
        }
    }

    pub fn pack(&self) -> &Pack {
        &self.pack
    }

    pub fn question_count(&self) -> usize {
        self.pack.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_complete(&self) -> bool {
        self.current_index == self.pack.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.pack.questions.get(self.current_index)
    }

    pub fn snapshot(&self) -> Phase {
        if self.is_complete() {
            Phase::Completed { score: self.score }
        } else {
            Phase::InProgress {
                index: self.current_index,
                score: self.score,
            }
        }
    }

    /// Scores `selected` against the active question and advances. A
    /// string that matches no option simply counts as incorrect. Calling
    /// this after completion is a contract violation and is ignored.
    pub fn answer(&mut self, selected: &str) {
        let question = match self.current_question() {
            Some(question) => question,
            None => {
                warn!("Answer '{}' received after completion, ignoring", selected);
                return;
            }
        };

        if selected == question.correct_answer {
            self.score += 1;
        }
        self.current_index += 1;
    }

    pub fn restart(&mut self) {
        self.current_index = 0;
        self.score = 0;
    }
}
