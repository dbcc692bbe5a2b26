use serde::{Deserialize, Serialize};

use crate::error::QuizError;

#[derive(Serialize, Deserialize, Clone)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Pack {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Pack {
    /// A pack is playable only when every question carries its correct
    /// answer among its own options.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::InvalidPack(format!(
                "pack '{}' has no questions",
                self.name
            )));
        }

        for (index, question) in self.questions.iter().enumerate() {
            if !question
                .options
                .iter()
                .any(|option| option == &question.correct_answer)
            {
                return Err(QuizError::InvalidPack(format!(
                    "question {}: correct answer '{}' is not one of the options",
                    index + 1,
                    question.correct_answer
                )));
            }

            for (position, option) in question.options.iter().enumerate() {
                if question.options[..position].contains(option) {
                    return Err(QuizError::InvalidPack(format!(
                        "question {}: duplicate option '{}'",
                        index + 1,
                        option
                    )));
                }
            }
        }

        Ok(())
    }
}

pub fn default_pack() -> Pack {
    let pack = Pack {
        name: "General Knowledge".to_string(),
        questions: vec![
            Question {
                prompt: "What is the capital of France?".to_string(),
                options: vec![
                    "Paris".to_string(),
                    "London".to_string(),
                    "Berlin".to_string(),
                    "Madrid".to_string(),
                ],
                correct_answer: "Paris".to_string(),
            },
            Question {
                prompt: "What is 2 + 2?".to_string(),
                options: vec![
                    "3".to_string(),
                    "4".to_string(),
                    "5".to_string(),
                    "6".to_string(),
                ],
                correct_answer: "4".to_string(),
            },
            Question {
                prompt: "Who wrote \"Romeo and Juliet\"?".to_string(),
                options: vec![
                    "William Shakespeare".to_string(),
                    "Charles Dickens".to_string(),
                    "Jane Austen".to_string(),
                    "Mark Twain".to_string(),
                ],
                correct_answer: "William Shakespeare".to_string(),
            },
            Question {
                prompt: "Which planet is known as the Red Planet?".to_string(),
                options: vec![
                    "Venus".to_string(),
                    "Mars".to_string(),
                    "Jupiter".to_string(),
                    "Mercury".to_string(),
                ],
                correct_answer: "Mars".to_string(),
            },
            Question {
                prompt: "What is the largest ocean on Earth?".to_string(),
                options: vec![
                    "Atlantic Ocean".to_string(),
                    "Indian Ocean".to_string(),
                    "Arctic Ocean".to_string(),
                    "Pacific Ocean".to_string(),
                ],
                correct_answer: "Pacific Ocean".to_string(),
            },
        ],
    };
    return pack;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pack_is_valid() {
        let pack = default_pack();
        assert!(pack.validate().is_ok());
        assert_eq!(pack.questions.len(), 5);
    }

    #[test]
    fn empty_pack_is_rejected() {
        let pack = Pack {
            name: "empty".to_string(),
            questions: Vec::new(),
        };
        assert!(matches!(pack.validate(), Err(QuizError::InvalidPack(_))));
    }

    #[test]
    fn correct_answer_outside_options_is_rejected() {
        let pack = Pack {
            name: "broken".to_string(),
            questions: vec![Question {
                prompt: "What is the capital of France?".to_string(),
                options: vec!["London".to_string(), "Berlin".to_string()],
                correct_answer: "Paris".to_string(),
            }],
        };
        assert!(matches!(pack.validate(), Err(QuizError::InvalidPack(_))));
    }

    #[test]
    fn duplicate_options_are_rejected() {
        let pack = Pack {
            name: "broken".to_string(),
            questions: vec![Question {
                prompt: "Pick one".to_string(),
                options: vec!["A".to_string(), "A".to_string(), "B".to_string()],
                correct_answer: "B".to_string(),
            }],
        };
        assert!(matches!(pack.validate(), Err(QuizError::InvalidPack(_))));
    }

    #[test]
    fn pack_round_trips_through_json() {
        let pack = default_pack();
        let raw = serde_json::to_string(&pack).unwrap();
        let parsed: Pack = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.name, pack.name);
        assert_eq!(parsed.questions.len(), pack.questions.len());
        assert_eq!(parsed.questions[0].correct_answer, "Paris");
    }
}
