use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    #[serde(rename = "question")]
    pub question_text: String, // Enunciado
    pub answers: Vec<AnswerOption>,
}

impl QuestionRecord {
    pub fn new(question_text: impl Into<String>, answers: Vec<AnswerOption>) -> Self {
        Self {
            question_text: question_text.into(),
            answers,
        }
    }

    /// Índices de todas las opciones marcadas como correctas
    pub fn correct_indexes(&self) -> BTreeSet<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, a)| a.correct)
            .map(|(i, _)| i)
            .collect()
    }
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Home,
    QuizActive,
    QuizAnswered,
    Results,
}

/// Estado de revelado de la pregunta actual tras responder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerMark {
    pub selected: usize,
    pub was_correct: bool,
    pub correct_indexes: BTreeSet<usize>,
}

impl AnswerMark {
    pub fn is_revealed(&self, idx: usize) -> bool {
        self.correct_indexes.contains(&idx)
    }
}
