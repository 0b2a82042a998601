// src/view_models.rs

use crate::app::{ProgressSnapshot, ResultSummary};
use crate::data::QuestionBank;
use crate::provider::QuestionBankProvider;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectCard {
    pub key: String,
    pub label: String,
    pub question_count: usize,
}

impl SubjectCard {
    /// Tarjetas de la pantalla de inicio, en el orden del banco
    pub fn from_bank(bank: &QuestionBank) -> Vec<SubjectCard> {
        let names = bank.subject_names();
        bank.subjects()
            .iter()
            .map(|s| SubjectCard {
                key: s.key.clone(),
                label: names.display_name(&s.key).to_string(),
                question_count: bank.questions(&s.key).len(),
            })
            .collect()
    }

    pub fn caption(&self) -> String {
        match self.question_count {
            0 => "No questions yet".to_string(),
            1 => "1 question".to_string(),
            n => format!("{n} questions"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnswerState {
    #[default]
    Idle,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRow {
    pub text: String,
    pub state: AnswerState,
    pub locked: bool,
}

/// Los dos textos de la cabecera (puntuación y progreso).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderTexts {
    pub score: String,
    pub progress: String,
}

impl HeaderTexts {
    pub fn home() -> Self {
        Self {
            score: "Score: 0".to_string(),
            progress: "Choose a subject".to_string(),
        }
    }

    pub fn quiz(p: &ProgressSnapshot) -> Self {
        Self {
            score: format!("Score: {}", p.score),
            progress: format!("Question {} of {}", p.question_number, p.total_questions),
        }
    }

    pub fn results(r: &ResultSummary) -> Self {
        Self {
            score: format!("Final Score: {}/{}", r.score, r.total),
            progress: format!("Completed ({}%)", r.percentage),
        }
    }
}

impl Default for HeaderTexts {
    fn default() -> Self {
        Self::home()
    }
}
