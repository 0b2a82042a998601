//! Tipos de error del quiz.

use thiserror::Error;

/// Errores de la máquina de estados del quiz.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions found for subject `{subject}`")]
    NoQuestionsAvailable { subject: String },
}

/// Errores al cargar o validar un banco de preguntas.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("could not read question bank {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error("subject `{0}` appears more than once")]
    DuplicateSubject(String),
    #[error("subject `{subject}`, question {number}: no answers")]
    NoAnswers { subject: String, number: usize },
    #[error("subject `{subject}`, question {number}: expected exactly one correct answer, found {found}")]
    CorrectCount {
        subject: String,
        number: usize,
        found: usize,
    },
}

impl QuizError {
    /// Texto del aviso bloqueante que ve el usuario.
    pub fn notice(&self) -> &'static str {
        match self {
            QuizError::NoQuestionsAvailable { .. } => "No questions found for this subject.",
        }
    }
}
