use crate::error::QuizError;
use crate::model::{AnswerMark, QuestionRecord, ViewMode};
use crate::provider::QuestionBankProvider;
use crate::render::{UiEvent, ViewRenderer};
use std::sync::Arc;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod progress;
pub mod queries;

pub use progress::{ProgressSnapshot, ResultSummary};

/// Estado mutable de una partida.
#[derive(Clone, Debug)]
pub struct QuizSession {
    pub subject_key: String,             // vacío en Home
    pub questions: Arc<[QuestionRecord]>, // banco activo, compartido con el proveedor
    pub current_index: usize,
    pub score: usize,
    pub view_mode: ViewMode,
    pub answer_mark: Option<AnswerMark>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self {
            subject_key: String::new(),
            questions: Arc::from([]),
            current_index: 0,
            score: 0,
            view_mode: ViewMode::Home,
            answer_mark: None,
        }
    }
}

impl QuizSession {
    /// Preguntas respondidas hasta ahora (incluye la actual si ya se respondió)
    pub fn answered_count(&self) -> usize {
        match self.view_mode {
            ViewMode::QuizAnswered => self.current_index + 1,
            _ => self.current_index,
        }
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        match self.view_mode {
            ViewMode::QuizActive | ViewMode::QuizAnswered => {
                self.questions.get(self.current_index)
            }
            _ => None,
        }
    }
}

/// Dueño de la sesión; pinta a través de un [`ViewRenderer`].
pub struct QuizController<P, R> {
    provider: P,
    renderer: R,
    session: QuizSession,
}

impl<P: QuestionBankProvider, R: ViewRenderer> QuizController<P, R> {
    /// Arranca en Home
    pub fn new(provider: P, mut renderer: R) -> Self {
        renderer.show_home();
        Self {
            provider,
            renderer,
            session: QuizSession::default(),
        }
    }

    /// Traduce cada intención de la vista a su operación
    pub fn handle_event(&mut self, event: UiEvent) -> Result<(), QuizError> {
        match event {
            UiEvent::SelectSubject(key) => self.select_subject(&key),
            UiEvent::StartDefaultQuiz => self.start_default_quiz(),
            UiEvent::AnswerSelected(idx) => {
                self.submit_answer(idx);
                Ok(())
            }
            UiEvent::Next => {
                self.advance();
                Ok(())
            }
            UiEvent::Home => {
                self.return_to_home();
                Ok(())
            }
            UiEvent::Restart => self.restart_current_subject(),
            // El aviso lo gestiona la app, no la sesión
            UiEvent::DismissNotice => Ok(()),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::{AnswerOption, QuestionRecord};
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Pregunta con `options` respuestas y la correcta en `correct`.
    pub fn question(text: &str, options: usize, correct: usize) -> QuestionRecord {
        QuestionRecord::new(
            text,
            (0..options)
                .map(|i| AnswerOption::new(format!("{text} option {i}"), i == correct))
                .collect(),
        )
    }

    pub fn banks(subject: &str, correct: &[usize]) -> HashMap<String, Arc<[QuestionRecord]>> {
        let questions: Vec<QuestionRecord> = correct
            .iter()
            .enumerate()
            .map(|(i, c)| question(&format!("Q{}", i + 1), 4, *c))
            .collect();
        let mut map = HashMap::new();
        map.insert(subject.to_string(), Arc::from(questions));
        map
    }
}
