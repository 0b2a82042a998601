use crate::app::progress::{ProgressSnapshot, ResultSummary};
use crate::data::SubjectNames;
use crate::model::QuestionRecord;
use std::collections::BTreeSet;

/// Capa de presentación que maneja el controlador del quiz.
/// Sólo se llama como efecto de una transición; lo único que se lee es el nombre visible.
pub trait ViewRenderer {
    /// Un botón nuevo e interactivo por cada opción
    fn render_question(&mut self, question: &QuestionRecord);

    /// Bloquea los botones y aplica el estilo correcto/incorrecto
    fn mark_answered(&mut self, correct_indexes: &BTreeSet<usize>, selected: usize, was_correct: bool);

    fn update_progress(&mut self, progress: &ProgressSnapshot);

    fn show_home(&mut self);

    fn show_quiz_screen(&mut self, subject_display_name: &str);

    fn show_results(&mut self, summary: &ResultSummary);

    /// Etiqueta de la asignatura, o la propia clave si no hay
    fn subject_display_name(&self, subject: &str) -> String;
}

/// Intenciones del usuario recogidas por la vista durante un frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    SelectSubject(String),
    StartDefaultQuiz,
    AnswerSelected(usize),
    Next,
    Home,
    Restart,
    DismissNotice,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderCall {
    Question(String),
    Answered {
        correct_indexes: BTreeSet<usize>,
        selected: usize,
        was_correct: bool,
    },
    Progress(ProgressSnapshot),
    Home,
    QuizScreen(String),
    Results(ResultSummary),
}

/// Renderer sin interfaz que sólo apunta las llamadas (tests y modo headless).
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
    names: SubjectNames,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            names: SubjectNames::builtin(),
        }
    }

    pub fn with_names(names: SubjectNames) -> Self {
        Self {
            calls: Vec::new(),
            names,
        }
    }

    pub fn last_progress(&self) -> Option<&ProgressSnapshot> {
        self.calls.iter().rev().find_map(|c| match c {
            RenderCall::Progress(p) => Some(p),
            _ => None,
        })
    }

    pub fn last_results(&self) -> Option<&ResultSummary> {
        self.calls.iter().rev().find_map(|c| match c {
            RenderCall::Results(r) => Some(r),
            _ => None,
        })
    }
}

impl ViewRenderer for RecordingRenderer {
    fn render_question(&mut self, question: &QuestionRecord) {
        self.calls
            .push(RenderCall::Question(question.question_text.clone()));
    }

    fn mark_answered(&mut self, correct_indexes: &BTreeSet<usize>, selected: usize, was_correct: bool) {
        self.calls.push(RenderCall::Answered {
            correct_indexes: correct_indexes.clone(),
            selected,
            was_correct,
        });
    }

    fn update_progress(&mut self, progress: &ProgressSnapshot) {
        self.calls.push(RenderCall::Progress(*progress));
    }

    fn show_home(&mut self) {
        self.calls.push(RenderCall::Home);
    }

    fn show_quiz_screen(&mut self, subject_display_name: &str) {
        self.calls
            .push(RenderCall::QuizScreen(subject_display_name.to_string()));
    }

    fn show_results(&mut self, summary: &ResultSummary) {
        self.calls.push(RenderCall::Results(*summary));
    }

    fn subject_display_name(&self, subject: &str) -> String {
        self.names.display_name(subject).to_string()
    }
}
