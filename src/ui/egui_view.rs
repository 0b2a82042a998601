use crate::app::{ProgressSnapshot, ResultSummary};
use crate::data::SubjectNames;
use crate::model::QuestionRecord;
use crate::render::ViewRenderer;
use crate::view_models::{AnswerRow, AnswerState, HeaderTexts, SubjectCard};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Quiz,
    Results,
}

/// Renderer de egui: guarda lo que hay que pintar y las vistas lo leen cada frame.
#[derive(Debug, Default)]
pub struct EguiView {
    names: SubjectNames,
    pub subjects: Vec<SubjectCard>,
    pub screen: Screen,
    pub header: HeaderTexts,
    pub subject_title: String,
    pub question_text: String,
    pub answers: Vec<AnswerRow>,
    pub next_enabled: bool,
    pub progress_fraction: f32,
    pub final_message: String,
    pub notice: Option<String>,
}

impl EguiView {
    pub fn new(names: SubjectNames, subjects: Vec<SubjectCard>) -> Self {
        Self {
            names,
            subjects,
            ..Self::default()
        }
    }

    /// Aviso modal; mientras está abierto la app ignora el resto de clics
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

impl ViewRenderer for EguiView {
    fn render_question(&mut self, question: &QuestionRecord) {
        self.question_text = question.question_text.clone();
        self.answers = question
            .answers
            .iter()
            .map(|a| AnswerRow {
                text: a.text.clone(),
                state: AnswerState::Idle,
                locked: false,
            })
            .collect();
        self.next_enabled = false;
    }

    fn mark_answered(&mut self, correct_indexes: &BTreeSet<usize>, selected: usize, was_correct: bool) {
        for (i, row) in self.answers.iter_mut().enumerate() {
            row.locked = true;
            if correct_indexes.contains(&i) {
                row.state = AnswerState::Correct;
            } else if i == selected && !was_correct {
                row.state = AnswerState::Incorrect;
            }
        }
        self.next_enabled = true;
    }

    fn update_progress(&mut self, progress: &ProgressSnapshot) {
        self.header = HeaderTexts::quiz(progress);
        self.progress_fraction = progress.fraction();
    }

    fn show_home(&mut self) {
        self.screen = Screen::Home;
        self.header = HeaderTexts::home();
        self.subject_title.clear();
        self.question_text.clear();
        self.answers.clear();
        self.next_enabled = false;
        self.progress_fraction = 0.0;
    }

    fn show_quiz_screen(&mut self, subject_display_name: &str) {
        self.screen = Screen::Quiz;
        self.subject_title = subject_display_name.to_string();
        self.final_message.clear();
        self.next_enabled = false;
    }

    fn show_results(&mut self, summary: &ResultSummary) {
        self.screen = Screen::Results;
        self.header = HeaderTexts::results(summary);
        self.final_message = summary.message();
        self.next_enabled = false;
        self.progress_fraction = 1.0;
    }

    fn subject_display_name(&self, subject: &str) -> String {
        self.names.display_name(subject).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::QuizController;
    use crate::data::QuestionBank;

    fn controller() -> QuizController<QuestionBank, EguiView> {
        let bank = QuestionBank::embedded().expect("embedded bank");
        let view = EguiView::new(bank.subject_names(), SubjectCard::from_bank(&bank));
        QuizController::new(bank, view)
    }

    #[test]
    fn wrong_click_styles_selected_and_reveals_correct() {
        let mut ctl = controller();
        ctl.select_subject("mathematics").unwrap();
        let correct = ctl
            .current_question()
            .and_then(|q| q.correct_indexes().into_iter().next())
            .expect("one correct answer");
        let wrong = (correct + 1) % ctl.renderer().answers.len();

        ctl.submit_answer(wrong);

        let view = ctl.renderer();
        assert!(view.next_enabled);
        assert!(view.answers.iter().all(|r| r.locked));
        assert_eq!(view.answers[correct].state, AnswerState::Correct);
        assert_eq!(view.answers[wrong].state, AnswerState::Incorrect);
        let idle = view
            .answers
            .iter()
            .filter(|r| r.state == AnswerState::Idle)
            .count();
        assert_eq!(idle, view.answers.len() - 2);
        assert_eq!(view.header.score, "Score: 0");
    }

    #[test]
    fn next_question_is_rendered_fresh() {
        let mut ctl = controller();
        ctl.select_subject("science").unwrap();
        ctl.submit_answer(0);
        ctl.advance();

        let view = ctl.renderer();
        assert_eq!(view.screen, Screen::Quiz);
        assert_eq!(view.subject_title, "Science");
        assert!(!view.next_enabled);
        assert!(view.answers.iter().all(|r| !r.locked && r.state == AnswerState::Idle));
        assert!(view.header.progress.starts_with("Question 2 of "));
    }

    #[test]
    fn results_and_home_headers() {
        let mut ctl = controller();
        ctl.select_subject("general").unwrap();
        let total = ctl.session().questions.len();
        for _ in 0..total {
            ctl.submit_answer(0);
            ctl.advance();
        }
        assert_eq!(ctl.renderer().screen, Screen::Results);
        assert!(ctl.renderer().final_message.starts_with("Your final score is"));
        assert!(ctl.renderer().header.score.starts_with("Final Score: "));

        ctl.return_to_home();
        assert_eq!(ctl.renderer().screen, Screen::Home);
        assert_eq!(ctl.renderer().header, HeaderTexts::home());
    }
}
