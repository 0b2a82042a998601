use super::*;

/// Asignatura que abre el botón "Start quiz" de Home.
pub const DEFAULT_SUBJECT: &str = "mathematics";

impl<P: QuestionBankProvider, R: ViewRenderer> QuizController<P, R> {
    /// Empieza una partida nueva en `key`, sustituyendo la que hubiera.
    /// Sin preguntas devuelve `NoQuestionsAvailable` y no toca la sesión.
    pub fn select_subject(&mut self, key: &str) -> Result<(), QuizError> {
        let questions = self.provider.questions(key);
        if questions.is_empty() {
            log::warn!("subject `{key}` has no questions");
            return Err(QuizError::NoQuestionsAvailable {
                subject: key.to_string(),
            });
        }

        log::info!("starting `{key}` with {} questions", questions.len());
        self.session = QuizSession {
            subject_key: key.to_string(),
            questions,
            current_index: 0,
            score: 0,
            view_mode: ViewMode::QuizActive,
            answer_mark: None,
        };

        let title = self.renderer.subject_display_name(key);
        self.renderer.show_quiz_screen(&title);
        self.render_current_question();
        self.emit_progress(false);
        Ok(())
    }

    /// Botón "Start quiz": abre la asignatura por defecto
    pub fn start_default_quiz(&mut self) -> Result<(), QuizError> {
        self.select_subject(DEFAULT_SUBJECT)
    }

    /// Siempre permitido: vuelve a Home y descarta la partida
    pub fn return_to_home(&mut self) {
        if self.session.view_mode != ViewMode::Home {
            log::debug!("leaving `{}` for home", self.session.subject_key);
        }
        self.session = QuizSession::default();
        self.renderer.show_home();
    }

    /// Vuelve a seleccionar la asignatura guardada; sin asignatura no hace nada
    pub fn restart_current_subject(&mut self) -> Result<(), QuizError> {
        if self.session.subject_key.is_empty() {
            log::debug!("restart ignored: no subject selected");
            return Ok(());
        }
        let key = self.session.subject_key.clone();
        self.select_subject(&key)
    }

    pub(crate) fn render_current_question(&mut self) {
        let questions = Arc::clone(&self.session.questions);
        if let Some(question) = questions.get(self.session.current_index) {
            self.renderer.render_question(question);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::banks;
    use crate::render::{RecordingRenderer, RenderCall};

    #[test]
    fn select_subject_resets_and_renders_first_question() {
        let mut ctl = QuizController::new(banks("mathematics", &[0, 1]), RecordingRenderer::new());
        ctl.renderer_mut().calls.clear();

        ctl.select_subject("mathematics").expect("bank has questions");

        assert_eq!(ctl.view_mode(), ViewMode::QuizActive);
        assert_eq!(ctl.subject_key(), "mathematics");
        assert_eq!(ctl.current_index(), 0);
        assert_eq!(ctl.score(), 0);
        let calls = &ctl.renderer().calls;
        assert_eq!(calls[0], RenderCall::QuizScreen("Mathematics".into()));
        assert_eq!(calls[1], RenderCall::Question("Q1".into()));
        match &calls[2] {
            RenderCall::Progress(p) => {
                assert_eq!(p.question_number, 1);
                assert_eq!(p.total_questions, 2);
                assert_eq!(p.percentage, 0.0);
            }
            other => panic!("expected progress, got {other:?}"),
        }
    }

    #[test]
    fn unknown_subject_reports_once_and_stays_home() {
        let mut ctl = QuizController::new(banks("science", &[0]), RecordingRenderer::new());
        let before = ctl.renderer().calls.len();

        let err = ctl.select_subject("nonexistent").unwrap_err();

        assert_eq!(
            err,
            QuizError::NoQuestionsAvailable {
                subject: "nonexistent".into()
            }
        );
        assert_eq!(err.notice(), "No questions found for this subject.");
        assert_eq!(ctl.view_mode(), ViewMode::Home);
        assert!(ctl.subject_key().is_empty());
        assert_eq!(ctl.renderer().calls.len(), before);
    }

    #[test]
    fn empty_subject_does_not_disturb_running_quiz() {
        let mut map = banks("science", &[0, 0]);
        map.insert("english".into(), std::sync::Arc::from([]));
        let mut ctl = QuizController::new(map, RecordingRenderer::new());
        ctl.select_subject("science").unwrap();
        ctl.submit_answer(0);

        assert!(ctl.select_subject("english").is_err());
        assert_eq!(ctl.subject_key(), "science");
        assert_eq!(ctl.view_mode(), ViewMode::QuizAnswered);
        assert_eq!(ctl.score(), 1);
    }

    #[test]
    fn unmapped_subject_title_uses_key() {
        let mut ctl = QuizController::new(banks("astronomy", &[0]), RecordingRenderer::new());
        ctl.select_subject("astronomy").unwrap();
        assert!(
            ctl.renderer()
                .calls
                .contains(&RenderCall::QuizScreen("astronomy".into()))
        );
    }

    #[test]
    fn select_subject_mid_quiz_replaces_session() {
        let mut ctl = QuizController::new(banks("mathematics", &[0, 0, 0]), RecordingRenderer::new());
        ctl.select_subject("mathematics").unwrap();
        ctl.submit_answer(0);
        ctl.advance();
        assert_eq!(ctl.current_index(), 1);

        ctl.start_default_quiz().unwrap();
        assert_eq!(ctl.current_index(), 0);
        assert_eq!(ctl.score(), 0);
        assert_eq!(ctl.view_mode(), ViewMode::QuizActive);
    }

    #[test]
    fn return_home_clears_session_from_any_state() {
        let mut ctl = QuizController::new(banks("general", &[1]), RecordingRenderer::new());
        ctl.return_to_home();
        assert_eq!(ctl.view_mode(), ViewMode::Home);

        ctl.select_subject("general").unwrap();
        ctl.submit_answer(1);
        ctl.return_to_home();

        assert_eq!(ctl.view_mode(), ViewMode::Home);
        assert!(ctl.subject_key().is_empty());
        assert!(ctl.session().questions.is_empty());
        assert_eq!(ctl.score(), 0);
        assert_eq!(ctl.current_index(), 0);
        assert_eq!(ctl.renderer().calls.last(), Some(&RenderCall::Home));
    }

    #[test]
    fn restart_from_results_starts_over_on_same_bank() {
        let mut ctl = QuizController::new(banks("english", &[0, 1]), RecordingRenderer::new());
        ctl.select_subject("english").unwrap();
        let bank = Arc::clone(&ctl.session().questions);
        for answer in [0, 1] {
            ctl.submit_answer(answer);
            ctl.advance();
        }
        assert_eq!(ctl.view_mode(), ViewMode::Results);
        assert_eq!(ctl.score(), 2);

        ctl.restart_current_subject().unwrap();

        assert_eq!(ctl.score(), 0);
        assert_eq!(ctl.current_index(), 0);
        assert_eq!(ctl.view_mode(), ViewMode::QuizActive);
        assert_eq!(ctl.subject_key(), "english");
        assert!(Arc::ptr_eq(&bank, &ctl.session().questions));
    }

    #[test]
    fn restart_without_subject_is_noop() {
        let mut ctl = QuizController::new(banks("english", &[0]), RecordingRenderer::new());
        assert_eq!(ctl.restart_current_subject(), Ok(()));
        assert_eq!(ctl.view_mode(), ViewMode::Home);
    }
}
