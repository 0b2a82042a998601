use super::*;

impl<P: QuestionBankProvider, R: ViewRenderer> QuizController<P, R> {
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn view_mode(&self) -> ViewMode {
        self.session.view_mode
    }

    pub fn score(&self) -> usize {
        self.session.score
    }

    pub fn current_index(&self) -> usize {
        self.session.current_index
    }

    pub fn subject_key(&self) -> &str {
        &self.session.subject_key
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.session.current_question()
    }

    /// El botón "Next" (y Enter) sólo está activo tras responder
    pub fn can_advance(&self) -> bool {
        self.session.view_mode == ViewMode::QuizAnswered
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}
