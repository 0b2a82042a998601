use super::*;

impl<P: QuestionBankProvider, R: ViewRenderer> QuizController<P, R> {
    /// Registra la respuesta y revela la correcta. Sólo actúa con la pregunta
    /// abierta: los clics repetidos se ignoran.
    pub fn submit_answer(&mut self, selected: usize) {
        if self.session.view_mode != ViewMode::QuizActive {
            log::debug!("answer {selected} ignored in {:?}", self.session.view_mode);
            return;
        }

        let questions = Arc::clone(&self.session.questions);
        let Some(question) = questions.get(self.session.current_index) else {
            return;
        };
        let Some(option) = question.answers.get(selected) else {
            log::warn!(
                "answer index {selected} out of range ({} options)",
                question.answers.len()
            );
            return;
        };

        let was_correct = option.correct;
        if was_correct {
            self.session.score += 1;
        }

        let mark = AnswerMark {
            selected,
            was_correct,
            correct_indexes: question.correct_indexes(),
        };
        self.renderer
            .mark_answered(&mark.correct_indexes, selected, was_correct);
        self.session.answer_mark = Some(mark);
        self.session.view_mode = ViewMode::QuizAnswered;

        log::debug!(
            "question {} answered ({}), score {}",
            self.session.current_index + 1,
            if was_correct { "correct" } else { "wrong" },
            self.session.score
        );
        self.emit_progress(true);
    }

    /// Pasa a la siguiente pregunta o al resumen final
    pub fn advance(&mut self) {
        if self.session.view_mode != ViewMode::QuizAnswered {
            log::debug!("advance ignored in {:?}", self.session.view_mode);
            return;
        }

        self.session.current_index += 1;
        self.session.answer_mark = None;

        if self.session.current_index < self.session.questions.len() {
            self.session.view_mode = ViewMode::QuizActive;
            self.render_current_question();
            self.emit_progress(false);
        } else {
            self.session.view_mode = ViewMode::Results;
            let summary = ResultSummary::new(self.session.score, self.session.questions.len());
            log::info!(
                "`{}` finished: {}/{} ({}%)",
                self.session.subject_key,
                summary.score,
                summary.total,
                summary.percentage
            );
            self.renderer.show_results(&summary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::banks;
    use crate::render::{RecordingRenderer, RenderCall};
    use std::collections::{BTreeSet, HashMap};

    type Ctl = QuizController<HashMap<String, Arc<[QuestionRecord]>>, RecordingRenderer>;

    fn started(correct: &[usize]) -> Ctl {
        let mut ctl = QuizController::new(banks("mathematics", correct), RecordingRenderer::new());
        ctl.select_subject("mathematics").expect("bank has questions");
        ctl
    }

    fn assert_invariants<P: QuestionBankProvider, R: ViewRenderer>(ctl: &QuizController<P, R>) {
        let s = ctl.session();
        assert!(s.current_index <= s.questions.len());
        assert!(s.score <= s.answered_count());
        assert_eq!(
            s.view_mode == ViewMode::Results,
            !s.questions.is_empty() && s.current_index >= s.questions.len()
        );
        if matches!(s.view_mode, ViewMode::QuizActive | ViewMode::QuizAnswered) {
            assert!(!s.questions.is_empty());
        }
    }

    #[test]
    fn correct_answer_scores_and_locks() {
        let mut ctl = started(&[2]);
        ctl.submit_answer(2);

        assert_eq!(ctl.score(), 1);
        assert_eq!(ctl.view_mode(), ViewMode::QuizAnswered);
        assert!(ctl.can_advance());
        let progress = ctl.renderer().last_progress().expect("progress emitted");
        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.score, 1);
        assert_invariants(&ctl);
    }

    #[test]
    fn wrong_answer_reveals_correct_option() {
        let mut ctl = started(&[3]);
        ctl.submit_answer(1);

        assert_eq!(ctl.score(), 0);
        let expected = RenderCall::Answered {
            correct_indexes: BTreeSet::from([3]),
            selected: 1,
            was_correct: false,
        };
        assert!(ctl.renderer().calls.contains(&expected));
        let mark = ctl.session().answer_mark.as_ref().expect("mark stored");
        assert!(mark.is_revealed(3));
        assert!(!mark.is_revealed(1));
        assert!(!mark.was_correct);
    }

    #[test]
    fn second_submit_is_ignored() {
        let mut ctl = started(&[0, 0]);
        ctl.submit_answer(0);
        let snapshot = ctl.session().clone();
        let calls = ctl.renderer().calls.len();

        ctl.submit_answer(0);
        ctl.submit_answer(3);

        assert_eq!(ctl.score(), snapshot.score);
        assert_eq!(ctl.current_index(), snapshot.current_index);
        assert_eq!(ctl.session().answer_mark, snapshot.answer_mark);
        assert_eq!(ctl.renderer().calls.len(), calls);
    }

    #[test]
    fn out_of_range_answer_is_ignored() {
        let mut ctl = started(&[0]);
        ctl.submit_answer(9);
        assert_eq!(ctl.view_mode(), ViewMode::QuizActive);
        assert_eq!(ctl.score(), 0);
    }

    #[test]
    fn advance_requires_answer() {
        let mut ctl = started(&[0, 1]);
        ctl.advance();
        assert_eq!(ctl.current_index(), 0);
        assert_eq!(ctl.view_mode(), ViewMode::QuizActive);

        ctl.submit_answer(0);
        ctl.advance();
        assert_eq!(ctl.current_index(), 1);
        assert_eq!(ctl.view_mode(), ViewMode::QuizActive);
        assert!(ctl.session().answer_mark.is_none());
        assert_eq!(
            ctl.renderer().calls.iter().rev().nth(1),
            Some(&RenderCall::Question("Q2".into()))
        );
        let progress = ctl.renderer().last_progress().unwrap();
        assert_eq!(progress.question_number, 2);
        assert_eq!(progress.percentage, 50.0);
    }

    #[test]
    fn submit_and_advance_ignored_outside_quiz() {
        let mut ctl = QuizController::new(banks("mathematics", &[0]), RecordingRenderer::new());
        ctl.submit_answer(0);
        ctl.advance();
        assert_eq!(ctl.view_mode(), ViewMode::Home);

        let mut ctl = started(&[0]);
        ctl.submit_answer(0);
        ctl.advance();
        assert_eq!(ctl.view_mode(), ViewMode::Results);
        ctl.submit_answer(0);
        ctl.advance();
        assert_eq!(ctl.view_mode(), ViewMode::Results);
        assert_eq!(ctl.score(), 1);
        assert_eq!(ctl.current_index(), 1);
    }

    #[test]
    fn mixed_answers_score_two_of_three() {
        let mut ctl = started(&[0, 1, 0]);
        for answer in [0, 1, 1] {
            ctl.submit_answer(answer);
            assert_invariants(&ctl);
            ctl.advance();
            assert_invariants(&ctl);
        }

        assert_eq!(ctl.score(), 2);
        let summary = ctl.renderer().last_results().expect("results shown");
        assert_eq!(*summary, ResultSummary::new(2, 3));
        assert_eq!(summary.percentage, 67);
    }

    #[test]
    fn full_traversal_ends_in_results() {
        for n in 1..=5 {
            let correct: Vec<usize> = (0..n).map(|i| i % 4).collect();
            let mut ctl = started(&correct);
            let mut answered_transitions = 0;
            for _ in 0..n {
                assert_eq!(ctl.view_mode(), ViewMode::QuizActive);
                ctl.submit_answer(0);
                if ctl.view_mode() == ViewMode::QuizAnswered {
                    answered_transitions += 1;
                }
                ctl.advance();
                assert_invariants(&ctl);
            }
            assert_eq!(answered_transitions, n);
            assert_eq!(ctl.view_mode(), ViewMode::Results);
            assert_eq!(ctl.current_index(), n);
        }
    }
}
