use super::*;

/// Datos del indicador de progreso y de la cabecera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressSnapshot {
    pub question_number: usize,
    pub total_questions: usize,
    pub score: usize,
    /// Porcentaje fraccionario para el ancho de la barra (sin redondear)
    pub percentage: f32,
}

impl ProgressSnapshot {
    /// Con `answer_selected` la barra va un paso por delante del contador
    pub fn compute(current_index: usize, total: usize, score: usize, answer_selected: bool) -> Self {
        let numerator = if answer_selected {
            current_index + 1
        } else {
            current_index
        };
        let percentage = if total == 0 {
            0.0
        } else {
            100.0 * numerator as f32 / total as f32
        };
        Self {
            question_number: current_index + 1,
            total_questions: total,
            score,
            percentage,
        }
    }

    pub fn fraction(&self) -> f32 {
        (self.percentage / 100.0).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: usize,
}

impl ResultSummary {
    pub fn new(score: usize, total: usize) -> Self {
        Self {
            score,
            total,
            percentage: rounded_percentage(score, total),
        }
    }

    pub fn message(&self) -> String {
        format!(
            "Your final score is {} out of {} ({}%).",
            self.score, self.total, self.percentage
        )
    }
}

/// `round(100 * score / total)` redondeando la mitad hacia arriba, en enteros.
pub fn rounded_percentage(score: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (200 * score + total) / (2 * total)
}

impl<P: QuestionBankProvider, R: ViewRenderer> QuizController<P, R> {
    pub fn progress_snapshot(&self, answer_selected: bool) -> ProgressSnapshot {
        ProgressSnapshot::compute(
            self.session.current_index,
            self.session.questions.len(),
            self.session.score,
            answer_selected,
        )
    }

    pub(crate) fn emit_progress(&mut self, answer_selected: bool) {
        let snapshot = self.progress_snapshot(answer_selected);
        self.renderer.update_progress(&snapshot);
    }
}
