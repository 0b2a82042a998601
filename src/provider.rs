use crate::model::QuestionRecord;
use std::collections::HashMap;
use std::sync::Arc;

/// Consulta de sólo lectura: asignatura -> lista ordenada de preguntas.
/// Una clave desconocida devuelve una lista vacía, nunca un error.
pub trait QuestionBankProvider {
    fn questions(&self, subject: &str) -> Arc<[QuestionRecord]>;
}

impl QuestionBankProvider for HashMap<String, Arc<[QuestionRecord]>> {
    fn questions(&self, subject: &str) -> Arc<[QuestionRecord]> {
        self.get(subject).cloned().unwrap_or_else(|| Arc::from([]))
    }
}

impl<P: QuestionBankProvider + ?Sized> QuestionBankProvider for &P {
    fn questions(&self, subject: &str) -> Arc<[QuestionRecord]> {
        (**self).questions(subject)
    }
}
