// src/data.rs

use crate::error::BankError;
use crate::model::QuestionRecord;
use crate::provider::QuestionBankProvider;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

const EMBEDDED_BANK: &str = include_str!("data/question_banks.yaml");

/// Nombres visibles de las asignaturas conocidas.
const BUILTIN_NAMES: [(&str, &str); 4] = [
    ("mathematics", "Mathematics"),
    ("science", "Science"),
    ("english", "English"),
    ("general", "General Knowledge"),
];

#[derive(Deserialize)]
struct BankDocument {
    subjects: Vec<SubjectDocument>,
}

#[derive(Deserialize)]
struct SubjectDocument {
    key: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    questions: Vec<QuestionRecord>,
}

#[derive(Clone, Debug)]
pub struct Subject {
    pub key: String,
    pub display_name: Option<String>,
    pub questions: Arc<[QuestionRecord]>,
}

/// Banco de preguntas por asignatura, en el orden del documento YAML.
#[derive(Clone, Debug, Default)]
pub struct QuestionBank {
    subjects: Vec<Subject>,
}

impl QuestionBank {
    /// Carga el banco embebido en el binario
    pub fn embedded() -> Result<Self, BankError> {
        Self::from_yaml_str(EMBEDDED_BANK)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, BankError> {
        let doc: BankDocument = serde_yaml::from_str(content)?;
        let mut subjects: Vec<Subject> = Vec::with_capacity(doc.subjects.len());
        for subject in doc.subjects {
            if subjects.iter().any(|s| s.key == subject.key) {
                return Err(BankError::DuplicateSubject(subject.key));
            }
            validate_questions(&subject.key, &subject.questions)?;
            subjects.push(Subject {
                key: subject.key,
                display_name: subject.display_name,
                questions: subject.questions.into(),
            });
        }
        log::debug!("question bank loaded with {} subjects", subjects.len());
        Ok(Self { subjects })
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Etiquetas de las asignaturas; las del YAML pisan a las integradas
    pub fn subject_names(&self) -> SubjectNames {
        let mut names = SubjectNames::builtin();
        for subject in &self.subjects {
            if let Some(name) = &subject.display_name {
                names.insert(&subject.key, name);
            }
        }
        names
    }
}

impl QuestionBankProvider for QuestionBank {
    fn questions(&self, subject: &str) -> Arc<[QuestionRecord]> {
        self.subjects
            .iter()
            .find(|s| s.key == subject)
            .map(|s| Arc::clone(&s.questions))
            .unwrap_or_else(|| Arc::from([]))
    }
}

fn validate_questions(subject: &str, questions: &[QuestionRecord]) -> Result<(), BankError> {
    for (i, q) in questions.iter().enumerate() {
        if q.answers.is_empty() {
            return Err(BankError::NoAnswers {
                subject: subject.to_string(),
                number: i + 1,
            });
        }
        let found = q.answers.iter().filter(|a| a.correct).count();
        if found != 1 {
            return Err(BankError::CorrectCount {
                subject: subject.to_string(),
                number: i + 1,
                found,
            });
        }
    }
    Ok(())
}

/// Clave de asignatura -> etiqueta. Las claves desconocidas se muestran tal cual.
#[derive(Clone, Debug, Default)]
pub struct SubjectNames {
    names: HashMap<String, String>,
}

impl SubjectNames {
    pub fn builtin() -> Self {
        let names = BUILTIN_NAMES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { names }
    }

    pub fn insert(&mut self, key: &str, name: &str) {
        self.names.insert(key.to_string(), name.to_string());
    }

    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.names.get(key).map(String::as_str).unwrap_or(key)
    }
}
