//! Record domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a record (Value Object)
///
/// Deserialization goes through [`RecordId::new`], so a blank id in a data
/// file is rejected like one typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidRecordId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RecordId {
    type Error = DomainError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl std::str::FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Lifecycle status of a persisted response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    #[default]
    Draft,
    Submitted,
    Discarded,
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::Draft => "draft",
            ResponseStatus::Submitted => "submitted",
            ResponseStatus::Discarded => "discarded",
        }
    }
}

/// The persisted response attached to a record.
///
/// Opaque to the record itself; only the repository knows how to
/// resolve or delete it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordAnswer {
    pub id: String,
    #[serde(default)]
    pub status: ResponseStatus,
    #[serde(default)]
    pub values: BTreeMap<String, serde_json::Value>,
}

impl RecordAnswer {
    pub fn new(id: impl Into<String>, status: ResponseStatus) -> Self {
        Self {
            id: id.into(),
            status,
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, question: impl Into<String>, value: serde_json::Value) -> Self {
        self.values.insert(question.into(), value);
        self
    }
}

/// A question shown alongside a record, with the value currently entered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordQuestion {
    pub name: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl RecordQuestion {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.value.is_some()
    }
}

/// A record under annotation (Entity)
///
/// Owned by the application session. Views read it; only use cases
/// mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    dataset_id: String,
    #[serde(default)]
    fields: BTreeMap<String, String>,
    #[serde(default)]
    questions: Vec<RecordQuestion>,
    #[serde(default)]
    answer: Option<RecordAnswer>,
}

impl Record {
    pub fn new(id: RecordId, dataset_id: impl Into<String>) -> Self {
        Self {
            id,
            dataset_id: dataset_id.into(),
            fields: BTreeMap::new(),
            questions: Vec::new(),
            answer: None,
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn with_question(mut self, question: RecordQuestion) -> Self {
        self.questions.push(question);
        self
    }

    /// Attach a persisted answer, copying its values into the matching questions.
    pub fn with_answer(mut self, answer: RecordAnswer) -> Self {
        for question in &mut self.questions {
            if let Some(value) = answer.values.get(&question.name) {
                question.value = Some(value.clone());
            }
        }
        self.answer = Some(answer);
        self
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn dataset_id(&self) -> &str {
        &self.dataset_id
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn questions(&self) -> &[RecordQuestion] {
        &self.questions
    }

    pub fn answer(&self) -> Option<&RecordAnswer> {
        self.answer.as_ref()
    }

    pub fn has_answer(&self) -> bool {
        self.answer.is_some()
    }

    /// Reset all answer-related state.
    ///
    /// After this returns `answer()` is `None` and no question holds a value.
    pub fn clear(&mut self) {
        self.answer = None;
        for question in &mut self.questions {
            question.value = None;
        }
    }
}
