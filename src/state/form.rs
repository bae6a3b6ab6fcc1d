use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::FORM_CLOSE_MS;
use crate::error::SubmitError;
use crate::utils::validation::validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Question,
    Region,
    Subscribed,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Question => "question",
            Field::Region => "region",
            Field::Subscribed => "newsletter",
        }
    }
}

pub type ErrorState = BTreeMap<Field, String>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub question: String,
    pub region: String,
    pub subscribed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Email(String),
    Question(String),
    Region(String),
    Subscribed(bool),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Name(_) => Field::Name,
            FieldUpdate::Email(_) => Field::Email,
            FieldUpdate::Question(_) => Field::Question,
            FieldUpdate::Region(_) => Field::Region,
            FieldUpdate::Subscribed(_) => Field::Subscribed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Succeeded,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionStatus {
    Success(String),
    Failure(String),
}

/// Snapshot handed to the submission sink.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuestionSubmission {
    pub name: String,
    pub email: String,
    pub question: String,
    pub region: String,
    pub newsletter: bool,
}

impl From<&FormState> for QuestionSubmission {
    fn from(form: &FormState) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            question: form.question.trim().to_string(),
            region: form.region.clone(),
            newsletter: form.subscribed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormEffect {
    ScheduleClose { delay_ms: u32 },
}

#[derive(Debug)]
pub struct QuestionForm {
    values: FormState,
    errors: ErrorState,
    phase: FormPhase,
    status: Option<SubmissionStatus>,
}

impl Default for QuestionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionForm {
    pub fn new() -> Self {
        Self {
            values: FormState::default(),
            errors: ErrorState::new(),
            phase: FormPhase::Editing,
            status: None,
        }
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    #[cfg(test)]
    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn status(&self) -> Option<&SubmissionStatus> {
        self.status.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn update(&mut self, update: FieldUpdate) {
        self.errors.remove(&update.field());
        match update {
            FieldUpdate::Name(v) => self.values.name = v,
            FieldUpdate::Email(v) => self.values.email = v,
            FieldUpdate::Question(v) => self.values.question = v,
            FieldUpdate::Region(v) => self.values.region = v,
            FieldUpdate::Subscribed(v) => self.values.subscribed = v,
        }
    }

    /// Returns the payload to send, or `None` when the form is invalid or a
    /// submission is already in flight.
    pub fn submit(&mut self) -> Option<QuestionSubmission> {
        if self.is_submitting() {
            return None;
        }

        let errors = validate(&self.values);
        if !errors.is_empty() {
            self.errors = errors;
            self.phase = FormPhase::Editing;
            return None;
        }

        self.errors.clear();
        self.status = None;
        self.phase = FormPhase::Submitting;
        Some(QuestionSubmission::from(&self.values))
    }

    pub fn finish(&mut self, result: Result<(), SubmitError>) -> Option<FormEffect> {
        if !self.is_submitting() {
            return None;
        }

        match result {
            Ok(()) => {
                self.status = Some(SubmissionStatus::Success("Thank you".to_string()));
                self.values = FormState::default();
                self.phase = FormPhase::Succeeded;
                Some(FormEffect::ScheduleClose {
                    delay_ms: FORM_CLOSE_MS,
                })
            }
            Err(e) => {
                self.status = Some(SubmissionStatus::Failure(e.to_string()));
                self.phase = FormPhase::Editing;
                None
            }
        }
    }
}
