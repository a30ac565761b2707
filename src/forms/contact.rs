//! Contact page form.
//!
//! | Field | Constraint | Message key |
//! |-------|------------|-------------|
//! | `name` | ≥ 2 chars | `validation.nameRequired` |
//! | `email` | valid email | `validation.emailInvalid` |
//! | `subject` | ≥ 5 chars | `validation.subjectRequired` |
//! | `message` | ≥ 10 chars | `validation.messageTooShort` |
//!
//! A successful send clears every field.

use super::FormState;
use super::schema::{Constraint, FieldSpec, Rule, Schema};
use super::submit::{Gateway, Receipt, SubmitOutcome};
use crate::analytics::{AnalyticsSink, Event};
use serde::Serialize;

pub static SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec {
            name: "name",
            optional: false,
            constraints: &[Constraint {
                rule: Rule::MinChars(2),
                message: "common:validation.nameRequired",
            }],
        },
        FieldSpec {
            name: "email",
            optional: false,
            constraints: &[Constraint {
                rule: Rule::Email,
                message: "common:validation.emailInvalid",
            }],
        },
        FieldSpec {
            name: "subject",
            optional: false,
            constraints: &[Constraint {
                rule: Rule::MinChars(5),
                message: "common:validation.subjectRequired",
            }],
        },
        FieldSpec {
            name: "message",
            optional: false,
            constraints: &[Constraint {
                rule: Rule::MinChars(10),
                message: "common:validation.messageTooShort",
            }],
        },
    ],
};

/// A validated contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    state: FormState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            state: FormState::new(&SCHEMA),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.state.set(field, value)
    }

    fn data(&self) -> ContactFormData {
        ContactFormData {
            name: self.state.value("name").to_string(),
            email: self.state.value("email").to_string(),
            subject: self.state.value("subject").to_string(),
            message: self.state.value("message").to_string(),
        }
    }

    /// Validate and mark the form pending. The caller must call
    /// [`finish`](Self::finish) once the request settles.
    pub fn begin_submit(&mut self) -> Result<ContactFormData, SubmitOutcome<Receipt>> {
        if self.state.is_pending() {
            return Err(SubmitOutcome::Busy);
        }
        if !self.state.validate() {
            return Err(SubmitOutcome::Invalid(self.state.errors().clone()));
        }
        self.state.begin();
        Ok(self.data())
    }

    /// Settle an in-flight submission. Success clears the form.
    pub fn finish(&mut self, sent: bool) {
        self.state.finish();
        if sent {
            self.state.reset();
        }
    }

    pub fn submit(
        &mut self,
        gateway: &dyn Gateway,
        sink: &dyn AnalyticsSink,
    ) -> SubmitOutcome<Receipt> {
        let data = match self.begin_submit() {
            Ok(data) => data,
            Err(outcome) => return outcome,
        };
        let result = gateway.send_contact(&data);
        self.finish(result.is_ok());
        match result {
            Ok(receipt) => {
                sink.record(&Event::ContactForm {
                    subject: data.subject,
                });
                SubmitOutcome::Sent(receipt)
            }
            Err(err) => SubmitOutcome::Failed(err),
        }
    }
}
