//! Admin sign-in form.
//!
//! Validates an email and a non-empty password, then hands a
//! [`LoginRequest`] to [`Gateway::authenticate`]. The password is kept out
//! of `Debug` output.

use super::FormState;
use super::schema::{Constraint, FieldSpec, Rule, Schema};
use super::submit::{Gateway, Session, SubmitOutcome};
use std::fmt;

pub static SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec {
            name: "email",
            optional: false,
            constraints: &[Constraint {
                rule: Rule::Email,
                message: "common:validation.emailInvalid",
            }],
        },
        FieldSpec {
            name: "password",
            optional: false,
            constraints: &[Constraint {
                rule: Rule::Required,
                message: "common:validation.passwordRequired",
            }],
        },
    ],
};

#[derive(Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    password: String,
    pub remember_me: bool,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>, remember_me: bool) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember_me,
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"********")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    state: FormState,
    remember_me: bool,
    show_password: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            state: FormState::new(&SCHEMA),
            remember_me: false,
            show_password: false,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.state.set(field, value)
    }

    pub fn set_remember_me(&mut self, remember: bool) {
        self.remember_me = remember;
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    /// The eye button next to the password field.
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn submit(&mut self, gateway: &dyn Gateway) -> SubmitOutcome<Session> {
        if self.state.is_pending() {
            return SubmitOutcome::Busy;
        }
        if !self.state.validate() {
            return SubmitOutcome::Invalid(self.state.errors().clone());
        }
        self.state.begin();
        let request = LoginRequest::new(
            self.state.value("email"),
            self.state.value("password"),
            self.remember_me,
        );
        let result = gateway.authenticate(&request);
        self.state.finish();
        match result {
            Ok(session) => SubmitOutcome::Sent(session),
            Err(err) => {
                // A failed attempt never keeps the password around.
                self.state.clear("password");
                SubmitOutcome::Failed(err)
            }
        }
    }
}
