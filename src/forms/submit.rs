//! Submission contract.
//!
//! A [`Gateway`] is whatever actually delivers a validated form: an email
//! relay, a payment processor, an auth service. None of those exist yet, so
//! [`SimulatedGateway`] stands in: it waits a fixed delay and then accepts
//! contact messages and donations. It has no credential store, so sign-in
//! always fails with [`SubmitError::Unavailable`].
//!
//! Failures are reported as [`SubmitOutcome::Failed`] and never as success.
//! There is no retry.

use super::contact::ContactFormData;
use super::donation::DonationFormData;
use super::login::LoginRequest;
use super::schema::FieldErrors;
use crate::config::SubmissionConfig;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("service unavailable: {0}")]
    Unavailable(String),
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptKind {
    Contact,
    Donation,
}

/// Acknowledgement of an accepted contact message or donation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub kind: ReceiptKind,
    pub reference: String,
}

/// An authenticated admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub token: String,
    pub persistent: bool,
}

/// Result of pressing a submit button.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// A submission is already in flight; the press was ignored.
    Busy,
    Sent(T),
    Failed(SubmitError),
}

impl<T> SubmitOutcome<T> {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent(_))
    }
}

pub trait Gateway: Send + Sync {
    fn send_contact(&self, data: &ContactFormData) -> Result<Receipt, SubmitError>;
    fn process_donation(&self, data: &DonationFormData) -> Result<Receipt, SubmitError>;
    fn authenticate(&self, request: &LoginRequest) -> Result<Session, SubmitError>;
}

/// Local stand-in for the real services.
pub struct SimulatedGateway {
    delay: Duration,
    login_delay: Duration,
    sequence: AtomicU64,
}

impl SimulatedGateway {
    pub fn new(delay: Duration, login_delay: Duration) -> Self {
        Self {
            delay,
            login_delay,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &SubmissionConfig) -> Self {
        Self::new(
            Duration::from_millis(config.delay_ms),
            Duration::from_millis(config.login_delay_ms),
        )
    }

    /// No delay; for tests and dry runs.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    fn receipt(&self, kind: ReceiptKind) -> Receipt {
        let n = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let prefix = match kind {
            ReceiptKind::Contact => "MSG",
            ReceiptKind::Donation => "DON",
        };
        Receipt {
            kind,
            reference: format!("SIM-{prefix}-{n:06}"),
        }
    }

    fn wait(&self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

impl Gateway for SimulatedGateway {
    fn send_contact(&self, _data: &ContactFormData) -> Result<Receipt, SubmitError> {
        self.wait(self.delay);
        Ok(self.receipt(ReceiptKind::Contact))
    }

    fn process_donation(&self, _data: &DonationFormData) -> Result<Receipt, SubmitError> {
        self.wait(self.delay);
        Ok(self.receipt(ReceiptKind::Donation))
    }

    fn authenticate(&self, _request: &LoginRequest) -> Result<Session, SubmitError> {
        self.wait(self.login_delay);
        Err(SubmitError::Unavailable(
            "no authentication backend configured".to_string(),
        ))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Gateway that fails every request.
    pub struct FailingGateway;

    impl Gateway for FailingGateway {
        fn send_contact(&self, _data: &ContactFormData) -> Result<Receipt, SubmitError> {
            Err(SubmitError::Network("connection reset".into()))
        }

        fn process_donation(&self, _data: &DonationFormData) -> Result<Receipt, SubmitError> {
            Err(SubmitError::Rejected("card declined".into()))
        }

        fn authenticate(&self, _request: &LoginRequest) -> Result<Session, SubmitError> {
            Err(SubmitError::Rejected("bad credentials".into()))
        }
    }

    /// Gateway that accepts one fixed admin account.
    pub struct AcceptingGateway;

    impl Gateway for AcceptingGateway {
        fn send_contact(&self, _data: &ContactFormData) -> Result<Receipt, SubmitError> {
            Ok(Receipt {
                kind: ReceiptKind::Contact,
                reference: "TEST".into(),
            })
        }

        fn process_donation(&self, _data: &DonationFormData) -> Result<Receipt, SubmitError> {
            Ok(Receipt {
                kind: ReceiptKind::Donation,
                reference: "TEST".into(),
            })
        }

        fn authenticate(&self, request: &LoginRequest) -> Result<Session, SubmitError> {
            if request.email == "admin@almare.org" && request.password() == "correct horse" {
                Ok(Session {
                    email: request.email.clone(),
                    token: "t0k3n".into(),
                    persistent: request.remember_me,
                })
            } else {
                Err(SubmitError::Rejected("bad credentials".into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn contact() -> ContactFormData {
        ContactFormData {
            name: "Ana".into(),
            email: "ana@example.org".into(),
            subject: "Voluntariado".into(),
            message: "Quiero ayudar los sábados".into(),
        }
    }

    #[test]
    fn simulated_gateway_issues_sequential_references() {
        let gateway = SimulatedGateway::instant();
        let first = gateway.send_contact(&contact()).unwrap();
        let second = gateway
            .process_donation(&DonationFormData {
                amount: 25.0,
                name: "Ana".into(),
                email: "ana@example.org".into(),
                message: None,
            })
            .unwrap();
        assert_eq!(first.reference, "SIM-MSG-000001");
        assert_eq!(first.kind, ReceiptKind::Contact);
        assert_eq!(second.reference, "SIM-DON-000002");
    }

    #[test]
    fn simulated_gateway_waits_for_delay() {
        let gateway = SimulatedGateway::new(Duration::from_millis(30), Duration::ZERO);
        let start = Instant::now();
        gateway.send_contact(&contact()).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn simulated_login_is_unavailable() {
        let gateway = SimulatedGateway::instant();
        let request = LoginRequest::new("admin@almare.org", "secret", false);
        assert!(matches!(
            gateway.authenticate(&request),
            Err(SubmitError::Unavailable(_))
        ));
    }

    #[test]
    fn from_config_uses_configured_delays() {
        let config = SubmissionConfig {
            delay_ms: 0,
            login_delay_ms: 0,
        };
        let gateway = SimulatedGateway::from_config(&config);
        assert!(gateway.delay.is_zero());
        assert!(gateway.login_delay.is_zero());
    }
}
