//! Donation form.
//!
//! The amount is a free numeric field plus a row of preset buttons. A preset
//! writes straight into the amount field, replacing whatever was typed, and
//! goes through the same bounds check on submit as a manual entry.
//!
//! Unlike the contact form, a successful donation leaves the fields as they
//! were so the donor still sees what they gave.

use super::FormState;
use super::schema::{Constraint, FieldSpec, Rule, Schema, parse_number};
use super::submit::{Gateway, Receipt, SubmitOutcome};
use crate::analytics::{AnalyticsSink, Event};
use serde::Serialize;

pub const MIN_AMOUNT: f64 = 5.0;
pub const MAX_AMOUNT: f64 = 10_000.0;

pub static SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec {
            name: "amount",
            optional: false,
            constraints: &[
                Constraint {
                    rule: Rule::Numeric,
                    message: "common:validation.amountNumber",
                },
                Constraint {
                    rule: Rule::Min(MIN_AMOUNT),
                    message: "common:validation.amountMin",
                },
                Constraint {
                    rule: Rule::Max(MAX_AMOUNT),
                    message: "common:validation.amountMax",
                },
            ],
        },
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
            name: "message",
            optional: true,
            constraints: &[],
        },
    ],
};

/// A validated donation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonationFormData {
    pub amount: f64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Render an amount without trailing zeros: `25`, `12.50`.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

#[derive(Debug, Clone)]
pub struct DonationForm {
    state: FormState,
    presets: Vec<u32>,
}

impl DonationForm {
    pub fn new(presets: &[u32], default_amount: u32) -> Self {
        let default_amount = default_amount.to_string();
        Self {
            state: FormState::with_defaults(&SCHEMA, &[("amount", &default_amount)]),
            presets: presets.to_vec(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn presets(&self) -> &[u32] {
        &self.presets
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.state.set(field, value)
    }

    /// Press a preset button. Unknown presets are ignored.
    pub fn select_preset(&mut self, preset: u32) -> bool {
        if !self.presets.contains(&preset) {
            return false;
        }
        self.state.set("amount", preset.to_string())
    }

    /// Current amount, if the field holds a number.
    pub fn amount(&self) -> Option<f64> {
        parse_number(self.state.value("amount"))
    }

    /// The preset matching the current amount, for highlighting.
    pub fn selected_preset(&self) -> Option<u32> {
        let amount = self.amount()?;
        self.presets
            .iter()
            .copied()
            .find(|p| f64::from(*p) == amount)
    }

    fn data(&self) -> Option<DonationFormData> {
        let message = self.state.value("message");
        Some(DonationFormData {
            amount: self.amount()?,
            name: self.state.value("name").to_string(),
            email: self.state.value("email").to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
        })
    }

    pub fn begin_submit(&mut self) -> Result<DonationFormData, SubmitOutcome<Receipt>> {
        if self.state.is_pending() {
            return Err(SubmitOutcome::Busy);
        }
        if !self.state.validate() {
            return Err(SubmitOutcome::Invalid(self.state.errors().clone()));
        }
        // validate() guarantees the amount parses
        let Some(data) = self.data() else {
            return Err(SubmitOutcome::Invalid(self.state.errors().clone()));
        };
        self.state.begin();
        Ok(data)
    }

    pub fn finish(&mut self) {
        self.state.finish();
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
        let result = gateway.process_donation(&data);
        self.finish();
        match result {
            Ok(receipt) => {
                sink.record(&Event::Donation {
                    amount: data.amount,
                });
                SubmitOutcome::Sent(receipt)
            }
            Err(err) => SubmitOutcome::Failed(err),
        }
    }
}
