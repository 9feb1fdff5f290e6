//! Simulated form submission.
//!
//! Nothing leaves the browser: a submit emits a [`SubmitIntent`] to a
//! [`SubmitSink`], waits out a fake network delay, shows the confirmation for a
//! while and then resets the form.
use crate::config::FormTimings;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmitPhase {
    /// Inputs and the submit control are disabled outside `Idle`.
    #[must_use]
    pub const fn accepts_input(self) -> bool {
        matches!(self, Self::Idle)
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form is busy ({0:?})")]
    NotIdle(SubmitPhase),
    #[error("required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("malformed email address: {0:?}")]
    InvalidEmail(String),
    #[error("could not encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Field set of one form.
pub trait FormFields: Serialize {
    /// Stable name carried on the submit intent.
    const FORM: &'static str;

    /// Names of required fields that are blank after trimming.
    fn missing_required(&self) -> Vec<&'static str>;

    /// Address that must look like an email, if the form has one.
    fn email(&self) -> Option<&str> {
        None
    }

    fn clear(&mut self);
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Loose `local@domain.tld` shape: no whitespace, a single `@`, a dotted domain.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value.trim()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

impl FormFields for ContactForm {
    const FORM: &'static str = "contact";

    fn missing_required(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, v)| blank(v))
        .map(|(k, _)| k)
        .collect()
    }

    fn email(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipForm {
    pub name: String,
    pub email: String,
    pub bike_model: String,
}

impl FormFields for MembershipForm {
    const FORM: &'static str = "membership";

    fn missing_required(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("bike_model", &self.bike_model),
        ]
        .into_iter()
        .filter(|(_, v)| blank(v))
        .map(|(k, _)| k)
        .collect()
    }

    fn email(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// What a real backend would have received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitIntent {
    pub form: &'static str,
    pub payload: serde_json::Value,
}

/// Destination for submit intents.
pub trait SubmitSink {
    fn deliver(&self, intent: &SubmitIntent);
}

/// Logs the intent and transmits nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSink;

impl SubmitSink for SimulatedSink {
    fn deliver(&self, intent: &SubmitIntent) {
        log::info!("simulated {} submission: {}", intent.form, intent.payload);
    }
}

/// Form fields plus where they are in the submit cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission<F> {
    fields: F,
    phase: SubmitPhase,
}

impl<F: FormFields> Submission<F> {
    #[must_use]
    pub fn new(fields: F) -> Self {
        Self {
            fields,
            phase: SubmitPhase::Idle,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> SubmitPhase {
        self.phase
    }

    #[must_use]
    pub const fn fields(&self) -> &F {
        &self.fields
    }

    /// Apply a field edit. Ignored (and `false`) while a submit is in flight.
    pub fn edit(&mut self, apply: impl FnOnce(&mut F)) -> bool {
        if !self.phase.accepts_input() {
            return false;
        }
        apply(&mut self.fields);
        true
    }

    /// Idle → Submitting.
    ///
    /// # Errors
    ///
    /// Rejects a second submit while one is in flight, blank required fields
    /// and a malformed email address.
    pub fn begin(&mut self) -> Result<SubmitIntent, SubmitError> {
        if self.phase != SubmitPhase::Idle {
            return Err(SubmitError::NotIdle(self.phase));
        }
        let missing = self.fields.missing_required();
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }
        if let Some(email) = self.fields.email()
            && !is_valid_email(email)
        {
            return Err(SubmitError::InvalidEmail(email.trim().to_string()));
        }
        let intent = SubmitIntent {
            form: F::FORM,
            payload: serde_json::to_value(&self.fields)?,
        };
        self.phase = SubmitPhase::Submitting;
        Ok(intent)
    }

    /// Submitting → Submitted. No-op from any other phase.
    pub fn finish(&mut self) {
        if self.phase == SubmitPhase::Submitting {
            self.phase = SubmitPhase::Submitted;
        }
    }

    /// Back to Idle with the fields cleared.
    pub fn reset(&mut self) {
        self.fields.clear();
        self.phase = SubmitPhase::Idle;
    }
}

/// Timer used between phases.
pub trait Delay {
    fn wait(&self, ms: u32) -> impl Future<Output = ()>;
}

/// Drive one full submit cycle, reporting each phase to `on_phase`.
///
/// # Errors
///
/// Returns the [`Submission::begin`] rejection; nothing is delivered or awaited
/// in that case.
pub async fn run_submission<F, D, S, P>(
    submission: &mut Submission<F>,
    delay: &D,
    sink: &S,
    timings: FormTimings,
    mut on_phase: P,
) -> Result<(), SubmitError>
where
    F: FormFields,
    D: Delay + ?Sized,
    S: SubmitSink + ?Sized,
    P: FnMut(&Submission<F>),
{
    let intent = submission.begin()?;
    sink.deliver(&intent);
    on_phase(submission);

    delay.wait(timings.submit_delay_ms).await;
    submission.finish();
    on_phase(submission);

    delay.wait(timings.display_ms).await;
    submission.reset();
    on_phase(submission);
    Ok(())
}
