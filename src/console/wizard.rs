//! Step-wise form wizard.
//!
//! A [`Wizard`] owns a flat record of string fields and a step cursor. Forward
//! navigation is gated on the current step's required fields being non-blank;
//! backward navigation is free. Submission re-validates every data-bearing step,
//! converts the record into its typed request body, and only clears the record once
//! the request has succeeded.

use std::future::Future;

use dioxus_logger::tracing;

use crate::error::{ApiError, Error, FormError};

/// A single input of a [`StepForm`].
pub trait FormField: Copy + Eq + 'static {
    /// Wire/field name
    fn name(&self) -> &'static str;

    /// Human readable label
    fn label(&self) -> &'static str;
}

/// A record collected by a [`Wizard`].
pub trait StepForm: Default + Clone {
    type Field: FormField;
    /// Typed request body the record converts into on submit.
    type Output;

    /// Step titles in order. Steps after [`StepForm::last_data_step`] are review-only.
    const STEPS: &'static [&'static str];

    /// Every field, in review order.
    const FIELDS: &'static [Self::Field];

    /// Fields that must be non-blank before leaving `step`.
    fn required(step: usize) -> &'static [Self::Field];

    fn value(&self, field: Self::Field) -> &str;

    fn set(&mut self, field: Self::Field, value: String);

    /// Cross-field checks run after the required-field check passes.
    fn check_step(&self, _step: usize) -> Result<(), FormError> {
        Ok(())
    }

    /// Convert the validated record into its request body.
    fn build(&self) -> Result<Self::Output, FormError>;

    fn last_data_step() -> usize {
        (0..Self::STEPS.len())
            .rev()
            .find(|step| !Self::required(*step).is_empty())
            .unwrap_or(0)
    }

    /// Step that collects `field`, if any step requires it.
    fn step_of(name: &str) -> Option<usize> {
        (0..Self::STEPS.len()).find(|step| {
            Self::required(*step)
                .iter()
                .any(|field| field.name() == name)
        })
    }
}

/// Drives a [`StepForm`] through its steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard<F: StepForm> {
    form: F,
    step: usize,
    submitting: bool,
}

impl<F: StepForm> Default for Wizard<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: StepForm> Wizard<F> {
    pub fn new() -> Self {
        Self::with_form(F::default())
    }

    pub fn with_form(form: F) -> Self {
        Self {
            form,
            step: 0,
            submitting: false,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn last_step(&self) -> usize {
        F::STEPS.len().saturating_sub(1)
    }

    pub fn is_last_step(&self) -> bool {
        self.step >= self.last_step()
    }

    pub fn title(&self) -> &'static str {
        F::STEPS.get(self.step).copied().unwrap_or_default()
    }

    /// `true` while a submission is awaiting the backend.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn value(&self, field: F::Field) -> &str {
        self.form.value(field)
    }

    pub fn set(&mut self, field: F::Field, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    /// Label/value pairs for the review step.
    pub fn review(&self) -> Vec<(&'static str, &str)> {
        F::FIELDS
            .iter()
            .map(|field| (field.label(), self.form.value(*field)))
            .collect()
    }

    /// `true` iff every required field of `step` is non-blank after trimming.
    pub fn validate_step(&self, step: usize) -> bool {
        self.check_step(step).is_ok()
    }

    pub fn check_step(&self, step: usize) -> Result<(), FormError> {
        let missing: Vec<&'static str> = F::required(step)
            .iter()
            .filter(|field| self.form.value(**field).trim().is_empty())
            .map(|field| field.name())
            .collect();

        if !missing.is_empty() {
            return Err(FormError::MissingFields {
                step,
                fields: missing,
            });
        }

        self.form.check_step(step)
    }

    /// Advance one step if the current one validates.
    pub fn next(&mut self) -> Result<usize, FormError> {
        if let Err(err) = self.check_step(self.step) {
            tracing::warn!(step = self.step, "{}", err);
            return Err(err);
        }

        self.step = (self.step + 1).min(self.last_step());
        tracing::debug!(step = self.step, "wizard advanced");

        Ok(self.step)
    }

    /// Go back one step. Never validates and never moves below the first step.
    pub fn back(&mut self) -> usize {
        self.step = self.step.saturating_sub(1);
        self.step
    }

    /// Validate every data-bearing step and build the request body.
    ///
    /// On failure the cursor jumps to the offending step and nothing is sent. On
    /// success the wizard is marked as submitting until [`Wizard::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<F::Output, FormError> {
        if self.submitting {
            return Err(FormError::SubmitInFlight);
        }

        for step in 0..=F::last_data_step() {
            if let Err(err) = self.check_step(step) {
                tracing::warn!(step, "{}", err);
                self.step = step;
                return Err(err);
            }
        }

        let output = match self.form.build() {
            Ok(output) => output,
            Err(err) => {
                let step = match &err {
                    FormError::InvalidValue { field, .. } => F::step_of(field),
                    _ => None,
                };
                self.step = step.unwrap_or_else(F::last_data_step);
                tracing::warn!(step = self.step, "{}", err);
                return Err(err);
            }
        };

        self.submitting = true;
        Ok(output)
    }

    /// Settle a submission. Only success clears the record, so failures can be retried.
    pub fn finish_submit<T, E>(&mut self, result: &Result<T, E>) {
        self.submitting = false;
        if result.is_ok() {
            self.reset();
        }
    }

    /// Restore the record's defaults and return to the first step.
    pub fn reset(&mut self) {
        self.form = F::default();
        self.step = 0;
    }

    /// Validate, send with `send`, and settle the submission.
    pub async fn submit<T, S, Fut>(&mut self, send: S) -> Result<T, Error>
    where
        S: FnOnce(F::Output) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let output = self.begin_submit()?;
        let result = send(output).await;
        self.finish_submit(&result);

        Ok(result?)
    }
}
