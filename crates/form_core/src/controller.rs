//! Form controller: owns the field values, per-field status and errors, and
//! orchestrates submit-time validation.

use chrono::{Local, NaiveDate};

use crate::{
    domain::{FieldId, FieldMap, FieldValue, FormValues},
    error::{FormError, ValidationError},
    rules::{contact_form, FieldDescriptor, Rule},
    sink::SubmitSink,
};

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the current calendar day in the local time zone.
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Pristine,
    Touched,
    Valid,
    Invalid,
}

/// What happens to the values after a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPolicy {
    #[default]
    Keep,
    ResetToDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(FormValues),
    Rejected(Vec<ValidationError>),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

pub struct FormController {
    descriptors: FieldMap<FieldDescriptor>,
    values: FormValues,
    errors: FieldMap<Option<ValidationError>>,
    status: FieldMap<FieldStatus>,
    submit_attempts: u32,
    reset_policy: ResetPolicy,
    clock: Box<dyn Clock>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        let descriptors = contact_form();
        let values = default_values(&descriptors);
        Self {
            descriptors,
            values,
            errors: FieldMap::from_fn(|_| None),
            status: FieldMap::from_fn(|_| FieldStatus::Pristine),
            submit_attempts: 0,
            reset_policy: ResetPolicy::default(),
            clock: Box::new(LocalClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    pub fn reset_policy(&self) -> ResetPolicy {
        self.reset_policy
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn descriptor(&self, field: FieldId) -> &FieldDescriptor {
        self.descriptors.get(field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn get_value(&self, field: FieldId) -> FieldValue {
        self.values.get(field)
    }

    pub fn set_value(&mut self, field: FieldId, value: FieldValue) -> Result<(), FormError> {
        if let Err(rejected) = self.values.set(field, value) {
            return Err(FormError::TypeMismatch {
                field,
                expected: self.descriptors.get(field).default.kind(),
                actual: rejected.kind(),
            });
        }

        *self.status.get_mut(field) = FieldStatus::Touched;
        // Once the user has tried to submit, errors track edits live.
        if self.submit_attempts > 0 {
            let today = self.clock.today();
            self.validate_field(field, today);
        }
        tracing::debug!(field = %field, "field updated");
        Ok(())
    }

    pub fn error(&self, field: FieldId) -> Option<&ValidationError> {
        self.errors.get(field).as_ref()
    }

    /// Current errors in field declaration order.
    pub fn errors(&self) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter_map(|(_, error)| error.as_ref())
            .collect()
    }

    pub fn status(&self, field: FieldId) -> FieldStatus {
        *self.status.get(field)
    }

    pub fn submit_attempts(&self) -> u32 {
        self.submit_attempts
    }

    pub fn register_rule(&mut self, field: FieldId, rule: Rule) {
        self.descriptors.get_mut(field).rules.push(rule);
    }

    pub fn submit(&mut self, sink: &mut dyn SubmitSink) -> SubmitOutcome {
        let today = self.clock.today();
        self.submit_on(today, sink)
    }

    /// Validates every field against `today`. The sink is only called when
    /// all rules pass, and receives its own copy of the values.
    pub fn submit_on(&mut self, today: NaiveDate, sink: &mut dyn SubmitSink) -> SubmitOutcome {
        self.submit_attempts = self.submit_attempts.saturating_add(1);

        let failures: Vec<ValidationError> = FieldId::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(field, today))
            .collect();

        if !failures.is_empty() {
            tracing::debug!(
                failing = ?failures.iter().map(|e| e.field.key()).collect::<Vec<_>>(),
                "submit blocked by validation"
            );
            return SubmitOutcome::Rejected(failures);
        }

        let snapshot = self.values.clone();
        sink.deliver(snapshot.clone());
        tracing::debug!(attempt = self.submit_attempts, "submit delivered");

        if self.reset_policy == ResetPolicy::ResetToDefaults {
            self.reset();
        }
        SubmitOutcome::Submitted(snapshot)
    }

    pub fn reset(&mut self) {
        self.values = default_values(&self.descriptors);
        self.errors = FieldMap::from_fn(|_| None);
        self.status = FieldMap::from_fn(|_| FieldStatus::Pristine);
        self.submit_attempts = 0;
    }

    fn validate_field(&mut self, field: FieldId, today: NaiveDate) -> Option<ValidationError> {
        let value = self.values.get(field);
        match self.descriptors.get(field).validate(&value, today) {
            Ok(()) => {
                *self.errors.get_mut(field) = None;
                *self.status.get_mut(field) = FieldStatus::Valid;
                None
            }
            Err(error) => {
                *self.errors.get_mut(field) = Some(error.clone());
                *self.status.get_mut(field) = FieldStatus::Invalid;
                Some(error)
            }
        }
    }
}

fn default_values(descriptors: &FieldMap<FieldDescriptor>) -> FormValues {
    let mut values = FormValues::default();
    for (field, descriptor) in descriptors.iter() {
        if let Err(rejected) = values.set(field, descriptor.default.clone()) {
            tracing::warn!(field = %field, kind = rejected.kind(), "ignoring mistyped default");
        }
    }
    values
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
