//! Data model, validation and submit orchestration for the contact form.

pub mod calendar;
pub mod controller;
pub mod domain;
pub mod error;
pub mod rules;
pub mod sink;

pub use calendar::{DateDisplayFormat, DatePicker, MonthView};
pub use controller::{
    Clock, FieldStatus, FixedClock, FormController, LocalClock, ResetPolicy, SubmitOutcome,
};
pub use domain::{Category, FieldId, FieldValue, FormValues, Gender};
pub use error::{FormError, ValidationError, ValidationKind};
pub use rules::{FieldDescriptor, Rule};
pub use sink::{render_report, SubmitSink};
