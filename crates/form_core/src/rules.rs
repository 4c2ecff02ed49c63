//! Validation rules and the declarative field table of the contact form.

use chrono::NaiveDate;

use crate::{
    domain::{FieldId, FieldMap, FieldValue, Gender},
    error::{ValidationError, ValidationKind},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Fails when the value is empty, unset or `false`.
    Required { message: String },
    /// Fails when a set date lies before today. Unset dates pass.
    NotBeforeToday { message: String },
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    pub fn not_before_today(message: impl Into<String>) -> Self {
        Self::NotBeforeToday {
            message: message.into(),
        }
    }

    pub fn check(
        &self,
        field: FieldId,
        value: &FieldValue,
        today: NaiveDate,
    ) -> Result<(), ValidationError> {
        match self {
            Rule::Required { message } => {
                if value.is_empty() {
                    return Err(ValidationError::new(
                        field,
                        ValidationKind::Missing,
                        message.clone(),
                    ));
                }
            }
            Rule::NotBeforeToday { message } => {
                if let FieldValue::Date(Some(date)) = value {
                    if *date < today {
                        return Err(ValidationError::new(
                            field,
                            ValidationKind::TooEarly,
                            message.clone(),
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub default: FieldValue,
    pub rules: Vec<Rule>,
}

impl FieldDescriptor {
    pub fn new(id: FieldId, default: FieldValue) -> Self {
        Self {
            id,
            default,
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules
            .iter()
            .any(|rule| matches!(rule, Rule::Required { .. }))
    }

    /// First failing rule wins; a field carries at most one error.
    pub fn validate(&self, value: &FieldValue, today: NaiveDate) -> Result<(), ValidationError> {
        self.rules
            .iter()
            .try_for_each(|rule| rule.check(self.id, value, today))
    }
}

/// Descriptors for the nine contact form fields. Every field is declared
/// here with its default and rules; there is no by-name registration.
pub fn contact_form() -> FieldMap<FieldDescriptor> {
    FieldMap::from_fn(|id| match id {
        FieldId::Name => FieldDescriptor::new(id, FieldValue::Text(String::new()))
            .rule(Rule::required("Name is required")),
        FieldId::Email => FieldDescriptor::new(id, FieldValue::Text(String::new()))
            .rule(Rule::required("Email is required")),
        FieldId::Age => FieldDescriptor::new(id, FieldValue::Number(None)),
        FieldId::Gender => FieldDescriptor::new(id, FieldValue::Gender(Gender::Other)),
        FieldId::Category => FieldDescriptor::new(id, FieldValue::Category(None))
            .rule(Rule::required("Please choose a category")),
        FieldId::Message => FieldDescriptor::new(id, FieldValue::Text(String::new()))
            .rule(Rule::required("Message is required")),
        FieldId::Subscribe => FieldDescriptor::new(id, FieldValue::Flag(false)),
        FieldId::Agree => FieldDescriptor::new(id, FieldValue::Flag(false))
            .rule(Rule::required("Please agree to the terms")),
        FieldId::AppointmentDate => FieldDescriptor::new(id, FieldValue::Date(None))
            .rule(Rule::required("Please select a date"))
            .rule(Rule::not_before_today("Date cannot be in the past")),
    })
}
