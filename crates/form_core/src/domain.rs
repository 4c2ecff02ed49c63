use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Feedback,
    Inquiry,
    Support,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Feedback, Category::Inquiry, Category::Support];

    pub fn label(self) -> &'static str {
        match self {
            Category::Feedback => "Feedback",
            Category::Inquiry => "Inquiry",
            Category::Support => "Support",
        }
    }
}

/// Identifies one field of the contact form. `ALL` is the declaration order,
/// which is also the order rules are evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Email,
    Age,
    Gender,
    Category,
    Message,
    Subscribe,
    Agree,
    AppointmentDate,
}

impl FieldId {
    pub const ALL: [FieldId; 9] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Age,
        FieldId::Gender,
        FieldId::Category,
        FieldId::Message,
        FieldId::Subscribe,
        FieldId::Agree,
        FieldId::AppointmentDate,
    ];

    /// Serialized key of the field in a [`FormValues`] snapshot.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Age => "age",
            FieldId::Gender => "gender",
            FieldId::Category => "category",
            FieldId::Message => "message",
            FieldId::Subscribe => "subscribe",
            FieldId::Agree => "agree",
            FieldId::AppointmentDate => "appointmentDate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email address",
            FieldId::Age => "Age",
            FieldId::Gender => "Gender",
            FieldId::Category => "Category",
            FieldId::Message => "Message",
            FieldId::Subscribe => "Subscribe to the newsletter",
            FieldId::Agree => "I agree to the terms of use",
            FieldId::AppointmentDate => "Preferred date",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A fixed-size table keyed by [`FieldId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap<T>([T; 9]);

impl<T> FieldMap<T> {
    pub fn from_fn(mut f: impl FnMut(FieldId) -> T) -> Self {
        Self(FieldId::ALL.map(&mut f))
    }

    pub fn get(&self, field: FieldId) -> &T {
        &self.0[field.index()]
    }

    pub fn get_mut(&mut self, field: FieldId) -> &mut T {
        &mut self.0[field.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &T)> {
        FieldId::ALL.into_iter().zip(self.0.iter())
    }
}

/// The value currently bound to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(Option<u32>),
    Gender(Gender),
    Category(Option<Category>),
    Flag(bool),
    Date(Option<NaiveDate>),
}

impl FieldValue {
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Number(_) => "number",
            FieldValue::Gender(_) => "gender",
            FieldValue::Category(_) => "category",
            FieldValue::Flag(_) => "flag",
            FieldValue::Date(_) => "date",
        }
    }

    /// True for the "nothing entered" state of every variant: empty text,
    /// unset number/category/date and an unchecked flag. Gender always holds
    /// a choice.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Number(value) => value.is_none(),
            FieldValue::Gender(_) => false,
            FieldValue::Category(value) => value.is_none(),
            FieldValue::Flag(checked) => !checked,
            FieldValue::Date(value) => value.is_none(),
        }
    }
}

/// Full record of the contact form. Every key is always present; "empty"
/// fields hold their unset sentinel and serialize as `""`, `false` or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    pub gender: Gender,
    pub category: Option<Category>,
    pub message: String,
    pub subscribe: bool,
    pub agree: bool,
    pub appointment_date: Option<NaiveDate>,
}

impl FormValues {
    pub fn get(&self, field: FieldId) -> FieldValue {
        match field {
            FieldId::Name => FieldValue::Text(self.name.clone()),
            FieldId::Email => FieldValue::Text(self.email.clone()),
            FieldId::Age => FieldValue::Number(self.age),
            FieldId::Gender => FieldValue::Gender(self.gender),
            FieldId::Category => FieldValue::Category(self.category),
            FieldId::Message => FieldValue::Text(self.message.clone()),
            FieldId::Subscribe => FieldValue::Flag(self.subscribe),
            FieldId::Agree => FieldValue::Flag(self.agree),
            FieldId::AppointmentDate => FieldValue::Date(self.appointment_date),
        }
    }

    /// Stores `value` into `field`. On a variant mismatch the value is handed
    /// back unchanged.
    pub fn set(&mut self, field: FieldId, value: FieldValue) -> Result<(), FieldValue> {
        match (field, value) {
            (FieldId::Name, FieldValue::Text(text)) => self.name = text,
            (FieldId::Email, FieldValue::Text(text)) => self.email = text,
            (FieldId::Age, FieldValue::Number(age)) => self.age = age,
            (FieldId::Gender, FieldValue::Gender(gender)) => self.gender = gender,
            (FieldId::Category, FieldValue::Category(category)) => self.category = category,
            (FieldId::Message, FieldValue::Text(text)) => self.message = text,
            (FieldId::Subscribe, FieldValue::Flag(checked)) => self.subscribe = checked,
            (FieldId::Agree, FieldValue::Flag(checked)) => self.agree = checked,
            (FieldId::AppointmentDate, FieldValue::Date(date)) => self.appointment_date = date,
            (_, other) => return Err(other),
        }
        Ok(())
    }
}
