//! Contact form fields

use crate::error::AppResult;
use crate::models::ContactMessage;
use crate::validation::Field;

use super::FormFields;

impl FormFields for ContactMessage {
    type Record = ContactMessage;

    const FIELDS: &'static [Field] = &[Field::Name, Field::Email, Field::Message];

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
            _ => "",
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
            _ => {}
        }
    }

    fn to_record(&self) -> AppResult<Self::Record> {
        Ok(self.clone())
    }
}
