//! Reservation form fields

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::ReservationRequest;
use crate::validation::{Field, parse_guests};

use super::FormFields;

/// Reservation form values as typed by the visitor
///
/// `guests` stays textual until submission so the party-size selector can hold
/// whatever the browser sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub date: String,
    pub time: String,
    pub guests: String,
    pub name: String,
    pub phone: String,
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            guests: "1".to_string(),
            name: String::new(),
            phone: String::new(),
        }
    }
}

impl FormFields for ReservationDraft {
    type Record = ReservationRequest;

    const FIELDS: &'static [Field] = &[
        Field::Date,
        Field::Time,
        Field::Guests,
        Field::Name,
        Field::Phone,
    ];

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Guests => &self.guests,
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            _ => "",
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Date => self.date = value,
            Field::Time => self.time = value,
            Field::Guests => self.guests = value,
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            _ => {}
        }
    }

    fn to_record(&self) -> AppResult<Self::Record> {
        let guests = parse_guests(&self.guests)
            .ok_or_else(|| AppError::validation("Guests must be between 1 and 20"))?;
        Ok(ReservationRequest {
            date: self.date.clone(),
            time: self.time.clone(),
            guests,
            name: self.name.clone(),
            phone: self.phone.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FormLifecycle, FormState, FormStatus};
    use crate::validation::ValidationContext;
    use chrono::NaiveDate;

    fn ctx() -> ValidationContext {
        ValidationContext::on(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
    }

    fn fill(form: &mut FormState<ReservationDraft>, date: &str) {
        form.on_field_change(Field::Date, date, &ctx()).unwrap();
        form.on_field_change(Field::Time, "19:30", &ctx()).unwrap();
        form.on_field_change(Field::Guests, "4", &ctx()).unwrap();
        form.on_field_change(Field::Name, "Dana", &ctx()).unwrap();
        form.on_field_change(Field::Phone, "(555) 123-4567", &ctx())
            .unwrap();
    }

    #[test]
    fn test_guests_start_at_one() {
        let form = FormState::<ReservationDraft>::new();
        assert_eq!(form.values().guests, "1");
        assert!(!form.can_submit());
    }

    #[test]
    fn test_past_date_rejected_without_reset() {
        let mut form = FormState::<ReservationDraft>::new();
        fill(&mut form, "2025-03-01");
        assert!(!form.can_submit());

        let err = form.on_submit(&ctx()).unwrap_err();
        let fields = &err.details.as_ref().unwrap()["fields"];
        assert_eq!(fields["date"], "Date must be in the future");
        assert_eq!(form.status(), FormStatus::Invalid);
        assert_eq!(form.values().name, "Dana");
        assert_eq!(form.values().date, "2025-03-01");
    }

    #[test]
    fn test_submit_builds_request() {
        let mut form = FormState::<ReservationDraft>::new();
        fill(&mut form, "2025-04-01");
        assert!(form.can_submit());

        let request = form.on_submit(&ctx()).unwrap();
        assert_eq!(request.guests, 4);
        assert_eq!(request.phone, "(555) 123-4567");
        assert_eq!(form.values(), &ReservationDraft::default());
        assert_eq!(form.status(), FormStatus::Submitted);
    }
}
