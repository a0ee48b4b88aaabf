//! Checkout form fields: delivery address plus payment

use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::{Address, Payment};
use crate::validation::Field;

use super::FormFields;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutDraft {
    pub address: Address,
    pub payment: Payment,
}

impl FormFields for CheckoutDraft {
    type Record = (Address, Payment);

    const FIELDS: &'static [Field] = &[
        Field::Street,
        Field::City,
        Field::Zip,
        Field::CardNumber,
        Field::Expiry,
        Field::Cvv,
    ];

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Street => &self.address.street,
            Field::City => &self.address.city,
            Field::Zip => &self.address.zip,
            Field::CardNumber => &self.payment.card_number,
            Field::Expiry => &self.payment.expiry,
            Field::Cvv => &self.payment.cvv,
            _ => "",
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Street => self.address.street = value,
            Field::City => self.address.city = value,
            Field::Zip => self.address.zip = value,
            Field::CardNumber => self.payment.card_number = value,
            Field::Expiry => self.payment.expiry = value,
            Field::Cvv => self.payment.cvv = value,
            _ => {}
        }
    }

    fn to_record(&self) -> AppResult<Self::Record> {
        Ok((self.address.clone(), self.payment.clone()))
    }
}
