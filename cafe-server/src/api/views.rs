//! Request bodies and response views shared by the form endpoints

use serde::{Deserialize, Serialize};
use shared::forms::{FormFields, FormSnapshot, FormState, OrderForm, OrderSnapshot};

use crate::sessions::{FormSlot, WithBanner};

/// Body of `PUT .../fields/{field}`
#[derive(Debug, Clone, Deserialize)]
pub struct FieldChange {
    #[serde(default)]
    pub value: String,
}

pub type FormView<F> = WithBanner<FormSnapshot<F>>;
pub type OrderView = WithBanner<OrderSnapshot>;

/// Accepted submission plus the form as it looks afterwards
#[derive(Debug, Clone, Serialize)]
pub struct Submitted<R, V> {
    pub record: R,
    pub form: V,
}

pub fn form_view<F>(slot: &FormSlot<FormState<F>>) -> FormView<F>
where
    F: FormFields + Serialize,
{
    WithBanner {
        form: slot.form.snapshot(),
        banner_visible: slot.banner().is_visible(),
    }
}

pub fn order_view(slot: &FormSlot<OrderForm>) -> OrderView {
    WithBanner {
        form: slot.form.snapshot(),
        banner_visible: slot.banner().is_visible(),
    }
}
