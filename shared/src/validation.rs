//! Field validation
//!
//! One pure function per form field. Every rule returns the error text shown
//! next to the field, or an empty string when the value is acceptable.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern"));
static CITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s-]+$").expect("city pattern"));
static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("zip pattern"));
static CARD_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{13,19}$").expect("card number pattern"));
static EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/([0-9]{2})$").expect("expiry pattern"));
static CVV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("cvv pattern"));

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_MESSAGE_LEN: usize = 10;
pub const MIN_STREET_LEN: usize = 3;
pub const MIN_GUESTS: i64 = 1;
pub const MAX_GUESTS: i64 = 20;
pub const PHONE_DIGITS: usize = 10;

/// Every field known to any form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    // Contact
    Name,
    Email,
    Message,
    // Reservation (shares `Name`)
    Date,
    Time,
    Guests,
    Phone,
    // Checkout address
    Street,
    City,
    Zip,
    // Checkout payment
    CardNumber,
    Expiry,
    Cvv,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
            Field::Date => "date",
            Field::Time => "time",
            Field::Guests => "guests",
            Field::Phone => "phone",
            Field::Street => "street",
            Field::City => "city",
            Field::Zip => "zip",
            Field::CardNumber => "cardNumber",
            Field::Expiry => "expiry",
            Field::Cvv => "cvv",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "message" => Ok(Field::Message),
            "date" => Ok(Field::Date),
            "time" => Ok(Field::Time),
            "guests" => Ok(Field::Guests),
            "phone" => Ok(Field::Phone),
            "street" => Ok(Field::Street),
            "city" => Ok(Field::City),
            "zip" => Ok(Field::Zip),
            "cardNumber" | "cardnumber" => Ok(Field::CardNumber),
            "expiry" => Ok(Field::Expiry),
            "cvv" => Ok(Field::Cvv),
            other => Err(AppError::invalid_request(format!("Unknown field: {other}"))),
        }
    }
}

/// The moment validation runs against
///
/// Reservation dates compare with the UTC calendar date, card expiry with
/// the local year and month. Tests pin both with [`ValidationContext::on`]
/// or [`ValidationContext::at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    utc_today: NaiveDate,
    local_today: NaiveDate,
}

impl ValidationContext {
    pub fn now() -> Self {
        Self::at(Local::now())
    }

    /// Dates as seen at `moment` in its own time zone
    pub fn at<Tz: TimeZone>(moment: DateTime<Tz>) -> Self {
        Self {
            utc_today: moment.naive_utc().date(),
            local_today: moment.naive_local().date(),
        }
    }

    /// Same calendar date in UTC and locally
    pub fn on(today: NaiveDate) -> Self {
        Self {
            utc_today: today,
            local_today: today,
        }
    }

    /// UTC calendar date
    pub fn utc_today(&self) -> NaiveDate {
        self.utc_today
    }

    /// Local calendar date
    pub fn local_today(&self) -> NaiveDate {
        self.local_today
    }

    fn utc_today_iso(&self) -> String {
        self.utc_today().format("%Y-%m-%d").to_string()
    }
}

/// Validate `value` for `field`; empty string means valid
pub fn validate_field(field: Field, value: &str, ctx: &ValidationContext) -> String {
    let message = match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Message => validate_message(value),
        Field::Date => validate_date(value, ctx),
        Field::Time => validate_time(value),
        Field::Guests => validate_guests(value),
        Field::Phone => validate_phone(value),
        Field::Street => validate_street(value),
        Field::City => validate_city(value),
        Field::Zip => validate_zip(value),
        Field::CardNumber => validate_card_number(value),
        Field::Expiry => validate_expiry(value, ctx),
        Field::Cvv => validate_cvv(value),
    };
    message.map(str::to_string).unwrap_or_default()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn validate_name(value: &str) -> Option<&'static str> {
    (char_len(value) < MIN_NAME_LEN).then_some("Name must be at least 2 characters long")
}

pub fn validate_email(value: &str) -> Option<&'static str> {
    (!EMAIL_RE.is_match(value)).then_some("Please enter a valid email address")
}

pub fn validate_message(value: &str) -> Option<&'static str> {
    (char_len(value) < MIN_MESSAGE_LEN).then_some("Message must be at least 10 characters long")
}

pub fn validate_street(value: &str) -> Option<&'static str> {
    (char_len(value) < MIN_STREET_LEN).then_some("Street must be at least 3 characters long")
}

pub fn validate_city(value: &str) -> Option<&'static str> {
    (!CITY_RE.is_match(value)).then_some("City must contain only letters, spaces, or hyphens")
}

pub fn validate_zip(value: &str) -> Option<&'static str> {
    (!ZIP_RE.is_match(value))
        .then_some("ZIP code must be 5 digits or 5+4 digits (e.g., 12345 or 12345-6789)")
}

pub fn validate_card_number(value: &str) -> Option<&'static str> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    (!CARD_NUMBER_RE.is_match(&compact)).then_some("Card number must be 13-19 digits")
}

/// MM/YY, and the card month must come strictly after the current month
pub fn validate_expiry(value: &str, ctx: &ValidationContext) -> Option<&'static str> {
    let Some(caps) = EXPIRY_RE.captures(value) else {
        return Some("Expiry date must be in MM/YY format");
    };
    let (Ok(month), Ok(yy)) = (caps[1].parse::<u32>(), caps[2].parse::<i32>()) else {
        return Some("Expiry date must be in MM/YY format");
    };

    let year = 2000 + yy;
    let today = ctx.local_today();
    if (year, month) <= (today.year(), today.month()) {
        return Some("Expiry date must be in the future");
    }
    None
}

pub fn validate_cvv(value: &str) -> Option<&'static str> {
    (!CVV_RE.is_match(value)).then_some("CVV must be 3 or 4 digits")
}

/// Lexical comparison with today's UTC ISO date, not calendar-aware
pub fn validate_date(value: &str, ctx: &ValidationContext) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Date is required");
    }
    if value < ctx.utc_today_iso().as_str() {
        return Some("Date must be in the future");
    }
    None
}

/// Presence only: no opening-hours or table availability check
pub fn validate_time(value: &str) -> Option<&'static str> {
    value.is_empty().then_some("Time is required")
}

pub fn validate_guests(value: &str) -> Option<&'static str> {
    match parse_guests(value) {
        Some(_) => None,
        None => Some("Guests must be between 1 and 20"),
    }
}

/// Party size if `value` is an integer within [1, 20]
pub fn parse_guests(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| (MIN_GUESTS..=MAX_GUESTS).contains(n))
        .and_then(|n| u8::try_from(n).ok())
}

pub fn validate_phone(value: &str) -> Option<&'static str> {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    (digits != PHONE_DIGITS).then_some("Phone must be a 10-digit number")
}
