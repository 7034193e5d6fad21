use chrono::NaiveDate;
use validator::ValidationError;

pub fn validate_required(value: &String) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("is_required");
        error.message = Some(std::borrow::Cow::from("Це поле обов'язкове"));
        Err(error)
    } else {
        Ok(())
    }
}

pub fn validate_digits(value: &String) -> Result<(), ValidationError> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("digits_only");
        error.message = Some(std::borrow::Cow::from("Телефон повинен містити лише цифри"));
        Err(error)
    }
}

/// Booked dates are stored as plain YYYY-MM-DD strings.
pub fn validate_date_format(value: &String) -> Result<(), ValidationError> {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_date");
        error.message = Some(std::borrow::Cow::from("Невірний формат дати"));
        Err(error)
    }
}
