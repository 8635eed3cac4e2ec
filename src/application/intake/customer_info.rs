//! Customer details validation.

use crate::domain::entities::CustomerInfo;
use crate::error::IntakeError;
use crate::utils::phone_normalizer::{is_valid_phone, normalize_phone};

/// Validates the `name` and `phoneNumber` form fields.
///
/// Presence is checked on the raw values, before the phone number is
/// normalized: `"  "` counts as present but normalizes to an empty string
/// and is then rejected as a bad format.
///
/// # Errors
///
/// - [`IntakeError::MissingField`] if either field is absent or empty
/// - [`IntakeError::InvalidPhoneFormat`] if the phone number does not
///   normalize to exactly 10 digits
pub fn validate_customer_info(
    raw_name: Option<&str>,
    raw_phone: Option<&str>,
) -> Result<CustomerInfo, IntakeError> {
    let (Some(name), Some(phone)) = (raw_name, raw_phone) else {
        return Err(IntakeError::MissingField);
    };

    if name.is_empty() || phone.is_empty() {
        return Err(IntakeError::MissingField);
    }

    let phone_number = normalize_phone(phone);
    if !is_valid_phone(&phone_number) {
        return Err(IntakeError::InvalidPhoneFormat);
    }

    Ok(CustomerInfo::new(name.to_string(), phone_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_customer_is_normalized() {
        let info = validate_customer_info(Some("Asha"), Some("(555) 123-4567")).unwrap();

        assert_eq!(info.name(), "Asha");
        assert_eq!(info.phone_number(), "5551234567");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            validate_customer_info(None, Some("5551234567")),
            Err(IntakeError::MissingField)
        );
        assert_eq!(
            validate_customer_info(Some("Asha"), None),
            Err(IntakeError::MissingField)
        );
        assert_eq!(
            validate_customer_info(None, None),
            Err(IntakeError::MissingField)
        );
    }

    #[test]
    fn test_empty_fields_are_missing() {
        assert_eq!(
            validate_customer_info(Some(""), Some("5551234567")),
            Err(IntakeError::MissingField)
        );
        assert_eq!(
            validate_customer_info(Some("Asha"), Some("")),
            Err(IntakeError::MissingField)
        );
    }

    #[test]
    fn test_missing_takes_precedence_over_format() {
        assert_eq!(
            validate_customer_info(None, Some("12345")),
            Err(IntakeError::MissingField)
        );
    }

    #[test]
    fn test_short_phone_is_invalid() {
        assert_eq!(
            validate_customer_info(Some("Asha"), Some("12345")),
            Err(IntakeError::InvalidPhoneFormat)
        );
    }

    #[test]
    fn test_blank_phone_is_invalid_format() {
        assert_eq!(
            validate_customer_info(Some("Asha"), Some("   ")),
            Err(IntakeError::InvalidPhoneFormat)
        );
    }

    #[test]
    fn test_name_kept_verbatim() {
        let info = validate_customer_info(Some("  Dr. Asha <3 "), Some("5551234567")).unwrap();

        assert_eq!(info.name(), "  Dr. Asha <3 ");
    }
}
