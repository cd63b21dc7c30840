//! Client-side form validation.
//!
//! Every request type the API client accepts can only be built through one
//! of the constructors here, so malformed input is rejected before any
//! network call is made.

use serde::Serialize;
use thiserror::Error;

pub const PHONE_DIGITS: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid phone number: please enter a valid 10-digit phone number")]
    InvalidPhone,

    #[error("Invalid amount: please enter a positive amount")]
    InvalidAmount,

    #[error("{0} is required")]
    Required(&'static str),
}

impl ValidationError {
    /// Short heading for a notice, e.g. "Invalid Phone Number".
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::InvalidPhone => "Invalid Phone Number",
            ValidationError::InvalidAmount => "Invalid Amount",
            ValidationError::Required(_) => "Missing Field",
        }
    }
}

pub fn validate_phone(phone: &str) -> Result<&str, ValidationError> {
    if phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(phone)
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Keep only digits and cap at ten, applied while the user types.
pub fn sanitize_phone_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_DIGITS)
        .collect()
}

pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAmount)?;

    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(ValidationError::InvalidAmount)
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(trimmed)
    }
}

/// Body of the add-money and withdraw endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundsRequest {
    phone: String,
    amount: f64,
}

impl FundsRequest {
    pub fn new(phone: &str, amount: &str) -> Result<Self, ValidationError> {
        let phone = validate_phone(phone.trim())?.to_string();
        let amount = parse_amount(amount)?;
        Ok(Self { phone, amount })
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Body of the signup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    full_name: String,
    phone: String,
    password: String,
    referral_code: String,
}

impl SignupRequest {
    pub fn new(
        full_name: &str,
        phone: &str,
        password: &str,
        referral_code: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let full_name = required(full_name, "Full name")?.to_string();
        let phone = validate_phone(phone.trim())?.to_string();
        if password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }

        Ok(Self {
            full_name,
            phone,
            password: password.to_string(),
            referral_code: referral_code.map(str::trim).unwrap_or_default().to_string(),
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// Body of the login endpoint. The phone is not format-checked here, the
/// server decides whether the credentials are valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    phone: String,
    password: String,
}

impl LoginRequest {
    pub fn new(phone: &str, password: &str) -> Result<Self, ValidationError> {
        let phone = required(phone, "Phone number")?.to_string();
        if password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }
        Ok(Self {
            phone,
            password: password.to_string(),
        })
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("9876543210").is_ok());
        assert_eq!(validate_phone("12345"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone("98765432101"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone("98765x3210"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone(""), Err(ValidationError::InvalidPhone));
        // Non-ASCII digits do not count.
        assert_eq!(validate_phone("٩٨٧٦٥٤٣٢١٠"), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_sanitize_phone_input() {
        assert_eq!(sanitize_phone_input("+91 98765-43210"), "9198765432");
        assert_eq!(sanitize_phone_input("abc"), "");
        assert_eq!(sanitize_phone_input("12345"), "12345");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("250"), Ok(250.0));
        assert_eq!(parse_amount(" 12.5 "), Ok(12.5));
        assert_eq!(parse_amount("-5"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount("0"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount("abc"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount("NaN"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount("inf"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount(""), Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn test_funds_request_rejects_negative_amount() {
        assert_eq!(
            FundsRequest::new("9876543210", "-5"),
            Err(ValidationError::InvalidAmount)
        );
    }

    #[test]
    fn test_funds_request_rejects_short_phone() {
        let err = FundsRequest::new("12345", "100").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone);
        assert!(err.to_string().to_lowercase().contains("invalid phone number"));
    }

    #[test]
    fn test_funds_request_serializes() {
        let request = FundsRequest::new("9876543210", "100").unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "phone": "9876543210", "amount": 100.0 }));
    }

    #[test]
    fn test_signup_request() {
        let request = SignupRequest::new("  Rohit Sharma ", "9876543210", "secret", None).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fullName"], "Rohit Sharma");
        assert_eq!(json["referralCode"], "");

        assert_eq!(
            SignupRequest::new(" ", "9876543210", "secret", None),
            Err(ValidationError::Required("Full name"))
        );
        assert_eq!(
            SignupRequest::new("Rohit", "98765", "secret", Some("IPL25")),
            Err(ValidationError::InvalidPhone)
        );
        assert_eq!(
            SignupRequest::new("Rohit", "9876543210", "", None),
            Err(ValidationError::Required("Password"))
        );
    }

    #[test]
    fn test_login_request_requires_fields() {
        assert!(LoginRequest::new("9876543210", "pw").is_ok());
        assert_eq!(
            LoginRequest::new("", "pw"),
            Err(ValidationError::Required("Phone number"))
        );
        assert_eq!(
            LoginRequest::new("9876543210", ""),
            Err(ValidationError::Required("Password"))
        );
    }
}
