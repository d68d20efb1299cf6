//! # Validation Module
//!
//! Form-input checks that run before anything reaches the GST engine or
//! the backend.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Form field (raw text)                                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  THIS MODULE: parse + business rules                                    │
//! │  ├── amounts: numeric, finite, > 0                                      │
//! │  ├── slabs: exactly 5 / 12 / 18 / 28                                    │
//! │  └── identities: email, phone, GSTIN                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  compute_gst / InvoiceTotals (total, no error path)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use smartassist_core::validation::{parse_amount, parse_slab};
//! use smartassist_core::{compute_gst, GstSlab};
//!
//! let base = parse_amount("amount", " 1000 ").unwrap();
//! let slab = parse_slab("18%").unwrap();
//! assert_eq!(slab, GstSlab::Slab18);
//!
//! let result = compute_gst(base, f64::from(slab.percentage()), false);
//! assert_eq!(result.total_amount, 1180.0);
//! ```

use crate::error::ValidationError;
use crate::slab::GstSlab;
use crate::{MAX_INVOICE_QUANTITY, MAX_TEXT_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Inputs
// =============================================================================

/// Parses a rupee amount typed by the user.
///
/// ## Rules
/// - Must not be empty
/// - Must parse as a finite number
/// - Must be greater than zero
///
/// ## Example
/// ```rust
/// use smartassist_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("price", "99.5").unwrap(), 99.5);
/// assert!(parse_amount("price", "0").is_err());
/// assert!(parse_amount("price", "abc").is_err());
/// ```
pub fn parse_amount(field: &str, input: &str) -> ValidationResult<f64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let value: f64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a number".to_string(),
    })?;

    // "inf" and "NaN" parse successfully
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Parses a slab selection. Only the four statutory rates are accepted.
pub fn parse_slab(input: &str) -> ValidationResult<GstSlab> {
    if input.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "gst slab".to_string(),
        });
    }
    input.parse()
}

/// Parses an invoice line quantity.
///
/// ## Rules
/// - Whole number
/// - Between 1 and [`MAX_INVOICE_QUANTITY`]
pub fn parse_quantity(input: &str) -> ValidationResult<u64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let qty: i64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "quantity".to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    if qty < 1 || qty as u64 > MAX_INVOICE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_INVOICE_QUANTITY as i64,
        });
    }

    Ok(qty as u64)
}

// =============================================================================
// Text Inputs
// =============================================================================

/// Validates a required short text field (a name or title).
///
/// ## Returns
/// The trimmed value.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    validate_text(field, value, MAX_TEXT_LEN)
}

/// Validates required text of at most `max` characters.
///
/// ## Returns
/// The trimmed value.
pub fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

/// Validates an email address.
///
/// Shape check only: one `@`, a non-empty local part, and a domain
/// containing a dot that neither starts nor ends the domain.
///
/// ## Returns
/// The trimmed, lower-cased address.
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "must look like name@example.com".to_string(),
    };

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.contains('@')
        || email.chars().any(char::is_whitespace)
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err(invalid());
    }

    Ok(email.to_lowercase())
}

/// Validates an Indian mobile number.
///
/// ## Rules
/// - Spaces and dashes are ignored
/// - Optional `+91` or `0` prefix
/// - Exactly 10 digits remaining, the first being 6-9
///
/// ## Returns
/// The bare 10-digit number.
///
/// ## Example
/// ```rust
/// use smartassist_core::validation::validate_phone;
///
/// assert_eq!(validate_phone("+91 98765-43210").unwrap(), "9876543210");
/// assert!(validate_phone("12345").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<String> {
    let compact: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if compact.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    let digits = compact
        .strip_prefix("+91")
        .or_else(|| (compact.len() == 11).then(|| compact.strip_prefix('0')).flatten())
        .unwrap_or(&compact);

    let well_formed = digits.len() == 10
        && digits.chars().all(|c| c.is_ascii_digit())
        && matches!(digits.as_bytes()[0], b'6'..=b'9');

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must be a 10-digit mobile number".to_string(),
        });
    }

    Ok(digits.to_string())
}

/// Validates a GSTIN (GST identification number).
///
/// ## Layout
/// ```text
/// 27 AAPFU 0939 F 1 Z V
/// ── ───── ──── ─ ─ ─ ─
/// │    │     │  │ │ │ └─ check character (alphanumeric)
/// │    │     │  │ │ └─── literal 'Z'
/// │    │     │  │ └───── entity number (alphanumeric)
/// │    │     │  └─────── PAN check letter
/// │    │     └────────── PAN digits
/// │    └──────────────── PAN letters
/// └───────────────────── state code
/// ```
///
/// ## Returns
/// The upper-cased GSTIN.
pub fn validate_gstin(gstin: &str) -> ValidationResult<String> {
    let gstin = gstin.trim().to_uppercase();

    if gstin.is_empty() {
        return Err(ValidationError::Required {
            field: "gstin".to_string(),
        });
    }

    let b = gstin.as_bytes();
    let well_formed = b.len() == 15
        && b[0..2].iter().all(u8::is_ascii_digit)
        && b[2..7].iter().all(u8::is_ascii_uppercase)
        && b[7..11].iter().all(u8::is_ascii_digit)
        && b[11].is_ascii_uppercase()
        && b[12].is_ascii_alphanumeric()
        && b[13] == b'Z'
        && b[14].is_ascii_alphanumeric();

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "gstin".to_string(),
            reason: "must be a 15-character GSTIN like 27AAPFU0939F1ZV".to_string(),
        });
    }

    Ok(gstin)
}

// =============================================================================
// Unit Tests
// =============================================================================
