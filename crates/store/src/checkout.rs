//! Checkout and signup form validation.
//!
//! Pure validation of user-entered form data. A failed validation is
//! surfaced as a form-level message and never mutates state; a passing
//! [`CheckoutForm`] is what the caller hands to
//! [`Store::place_order`](crate::state::Store).

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use monsoon_core::ShippingAddress;

static CARD_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{16}$").expect("valid regex"));
static CARD_EXPIRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}$").expect("valid regex"));
static CARD_CVV: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3}$").expect("valid regex"));
static SIGNUP_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Errors validating the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutFormError {
    /// One or more shipping fields are blank.
    #[error("fill all shipping fields")]
    IncompleteAddress,

    /// Card number is not 16 digits.
    #[error("invalid card number")]
    InvalidCardNumber,

    /// Expiry is not `MM/YY`.
    #[error("invalid expiry (MM/YY)")]
    InvalidExpiry,

    /// CVV is not 3 digits.
    #[error("invalid CVV")]
    InvalidCvv,

    /// UPI id has no `@` handle.
    #[error("invalid UPI ID")]
    InvalidUpiId,
}

/// Payment details entered at checkout.
///
/// Held only long enough to validate; nothing is charged or stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    Card {
        /// 16 digits, whitespace tolerated.
        number: String,
        /// `MM/YY`.
        expiry: String,
        /// 3 digits.
        cvv: String,
    },
    Upi {
        /// Virtual payment address, e.g. `asha@okbank`.
        id: String,
    },
}

/// The complete checkout form: shipping address plus payment details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutForm {
    pub address: ShippingAddress,
    pub payment: PaymentMethod,
}

impl CheckoutForm {
    /// Validate all fields, address first.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: [`CheckoutFormError::IncompleteAddress`]
    /// if any shipping field is blank, then the payment-specific errors.
    pub fn validate(&self) -> Result<(), CheckoutFormError> {
        if self
            .address
            .fields()
            .iter()
            .any(|(_, value)| value.trim().is_empty())
        {
            return Err(CheckoutFormError::IncompleteAddress);
        }

        match &self.payment {
            PaymentMethod::Card {
                number,
                expiry,
                cvv,
            } => {
                let digits: String = number.split_whitespace().collect();
                if !CARD_NUMBER.is_match(&digits) {
                    return Err(CheckoutFormError::InvalidCardNumber);
                }
                if !CARD_EXPIRY.is_match(expiry) {
                    return Err(CheckoutFormError::InvalidExpiry);
                }
                if !CARD_CVV.is_match(cvv) {
                    return Err(CheckoutFormError::InvalidCvv);
                }
            }
            PaymentMethod::Upi { id } => {
                if !id.contains('@') {
                    return Err(CheckoutFormError::InvalidUpiId);
                }
            }
        }

        Ok(())
    }
}

/// Errors validating the signup form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    /// Full name shorter than 2 characters.
    #[error("full name must be at least 2 characters")]
    NameTooShort,

    /// Email does not match the `local@domain.tld` pattern.
    #[error("enter a valid email address")]
    InvalidEmail,

    /// Password shorter than 6 characters.
    #[error("password must be 6+ characters")]
    PasswordTooShort,

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Minimum signup password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum signup full-name length.
const MIN_NAME_LENGTH: usize = 2;

/// The signup form.
///
/// Validation mirrors the live form, including its email pattern (login
/// itself does no shape checking). No account is created anywhere; a
/// passing form just redirects the visitor to the login page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Validate all fields in form order.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate(&self) -> Result<(), SignupError> {
        if self.full_name.trim().len() < MIN_NAME_LENGTH {
            return Err(SignupError::NameTooShort);
        }

        if !SIGNUP_EMAIL.is_match(self.email.trim()) {
            return Err(SignupError::InvalidEmail);
        }

        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(SignupError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }

        Ok(())
    }
}
