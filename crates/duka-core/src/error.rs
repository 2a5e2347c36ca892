//! # Error Types
//!
//! Domain-specific error types for duka-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  duka-core errors (this file)                                          │
//! │  ├── CheckoutError    - Checkout precondition/state violations         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  duka-api errors (separate crate)                                      │
//! │  └── ApiError         - Backend communication failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → terminal notice                               │
//! │        CheckoutError  → terminal notice (state unchanged)              │
//! │        ApiError       → SubmitOutcome::Rejected → terminal notice      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (amounts, field names)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Checkout Error
// =============================================================================

/// Checkout state machine violations.
///
/// Every variant is a rejected operation: the machine is left exactly as it
/// was, and the message is what the cashier sees.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout was started with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout was started while a payment flow is already open.
    #[error("A payment is already in progress")]
    AlreadyActive,

    /// A payment-screen operation arrived while no payment screen is open.
    #[error("No payment in progress")]
    NotAwaitingPayment,

    /// Cash tender does not cover the total.
    ///
    /// ## When This Occurs
    /// - Cashier confirms a cash payment with too little tendered
    /// - Tender text failed to parse, so it counted as zero
    ///
    /// ## User Workflow
    /// ```text
    /// tender 200  (total is KES 290.00)
    ///      │
    ///      ▼
    /// pay
    ///      │
    ///      ▼
    /// InsufficientTender { tendered: 200.00, total: 290.00 }
    ///      │
    ///      ▼
    /// Screen shows: "Amount tendered KES 200.00 is less than total KES 290.00"
    /// ```
    #[error("Amount tendered {tendered} is less than total {total}")]
    InsufficientTender { tendered: Money, total: Money },

    /// A second confirmation (or a cancel) arrived while a submission is
    /// already on the wire. The first submission stands.
    #[error("Submission already in progress")]
    SubmissionInFlight,

    /// A submission outcome was reported while nothing was submitted.
    #[error("No submission in progress")]
    NotSubmitting,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when free-text input doesn't meet requirements, before any
/// state is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. a fractional quantity).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_error_messages() {
        assert_eq!(CheckoutError::EmptyCart.to_string(), "Cart is empty");

        let err = CheckoutError::InsufficientTender {
            tendered: Money::from_cents(20000),
            total: Money::from_cents(29000),
        };
        assert_eq!(
            err.to_string(),
            "Amount tendered KES 200.00 is less than total KES 290.00"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "query".to_string(),
        };
        assert_eq!(err.to_string(), "query is required");

        let err = ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "quantity has invalid format: must be a whole number"
        );
    }
}
