//! # Validation Module
//!
//! Input validation utilities for Duka POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal command parsing                                     │
//! │  ├── Shape checks (arity, token kinds)                                 │
//! │  └── Immediate cashier feedback                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Field-level rules on free text                                    │
//! │  └── Typed errors with field names                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend                                                      │
//! │  ├── Schema validation                                                 │
//! │  └── Stock and business checks                                         │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use duka_core::validation::{parse_quantity, validate_search_query};
//!
//! // Validate a search before hitting the catalog
//! let query = validate_search_query("  milk ").unwrap();
//! assert_eq!(query, "milk");
//!
//! // Quantities must be whole numbers
//! assert_eq!(parse_quantity("3").unwrap(), 3);
//! assert!(parse_quantity("2.5").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog search query.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.is_empty() {
        return Err(ValidationError::Required {
            field: "query".to_string(),
        });
    }

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

/// Validates a scanned or typed barcode.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Maximum 64 characters
/// - Alphanumeric only (EAN/UPC are digits; Code 128 allows letters)
///
/// ## Returns
/// The trimmed barcode string.
pub fn validate_barcode(code: &str) -> ValidationResult<String> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "barcode".to_string(),
        });
    }

    if code.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "barcode".to_string(),
            max: 64,
        });
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "barcode".to_string(),
            reason: "must contain only letters and digits".to_string(),
        });
    }

    Ok(code.to_string())
}

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a quantity typed by the cashier.
///
/// ## Rules
/// - Must be a whole number; "2.5" is rejected, not rounded
/// - Negative and zero are allowed (the cart treats them as removal)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  qty 7 3                                                                │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_quantity("3") ← THIS FUNCTION                                   │
/// │       │                                                                 │
/// │       ├── "2.5"?  → Error: "must be a whole number"                    │
/// │       │                                                                 │
/// │       ├── "abc"?  → Error: "must be a number"                          │
/// │       │                                                                 │
/// │       └── OK → cart.set_quantity(7, 3)                                 │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    if input.contains('.') {
        return Err(ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        });
    }

    input
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a number".to_string(),
        })
}

/// Parses a product id argument.
///
/// Ids come from the catalog listing, so anything non-numeric is a typo.
pub fn parse_product_id(input: &str) -> ValidationResult<i64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    input
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "product id".to_string(),
            reason: "must be a number".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("milk").unwrap(), "milk");
        assert_eq!(validate_search_query("  sugar 1kg  ").unwrap(), "sugar 1kg");

        assert!(validate_search_query("").is_err());
        assert!(validate_search_query("   ").is_err());
        assert!(validate_search_query(&"a".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_barcode() {
        assert_eq!(validate_barcode("5901234123457").unwrap(), "5901234123457");
        assert_eq!(validate_barcode(" ABC123 ").unwrap(), "ABC123");

        assert!(validate_barcode("").is_err());
        assert!(validate_barcode("has space").is_err());
        assert!(validate_barcode(&"9".repeat(100)).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3").unwrap(), 3);
        assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
        // Zero and negative pass through; the cart turns them into removal
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity("-1").unwrap(), -1);

        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("2.5").is_err());
        assert!(parse_quantity("abc").is_err());
    }

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("7").unwrap(), 7);
        assert!(parse_product_id("").is_err());
        assert!(parse_product_id("seven").is_err());
    }
}
