//! # duka-core: Pure Business Logic for Duka POS
//!
//! This crate is the **heart** of Duka POS. It contains the cart and
//! checkout state machines as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Duka POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Terminal (apps/terminal)                       │   │
//! │  │    products ──► add/qty/rm ──► checkout ──► pay ──► receipt    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ duka-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ checkout  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ Checkout  │  │   │
//! │  │   │   User    │  │  VAT calc │  │ CartLine  │  │ Selection │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  duka-api (HTTP client)                         │   │
//! │  │          auth login, catalog reads, ledger submission           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, User, Transaction, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart engine (lines, quantities, derived totals)
//! - [`checkout`] - The checkout state machine (tender, submit, settle)
//! - [`error`] - Domain error types
//! - [`validation`] - Free-text input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here; the
//!    checkout hands its request to the caller instead of submitting it
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use duka_core::money::Money;
//! use duka_core::types::TaxRate;
//!
//! // Create money from cents (never from floats!)
//! let subtotal = Money::from_cents(25000); // KES 250.00
//!
//! // Calculate VAT at the standard Kenyan rate
//! let rate = TaxRate::from_bps(duka_core::VAT_RATE_BPS); // 16%
//! let tax = subtotal.calculate_tax(rate);
//!
//! // KES 250.00 at 16% = KES 40.00
//! assert_eq!(tax.cents(), 4000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use duka_core::Money` instead of
// `use duka_core::money::Money`

pub use cart::{Cart, CartLine};
pub use checkout::{
    Checkout, CheckoutOutcome, CheckoutPhase, PaymentSelection, SubmitOutcome, TransactionReceipt,
    TransactionRequest, TransactionRequestItem,
};
pub use error::{CheckoutError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Standard-rate Kenyan VAT in basis points (16%).
///
/// ## Why a constant?
/// Every new cart prices at this rate unless a deployment overrides it via
/// terminal configuration. Keeping it here, next to the math that uses it,
/// means the core never reads configuration itself.
pub const VAT_RATE_BPS: u32 = 1600;

/// ISO 4217 code of the operating currency.
///
/// Display-only: amounts are plain cents internally and nothing converts
/// between currencies.
pub const CURRENCY_CODE: &str = "KES";
