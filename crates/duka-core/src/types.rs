//! # Domain Types
//!
//! Core domain types used throughout Duka POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │  Transaction    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ledger)    │   │  id (ledger)    │   │  id (ledger)    │       │
//! │  │  sku / barcode  │   │  username       │   │  transaction_   │       │
//! │  │  name           │   │  full_name      │   │      code       │       │
//! │  │  price_cents    │   │  role           │   │  total_cents    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │      Role       │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Admin          │   │  Cash           │       │
//! │  │  1600 = 16%     │   │  Manager        │   │  Card           │       │
//! │  └─────────────────┘   │  Cashier        │   │  MobileMoney    │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All entities are read models owned by the backend; ids are the ledger's
//! integer primary keys and arrive over the wire. Nothing here mutates
//! catalog or ledger state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1600 bps = 16% (Kenyan standard-rate VAT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product from the catalog, read-only on this side.
///
/// The client never edits products; it copies them into cart lines so a
/// mid-session catalog refresh cannot change a price already rung up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier (backend primary key).
    pub id: i64,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Barcode (EAN-13, UPC-A, etc.). Absent for loose goods.
    pub barcode: Option<String>,

    /// Display name shown to cashier and on receipt.
    pub name: String,

    /// Optional description for product details.
    pub description: Option<String>,

    /// Category the product belongs to, if classified.
    pub category_id: Option<i64>,

    /// Category label for display.
    pub category_name: Option<String>,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Cost in cents (for margin reports; not shown at the till).
    pub cost_cents: Option<i64>,

    /// Stock on hand as of the last catalog fetch.
    pub stock_quantity: i64,

    /// Stock level at which the product counts as running low.
    pub reorder_level: i64,

    /// Whether product is active (soft delete).
    pub is_active: bool,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether stock has fallen to or below the reorder level.
    ///
    /// Display hint only. Stock is advisory at the till: the catalog
    /// snapshot may be stale and the ledger is the authority, so adding
    /// to cart is never blocked on this.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity <= self.reorder_level
    }
}

// =============================================================================
// User & Role
// =============================================================================

/// Access role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Cashier,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Cashier => "cashier",
        };
        write!(f, "{label}")
    }
}

/// The signed-in operator, as reported by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Name shown in the session header ("Welcome, ...").
    pub full_name: String,
    pub role: Role,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays.
///
/// Wire tags are snake_case ("cash", "card", "mobile_money") to match the
/// ledger's transaction schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash; the only method with tender and change.
    Cash,
    /// Card payment on external terminal.
    Card,
    /// Mobile money transfer (M-Pesa and friends).
    MobileMoney,
}

impl PaymentMethod {
    /// Human-readable label for screens and receipts.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::MobileMoney => "Mobile Money",
        }
    }

    /// Cash is the only method where tendered can exceed the total.
    #[inline]
    pub const fn is_cash(&self) -> bool {
        matches!(self, PaymentMethod::Cash)
    }
}

/// A fresh payment screen starts on cash, the dominant tender here.
impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Transaction (history read model)
// =============================================================================

/// A settled transaction as the ledger reports it.
///
/// Amounts are converted to cents at the wire boundary; `created_at` and
/// `status` stay as the ledger's strings since the client only displays
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// Human-readable receipt code (e.g. "TXN-20260825-0042").
    pub transaction_code: String,
    /// Operator who rang the sale up.
    pub user_id: i64,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    /// Ledger payment-method string ("cash", "card", ...), displayed verbatim.
    pub payment_method: String,
    /// Ledger status string, displayed verbatim.
    pub status: String,
    /// Ledger timestamp string, displayed verbatim.
    pub created_at: String,
    pub cashier_name: Option<String>,
    /// Line items; populated by the single-transaction lookup, empty in
    /// list responses.
    pub items: Vec<TransactionItem>,
}

impl Transaction {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// A line item of a settled transaction.
/// Name and unit price are the ledger's frozen snapshot, not catalog state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
}

impl TransactionItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
