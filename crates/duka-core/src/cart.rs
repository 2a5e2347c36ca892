//! # Cart Engine
//!
//! The in-progress sale: an ordered list of lines, one per product, with
//! totals derived on demand.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                    │
//! │                                                                         │
//! │  Cashier Action            Engine Operation        Cart Change          │
//! │  ──────────────            ────────────────        ───────────          │
//! │                                                                         │
//! │  Pick / scan product ────► add_item() ───────────► qty += 1 or push    │
//! │                                                                         │
//! │  Edit quantity ──────────► set_quantity() ───────► qty = n (≤0 drops)  │
//! │                                                                         │
//! │  Remove line ────────────► remove_item() ────────► line dropped        │
//! │                                                                         │
//! │  Void sale ──────────────► clear() ──────────────► all lines dropped   │
//! │                                                                         │
//! │  Totals strip ───────────► subtotal()/tax()/total() (read only)        │
//! │                                                                         │
//! │  NOTE: every operation is total. Unknown ids are silent no-ops and     │
//! │        nothing here returns an error.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived, Never Cached
//! `subtotal`, `tax` and `total` walk the lines on every call. There is no
//! stored total to drift out of sync with the lines, so any mutation is
//! immediately reflected in the next read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Product, TaxRate};
use crate::VAT_RATE_BPS;

// =============================================================================
// Cart Line
// =============================================================================

/// One product in the cart, with its quantity.
///
/// ## Design Notes
/// Holds a full copy of the product, not a reference into the catalog
/// listing. A catalog refresh mid-sale must not change a price that is
/// already rung up; the copy freezes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Frozen product copy taken when the line was created.
    pub product: Product,

    /// Quantity on this line. Always >= 1; a line that would drop to zero
    /// is removed instead.
    pub quantity: i64,

    /// Per-line discount in cents. Carried through to the ledger but never
    /// set by any operation today, so it is always zero.
    pub discount_cents: i64,

    /// When this line was first rung up.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn new(product: &Product) -> Self {
        CartLine {
            product: product.clone(),
            quantity: 1,
            discount_cents: 0,
            added_at: Utc::now(),
        }
    }

    /// Line total: frozen unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The in-progress sale.
///
/// ## Invariants
/// - At most one line per product id; re-adding increments its quantity.
/// - Every line has quantity >= 1.
/// - Lines keep insertion order across quantity edits.
///
/// Lines are private: the only mutations are the engine operations below,
/// which is what keeps the invariants from leaking out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    tax_rate: TaxRate,
}

impl Cart {
    /// Creates an empty cart at the standard VAT rate.
    pub fn new() -> Self {
        Cart::with_tax_rate(TaxRate::from_bps(VAT_RATE_BPS))
    }

    /// Creates an empty cart at a specific tax rate (deployment override).
    pub fn with_tax_rate(tax_rate: TaxRate) -> Self {
        Cart {
            lines: Vec::new(),
            tax_rate,
        }
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity increases by one.
    /// - Otherwise: a new line is appended with quantity one.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine::new(product));
    }

    /// Removes the line for a product. Silent no-op when absent.
    pub fn remove_item(&mut self, product_id: i64) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Sets the quantity of a line to an exact value.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: the line is removed (same as `remove_item`).
    /// - Otherwise: the quantity is replaced, not added.
    /// - Product not in cart: silent no-op.
    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Removes all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of line totals, before tax.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }

    /// VAT on the subtotal as a whole (not summed per line).
    pub fn tax(&self) -> Money {
        self.subtotal().calculate_tax(self.tax_rate)
    }

    /// Grand total: subtotal + tax.
    pub fn total(&self) -> Money {
        self.subtotal() + self.tax()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// The lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for a product, if present.
    pub fn line(&self, product_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// The tax rate this cart prices at.
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }
}

/// Default cart is empty at the standard VAT rate, not zero-rated.
impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
