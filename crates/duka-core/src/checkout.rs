//! # Checkout Coordinator
//!
//! Drives a cart from "still ringing up" to "settled with the ledger"
//! without ever touching the network itself.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout State Machine                              │
//! │                                                                         │
//! │   ┌──────┐      begin(cart)      ┌─────────────────┐                   │
//! │   │ Idle │ ────────────────────► │ AwaitingPayment │ ◄───────┐         │
//! │   └──────┘   (empty cart is      │   (selection)   │         │         │
//! │      ▲        rejected)          └────────┬────────┘         │         │
//! │      │                                    │                  │         │
//! │      │ cancel                             │ prepare_         │ Rejected│
//! │      │ (not while                         │ submission       │ (cart & │
//! │      │  submitting)                       ▼                  │  tender │
//! │      │                           ┌─────────────────┐        │  kept)  │
//! │      │                           │   Submitting    │ ───────┘         │
//! │      │                           │ (exactly one    │                   │
//! │      │                           │  in flight)     │                   │
//! │      │                           └────────┬────────┘                   │
//! │      │                                    │ Committed                  │
//! │      │                                    ▼                            │
//! │      └──────────────── settled: cart cleared, selection dropped        │
//! │                        (momentary, never stored)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Who Does the I/O
//! The coordinator prepares a [`TransactionRequest`] and hands it to the
//! caller. The caller performs the single ledger call and reports back a
//! [`SubmitOutcome`]; [`Checkout::resolve`] then settles or reopens the
//! payment screen. Keeping the wire call outside means the whole flow,
//! including the double-submit guard, is testable with no backend at all.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::types::PaymentMethod;

// =============================================================================
// Payment Selection
// =============================================================================

/// What the cashier has picked on the payment screen.
///
/// Exists exactly as long as the payment screen is open; a fresh one is
/// created on every `begin` and dropped on cancel or settlement.
#[derive(Debug, Clone)]
pub struct PaymentSelection {
    /// Chosen payment method. Starts on cash.
    pub method: PaymentMethod,

    /// Raw tender text as typed, unvalidated. Only meaningful for cash.
    pub tendered_input: String,
}

impl PaymentSelection {
    fn new() -> Self {
        PaymentSelection {
            method: PaymentMethod::default(),
            tendered_input: String::new(),
        }
    }

    /// The tendered amount: parsed tender text, or zero when the text is
    /// empty or unparseable. Zero then fails the sufficiency check on its
    /// own, so bad input never needs its own error path.
    pub fn tendered(&self) -> Money {
        Money::parse_decimal(&self.tendered_input).unwrap_or_default()
    }
}

// =============================================================================
// Checkout Phases
// =============================================================================

/// Where the checkout currently stands. Flat mirror of the internal state
/// for rendering prompts and gating commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutPhase {
    /// No payment flow open; the cart is being edited.
    Idle,
    /// Payment screen open, cashier picking method and tender.
    AwaitingPayment,
    /// A submission is on the wire. Nothing can change until it resolves.
    Submitting,
}

/// Internal state. The selection lives inside the variant so it can only
/// exist while a payment flow is open.
#[derive(Debug)]
enum State {
    Idle,
    AwaitingPayment(PaymentSelection),
    Submitting(PaymentSelection),
}

impl Default for State {
    fn default() -> Self {
        State::Idle
    }
}

// =============================================================================
// Transaction Request & Receipt
// =============================================================================

/// One cart line as submitted to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequestItem {
    pub product_id: i64,
    pub quantity: i64,
    /// Unit price frozen at ring-up time.
    pub unit_price_cents: i64,
    pub discount_cents: i64,
}

/// The immutable snapshot sent to the ledger on confirmation.
///
/// Built from the cart and the payment selection at the moment the cashier
/// confirms; later cart edits cannot leak into an in-flight submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// Cart lines in ring-up order.
    pub items: Vec<TransactionRequestItem>,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    /// Order-level discount. Always zero today; the field travels so the
    /// ledger schema stays stable when discounts arrive.
    pub discount_cents: i64,
    pub total_cents: i64,
    pub payment_method: PaymentMethod,
    /// For cash: what the customer handed over. For every other method the
    /// ledger expects exactly the total.
    pub tendered_cents: i64,
}

impl TransactionRequest {
    fn from_cart(cart: &Cart, method: PaymentMethod, tendered: Money) -> Self {
        let items = cart
            .lines()
            .iter()
            .map(|line| TransactionRequestItem {
                product_id: line.product.id,
                quantity: line.quantity,
                unit_price_cents: line.product.price_cents,
                discount_cents: line.discount_cents,
            })
            .collect();

        TransactionRequest {
            items,
            subtotal_cents: cart.subtotal().cents(),
            tax_cents: cart.tax().cents(),
            discount_cents: 0,
            total_cents: cart.total().cents(),
            payment_method: method,
            tendered_cents: tendered.cents(),
        }
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the tendered amount as Money.
    #[inline]
    pub fn tendered(&self) -> Money {
        Money::from_cents(self.tendered_cents)
    }
}

/// What the ledger reports back for a committed transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionReceipt {
    /// Ledger id of the settled transaction, when reported.
    pub transaction_id: Option<i64>,
    /// Human-readable receipt code, when reported.
    pub transaction_code: Option<String>,
    /// Change due back to the customer. The ledger's figure is
    /// authoritative; zero for non-cash.
    pub change_cents: i64,
}

impl TransactionReceipt {
    /// Returns the change as Money.
    #[inline]
    pub fn change(&self) -> Money {
        Money::from_cents(self.change_cents)
    }
}

// =============================================================================
// Submission Outcomes
// =============================================================================

/// What the caller observed from the single ledger call.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// The ledger committed the transaction.
    Committed(TransactionReceipt),
    /// The ledger (or the wire) rejected it. The message is shown verbatim.
    Rejected { message: String },
}

/// How a resolved submission left the till.
#[derive(Debug, Clone)]
pub enum CheckoutOutcome {
    /// Sale settled: cart cleared, payment screen closed, change surfaced.
    Settled(TransactionReceipt),
    /// Submission failed: cart and payment selection are untouched, the
    /// payment screen is open again for retry or cancel.
    Failed { message: String },
}

// =============================================================================
// Checkout Coordinator
// =============================================================================

/// The checkout state machine. One per till session.
#[derive(Debug, Default)]
pub struct Checkout {
    state: State,
}

impl Checkout {
    /// Creates a coordinator in the idle phase.
    pub fn new() -> Self {
        Checkout {
            state: State::Idle,
        }
    }

    /// Current phase, for prompts and command gating.
    pub fn phase(&self) -> CheckoutPhase {
        match self.state {
            State::Idle => CheckoutPhase::Idle,
            State::AwaitingPayment(_) => CheckoutPhase::AwaitingPayment,
            State::Submitting(_) => CheckoutPhase::Submitting,
        }
    }

    /// The open payment selection, if any.
    pub fn selection(&self) -> Option<&PaymentSelection> {
        match &self.state {
            State::Idle => None,
            State::AwaitingPayment(sel) | State::Submitting(sel) => Some(sel),
        }
    }

    /// Whether a payment flow is open (awaiting or submitting).
    pub fn is_active(&self) -> bool {
        !matches!(self.state, State::Idle)
    }

    /// Whether a submission is on the wire right now.
    pub fn in_flight(&self) -> bool {
        matches!(self.state, State::Submitting(_))
    }

    /// Opens the payment screen for the current cart.
    ///
    /// ## Behavior
    /// - Empty cart: rejected, stays idle.
    /// - Already open: rejected, existing selection untouched.
    /// - Otherwise: a fresh selection (cash, no tender) is created.
    pub fn begin(&mut self, cart: &Cart) -> CheckoutResult<()> {
        if !matches!(self.state, State::Idle) {
            return Err(CheckoutError::AlreadyActive);
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.state = State::AwaitingPayment(PaymentSelection::new());
        Ok(())
    }

    /// Switches the payment method on the open payment screen.
    pub fn select_method(&mut self, method: PaymentMethod) -> CheckoutResult<()> {
        match &mut self.state {
            State::AwaitingPayment(sel) => {
                sel.method = method;
                Ok(())
            }
            State::Submitting(_) => Err(CheckoutError::SubmissionInFlight),
            State::Idle => Err(CheckoutError::NotAwaitingPayment),
        }
    }

    /// Replaces the tender text on the open payment screen.
    ///
    /// Free text at this point; it is not validated until the cashier
    /// confirms.
    pub fn enter_tendered(&mut self, input: impl Into<String>) -> CheckoutResult<()> {
        match &mut self.state {
            State::AwaitingPayment(sel) => {
                sel.tendered_input = input.into();
                Ok(())
            }
            State::Submitting(_) => Err(CheckoutError::SubmissionInFlight),
            State::Idle => Err(CheckoutError::NotAwaitingPayment),
        }
    }

    /// Advisory change display while the cashier types.
    ///
    /// `Some(tendered − total)` when paying cash with parseable tender text,
    /// `None` otherwise. May be negative; purely informational and checks
    /// nothing.
    pub fn change_preview(&self, cart: &Cart) -> Option<Money> {
        let sel = self.selection()?;
        if !sel.method.is_cash() {
            return None;
        }
        let tendered = Money::parse_decimal(&sel.tendered_input)?;
        Some(tendered - cart.total())
    }

    /// Closes the payment screen without paying. The cart is untouched.
    ///
    /// Rejected while a submission is in flight: the outcome of work
    /// already on the wire cannot be discarded.
    pub fn cancel(&mut self) -> CheckoutResult<()> {
        match self.state {
            State::AwaitingPayment(_) => {
                self.state = State::Idle;
                Ok(())
            }
            State::Submitting(_) => Err(CheckoutError::SubmissionInFlight),
            State::Idle => Err(CheckoutError::NotAwaitingPayment),
        }
    }

    /// Confirms payment: validates tender, snapshots the cart, and locks
    /// the machine into `Submitting`.
    ///
    /// ## Behavior
    /// - Cash with `parse(tender).unwrap_or(0) < total`: rejected with
    ///   [`CheckoutError::InsufficientTender`], nothing changes.
    /// - Non-cash: tender text is ignored, tendered = total.
    /// - Success: returns the request for the caller to submit exactly
    ///   once; a second call before [`Checkout::resolve`] is rejected with
    ///   [`CheckoutError::SubmissionInFlight`].
    pub fn prepare_submission(&mut self, cart: &Cart) -> CheckoutResult<TransactionRequest> {
        let sel = match &self.state {
            State::AwaitingPayment(sel) => sel,
            State::Submitting(_) => return Err(CheckoutError::SubmissionInFlight),
            State::Idle => return Err(CheckoutError::NotAwaitingPayment),
        };
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let total = cart.total();
        let tendered = if sel.method.is_cash() {
            let tendered = sel.tendered();
            if tendered < total {
                return Err(CheckoutError::InsufficientTender { tendered, total });
            }
            tendered
        } else {
            total
        };

        let request = TransactionRequest::from_cart(cart, sel.method, tendered);

        // All checks passed; move the selection into Submitting. The state
        // is known to be AwaitingPayment from the match above.
        if let State::AwaitingPayment(sel) = std::mem::take(&mut self.state) {
            self.state = State::Submitting(sel);
        }

        Ok(request)
    }

    /// Reports the outcome of the submitted request.
    ///
    /// ## Behavior
    /// - `Committed`: cart cleared, selection dropped, machine idle;
    ///   returns [`CheckoutOutcome::Settled`] with the ledger's change.
    /// - `Rejected`: cart and selection preserved, machine back to
    ///   `AwaitingPayment`; returns [`CheckoutOutcome::Failed`] so the
    ///   message can be shown and the cashier can retry or cancel.
    pub fn resolve(
        &mut self,
        cart: &mut Cart,
        outcome: SubmitOutcome,
    ) -> CheckoutResult<CheckoutOutcome> {
        match std::mem::take(&mut self.state) {
            State::Submitting(sel) => match outcome {
                SubmitOutcome::Committed(receipt) => {
                    cart.clear();
                    Ok(CheckoutOutcome::Settled(receipt))
                }
                SubmitOutcome::Rejected { message } => {
                    self.state = State::AwaitingPayment(sel);
                    Ok(CheckoutOutcome::Failed { message })
                }
            },
            other => {
                self.state = other;
                Err(CheckoutError::NotSubmitting)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn test_product(id: i64, price_cents: i64) -> Product {
        Product {
            id,
            sku: format!("SKU-{id}"),
            barcode: None,
            name: format!("Product {id}"),
            description: None,
            category_id: None,
            category_name: None,
            price_cents,
            cost_cents: None,
            stock_quantity: 10,
            reorder_level: 2,
            is_active: true,
        }
    }

    /// Two at KES 100.00 plus one at KES 50.00 → total KES 290.00.
    fn worked_cart() -> Cart {
        let mut cart = Cart::new();
        let flour = test_product(1, 10000);
        cart.add_item(&flour);
        cart.add_item(&flour);
        cart.add_item(&test_product(2, 5000));
        cart
    }

    fn receipt(change_cents: i64) -> TransactionReceipt {
        TransactionReceipt {
            transaction_id: Some(42),
            transaction_code: Some("TXN-0042".to_string()),
            change_cents,
        }
    }

    #[test]
    fn test_begin_on_empty_cart_rejected() {
        let cart = Cart::new();
        let mut checkout = Checkout::new();

        assert_eq!(checkout.begin(&cart), Err(CheckoutError::EmptyCart));
        assert_eq!(checkout.phase(), CheckoutPhase::Idle);
    }

    #[test]
    fn test_begin_opens_with_cash_and_no_tender() {
        let cart = worked_cart();
        let mut checkout = Checkout::new();

        checkout.begin(&cart).unwrap();

        assert_eq!(checkout.phase(), CheckoutPhase::AwaitingPayment);
        let sel = checkout.selection().unwrap();
        assert_eq!(sel.method, PaymentMethod::Cash);
        assert_eq!(sel.tendered_input, "");
    }

    #[test]
    fn test_begin_twice_rejected() {
        let cart = worked_cart();
        let mut checkout = Checkout::new();

        checkout.begin(&cart).unwrap();
        checkout.enter_tendered("500").unwrap();

        assert_eq!(checkout.begin(&cart), Err(CheckoutError::AlreadyActive));
        // The open selection was not reset
        assert_eq!(checkout.selection().unwrap().tendered_input, "500");
    }

    #[test]
    fn test_payment_edits_require_open_screen() {
        let mut checkout = Checkout::new();

        assert_eq!(
            checkout.select_method(PaymentMethod::Card),
            Err(CheckoutError::NotAwaitingPayment)
        );
        assert_eq!(
            checkout.enter_tendered("100"),
            Err(CheckoutError::NotAwaitingPayment)
        );
        assert_eq!(checkout.cancel(), Err(CheckoutError::NotAwaitingPayment));
    }

    #[test]
    fn test_cancel_keeps_cart() {
        let cart = worked_cart();
        let mut checkout = Checkout::new();

        checkout.begin(&cart).unwrap();
        checkout.enter_tendered("300").unwrap();
        checkout.cancel().unwrap();

        assert_eq!(checkout.phase(), CheckoutPhase::Idle);
        assert!(checkout.selection().is_none());
        assert_eq!(cart.total(), Money::from_cents(29000));
    }

    #[test]
    fn test_change_preview() {
        let cart = worked_cart();
        let mut checkout = Checkout::new();
        checkout.begin(&cart).unwrap();

        // No tender yet
        assert_eq!(checkout.change_preview(&cart), None);

        checkout.enter_tendered("300").unwrap();
        assert_eq!(
            checkout.change_preview(&cart),
            Some(Money::from_cents(1000))
        );

        // Short tender previews negative, still no rejection here
        checkout.enter_tendered("200").unwrap();
        assert_eq!(
            checkout.change_preview(&cart),
            Some(Money::from_cents(-9000))
        );

        // Unparseable text has no preview
        checkout.enter_tendered("two hundred").unwrap();
        assert_eq!(checkout.change_preview(&cart), None);

        // Non-cash never previews change
        checkout.select_method(PaymentMethod::Card).unwrap();
        checkout.enter_tendered("300").unwrap();
        assert_eq!(checkout.change_preview(&cart), None);
    }

    #[test]
    fn test_insufficient_tender_rejected_and_state_kept() {
        let cart = worked_cart();
        let mut checkout = Checkout::new();
        checkout.begin(&cart).unwrap();
        checkout.enter_tendered("200").unwrap();

        let err = checkout.prepare_submission(&cart).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::InsufficientTender {
                tendered: Money::from_cents(20000),
                total: Money::from_cents(29000),
            }
        );

        // Still awaiting payment with everything intact: fix and retry
        assert_eq!(checkout.phase(), CheckoutPhase::AwaitingPayment);
        assert_eq!(checkout.selection().unwrap().tendered_input, "200");
        assert_eq!(cart.line_count(), 2);

        checkout.enter_tendered("300").unwrap();
        assert!(checkout.prepare_submission(&cart).is_ok());
    }

    #[test]
    fn test_unparseable_tender_counts_as_zero() {
        let cart = worked_cart();
        let mut checkout = Checkout::new();
        checkout.begin(&cart).unwrap();
        checkout.enter_tendered("lots").unwrap();

        let err = checkout.prepare_submission(&cart).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::InsufficientTender {
                tendered: Money::zero(),
                total: Money::from_cents(29000),
            }
        );
    }

    #[test]
    fn test_exact_tender_accepted() {
        let cart = worked_cart();
        let mut checkout = Checkout::new();
        checkout.begin(&cart).unwrap();
        checkout.enter_tendered("290.00").unwrap();

        let request = checkout.prepare_submission(&cart).unwrap();
        assert_eq!(request.tendered_cents, 29000);
    }

    #[test]
    fn test_request_snapshot_worked_example() {
        let cart = worked_cart();
        let mut checkout = Checkout::new();
        checkout.begin(&cart).unwrap();
        checkout.enter_tendered("300").unwrap();

        let request = checkout.prepare_submission(&cart).unwrap();

        assert_eq!(request.subtotal_cents, 25000);
        assert_eq!(request.tax_cents, 4000);
        assert_eq!(request.discount_cents, 0);
        assert_eq!(request.total_cents, 29000);
        assert_eq!(request.payment_method, PaymentMethod::Cash);
        assert_eq!(request.tendered_cents, 30000);

        assert_eq!(request.items.len(), 2);
        assert_eq!(request.items[0].product_id, 1);
        assert_eq!(request.items[0].quantity, 2);
        assert_eq!(request.items[0].unit_price_cents, 10000);
        assert_eq!(request.items[0].discount_cents, 0);
        assert_eq!(request.items[1].product_id, 2);
        assert_eq!(request.items[1].quantity, 1);
    }

    #[test]
    fn test_non_cash_ignores_tender_text() {
        let cart = worked_cart();
        let mut checkout = Checkout::new();
        checkout.begin(&cart).unwrap();
        checkout.select_method(PaymentMethod::MobileMoney).unwrap();
        // Nothing tendered, still fine for non-cash
        let request = checkout.prepare_submission(&cart).unwrap();

        assert_eq!(request.payment_method, PaymentMethod::MobileMoney);
        assert_eq!(request.tendered_cents, request.total_cents);
    }

    #[test]
    fn test_double_submit_guard() {
        let cart = worked_cart();
        let mut checkout = Checkout::new();
        checkout.begin(&cart).unwrap();
        checkout.enter_tendered("300").unwrap();

        checkout.prepare_submission(&cart).unwrap();
        assert!(checkout.in_flight());

        // Second confirmation while the first is on the wire
        assert_eq!(
            checkout.prepare_submission(&cart),
            Err(CheckoutError::SubmissionInFlight)
        );
        // Cancelling and editing are blocked too
        assert_eq!(checkout.cancel(), Err(CheckoutError::SubmissionInFlight));
        assert_eq!(
            checkout.select_method(PaymentMethod::Card),
            Err(CheckoutError::SubmissionInFlight)
        );
        assert_eq!(
            checkout.enter_tendered("400"),
            Err(CheckoutError::SubmissionInFlight)
        );
    }

    #[test]
    fn test_retry_after_rejection_rebuilds_identical_request() {
        let mut cart = worked_cart();
        let mut checkout = Checkout::new();
        checkout.begin(&cart).unwrap();
        checkout.enter_tendered("300").unwrap();

        let first = checkout.prepare_submission(&cart).unwrap();
        checkout
            .resolve(
                &mut cart,
                SubmitOutcome::Rejected {
                    message: "Ledger unavailable".to_string(),
                },
            )
            .unwrap();

        // Nothing changed between attempts, so the snapshot is the same
        let second = checkout.prepare_submission(&cart).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_committed_settles() {
        let mut cart = worked_cart();
        let mut checkout = Checkout::new();
        checkout.begin(&cart).unwrap();
        checkout.enter_tendered("300").unwrap();
        checkout.prepare_submission(&cart).unwrap();

        let outcome = checkout
            .resolve(&mut cart, SubmitOutcome::Committed(receipt(1000)))
            .unwrap();

        match outcome {
            CheckoutOutcome::Settled(r) => {
                assert_eq!(r.change(), Money::from_cents(1000));
                assert_eq!(r.transaction_code.as_deref(), Some("TXN-0042"));
            }
            CheckoutOutcome::Failed { message } => panic!("unexpected failure: {message}"),
        }

        assert!(cart.is_empty());
        assert_eq!(checkout.phase(), CheckoutPhase::Idle);
        assert!(checkout.selection().is_none());
    }

    #[test]
    fn test_resolve_rejected_reopens_payment_screen() {
        let mut cart = worked_cart();
        let mut checkout = Checkout::new();
        checkout.begin(&cart).unwrap();
        checkout.enter_tendered("300").unwrap();
        checkout.prepare_submission(&cart).unwrap();

        let outcome = checkout
            .resolve(
                &mut cart,
                SubmitOutcome::Rejected {
                    message: "Insufficient stock for product 2".to_string(),
                },
            )
            .unwrap();

        match outcome {
            CheckoutOutcome::Failed { message } => {
                assert_eq!(message, "Insufficient stock for product 2");
            }
            CheckoutOutcome::Settled(_) => panic!("unexpected settlement"),
        }

        // Nothing was lost: same cart, same selection, ready to retry
        assert_eq!(cart.total(), Money::from_cents(29000));
        assert_eq!(checkout.phase(), CheckoutPhase::AwaitingPayment);
        assert_eq!(checkout.selection().unwrap().tendered_input, "300");

        let request = checkout.prepare_submission(&cart).unwrap();
        assert_eq!(request.total_cents, 29000);
    }

    #[test]
    fn test_resolve_without_submission_rejected() {
        let mut cart = worked_cart();
        let mut checkout = Checkout::new();

        let err = checkout
            .resolve(&mut cart, SubmitOutcome::Committed(receipt(0)))
            .unwrap_err();
        assert_eq!(err, CheckoutError::NotSubmitting);

        // Also rejected while merely awaiting payment
        checkout.begin(&cart).unwrap();
        let err = checkout
            .resolve(&mut cart, SubmitOutcome::Committed(receipt(0)))
            .unwrap_err();
        assert_eq!(err, CheckoutError::NotSubmitting);
        assert_eq!(checkout.phase(), CheckoutPhase::AwaitingPayment);
        assert!(!cart.is_empty());
    }

    /// The complete cash flow in one pass, as the till drives it.
    #[test]
    fn test_full_cash_flow() {
        let mut cart = worked_cart();
        let mut checkout = Checkout::new();

        checkout.begin(&cart).unwrap();
        checkout.enter_tendered("300").unwrap();
        assert_eq!(
            checkout.change_preview(&cart),
            Some(Money::from_cents(1000))
        );

        let request = checkout.prepare_submission(&cart).unwrap();
        assert_eq!(request.total(), Money::from_cents(29000));

        // ...the till performs the single ledger call here...

        let outcome = checkout
            .resolve(&mut cart, SubmitOutcome::Committed(receipt(1000)))
            .unwrap();
        assert!(matches!(outcome, CheckoutOutcome::Settled(_)));
        assert!(cart.is_empty());
        assert!(!checkout.is_active());
    }
}
