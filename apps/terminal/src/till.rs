//! # Till
//!
//! One cashier session: the cart, the checkout coordinator, the session
//! context, and the API clients, driven by parsed commands.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Till                                          │
//! │                                                                          │
//! │  Command ──► dispatch ──► handler ──► duka-core (rules)                 │
//! │                              │                                           │
//! │                              ├──► duka-api (catalog / ledger)           │
//! │                              │                                           │
//! │                              └──► render (text to print)                │
//! │                                                                          │
//! │  Every handler returns a String; failures become printed notices and    │
//! │  the till is always left in a well-defined state.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::{debug, info, warn};

use duka_api::{CatalogClient, LedgerClient, SessionContext, DEFAULT_HISTORY_LIMIT};
use duka_core::{
    Cart, Checkout, CheckoutOutcome, CheckoutPhase, PaymentMethod, Product, SubmitOutcome,
};

use crate::command::Command;
use crate::config::TerminalConfig;
use crate::render;

/// A signed-in till session.
pub struct Till {
    config: TerminalConfig,
    session: SessionContext,
    catalog: CatalogClient,
    ledger: LedgerClient,
    cart: Cart,
    checkout: Checkout,
    /// Last fetched product listing; `add` resolves against it.
    listing: Vec<Product>,
}

impl Till {
    pub fn new(
        config: TerminalConfig,
        session: SessionContext,
        catalog: CatalogClient,
        ledger: LedgerClient,
    ) -> Self {
        let cart = Cart::with_tax_rate(config.tax_rate);
        Till {
            config,
            session,
            catalog,
            ledger,
            cart,
            checkout: Checkout::new(),
            listing: Vec::new(),
        }
    }

    /// Prompt reflecting the checkout phase.
    pub fn prompt(&self) -> &'static str {
        match self.checkout.phase() {
            CheckoutPhase::Idle => "duka> ",
            CheckoutPhase::AwaitingPayment | CheckoutPhase::Submitting => "pay> ",
        }
    }

    /// Session banner for startup.
    pub fn banner(&self) -> String {
        render::banner(&self.config, &self.session.user)
    }

    /// Fetches the catalog into the listing. Called once at startup so
    /// `add` works immediately.
    pub async fn load_catalog(&mut self) -> String {
        match self.catalog.all().await {
            Ok(products) => {
                self.listing = products;
                format!("{} products loaded.", self.listing.len())
            }
            Err(err) => err.to_string(),
        }
    }

    /// Executes one command and returns the text to print.
    pub async fn dispatch(&mut self, command: Command) -> String {
        match command {
            Command::Products => self.handle_products().await,
            Command::Search { query } => self.handle_search(&query).await,
            Command::Scan { barcode } => self.handle_scan(&barcode).await,
            Command::Add { product_id } => self.handle_add(product_id),
            Command::Quantity {
                product_id,
                quantity,
            } => self.handle_quantity(product_id, quantity),
            Command::Remove { product_id } => self.handle_remove(product_id),
            Command::ShowCart => render::cart_view(&self.config, &self.cart),
            Command::ClearCart => self.handle_clear(),
            Command::Checkout => self.handle_checkout(),
            Command::Method { method } => self.handle_method(method),
            Command::Tender { input } => self.handle_tender(input),
            Command::Pay => self.handle_pay().await,
            Command::Cancel => self.handle_cancel(),
            Command::History => self.handle_history().await,
            Command::Transaction { id } => self.handle_transaction(id).await,
            Command::Whoami => self.handle_whoami(),
            Command::Help => render::help_text().to_string(),
            Command::Quit => "Goodbye.".to_string(),
        }
    }

    // =========================================================================
    // Catalog Commands
    // =========================================================================

    async fn handle_products(&mut self) -> String {
        debug!("products command");

        match self.catalog.all().await {
            Ok(products) => {
                self.listing = products;
                render::product_table(&self.config, &self.listing)
            }
            Err(err) => err.to_string(),
        }
    }

    async fn handle_search(&mut self, query: &str) -> String {
        debug!(query = %query, "search command");

        match self.catalog.search(query).await {
            Ok(products) => {
                self.listing = products;
                render::product_table(&self.config, &self.listing)
            }
            Err(err) => err.to_string(),
        }
    }

    async fn handle_scan(&mut self, barcode: &str) -> String {
        debug!(barcode = %barcode, "scan command");

        match self.catalog.by_barcode(barcode).await {
            Ok(product) => {
                self.cart.add_item(&product);
                info!(product_id = product.id, "Scanned into cart");
                format!(
                    "Added {}.\n{}",
                    product.name,
                    render::cart_view(&self.config, &self.cart)
                )
            }
            // An unknown barcode renders as "Product not found"
            Err(err) => err.to_string(),
        }
    }

    // =========================================================================
    // Cart Commands
    // =========================================================================

    fn handle_add(&mut self, product_id: i64) -> String {
        debug!(product_id, "add command");

        let Some(product) = self.listing.iter().find(|p| p.id == product_id).cloned() else {
            return format!(
                "Product #{product_id} is not in the current listing. \
                 Run 'products' or 'search' first."
            );
        };

        self.cart.add_item(&product);
        format!(
            "Added {}.\n{}",
            product.name,
            render::cart_view(&self.config, &self.cart)
        )
    }

    fn handle_quantity(&mut self, product_id: i64, quantity: i64) -> String {
        debug!(product_id, quantity, "qty command");

        if self.cart.line(product_id).is_none() {
            return format!("Product #{product_id} is not in the cart.");
        }
        self.cart.set_quantity(product_id, quantity);
        render::cart_view(&self.config, &self.cart)
    }

    fn handle_remove(&mut self, product_id: i64) -> String {
        debug!(product_id, "rm command");

        if self.cart.line(product_id).is_none() {
            return format!("Product #{product_id} is not in the cart.");
        }
        self.cart.remove_item(product_id);
        render::cart_view(&self.config, &self.cart)
    }

    fn handle_clear(&mut self) -> String {
        debug!("clear command");
        self.cart.clear();
        "Cart cleared.".to_string()
    }

    // =========================================================================
    // Checkout Commands
    // =========================================================================

    fn handle_checkout(&mut self) -> String {
        debug!("checkout command");

        match self.checkout.begin(&self.cart) {
            Ok(()) => render::payment_screen(&self.config, &self.cart, &self.checkout),
            Err(err) => err.to_string(),
        }
    }

    fn handle_method(&mut self, method: PaymentMethod) -> String {
        debug!(?method, "method command");

        match self.checkout.select_method(method) {
            Ok(()) => render::payment_screen(&self.config, &self.cart, &self.checkout),
            Err(err) => err.to_string(),
        }
    }

    fn handle_tender(&mut self, input: String) -> String {
        debug!(input = %input, "tender command");

        match self.checkout.enter_tendered(input) {
            Ok(()) => render::payment_screen(&self.config, &self.cart, &self.checkout),
            Err(err) => err.to_string(),
        }
    }

    fn handle_cancel(&mut self) -> String {
        debug!("cancel command");

        match self.checkout.cancel() {
            Ok(()) => "Checkout cancelled. The cart is unchanged.".to_string(),
            Err(err) => err.to_string(),
        }
    }

    /// Confirms the payment: snapshot, single ledger call, resolve.
    async fn handle_pay(&mut self) -> String {
        debug!("pay command");

        let request = match self.checkout.prepare_submission(&self.cart) {
            Ok(request) => request,
            Err(err) => return err.to_string(),
        };

        let (outcome, session_gone) = match self.ledger.submit(&request).await {
            Ok(receipt) => (SubmitOutcome::Committed(receipt), false),
            Err(err) => {
                warn!(error = %err, "Transaction submission failed");
                let session_gone = err.requires_login();
                (
                    SubmitOutcome::Rejected {
                        message: err.to_string(),
                    },
                    session_gone,
                )
            }
        };

        match self.checkout.resolve(&mut self.cart, outcome) {
            Ok(CheckoutOutcome::Settled(receipt)) => {
                info!(
                    change = receipt.change_cents,
                    code = ?receipt.transaction_code,
                    "Transaction settled"
                );
                let settled_at = Utc::now().to_rfc3339();
                let mut out = render::receipt(&self.config, &receipt, &settled_at);

                // Reload the catalog so stock figures reflect the sale
                match self.catalog.all().await {
                    Ok(products) => self.listing = products,
                    Err(err) => {
                        warn!(error = %err, "Catalog refresh after sale failed");
                        out.push_str(&format!("\n(catalog refresh failed: {err})"));
                    }
                }
                out
            }
            Ok(CheckoutOutcome::Failed { message }) => {
                let mut out = format!("Transaction failed: {message}");
                if session_gone {
                    out.push_str("\nQuit and start the till again to sign in.");
                }
                out
            }
            Err(err) => err.to_string(),
        }
    }

    // =========================================================================
    // History & Session Commands
    // =========================================================================

    async fn handle_history(&mut self) -> String {
        debug!("history command");

        match self.ledger.recent(DEFAULT_HISTORY_LIMIT, 0).await {
            Ok(transactions) => render::history_table(&self.config, &transactions),
            Err(err) => err.to_string(),
        }
    }

    async fn handle_transaction(&mut self, id: i64) -> String {
        debug!(id, "trans command");

        match self.ledger.by_id(id).await {
            Ok(transaction) => render::transaction_detail(&self.config, &transaction),
            Err(err) => err.to_string(),
        }
    }

    fn handle_whoami(&self) -> String {
        let user = &self.session.user;
        format!("{} ({}, {})", user.full_name, user.username, user.role)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use duka_api::ApiConfig;
    use duka_core::{Role, User};

    fn test_product(id: i64, price_cents: i64) -> Product {
        Product {
            id,
            sku: format!("SKU-{id:03}"),
            barcode: None,
            name: format!("Product {id}"),
            description: None,
            category_id: None,
            category_name: None,
            price_cents,
            cost_cents: None,
            stock_quantity: 100,
            reorder_level: 10,
            is_active: true,
        }
    }

    /// A till whose backend is a port nothing listens on, so any wire call
    /// fails fast with a network error.
    fn test_till() -> Till {
        let api = ApiConfig {
            base_url: "http://127.0.0.1:9/api".to_string(),
            ..ApiConfig::default()
        };
        let session = SessionContext {
            token: "test-token".to_string(),
            user: User {
                id: 3,
                username: "jane".to_string(),
                full_name: "Jane Wanjiku".to_string(),
                role: Role::Cashier,
            },
        };
        let catalog = CatalogClient::new(api.clone(), session.clone()).unwrap();
        let ledger = LedgerClient::new(api, session.clone()).unwrap();

        let mut till = Till::new(TerminalConfig::default(), session, catalog, ledger);
        till.listing = vec![test_product(1, 10000), test_product(2, 5000)];
        till
    }

    #[test]
    fn test_prompt_follows_phase() {
        let mut till = test_till();
        assert_eq!(till.prompt(), "duka> ");

        till.handle_add(1);
        till.handle_checkout();
        assert_eq!(till.prompt(), "pay> ");

        till.handle_cancel();
        assert_eq!(till.prompt(), "duka> ");
    }

    #[test]
    fn test_add_resolves_against_listing() {
        let mut till = test_till();

        till.handle_add(1);
        till.handle_add(1);
        till.handle_add(2);
        assert_eq!(till.cart.line_count(), 2);
        assert_eq!(till.cart.total_quantity(), 3);
        assert_eq!(till.cart.total().cents(), 29000);

        let out = till.handle_add(99);
        assert!(out.contains("not in the current listing"));
        assert_eq!(till.cart.line_count(), 2);
    }

    #[test]
    fn test_quantity_and_remove_notices() {
        let mut till = test_till();
        till.handle_add(1);

        assert!(till.handle_quantity(99, 3).contains("not in the cart"));
        assert!(till.handle_remove(99).contains("not in the cart"));

        till.handle_quantity(1, 3);
        assert_eq!(till.cart.line(1).map(|l| l.quantity), Some(3));

        till.handle_quantity(1, 0);
        assert!(till.cart.is_empty());
    }

    #[test]
    fn test_checkout_requires_items() {
        let mut till = test_till();
        assert_eq!(till.handle_checkout(), "Cart is empty");
        assert_eq!(till.prompt(), "duka> ");
    }

    #[test]
    fn test_cancel_keeps_cart() {
        let mut till = test_till();
        till.handle_add(1);
        till.handle_checkout();
        till.handle_tender("200".to_string());

        let out = till.handle_cancel();
        assert!(out.contains("cart is unchanged"));
        assert_eq!(till.cart.total_quantity(), 1);
        assert_eq!(till.checkout.phase(), CheckoutPhase::Idle);
    }

    #[tokio::test]
    async fn test_failed_scan_leaves_cart_and_listing_alone() {
        let mut till = test_till();
        till.handle_add(1);

        let out = till.handle_scan("9999999999").await;
        assert!(out.contains("error"));
        assert_eq!(till.cart.total_quantity(), 1);
        assert_eq!(till.listing.len(), 2);
    }

    #[tokio::test]
    async fn test_pay_insufficient_tender_keeps_screen_open() {
        let mut till = test_till();
        till.handle_add(1);
        till.handle_checkout();
        till.handle_tender("50".to_string());

        let out = till.handle_pay().await;
        assert!(out.contains("less than total"));
        assert_eq!(till.checkout.phase(), CheckoutPhase::AwaitingPayment);
        assert!(!till.cart.is_empty());
    }

    #[tokio::test]
    async fn test_pay_network_failure_reopens_payment_screen() {
        let mut till = test_till();
        till.handle_add(1);
        till.handle_checkout();
        till.handle_tender("300".to_string());

        let out = till.handle_pay().await;
        assert!(out.starts_with("Transaction failed:"));

        // Cart and selection survive for retry or cancel
        assert_eq!(till.checkout.phase(), CheckoutPhase::AwaitingPayment);
        assert!(!till.cart.is_empty());
        assert_eq!(
            till.checkout.selection().map(|s| s.tendered_input.as_str()),
            Some("300")
        );
    }

    #[test]
    fn test_whoami() {
        let till = test_till();
        assert_eq!(till.handle_whoami(), "Jane Wanjiku (jane, cashier)");
    }
}
