//! # Text Rendering
//!
//! Pure string builders for everything the till prints. No state, no I/O:
//! every function takes what it shows and returns a `String`, which keeps
//! the whole presentation layer testable with plain assertions.

use duka_core::{Cart, Checkout, Product, TaxRate, Transaction, TransactionReceipt, User};

use crate::config::TerminalConfig;

/// Session banner with the store title and the signed-in operator.
pub fn banner(config: &TerminalConfig, user: &User) -> String {
    let title = format!("{} POS", config.store_name);
    let rule = "=".repeat(title.len());
    format!(
        "{rule}\n{title}\n{rule}\nWelcome, {}\nType 'help' for the command list.",
        user.full_name
    )
}

/// Product listing with a LOW marker on items at or under reorder level.
pub fn product_table(config: &TerminalConfig, products: &[Product]) -> String {
    if products.is_empty() {
        return "No products to show.".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:>5}  {:<12}  {:<28}  {:>12}  {:>6}\n",
        "ID", "SKU", "NAME", "PRICE", "STOCK"
    ));
    for product in products {
        let marker = if product.is_low_stock() { "  LOW" } else { "" };
        out.push_str(&format!(
            "{:>5}  {:<12}  {:<28}  {:>12}  {:>6}{}\n",
            product.id,
            truncate(&product.sku, 12),
            truncate(&product.name, 28),
            config.format_currency(product.price_cents),
            product.stock_quantity,
            marker
        ));
    }
    out.push_str(&format!("{} products", products.len()));
    out
}

/// The cart with per-line amounts and the totals block.
pub fn cart_view(config: &TerminalConfig, cart: &Cart) -> String {
    if cart.is_empty() {
        return "The cart is empty.".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {:<28}  {:>12}  {:>12}\n",
        "QTY", "ITEM", "UNIT", "LINE"
    ));
    for line in cart.lines() {
        out.push_str(&format!(
            "{:>4}  {:<28}  {:>12}  {:>12}\n",
            line.quantity,
            truncate(&line.product.name, 28),
            config.format_currency(line.product.price_cents),
            config.format_currency(line.line_total().cents()),
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "  {:<12} {:>14}\n",
        "Subtotal",
        config.format_currency(cart.subtotal().cents())
    ));
    out.push_str(&format!(
        "  {:<12} {:>14}\n",
        format!("Tax ({})", tax_label(cart.tax_rate())),
        config.format_currency(cart.tax().cents())
    ));
    out.push_str(&format!(
        "  {:<12} {:>14}",
        "Total",
        config.format_currency(cart.total().cents())
    ));
    out
}

/// The open payment screen: total due, method, tender, change preview.
pub fn payment_screen(config: &TerminalConfig, cart: &Cart, checkout: &Checkout) -> String {
    let Some(sel) = checkout.selection() else {
        return "No payment in progress.".to_string();
    };

    let mut out = format!(
        "Payment due: {}\n  Method:   {}\n",
        config.format_currency(cart.total().cents()),
        sel.method.label()
    );
    if sel.method.is_cash() {
        let tendered = if sel.tendered_input.is_empty() {
            "(none)"
        } else {
            sel.tendered_input.as_str()
        };
        out.push_str(&format!("  Tendered: {tendered}\n"));
        if let Some(change) = checkout.change_preview(cart) {
            out.push_str(&format!(
                "  Change:   {}\n",
                config.format_currency(change.cents())
            ));
        }
    }
    out.push_str("Confirm with 'pay', or 'cancel' to go back.");
    out
}

/// The settlement block printed after a committed sale.
pub fn receipt(config: &TerminalConfig, receipt: &TransactionReceipt, settled_at: &str) -> String {
    let mut out = format!(
        "Transaction completed! Change: {}",
        config.format_currency(receipt.change_cents)
    );
    if let Some(code) = &receipt.transaction_code {
        out.push_str(&format!("\n  Receipt: {code}"));
    } else if let Some(id) = receipt.transaction_id {
        out.push_str(&format!("\n  Receipt: #{id}"));
    }
    out.push_str(&format!("\n  Settled: {settled_at}"));
    out.push_str(&format!("\n  Store:   {}", config.store_name));
    out
}

/// Recent transactions, one line each.
pub fn history_table(config: &TerminalConfig, transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions yet.".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:>5}  {:<20}  {:<19}  {:<12}  {:>12}  {}\n",
        "ID", "CODE", "DATE", "METHOD", "TOTAL", "STATUS"
    ));
    for transaction in transactions {
        out.push_str(&format!(
            "{:>5}  {:<20}  {:<19}  {:<12}  {:>12}  {}\n",
            transaction.id,
            truncate(&transaction.transaction_code, 20),
            truncate(&transaction.created_at, 19),
            truncate(&transaction.payment_method, 12),
            config.format_currency(transaction.total_cents),
            transaction.status
        ));
    }
    out.push_str(&format!("{} transactions", transactions.len()));
    out
}

/// One settled transaction with its line items and totals.
pub fn transaction_detail(config: &TerminalConfig, transaction: &Transaction) -> String {
    let mut out = format!(
        "Transaction {} (#{})\n  Date:    {}\n",
        transaction.transaction_code, transaction.id, transaction.created_at
    );
    if let Some(cashier) = &transaction.cashier_name {
        out.push_str(&format!("  Cashier: {cashier}\n"));
    }
    out.push_str(&format!("  Method:  {}\n", transaction.payment_method));
    out.push_str(&format!("  Status:  {}\n", transaction.status));

    if !transaction.items.is_empty() {
        out.push('\n');
        for item in &transaction.items {
            out.push_str(&format!(
                "{:>4}  {:<28}  {:>12}  {:>12}\n",
                item.quantity,
                truncate(&item.product_name, 28),
                config.format_currency(item.unit_price_cents),
                config.format_currency(item.subtotal_cents),
            ));
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "  {:<12} {:>14}\n",
        "Subtotal",
        config.format_currency(transaction.subtotal_cents)
    ));
    out.push_str(&format!(
        "  {:<12} {:>14}\n",
        "Tax",
        config.format_currency(transaction.tax_cents)
    ));
    out.push_str(&format!(
        "  {:<12} {:>14}",
        "Total",
        config.format_currency(transaction.total_cents)
    ));
    out
}

pub fn help_text() -> &'static str {
    "\
Catalog:
  products                 List the catalog
  search <text>            Search products by name or SKU
  scan <barcode>           Look up a barcode and add it to the cart

Cart:
  add <product-id>         Add a listed product (repeat to increase quantity)
  qty <product-id> <n>     Set a line's quantity (0 or less removes it)
  rm <product-id>          Remove a line
  cart                     Show the cart with totals
  clear                    Empty the cart

Checkout:
  checkout                 Open the payment screen
  method cash|card|mobile  Switch payment method
  tender <amount>          Enter cash received (shows change)
  pay                      Confirm and submit the transaction
  cancel                   Close the payment screen, keep the cart

Other:
  history                  Recent transactions
  trans <id>               One transaction in detail
  whoami                   Signed-in operator
  help                     This overview
  quit                     End the session"
}

/// Percentage label for a tax rate: "16%" for whole rates, "8.25%" otherwise.
fn tax_label(rate: TaxRate) -> String {
    let pct = rate.percentage();
    if (pct - pct.round()).abs() < f64::EPSILON {
        format!("{pct:.0}%")
    } else {
        format!("{pct:.2}%")
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

// =============================================================================
// Tests
// =============================================================================
