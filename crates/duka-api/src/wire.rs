//! # Wire Format
//!
//! Request and response bodies for the backend API, and the ONLY place in
//! the codebase where money crosses between decimal currency units (what
//! the backend speaks) and integer cents (what everything else speaks).
//!
//! ## The Boundary Rule
//! ```text
//! ┌──────────────┐   f64 units    ┌──────────────┐   i64 cents   ┌─────────┐
//! │   Backend    │ ◄────────────► │   wire.rs    │ ◄───────────► │  core   │
//! │  (JSON/HTTP) │                │ (this file)  │               │ (Money) │
//! └──────────────┘                └──────────────┘               └─────────┘
//! ```
//!
//! A `40.0` on the wire becomes `4000` cents on arrival and goes back to
//! `40.0` on departure. No other module touches `f64` money.
//!
//! ## Endpoints Covered
//!
//! | Method | Path                        | Request body      | Response body          |
//! |--------|-----------------------------|-------------------|------------------------|
//! | POST   | `/auth/login`               | [`LoginBody`]     | [`LoginResponse`]      |
//! | GET    | `/auth/me`                  | -                 | [`MeResponse`]         |
//! | GET    | `/products`                 | -                 | [`ProductsResponse`]   |
//! | GET    | `/products/search?query=`   | -                 | [`ProductsResponse`]   |
//! | GET    | `/products/barcode/{code}`  | -                 | [`ProductResponse`]    |
//! | POST   | `/transactions`             | [`TransactionBody`] | [`TransactionAck`]   |
//! | GET    | `/transactions`             | -                 | [`TransactionsResponse`] |
//! | GET    | `/transactions/{id}`        | -                 | [`TransactionDetailResponse`] |

use serde::{Deserialize, Serialize};

use duka_core::{
    PaymentMethod, Product, Role, Transaction, TransactionItem, TransactionReceipt,
    TransactionRequest, User,
};

// =============================================================================
// Unit Conversion
// =============================================================================

/// Converts decimal currency units to integer cents.
///
/// Rounds to the nearest cent, so `185.5` becomes `18550` and float noise
/// like `289.99999999999997` still lands on `29000`.
pub fn units_to_cents(units: f64) -> i64 {
    (units * 100.0).round() as i64
}

/// Converts integer cents to decimal currency units.
pub fn cents_to_units(cents: i64) -> f64 {
    cents as f64 / 100.0
}

// =============================================================================
// Auth Bodies
// =============================================================================

/// Request body for `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for all subsequent requests.
    pub token: String,
    pub user: UserBody,
}

/// Response body for `GET /auth/me`.
#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub user: UserBody,
}

/// A user as the backend reports it.
#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub role: Role,
}

impl From<UserBody> for User {
    fn from(body: UserBody) -> Self {
        User {
            id: body.id,
            username: body.username,
            full_name: body.full_name,
            role: body.role,
        }
    }
}

// =============================================================================
// Catalog Bodies
// =============================================================================

/// Response envelope for product lists (`GET /products`, search).
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductBody>,
}

/// Response envelope for a single product (barcode lookup).
#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    pub product: ProductBody,
}

/// A product as the backend reports it. Prices are decimal units here.
#[derive(Debug, Deserialize)]
pub struct ProductBody {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub sku: String,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub cost_price: Option<f64>,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub reorder_level: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Converts a wire product to the domain model.
///
/// ## Field Mapping
/// ```text
/// | Wire field (JSON) | Domain field   | Conversion                    |
/// |-------------------|----------------|-------------------------------|
/// | price             | price_cents    | units -> cents                |
/// | cost_price        | cost_cents     | units -> cents (optional)     |
/// | barcode           | barcode        | empty string -> None          |
/// | is_active         | is_active      | absent -> true                |
/// | (rest)            | (same name)    | verbatim                      |
/// ```
impl From<ProductBody> for Product {
    fn from(body: ProductBody) -> Self {
        Product {
            id: body.id,
            sku: body.sku,
            barcode: body.barcode.filter(|b| !b.is_empty()),
            name: body.name,
            description: body.description,
            category_id: body.category_id,
            category_name: body.category_name,
            price_cents: units_to_cents(body.price),
            cost_cents: body.cost_price.map(units_to_cents),
            stock_quantity: body.stock_quantity,
            reorder_level: body.reorder_level,
            is_active: body.is_active,
        }
    }
}

// =============================================================================
// Ledger Bodies (submission)
// =============================================================================

/// Request body for `POST /transactions`.
#[derive(Debug, Serialize)]
pub struct TransactionBody {
    pub items: Vec<TransactionItemBody>,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub discount_amount: f64,
    pub total_amount: f64,
    pub payment_method: PaymentMethod,
    pub amount_tendered: f64,
}

/// One line of a transaction submission.
#[derive(Debug, Serialize)]
pub struct TransactionItemBody {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub discount: f64,
}

/// Converts a prepared submission to the wire body.
///
/// ## Field Mapping
/// ```text
/// | Domain field         | Wire field (JSON)  | Conversion       |
/// |----------------------|--------------------|------------------|
/// | subtotal_cents       | subtotal           | cents -> units   |
/// | tax_cents            | tax_amount         | cents -> units   |
/// | discount_cents       | discount_amount    | cents -> units   |
/// | total_cents          | total_amount       | cents -> units   |
/// | tendered_cents       | amount_tendered    | cents -> units   |
/// | payment_method       | payment_method     | "cash" / "card" / "mobile_money" |
/// | items[].unit_price_cents | items[].unit_price | cents -> units |
/// | items[].discount_cents   | items[].discount   | cents -> units |
/// ```
impl From<&TransactionRequest> for TransactionBody {
    fn from(request: &TransactionRequest) -> Self {
        let items = request
            .items
            .iter()
            .map(|item| TransactionItemBody {
                product_id: item.product_id,
                quantity: item.quantity,
                unit_price: cents_to_units(item.unit_price_cents),
                discount: cents_to_units(item.discount_cents),
            })
            .collect();

        TransactionBody {
            items,
            subtotal: cents_to_units(request.subtotal_cents),
            tax_amount: cents_to_units(request.tax_cents),
            discount_amount: cents_to_units(request.discount_cents),
            total_amount: cents_to_units(request.total_cents),
            payment_method: request.payment_method,
            amount_tendered: cents_to_units(request.tendered_cents),
        }
    }
}

/// Response body for `POST /transactions`.
///
/// Only `change` is guaranteed; id and code are passed through when the
/// backend includes them.
#[derive(Debug, Deserialize)]
pub struct TransactionAck {
    #[serde(default)]
    pub transaction_id: Option<i64>,
    #[serde(default)]
    pub transaction_code: Option<String>,
    pub change: f64,
}

impl From<TransactionAck> for TransactionReceipt {
    fn from(ack: TransactionAck) -> Self {
        TransactionReceipt {
            transaction_id: ack.transaction_id,
            transaction_code: ack.transaction_code,
            change_cents: units_to_cents(ack.change),
        }
    }
}

// =============================================================================
// Ledger Bodies (history)
// =============================================================================

/// Response envelope for `GET /transactions`.
#[derive(Debug, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionRecordBody>,
}

/// Response envelope for `GET /transactions/{id}`.
#[derive(Debug, Deserialize)]
pub struct TransactionDetailResponse {
    pub transaction: TransactionRecordBody,
}

/// A settled transaction as the backend reports it.
#[derive(Debug, Deserialize)]
pub struct TransactionRecordBody {
    pub id: i64,
    pub transaction_code: String,
    pub user_id: i64,
    pub subtotal: f64,
    pub tax_amount: f64,
    #[serde(default)]
    pub discount_amount: f64,
    pub total_amount: f64,
    pub payment_method: String,
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub cashier_name: Option<String>,
    /// Present on the detail endpoint, absent in list responses.
    #[serde(default)]
    pub items: Vec<TransactionRecordItemBody>,
}

/// One line of a settled transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionRecordItemBody {
    pub product_id: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: i64,
    pub unit_price: f64,
    pub subtotal: f64,
    #[serde(default)]
    pub discount: f64,
}

/// Converts a wire transaction record to the domain model.
///
/// ## Field Mapping
/// ```text
/// | Wire field (JSON) | Domain field    | Conversion                     |
/// |-------------------|-----------------|--------------------------------|
/// | subtotal          | subtotal_cents  | units -> cents                 |
/// | tax_amount        | tax_cents       | units -> cents                 |
/// | discount_amount   | discount_cents  | units -> cents (absent -> 0)   |
/// | total_amount      | total_cents     | units -> cents                 |
/// | items             | items           | absent -> empty                |
/// | items[].product_name | product_name | absent -> "#<product_id>"      |
/// | (rest)            | (same name)     | verbatim                       |
/// ```
impl From<TransactionRecordBody> for Transaction {
    fn from(body: TransactionRecordBody) -> Self {
        Transaction {
            id: body.id,
            transaction_code: body.transaction_code,
            user_id: body.user_id,
            subtotal_cents: units_to_cents(body.subtotal),
            tax_cents: units_to_cents(body.tax_amount),
            discount_cents: units_to_cents(body.discount_amount),
            total_cents: units_to_cents(body.total_amount),
            payment_method: body.payment_method,
            status: body.status,
            created_at: body.created_at,
            cashier_name: body.cashier_name,
            items: body.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<TransactionRecordItemBody> for TransactionItem {
    fn from(body: TransactionRecordItemBody) -> Self {
        let product_id = body.product_id;
        TransactionItem {
            product_id,
            product_name: body
                .product_name
                .unwrap_or_else(|| format!("#{product_id}")),
            quantity: body.quantity,
            unit_price_cents: units_to_cents(body.unit_price),
            subtotal_cents: units_to_cents(body.subtotal),
            discount_cents: units_to_cents(body.discount),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use duka_core::{Cart, Checkout, Money};

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

    #[test]
    fn test_units_to_cents_rounds_to_nearest() {
        assert_eq!(units_to_cents(100.0), 10000);
        assert_eq!(units_to_cents(0.1), 10);
        assert_eq!(units_to_cents(185.5), 18550);
        assert_eq!(units_to_cents(289.99999999999997), 29000);
        assert_eq!(units_to_cents(0.0), 0);
    }

    #[test]
    fn test_cents_to_units() {
        assert_eq!(cents_to_units(29000), 290.0);
        assert_eq!(cents_to_units(50), 0.5);
        assert_eq!(cents_to_units(0), 0.0);
    }

    #[test]
    fn test_product_body_maps_price_to_cents() {
        let body: ProductBody = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Milk 500ml",
                "sku": "SKU-007",
                "barcode": "6161100000017",
                "category_id": 2,
                "category_name": "Dairy",
                "price": 65.0,
                "cost_price": 48.5,
                "stock_quantity": 30,
                "reorder_level": 12,
                "is_active": true
            }"#,
        )
        .unwrap();

        let product: Product = body.into();
        assert_eq!(product.price_cents, 6500);
        assert_eq!(product.cost_cents, Some(4850));
        assert_eq!(product.barcode.as_deref(), Some("6161100000017"));
    }

    #[test]
    fn test_product_body_tolerates_sparse_fields() {
        let body: ProductBody = serde_json::from_str(
            r#"{"id": 1, "name": "Loose Tomatoes", "sku": "SKU-001", "barcode": "", "price": 12.0}"#,
        )
        .unwrap();

        let product: Product = body.into();
        assert_eq!(product.barcode, None);
        assert_eq!(product.stock_quantity, 0);
        assert!(product.is_active);
    }

    #[test]
    fn test_transaction_body_wire_field_names() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 10000));
        cart.add_item(&test_product(1, 10000));
        cart.add_item(&test_product(2, 5000));

        let mut checkout = Checkout::new();
        checkout.begin(&cart).unwrap();
        checkout.enter_tendered("300").unwrap();
        let request = checkout.prepare_submission(&cart).unwrap();

        let body = TransactionBody::from(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["subtotal"], 250.0);
        assert_eq!(json["tax_amount"], 40.0);
        assert_eq!(json["discount_amount"], 0.0);
        assert_eq!(json["total_amount"], 290.0);
        assert_eq!(json["payment_method"], "cash");
        assert_eq!(json["amount_tendered"], 300.0);
        assert_eq!(json["items"][0]["product_id"], 1);
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["items"][0]["unit_price"], 100.0);
        assert_eq!(json["items"][0]["discount"], 0.0);
        assert_eq!(json["items"][1]["product_id"], 2);
    }

    #[test]
    fn test_transaction_ack_minimal_body() {
        let ack: TransactionAck = serde_json::from_str(r#"{"change": 10.0}"#).unwrap();
        let receipt: TransactionReceipt = ack.into();
        assert_eq!(receipt.transaction_id, None);
        assert_eq!(receipt.transaction_code, None);
        assert_eq!(receipt.change(), Money::from_cents(1000));
    }

    #[test]
    fn test_transaction_ack_full_body() {
        let ack: TransactionAck = serde_json::from_str(
            r#"{"transaction_id": 42, "transaction_code": "TXN-20260825-0042", "change": 0.0}"#,
        )
        .unwrap();
        let receipt: TransactionReceipt = ack.into();
        assert_eq!(receipt.transaction_id, Some(42));
        assert_eq!(receipt.transaction_code.as_deref(), Some("TXN-20260825-0042"));
        assert_eq!(receipt.change_cents, 0);
    }

    #[test]
    fn test_transaction_record_without_items() {
        let body: TransactionRecordBody = serde_json::from_str(
            r#"{
                "id": 42,
                "transaction_code": "TXN-20260825-0042",
                "user_id": 3,
                "subtotal": 250.0,
                "tax_amount": 40.0,
                "discount_amount": 0.0,
                "total_amount": 290.0,
                "payment_method": "cash",
                "status": "completed",
                "created_at": "2026-08-25 10:15:00",
                "cashier_name": "Jane Wanjiku"
            }"#,
        )
        .unwrap();

        let transaction: Transaction = body.into();
        assert_eq!(transaction.total_cents, 29000);
        assert_eq!(transaction.payment_method, "cash");
        assert!(transaction.items.is_empty());
    }

    #[test]
    fn test_transaction_record_item_name_fallback() {
        let body: TransactionRecordItemBody = serde_json::from_str(
            r#"{"product_id": 9, "quantity": 1, "unit_price": 50.0, "subtotal": 50.0}"#,
        )
        .unwrap();

        let item: TransactionItem = body.into();
        assert_eq!(item.product_name, "#9");
        assert_eq!(item.unit_price_cents, 5000);
        assert_eq!(item.discount_cents, 0);
    }

    #[test]
    fn test_login_response_shape() {
        let response: LoginResponse = serde_json::from_str(
            r#"{
                "token": "eyJhbGciOiJIUzI1NiJ9.abc.def",
                "user": {"id": 3, "username": "jane", "full_name": "Jane Wanjiku", "role": "cashier"}
            }"#,
        )
        .unwrap();

        let user: User = response.user.into();
        assert_eq!(user.full_name, "Jane Wanjiku");
        assert_eq!(user.role, Role::Cashier);
        assert!(!response.token.is_empty());
    }
}
