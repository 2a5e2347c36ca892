//! # Command Parsing
//!
//! Turns a typed line into a [`Command`]. Arguments are validated here with
//! the core validation rules, so handlers only ever see well-formed input.
//!
//! ## Grammar
//! ```text
//! line     := word [rest]
//! word     := first whitespace-delimited token (case-insensitive)
//! rest     := remainder of the line, trimmed
//! ```
//!
//! The tender amount is deliberately NOT validated here: the checkout
//! coordinator treats unparseable tender text as zero at confirmation time,
//! so free text must be allowed through.

use duka_core::validation::{
    parse_product_id, parse_quantity, validate_barcode, validate_search_query,
};
use duka_core::{PaymentMethod, ValidationError};

/// A parsed till command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `products` - list the catalog.
    Products,
    /// `search <text>` - search products by name or SKU.
    Search { query: String },
    /// `scan <barcode>` - look up a barcode and ring it into the cart.
    Scan { barcode: String },
    /// `add <product-id>` - ring a listed product into the cart.
    Add { product_id: i64 },
    /// `qty <product-id> <n>` - set a line's quantity exactly (n <= 0 removes).
    Quantity { product_id: i64, quantity: i64 },
    /// `rm <product-id>` - remove a line.
    Remove { product_id: i64 },
    /// `cart` - show the cart with totals.
    ShowCart,
    /// `clear` - empty the cart.
    ClearCart,
    /// `checkout` - open the payment screen.
    Checkout,
    /// `method cash|card|mobile` - switch payment method.
    Method { method: PaymentMethod },
    /// `tender <amount>` - enter the cash amount handed over.
    Tender { input: String },
    /// `pay` - confirm and submit the transaction.
    Pay,
    /// `cancel` - close the payment screen, keeping the cart.
    Cancel,
    /// `history` - recent settled transactions.
    History,
    /// `trans <id>` - one settled transaction with its items.
    Transaction { id: i64 },
    /// `whoami` - the signed-in operator.
    Whoami,
    /// `help` - command overview.
    Help,
    /// `quit` - end the session.
    Quit,
}

/// Why a line did not parse.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the command list.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl Command {
    /// Parses a non-empty input line.
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let trimmed = input.trim();
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (trimmed, ""),
        };

        match word.to_lowercase().as_str() {
            "products" => Ok(Command::Products),
            "search" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("search <text>"));
                }
                Ok(Command::Search {
                    query: validate_search_query(rest)?,
                })
            }
            "scan" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("scan <barcode>"));
                }
                Ok(Command::Scan {
                    barcode: validate_barcode(rest)?,
                })
            }
            "add" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("add <product-id>"));
                }
                Ok(Command::Add {
                    product_id: parse_product_id(rest)?,
                })
            }
            "qty" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(id), Some(qty), None) => Ok(Command::Quantity {
                        product_id: parse_product_id(id)?,
                        quantity: parse_quantity(qty)?,
                    }),
                    _ => Err(CommandError::Usage("qty <product-id> <quantity>")),
                }
            }
            "rm" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("rm <product-id>"));
                }
                Ok(Command::Remove {
                    product_id: parse_product_id(rest)?,
                })
            }
            "cart" => Ok(Command::ShowCart),
            "clear" => Ok(Command::ClearCart),
            "checkout" => Ok(Command::Checkout),
            "method" => match rest.to_lowercase().as_str() {
                "cash" => Ok(Command::Method {
                    method: PaymentMethod::Cash,
                }),
                "card" => Ok(Command::Method {
                    method: PaymentMethod::Card,
                }),
                "mobile" | "mobile_money" | "mpesa" => Ok(Command::Method {
                    method: PaymentMethod::MobileMoney,
                }),
                _ => Err(CommandError::Usage("method cash|card|mobile")),
            },
            "tender" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("tender <amount>"));
                }
                Ok(Command::Tender {
                    input: rest.to_string(),
                })
            }
            "pay" => Ok(Command::Pay),
            "cancel" => Ok(Command::Cancel),
            "history" => Ok(Command::History),
            "trans" => rest
                .parse::<i64>()
                .map(|id| Command::Transaction { id })
                .map_err(|_| CommandError::Usage("trans <transaction-id>")),
            "whoami" => Ok(Command::Whoami),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_commands() {
        assert_eq!(Command::parse("products"), Ok(Command::Products));
        assert_eq!(Command::parse("cart"), Ok(Command::ShowCart));
        assert_eq!(Command::parse("checkout"), Ok(Command::Checkout));
        assert_eq!(Command::parse("pay"), Ok(Command::Pay));
        assert_eq!(Command::parse("cancel"), Ok(Command::Cancel));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
        assert_eq!(Command::parse("?"), Ok(Command::Help));
    }

    #[test]
    fn test_case_and_whitespace_tolerance() {
        assert_eq!(Command::parse("  PRODUCTS  "), Ok(Command::Products));
        assert_eq!(
            Command::parse("Add   7"),
            Ok(Command::Add { product_id: 7 })
        );
    }

    #[test]
    fn test_search_keeps_full_text() {
        assert_eq!(
            Command::parse("search maize flour"),
            Ok(Command::Search {
                query: "maize flour".to_string()
            })
        );
        assert_eq!(
            Command::parse("search"),
            Err(CommandError::Usage("search <text>"))
        );
    }

    #[test]
    fn test_scan_validates_barcode() {
        assert_eq!(
            Command::parse("scan 5901234123457"),
            Ok(Command::Scan {
                barcode: "5901234123457".to_string()
            })
        );
        assert!(matches!(
            Command::parse("scan 59-01"),
            Err(CommandError::Invalid(_))
        ));
    }

    #[test]
    fn test_qty_needs_two_arguments() {
        assert_eq!(
            Command::parse("qty 7 3"),
            Ok(Command::Quantity {
                product_id: 7,
                quantity: 3
            })
        );
        assert_eq!(
            Command::parse("qty 7"),
            Err(CommandError::Usage("qty <product-id> <quantity>"))
        );
        assert_eq!(
            Command::parse("qty 7 3 9"),
            Err(CommandError::Usage("qty <product-id> <quantity>"))
        );
    }

    #[test]
    fn test_qty_rejects_fractional() {
        assert!(matches!(
            Command::parse("qty 7 2.5"),
            Err(CommandError::Invalid(ValidationError::InvalidFormat { .. }))
        ));
    }

    #[test]
    fn test_qty_zero_and_negative_parse() {
        // Zero and negative reach the cart, which treats them as removal
        assert_eq!(
            Command::parse("qty 7 0"),
            Ok(Command::Quantity {
                product_id: 7,
                quantity: 0
            })
        );
        assert_eq!(
            Command::parse("qty 7 -2"),
            Ok(Command::Quantity {
                product_id: 7,
                quantity: -2
            })
        );
    }

    #[test]
    fn test_method_variants() {
        assert_eq!(
            Command::parse("method cash"),
            Ok(Command::Method {
                method: PaymentMethod::Cash
            })
        );
        assert_eq!(
            Command::parse("method CARD"),
            Ok(Command::Method {
                method: PaymentMethod::Card
            })
        );
        assert_eq!(
            Command::parse("method mpesa"),
            Ok(Command::Method {
                method: PaymentMethod::MobileMoney
            })
        );
        assert_eq!(
            Command::parse("method cheque"),
            Err(CommandError::Usage("method cash|card|mobile"))
        );
    }

    #[test]
    fn test_tender_passes_text_through() {
        // Even nonsense is accepted here; the coordinator deals with it
        assert_eq!(
            Command::parse("tender 300.50"),
            Ok(Command::Tender {
                input: "300.50".to_string()
            })
        );
        assert_eq!(
            Command::parse("tender lots"),
            Ok(Command::Tender {
                input: "lots".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Command::parse("frobnicate"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
    }
}
