//! # Validation Module
//!
//! Input validation rules for Vendo.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Type system                                                  │
//! │  ├── Rack numbers are u32, quantities are i64, prices are Money        │
//! │  └── Nonsense shapes never compile                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - value validation                               │
//! │  ├── Catalog entries checked at construction sites                     │
//! │  └── Administrative inputs checked before racks are touched            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Machine state rules (vendo-machine)                          │
//! │  └── Wrong-state operations rejected as outcome values                 │
//! │                                                                         │
//! │  Defense in depth: each layer catches different mistakes               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vendo_core::validation::{validate_insert_amount, validate_load_quantity};
//! use vendo_core::Money;
//!
//! // Validate a coin/bill amount before crediting the session
//! validate_insert_amount(Money::from_cents(100)).unwrap();
//!
//! // Validate a restock quantity before touching the rack
//! validate_load_quantity(5).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::{MAX_PRODUCT_NAME_LEN, MAX_RACK_QUANTITY};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use vendo_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Soda Can").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Monetary Validators
// =============================================================================

/// Validates a product price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional free vend)
///
/// ## Example
/// ```rust
/// use vendo_core::validation::validate_price;
/// use vendo_core::Money;
///
/// assert!(validate_price(Money::from_cents(250)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an inserted cash amount.
///
/// ## Rules
/// - Must be strictly positive (> 0)
/// - Zero and negative insertions are operator/driver errors, not payments
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  insert_money(amount)                                                   │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_insert_amount(amount) ← THIS FUNCTION                        │
/// │       │                                                                 │
/// │       ├── amount <= 0? → rejected, session balance untouched           │
/// │       │                                                                 │
/// │       └── OK → credited to the session balance                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_insert_amount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a restock quantity.
///
/// ## Rules
/// - Must be non-negative (a zero-quantity load just (re)binds the product)
/// - Must not exceed MAX_RACK_QUANTITY (999)
///
/// Negative quantities are rejected rather than ignored so a typo surfaces
/// at the load site instead of silently leaving the rack unchanged.
pub fn validate_load_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_RACK_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_RACK_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Soda Can").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(250)).is_ok());
        assert!(validate_price(Money::zero()).is_ok()); // Free vend
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_insert_amount() {
        assert!(validate_insert_amount(Money::from_cents(1)).is_ok());
        assert!(validate_insert_amount(Money::from_cents(500)).is_ok());

        assert!(validate_insert_amount(Money::zero()).is_err());
        assert!(validate_insert_amount(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_load_quantity() {
        assert!(validate_load_quantity(0).is_ok()); // Bind product, no stock
        assert!(validate_load_quantity(5).is_ok());
        assert!(validate_load_quantity(999).is_ok());

        assert!(validate_load_quantity(-1).is_err());
        assert!(validate_load_quantity(1000).is_err());
    }
}
