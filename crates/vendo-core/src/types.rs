//! # Catalog Types
//!
//! Catalog entry types used throughout Vendo.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐            ┌─────────────────┐                    │
//! │  │    Product      │            │ ProductCategory │                    │
//! │  │  ─────────────  │            │  ─────────────  │                    │
//! │  │  id (u32)       │            │  Chocolate      │                    │
//! │  │  name           │───────────►│  Snack          │                    │
//! │  │  price (Money)  │            │  Beverage       │                    │
//! │  │  category       │            │  Other          │                    │
//! │  └─────────────────┘            └─────────────────┘                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Product` is immutable once created: private fields, a constructor and
//! accessors only. Racks clone a product when dispensing, so a catalog entry
//! shared between racks can never be edited through one of them. Id
//! uniqueness across the catalog is the operator's responsibility, not
//! enforced here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Product Category
// =============================================================================

/// The merchandising category of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    /// Chocolate bars and confectionery.
    Chocolate,
    /// Chips, crackers, and other savory snacks.
    Snack,
    /// Canned and bottled drinks.
    Beverage,
    /// Anything that doesn't fit the named categories.
    Other,
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProductCategory::Chocolate => "chocolate",
            ProductCategory::Snack => "snack",
            ProductCategory::Beverage => "beverage",
            ProductCategory::Other => "other",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry: one sellable item.
///
/// ## Design Notes
/// - Fields are private; a `Product` cannot change after construction
/// - Cheap to clone: racks hand out clones when dispensing so the journal
///   keeps an accurate snapshot even if a rack is reloaded later
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: u32,
    name: String,
    price_cents: i64,
    category: ProductCategory,
}

impl Product {
    /// Creates a new catalog entry.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::{Money, Product, ProductCategory};
    ///
    /// let soda = Product::new(103, "Soda Can", Money::from_cents(250), ProductCategory::Beverage);
    /// assert_eq!(soda.price().cents(), 250);
    /// ```
    pub fn new(id: u32, name: impl Into<String>, price: Money, category: ProductCategory) -> Self {
        Product {
            id,
            name: name.into(),
            price_cents: price.cents(),
            category,
        }
    }

    /// Returns the product id.
    #[inline]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price as a Money type.
    #[inline]
    pub const fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the merchandising category.
    #[inline]
    pub const fn category(&self) -> ProductCategory {
        self.category
    }
}

/// Renders like `Soda Can (id=103) @ $2.50` for rack summaries and logs.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id={}) @ {}", self.name, self.id, self.price())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
