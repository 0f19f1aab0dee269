//! # vendo-core: Pure Value Layer for Vendo
//!
//! This crate is the bottom layer of the Vendo workspace. It contains the
//! value types the vending machine engine is built on, as pure code with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Vendo Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Embedding application                           │   │
//! │  │        (kiosk shell, simulator, test harness, ...)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                       vendo-machine                             │   │
//! │  │        State machine, racks, journal, MachineHandle             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vendo-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   types   │  │ validation│  │   error   │  │   │
//! │  │   │   Money   │  │  Product  │  │   rules   │  │ Validation│  │   │
//! │  │   │   cents   │  │  Category │  │  checks   │  │   Error   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Catalog types (Product, ProductCategory)
//! - [`error`] - Validation error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, hardware access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use vendo_core::money::Money;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(150); // $1.50
//! let paid = Money::from_cents(200);  // $2.00
//!
//! // Change owed after a vend
//! let change = paid - price;
//! assert_eq!(change.cents(), 50);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vendo_core::Money` instead of
// `use vendo_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use types::{Product, ProductCategory};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum units a single rack may hold.
///
/// ## Business Reason
/// Physical racks have a spiral of finite length; a load that claims more
/// than this is operator error (e.g., typing 1000 instead of 10).
pub const MAX_RACK_QUANTITY: i64 = 999;

/// Maximum length of a product display name.
///
/// ## Business Reason
/// Keeps rack summaries and journal records printable on one line.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
