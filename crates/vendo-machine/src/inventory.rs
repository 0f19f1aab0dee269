//! # Inventory Module
//!
//! Racks and the rack collection.
//!
//! ## Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Inventory                                      │
//! │                                                                         │
//! │   rack number ──► ┌──────────────────────────────┐                     │
//! │        1          │ Rack 1: Chocolate Bar ×5     │                     │
//! │        2          │ Rack 2: Potato Chips  ×3     │                     │
//! │        3          │ Rack 3: Soda Can      ×2     │                     │
//! │        4          │ Rack 4: [empty]              │                     │
//! │                   └──────────────────────────────┘                     │
//! │                                                                         │
//! │  A rack holds AT MOST ONE product type at a time. Reloading a rack     │
//! │  with a different product rebinds it; the machine layer logs that      │
//! │  case because any old stock count is kept (see load()).                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Racks are installed once at setup and never removed. Lookup of an
//! unknown rack returns `None` rather than failing so the state machine can
//! treat unknown racks exactly like empty ones.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use vendo_core::Product;

use crate::error::{MachineError, MachineResult};

// =============================================================================
// Rack
// =============================================================================

/// A single product rack (one spiral in the machine).
///
/// ## Invariants
/// - `quantity >= 0`
/// - `quantity > 0` implies a product is bound
/// - Mutated only through [`Rack::load`] and [`Rack::dispense_one`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rack {
    number: u32,
    product: Option<Product>,
    quantity: i64,
}

impl Rack {
    /// Creates an empty rack with the given number.
    pub fn new(number: u32) -> Self {
        Rack {
            number,
            product: None,
            quantity: 0,
        }
    }

    /// Returns the rack number.
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Returns the current unit count.
    #[inline]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Returns the currently bound product without mutation.
    ///
    /// `None` if the rack was never loaded.
    #[inline]
    pub fn peek(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// True iff the rack has no stock.
    ///
    /// A rack that was never loaded is empty, and so is one vended down
    /// to zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.quantity <= 0
    }

    /// Loads `quantity` units of `product` into the rack.
    ///
    /// Binds `product` as the rack's current product, overwriting any prior
    /// binding, and ADDS `quantity` to the existing count. If old stock of a
    /// different product remained, the count is kept but every future
    /// dispense hands out the new product - a rack holds one product type
    /// at a time. The machine layer warns when that case occurs.
    ///
    /// ## Contract
    /// `quantity` has already passed `validate_load_quantity` (>= 0); the
    /// administrative surface rejects negative loads before reaching here.
    pub fn load(&mut self, product: Product, quantity: i64) {
        self.product = Some(product);
        self.quantity += quantity;
    }

    /// Removes one unit if any stock remains.
    ///
    /// Silent no-op on an empty rack - callers check [`Rack::is_empty`]
    /// first; the state machine refunds instead of dispensing from an
    /// empty rack.
    pub fn dispense_one(&mut self) {
        if self.quantity > 0 {
            self.quantity -= 1;
        }
    }
}

/// Renders like `Rack 3: Soda Can (id=103) @ $2.50 ×2`, or `Rack 4 [empty]`
/// when no product was ever loaded.
impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.product {
            None => write!(f, "Rack {} [empty]", self.number),
            Some(p) => write!(f, "Rack {}: {} ×{}", self.number, p, self.quantity),
        }
    }
}

// =============================================================================
// Rack Summary
// =============================================================================

/// Read-only snapshot of one rack for inventory display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RackSummary {
    pub number: u32,
    /// Bound product, if the rack was ever loaded.
    pub product: Option<Product>,
    pub quantity: i64,
}

impl From<&Rack> for RackSummary {
    fn from(rack: &Rack) -> Self {
        RackSummary {
            number: rack.number,
            product: rack.product.clone(),
            quantity: rack.quantity,
        }
    }
}

impl fmt::Display for RackSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.product {
            None => write!(f, "Rack {} [empty]", self.number),
            Some(p) => write!(f, "Rack {}: {} ×{}", self.number, p, self.quantity),
        }
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// The collection of installed racks, addressed by rack number.
///
/// ## Why BTreeMap?
/// Inventory listings must come out in a stable order run after run;
/// a BTreeMap iterates in ascending rack-number order for free.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    racks: BTreeMap<u32, Rack>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory {
            racks: BTreeMap::new(),
        }
    }

    /// Installs a rack.
    ///
    /// ## Errors
    /// `DuplicateRack` if a rack with the same number is already installed.
    /// Installation is setup-time only; overwriting a live rack would drop
    /// its stock on the floor.
    pub fn add_rack(&mut self, rack: Rack) -> MachineResult<()> {
        let number = rack.number();
        if self.racks.contains_key(&number) {
            return Err(MachineError::DuplicateRack { rack: number });
        }
        self.racks.insert(number, rack);
        Ok(())
    }

    /// Looks up a rack by number.
    ///
    /// Returns `None` for unknown numbers; the state machine treats those
    /// like empty racks (refund, not panic).
    #[inline]
    pub fn rack(&self, number: u32) -> Option<&Rack> {
        self.racks.get(&number)
    }

    /// Mutable lookup, for load and dispense.
    #[inline]
    pub fn rack_mut(&mut self, number: u32) -> Option<&mut Rack> {
        self.racks.get_mut(&number)
    }

    /// Iterates all racks in ascending rack-number order.
    pub fn racks(&self) -> impl Iterator<Item = &Rack> {
        self.racks.values()
    }

    /// Number of installed racks.
    pub fn len(&self) -> usize {
        self.racks.len()
    }

    /// True iff no racks are installed.
    pub fn is_empty(&self) -> bool {
        self.racks.is_empty()
    }

    /// Snapshots every rack for display, in ascending rack-number order.
    pub fn summaries(&self) -> Vec<RackSummary> {
        self.racks.values().map(RackSummary::from).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
