//! # vendo-machine: The Vending Machine Engine
//!
//! State machine, racks and cash accounting for a single vending machine.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Embedding application                                   │
//! │        (kiosk shell, simulator, test harness, ...)                      │
//! └─────────────────────────────┬───────────────────────────────────────────┘
//! ┌─────────────────────────────▼───────────────────────────────────────────┐
//! │               ★ vendo-machine (THIS CRATE) ★                            │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐          │
//! │   │  machine  │  │ inventory │  │  journal  │  │  handle   │          │
//! │   │  Vending  │  │   Rack    │  │ completed │  │ Arc<Mutex>│          │
//! │   │  Machine  │  │ Inventory │  │   txns    │  │  one lock │          │
//! │   └───────────┘  └───────────┘  └───────────┘  └───────────┘          │
//! └─────────────────────────────┬───────────────────────────────────────────┘
//! ┌─────────────────────────────▼───────────────────────────────────────────┐
//! │                        vendo-core                                       │
//! │              Money, Product, validation, errors                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The State Machine
//! Three states - `NoMoney`, `MoneyInserted`, `Dispense` - with two user
//! operations, `insert_money` and `select_product`. A selection that cannot
//! be satisfied (unknown rack, empty rack, short balance) refunds the FULL
//! session balance; a satisfied one vends a unit, returns change and
//! resets. Wrong-state calls are rejected as outcome values, never errors.
//! See [`state::MachineState`] for the transition diagram.
//!
//! ## Example
//! ```rust
//! use vendo_core::{Money, Product, ProductCategory};
//! use vendo_machine::{Rack, SelectOutcome, VendingMachine};
//!
//! let mut vm = VendingMachine::new();
//! vm.add_rack(Rack::new(1))?;
//! vm.load_product(
//!     1,
//!     Product::new(101, "Chocolate Bar", Money::from_cents(150), ProductCategory::Chocolate),
//!     5,
//! )?;
//!
//! vm.insert_money(Money::from_cents(200));
//! match vm.select_product(1) {
//!     SelectOutcome::Dispensed { change, .. } => assert_eq!(change.cents(), 50),
//!     other => panic!("expected a vend, got {:?}", other),
//! }
//! # Ok::<(), vendo_machine::MachineError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod handle;
pub mod inventory;
pub mod journal;
pub mod machine;
pub mod state;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{MachineError, MachineResult};
pub use handle::MachineHandle;
pub use inventory::{Inventory, Rack, RackSummary};
pub use journal::{Journal, TransactionRecord};
pub use machine::{InsertOutcome, RefundReason, RejectReason, SelectOutcome, VendingMachine};
pub use state::MachineState;
