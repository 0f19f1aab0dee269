//! # Machine Handle
//!
//! Shares one machine across threads behind a single lock.
//!
//! ## Thread Safety
//! The machine is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple callers (coin slot driver, keypad driver, restock tooling)
//!    may reach the same machine
//! 2. Only one operation may run at a time - every public operation,
//!    including its automatic dispense/refund/reset, must complete before
//!    the next begins
//! 3. One lock around the WHOLE machine is the entire concurrency model;
//!    no finer-grained locking exists because the domain doesn't need it
//!
//! ## Why Not RwLock?
//! Almost every interesting operation mutates (even `insert_money` while
//! idle transitions the state tag). A RwLock would add complexity with
//! minimal benefit.

use std::sync::{Arc, Mutex};

use crate::machine::VendingMachine;

/// Cloneable, thread-safe handle to one [`VendingMachine`].
///
/// All clones refer to the same machine; the embedding application's
/// composition root constructs the machine and hands out handles. There is
/// no global instance.
///
/// ## Usage
/// ```rust
/// use vendo_core::Money;
/// use vendo_machine::{MachineHandle, VendingMachine};
///
/// let handle = MachineHandle::new(VendingMachine::new());
/// let outcome = handle.with_machine_mut(|vm| vm.insert_money(Money::from_cents(100)));
/// let balance = handle.with_machine(|vm| vm.balance());
/// assert_eq!(balance.cents(), 100);
/// # let _ = outcome;
/// ```
#[derive(Debug, Clone)]
pub struct MachineHandle {
    machine: Arc<Mutex<VendingMachine>>,
}

impl MachineHandle {
    /// Wraps a machine in a shareable handle.
    pub fn new(machine: VendingMachine) -> Self {
        MachineHandle {
            machine: Arc::new(Mutex::new(machine)),
        }
    }

    /// Executes a function with read access to the machine.
    pub fn with_machine<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&VendingMachine) -> R,
    {
        let machine = self.machine.lock().expect("Machine mutex poisoned");
        f(&machine)
    }

    /// Executes a function with write access to the machine.
    ///
    /// The lock is held for the entire closure, so an operation and any
    /// follow-up reads inside one closure are atomic with respect to other
    /// handles.
    pub fn with_machine_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut VendingMachine) -> R,
    {
        let mut machine = self.machine.lock().expect("Machine mutex poisoned");
        f(&mut machine)
    }
}

impl Default for MachineHandle {
    fn default() -> Self {
        MachineHandle::new(VendingMachine::new())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
