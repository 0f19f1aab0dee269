//! # Machine State

use serde::{Deserialize, Serialize};
use std::fmt;

/// The state tag of the vending machine.
///
/// ## State Machine
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │            insert_money                 select_product (funded)         │
/// │  ┌─────────┐ ───────────► ┌───────────────┐ ──────────► ┌──────────┐   │
/// │  │ NoMoney │              │ MoneyInserted │             │ Dispense │   │
/// │  └─────────┘ ◄─────────── └───────────────┘ ◄────────── └──────────┘   │
/// │       ▲        refund        │    ▲              reset        │        │
/// │       │   (short/empty/      │    │ insert_money              │        │
/// │       │    unknown rack)     └────┘ (accumulates)             │        │
/// │       └───────────────────────────────────────────────────────┘        │
/// │                                                                         │
/// │  Initial state: NoMoney. No terminal state - the machine cycles.       │
/// │  Dispense is a guard against re-entrant calls during the synchronous   │
/// │  dispense action; nothing suspends inside it.                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineState {
    /// Idle: no money credited this session.
    NoMoney,
    /// Money credited; waiting for a selection (insertions accumulate).
    MoneyInserted,
    /// Dispensing a selection; all operations are rejected.
    Dispense,
}

impl MachineState {
    /// Stable name for logs and messages.
    pub const fn name(&self) -> &'static str {
        match self {
            MachineState::NoMoney => "NoMoney",
            MachineState::MoneyInserted => "MoneyInserted",
            MachineState::Dispense => "Dispense",
        }
    }
}

impl Default for MachineState {
    fn default() -> Self {
        MachineState::NoMoney
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_no_money() {
        assert_eq!(MachineState::default(), MachineState::NoMoney);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(MachineState::NoMoney.to_string(), "NoMoney");
        assert_eq!(MachineState::MoneyInserted.to_string(), "MoneyInserted");
        assert_eq!(MachineState::Dispense.to_string(), "Dispense");
    }
}
