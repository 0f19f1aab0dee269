//! # Transaction Journal
//!
//! In-memory record of completed transactions.
//!
//! ## What Gets Recorded
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Transaction Journal                                 │
//! │                                                                         │
//! │  select_product ──► dispense ──► Vend   { product, paid, change }      │
//! │                 └─► refund   ──► Refund { amount, reason }             │
//! │                                                                         │
//! │  Exactly one record per completed transaction (the span between the    │
//! │  first insertion and the dispense-or-refund that resets the session).  │
//! │  Rejected calls do not complete a transaction and are not recorded.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The journal is process-lifetime only; persistence is out of scope for
//! this machine. Records carry a UUID and a UTC timestamp so an embedding
//! application can ship them to its own storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vendo_core::Money;

// =============================================================================
// Transaction Record
// =============================================================================

/// One completed transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransactionRecord {
    /// A product was dispensed.
    Vend {
        id: Uuid,
        rack: u32,
        product_id: u32,
        /// Product name at time of vend (frozen - racks can be reloaded).
        product_name: String,
        price: Money,
        paid: Money,
        change: Money,
        completed_at: DateTime<Utc>,
    },
    /// The full session balance was returned.
    Refund {
        id: Uuid,
        /// The rack whose selection failed.
        rack: u32,
        amount: Money,
        /// Human-readable cause ("rack 3 is empty", ...).
        reason: String,
        refunded_at: DateTime<Utc>,
    },
}

impl TransactionRecord {
    /// Builds a vend record stamped now.
    pub fn vend(
        rack: u32,
        product_id: u32,
        product_name: impl Into<String>,
        price: Money,
        paid: Money,
        change: Money,
    ) -> Self {
        TransactionRecord::Vend {
            id: Uuid::new_v4(),
            rack,
            product_id,
            product_name: product_name.into(),
            price,
            paid,
            change,
            completed_at: Utc::now(),
        }
    }

    /// Builds a refund record stamped now.
    pub fn refund(rack: u32, amount: Money, reason: impl Into<String>) -> Self {
        TransactionRecord::Refund {
            id: Uuid::new_v4(),
            rack,
            amount,
            reason: reason.into(),
            refunded_at: Utc::now(),
        }
    }

    /// True for vend records.
    pub const fn is_vend(&self) -> bool {
        matches!(self, TransactionRecord::Vend { .. })
    }

    /// True for refund records.
    pub const fn is_refund(&self) -> bool {
        matches!(self, TransactionRecord::Refund { .. })
    }
}

// =============================================================================
// Journal
// =============================================================================

/// Append-only list of completed transactions, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<TransactionRecord>,
}

impl Journal {
    /// Creates an empty journal.
    pub fn new() -> Self {
        Journal {
            entries: Vec::new(),
        }
    }

    /// Appends a record.
    pub fn record(&mut self, record: TransactionRecord) {
        self.entries.push(record);
    }

    /// All records, oldest first.
    pub fn entries(&self) -> &[TransactionRecord] {
        &self.entries
    }

    /// Number of completed transactions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff nothing has completed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_read_back() {
        let mut journal = Journal::new();
        assert!(journal.is_empty());

        journal.record(TransactionRecord::vend(
            1,
            101,
            "Chocolate Bar",
            Money::from_cents(150),
            Money::from_cents(200),
            Money::from_cents(50),
        ));
        journal.record(TransactionRecord::refund(
            3,
            Money::from_cents(100),
            "rack 3 is empty",
        ));

        assert_eq!(journal.len(), 2);
        assert!(journal.entries()[0].is_vend());
        assert!(journal.entries()[1].is_refund());
    }

    #[test]
    fn test_vend_record_fields() {
        let record = TransactionRecord::vend(
            2,
            102,
            "Potato Chips",
            Money::from_cents(200),
            Money::from_cents(300),
            Money::from_cents(100),
        );
        match record {
            TransactionRecord::Vend {
                rack,
                product_id,
                product_name,
                price,
                paid,
                change,
                ..
            } => {
                assert_eq!(rack, 2);
                assert_eq!(product_id, 102);
                assert_eq!(product_name, "Potato Chips");
                assert_eq!(price.cents(), 200);
                assert_eq!(paid.cents(), 300);
                assert_eq!(change.cents(), 100);
            }
            TransactionRecord::Refund { .. } => panic!("expected a vend record"),
        }
    }

    #[test]
    fn test_record_serializes_with_kind_tag() {
        let record = TransactionRecord::refund(3, Money::from_cents(250), "rack 3 is empty");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "refund");
        assert_eq!(json["rack"], 3);
        assert_eq!(json["amount"], 250);
        assert_eq!(json["reason"], "rack 3 is empty");
    }
}
