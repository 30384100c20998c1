//! Hotel desk domain model.
//!
//! # Responsibility
//! - Define one typed value per table-backed entity.
//! - Build entity values from raw command fields, rejecting malformed input
//!   before anything reaches storage.
//!
//! # Invariants
//! - Row ids are owned by the storage engine; entity values never carry one.
//! - Cross-entity ids are plain values with no referential check.
//! - `status` is free text; only its default differs per entity.

pub mod fields;
pub mod ledger;
pub mod lodging;
pub mod people;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Storage-assigned row identifier.
pub type RowId = i64;

/// Default status values applied when no `--status` is given.
pub mod status {
    pub const ACTIVE: &str = "active";
    pub const PENDING: &str = "pending";
}

/// Every entity kind declared by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Customer,
    Employee,
    Expense,
    Booking,
    Room,
    RoomType,
    Order,
    Item,
    Payment,
}

impl EntityKind {
    /// Stable snake_case name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Employee => "employee",
            Self::Expense => "expense",
            Self::Booking => "booking",
            Self::Room => "room",
            Self::RoomType => "room_type",
            Self::Order => "order",
            Self::Item => "item",
            Self::Payment => "payment",
        }
    }

    /// Operator-facing label used in confirmations.
    pub fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Employee => "Employee",
            Self::Expense => "Expense",
            Self::Booking => "Booking",
            Self::Room => "Room",
            Self::RoomType => "Room Type",
            Self::Order => "Order",
            Self::Item => "Item",
            Self::Payment => "Payment",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A committed entity together with its storage-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: RowId,
    #[serde(flatten)]
    pub record: T,
}
