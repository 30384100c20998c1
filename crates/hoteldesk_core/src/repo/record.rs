//! Table mapping for every schema entity.
//!
//! # Responsibility
//! - Name the table and insert columns of each entity.
//! - Bind entity values for inserts and decode rows on reads.
//!
//! # Invariants
//! - `COLUMNS` order matches `to_values()` order.
//! - `id` is never bound on insert; SQLite assigns it.
//! - Read paths reject malformed timestamps instead of masking them.

use crate::db::DbError;
use crate::model::fields::{format_timestamp, parse_timestamp};
use crate::model::ledger::{Expense, Item, Order, Payment};
use crate::model::lodging::{Booking, Room, RoomType};
use crate::model::people::{Customer, Employee};
use crate::model::EntityKind;
use chrono::NaiveDateTime;
use rusqlite::types::Value;
use rusqlite::Row;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entity persistence and read-back.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("{0}")]
    Db(#[from] DbError),
    #[error("invalid persisted data: {0}")]
    InvalidData(String),
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// An entity stored as one row of one table.
pub trait Record: Sized {
    const KIND: EntityKind;
    const TABLE: &'static str;
    /// Insert columns, excluding `id`.
    const COLUMNS: &'static [&'static str];

    fn to_values(&self) -> Vec<Value>;
    fn from_row(row: &Row<'_>) -> RepoResult<Self>;
}

pub(crate) fn insert_sql<T: Record>() -> String {
    let placeholders = (1..=T::COLUMNS.len())
        .map(|index| format!("?{index}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({placeholders});",
        T::TABLE,
        T::COLUMNS.join(", ")
    )
}

pub(crate) fn select_sql<T: Record>() -> String {
    format!(
        "SELECT id, {} FROM {} ORDER BY id ASC;",
        T::COLUMNS.join(", "),
        T::TABLE
    )
}

fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

fn timestamp(value: &NaiveDateTime) -> Value {
    Value::Text(format_timestamp(value))
}

fn read_timestamp(row: &Row<'_>, table: &str, column: &'static str) -> RepoResult<NaiveDateTime> {
    let raw: String = row.get(column)?;
    parse_timestamp(column, &raw).map_err(|_| {
        RepoError::InvalidData(format!("invalid timestamp `{raw}` in {table}.{column}"))
    })
}

impl Record for Customer {
    const KIND: EntityKind = EntityKind::Customer;
    const TABLE: &'static str = "customers";
    const COLUMNS: &'static [&'static str] =
        &["customer_name", "address", "phone_no", "gender", "status"];

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.name),
            text(&self.address),
            text(&self.phone_no),
            text(&self.gender),
            text(&self.status),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            name: row.get("customer_name")?,
            address: row.get("address")?,
            phone_no: row.get("phone_no")?,
            gender: row.get("gender")?,
            status: row.get("status")?,
        })
    }
}

impl Record for Employee {
    const KIND: EntityKind = EntityKind::Employee;
    const TABLE: &'static str = "employees";
    const COLUMNS: &'static [&'static str] = &["employee_name", "login_id", "emp_type", "status"];

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.name),
            text(&self.login_id),
            text(&self.emp_type),
            text(&self.status),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            name: row.get("employee_name")?,
            login_id: row.get("login_id")?,
            emp_type: row.get("emp_type")?,
            status: row.get("status")?,
        })
    }
}

impl Record for Expense {
    const KIND: EntityKind = EntityKind::Expense;
    const TABLE: &'static str = "expenses";
    const COLUMNS: &'static [&'static str] = &[
        "employee_id",
        "expense_type",
        "amount",
        "expense_date",
        "status",
    ];

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.employee_id),
            text(&self.expense_type),
            Value::Real(self.amount),
            timestamp(&self.expense_date),
            text(&self.status),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            employee_id: row.get("employee_id")?,
            expense_type: row.get("expense_type")?,
            amount: row.get("amount")?,
            expense_date: read_timestamp(row, Self::TABLE, "expense_date")?,
            status: row.get("status")?,
        })
    }
}

impl Record for Booking {
    const KIND: EntityKind = EntityKind::Booking;
    const TABLE: &'static str = "bookings";
    const COLUMNS: &'static [&'static str] = &[
        "room_id",
        "customer_id",
        "book_date",
        "check_in",
        "check_out",
        "status",
    ];

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.room_id),
            Value::Integer(self.customer_id),
            timestamp(&self.book_date),
            timestamp(&self.check_in),
            timestamp(&self.check_out),
            text(&self.status),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            room_id: row.get("room_id")?,
            customer_id: row.get("customer_id")?,
            book_date: read_timestamp(row, Self::TABLE, "book_date")?,
            check_in: read_timestamp(row, Self::TABLE, "check_in")?,
            check_out: read_timestamp(row, Self::TABLE, "check_out")?,
            status: row.get("status")?,
        })
    }
}

impl Record for Room {
    const KIND: EntityKind = EntityKind::Room;
    const TABLE: &'static str = "rooms";
    const COLUMNS: &'static [&'static str] = &["room_type", "room_number", "status"];

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.room_type),
            text(&self.room_number),
            text(&self.status),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            room_type: row.get("room_type")?,
            room_number: row.get("room_number")?,
            status: row.get("status")?,
        })
    }
}

impl Record for RoomType {
    const KIND: EntityKind = EntityKind::RoomType;
    const TABLE: &'static str = "room_types";
    const COLUMNS: &'static [&'static str] = &["room_type", "room_price", "status"];

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.room_type),
            Value::Real(self.room_price),
            text(&self.status),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            room_type: row.get("room_type")?,
            room_price: row.get("room_price")?,
            status: row.get("status")?,
        })
    }
}

impl Record for Order {
    const KIND: EntityKind = EntityKind::Order;
    const TABLE: &'static str = "orders";
    const COLUMNS: &'static [&'static str] = &[
        "order_ref",
        "item_ref",
        "book_ref",
        "order_date",
        "quantity",
        "cost",
        "status",
    ];

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.order_ref),
            text(&self.item_ref),
            text(&self.book_ref),
            timestamp(&self.order_date),
            Value::Integer(self.quantity),
            Value::Real(self.cost),
            text(&self.status),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            order_ref: row.get("order_ref")?,
            item_ref: row.get("item_ref")?,
            book_ref: row.get("book_ref")?,
            order_date: read_timestamp(row, Self::TABLE, "order_date")?,
            quantity: row.get("quantity")?,
            cost: row.get("cost")?,
            status: row.get("status")?,
        })
    }
}

impl Record for Item {
    const KIND: EntityKind = EntityKind::Item;
    const TABLE: &'static str = "items";
    const COLUMNS: &'static [&'static str] = &["item_name", "item_price", "status"];

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.name),
            Value::Real(self.price),
            text(&self.status),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            name: row.get("item_name")?,
            price: row.get("item_price")?,
            status: row.get("status")?,
        })
    }
}

impl Record for Payment {
    const KIND: EntityKind = EntityKind::Payment;
    const TABLE: &'static str = "payments";
    const COLUMNS: &'static [&'static str] = &["book_id", "amount", "payment_date", "status"];

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.book_id),
            Value::Real(self.amount),
            timestamp(&self.payment_date),
            text(&self.status),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            book_id: row.get("book_id")?,
            amount: row.get("amount")?,
            payment_date: read_timestamp(row, Self::TABLE, "payment_date")?,
            status: row.get("status")?,
        })
    }
}
