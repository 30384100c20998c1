//! Money-bearing records: expenses, orders, items and payments.
//!
//! `Item` and `Payment` are part of the schema but no entry command creates
//! them.

use super::fields::{FieldError, FieldValues};
use super::status;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Expense claimed by an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub employee_id: i64,
    pub expense_type: String,
    pub amount: f64,
    pub expense_date: NaiveDateTime,
    pub status: String,
}

impl Expense {
    /// Builds an expense from `add_expense` options.
    ///
    /// Status defaults to `pending` rather than `active`.
    pub fn from_fields(fields: &FieldValues) -> Result<Self, FieldError> {
        Ok(Self {
            employee_id: fields.integer("employeeid")?,
            expense_type: fields.text("expensetype")?,
            amount: fields.real("expensemat")?,
            expense_date: fields.timestamp("expensedate")?,
            status: fields.text_or("status", status::PENDING),
        })
    }
}

/// Item order placed against a booking.
///
/// `order_ref`, `item_ref` and `book_ref` are operator-supplied references
/// kept as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_ref: String,
    pub item_ref: String,
    pub book_ref: String,
    pub order_date: NaiveDateTime,
    pub quantity: i64,
    pub cost: f64,
    pub status: String,
}

impl Order {
    /// Builds an order from `add_order` options.
    ///
    /// The order date is trimmed before parsing.
    pub fn from_fields(fields: &FieldValues) -> Result<Self, FieldError> {
        Ok(Self {
            order_ref: fields.text("orderid")?,
            item_ref: fields.text("itemid")?,
            book_ref: fields.text("bookid")?,
            order_date: fields.trimmed_timestamp("orderdate")?,
            quantity: fields.integer("quantity")?,
            cost: fields.real("cost")?,
            status: fields.text_or("status", status::ACTIVE),
        })
    }
}

/// Sellable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    pub status: String,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            status: status::ACTIVE.to_string(),
        }
    }
}

/// Payment received for a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub book_id: i64,
    pub amount: f64,
    pub payment_date: NaiveDateTime,
    pub status: String,
}

impl Payment {
    pub fn new(book_id: i64, amount: f64, payment_date: NaiveDateTime) -> Self {
        Self {
            book_id,
            amount,
            payment_date,
            status: status::ACTIVE.to_string(),
        }
    }
}
