//! Customer and employee records.

use super::fields::{FieldError, FieldValues};
use super::status;
use serde::{Deserialize, Serialize};

/// Hotel guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub address: String,
    pub phone_no: String,
    pub gender: String,
    pub status: String,
}

impl Customer {
    /// Builds a customer from `add_customer` options.
    pub fn from_fields(fields: &FieldValues) -> Result<Self, FieldError> {
        Ok(Self {
            name: fields.text("customername")?,
            address: fields.text("address")?,
            phone_no: fields.text("phoneno")?,
            gender: fields.text("gender")?,
            status: fields.text_or("status", status::ACTIVE),
        })
    }
}

/// Staff member with a login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub login_id: String,
    pub emp_type: String,
    pub status: String,
}

impl Employee {
    /// Builds an employee from `add_employee` options.
    pub fn from_fields(fields: &FieldValues) -> Result<Self, FieldError> {
        Ok(Self {
            name: fields.text("employeename")?,
            login_id: fields.text("loginid")?,
            emp_type: fields.text("emptype")?,
            status: fields.text_or("status", status::ACTIVE),
        })
    }
}
