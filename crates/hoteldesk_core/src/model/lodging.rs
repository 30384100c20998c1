//! Rooms, room pricing categories and bookings.
//!
//! # Invariants
//! - `Room::room_type` is a free-text label, not a link to `RoomType`.
//! - Booking dates are not ordered against each other; a checkout before the
//!   check-in is stored as given.

use super::fields::{FieldError, FieldValues};
use super::status;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Physical room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_type: String,
    pub room_number: String,
    pub status: String,
}

impl Room {
    pub fn from_fields(fields: &FieldValues) -> Result<Self, FieldError> {
        Ok(Self {
            room_type: fields.text("roomtype")?,
            room_number: fields.text("roomnumber")?,
            status: fields.text_or("status", status::ACTIVE),
        })
    }
}

/// Pricing category for rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub room_type: String,
    pub room_price: f64,
    pub status: String,
}

impl RoomType {
    pub fn from_fields(fields: &FieldValues) -> Result<Self, FieldError> {
        Ok(Self {
            room_type: fields.text("roomtype")?,
            room_price: fields.real("roomprice")?,
            status: fields.text_or("status", status::ACTIVE),
        })
    }
}

/// Reservation of one room by one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub room_id: i64,
    pub customer_id: i64,
    pub book_date: NaiveDateTime,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub status: String,
}

impl Booking {
    /// Builds a booking from `add_booking` options.
    ///
    /// All three dates must use the strict timestamp pattern.
    pub fn from_fields(fields: &FieldValues) -> Result<Self, FieldError> {
        Ok(Self {
            room_id: fields.integer("roomid")?,
            customer_id: fields.integer("customerid")?,
            book_date: fields.timestamp("bookdate")?,
            check_in: fields.timestamp("checkin")?,
            check_out: fields.timestamp("checkout")?,
            status: fields.text_or("status", status::ACTIVE),
        })
    }
}
