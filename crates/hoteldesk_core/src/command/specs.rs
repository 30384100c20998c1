//! Declarations of the shipped entry commands.

use super::{CommandSpec, OptionSpec};
use crate::model::fields::FieldValues;
use crate::model::status;
use crate::service::entry_service::{self, Confirmation, EntryResult};
use rusqlite::Connection;

pub static STANDARD_COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "initdb",
        about: "Create all tables if they do not exist yet",
        options: &[],
        handler: run_initdb,
    },
    CommandSpec {
        name: "add_customer",
        about: "Add a customer",
        options: &[
            OptionSpec::text("customername", "Customer Name", "Customer's name"),
            OptionSpec::text("address", "Address", "Customer's address"),
            OptionSpec::text("phoneno", "Phone Number", "Customer's phone number"),
            OptionSpec::text("gender", "Gender", "Customer's gender"),
            OptionSpec::text("status", "Status", "Customer's status").with_default(status::ACTIVE),
        ],
        handler: entry_service::add_customer,
    },
    CommandSpec {
        name: "add_employee",
        about: "Add an employee",
        options: &[
            OptionSpec::text("employeename", "Employee Name", "Employee's name"),
            OptionSpec::text("loginid", "Login ID", "Employee's login ID"),
            OptionSpec::text("emptype", "Employee Type", "Employee's type"),
            OptionSpec::text("status", "Status", "Employee's status").with_default(status::ACTIVE),
        ],
        handler: entry_service::add_employee,
    },
    CommandSpec {
        name: "add_expense",
        about: "Add an expense claimed by an employee",
        options: &[
            OptionSpec::integer("employeeid", "Employee ID", "Employee ID"),
            OptionSpec::text("expensetype", "Expense Type", "Expense type"),
            OptionSpec::text("expensemat", "Expense Amount", "Expense amount"),
            OptionSpec::text("expensedate", "Expense Date", "Expense date (YYYY-MM-DD HH:MM:SS)"),
            OptionSpec::text("status", "Status", "Expense status").with_default(status::PENDING),
        ],
        handler: entry_service::add_expense,
    },
    CommandSpec {
        name: "add_booking",
        about: "Add a room booking",
        options: &[
            OptionSpec::integer("roomid", "Room ID", "Room ID"),
            OptionSpec::integer("customerid", "Customer ID", "Customer ID"),
            OptionSpec::text("bookdate", "Booking Date", "Booking date (YYYY-MM-DD HH:MM:SS)"),
            OptionSpec::text("checkin", "Check-in Date", "Check-in date (YYYY-MM-DD HH:MM:SS)"),
            OptionSpec::text("checkout", "Check-out Date", "Check-out date (YYYY-MM-DD HH:MM:SS)"),
            OptionSpec::text("status", "Status", "Booking status").with_default(status::ACTIVE),
        ],
        handler: entry_service::add_booking,
    },
    CommandSpec {
        name: "add_room",
        about: "Add a room",
        options: &[
            OptionSpec::text("roomtype", "Room Type", "Room type label"),
            OptionSpec::text("roomnumber", "Room number", "Room number"),
            OptionSpec::text("status", "Status", "Room status").with_default(status::ACTIVE),
        ],
        handler: entry_service::add_room,
    },
    CommandSpec {
        name: "add_roomtype",
        about: "Add a room type with its price",
        options: &[
            OptionSpec::text("roomtype", "Room Type", "Room type label"),
            OptionSpec::text("roomprice", "Room Price", "Room price"),
            OptionSpec::text("status", "Status", "Room type status").with_default(status::ACTIVE),
        ],
        handler: entry_service::add_roomtype,
    },
    CommandSpec {
        name: "add_order",
        about: "Add an item order",
        options: &[
            OptionSpec::text("orderid", "Order Id", "Order reference"),
            OptionSpec::text("itemid", "Item Id", "Item reference"),
            OptionSpec::text("bookid", "Book Id", "Booking reference"),
            OptionSpec::text("orderdate", "Order Date", "Order date (YYYY-MM-DD HH:MM:SS)"),
            OptionSpec::text("quantity", "Quantity", "Quantity (integer)"),
            OptionSpec::text("cost", "Cost", "Cost (decimal)"),
            OptionSpec::text("status", "Status", "Order status").with_default(status::ACTIVE),
        ],
        handler: entry_service::add_order,
    },
];

fn run_initdb(conn: &mut Connection, _fields: &FieldValues) -> EntryResult<Confirmation> {
    entry_service::init_db(conn)
}
