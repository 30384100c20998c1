use hoteldesk_core::db::open_db_in_memory;
use hoteldesk_core::service::entry_service::{
    add_booking, add_customer, add_employee, add_expense, add_order, add_room, add_roomtype,
};
use hoteldesk_core::{
    Booking, CommandRegistry, Confirmation, Customer, EntityKind, EntryError, ErrorKind, Expense,
    FieldValues, Order, Record, RecordRepository, Room, RoomType, SqliteRecordRepository,
};
use rusqlite::Connection;

fn count<T: Record>(conn: &Connection) -> u64 {
    SqliteRecordRepository::new(conn).count::<T>().unwrap()
}

fn booking_fields() -> FieldValues {
    FieldValues::new()
        .with("roomid", "101")
        .with("customerid", "1")
        .with("bookdate", "2024-07-01 09:15:00")
        .with("checkin", "2024-07-10 14:00:00")
        .with("checkout", "2024-07-12 11:00:00")
        .with("status", "active")
}

fn order_fields(cost: &str) -> FieldValues {
    FieldValues::new()
        .with("orderid", "ORD-77")
        .with("itemid", "ITEM-3")
        .with("bookid", "5")
        .with("orderdate", "  2024-07-11 20:00:00  ")
        .with("quantity", "3")
        .with("cost", cost)
        .with("status", "active")
}

#[test]
fn add_customer_persists_fields_with_active_status() {
    let mut conn = open_db_in_memory().unwrap();
    let fields = FieldValues::new()
        .with("customername", "Grace Hopper")
        .with("address", "1 Navy Yard")
        .with("phoneno", "555-0199")
        .with("gender", "female");

    let confirmation = add_customer(&mut conn, &fields).unwrap();
    assert_eq!(confirmation.to_string(), "Customer added successfully.");

    let customers = SqliteRecordRepository::new(&conn)
        .list::<Customer>()
        .unwrap();
    assert_eq!(customers.len(), 1);
    let stored = &customers[0];
    assert_eq!(
        confirmation,
        Confirmation::Added {
            kind: EntityKind::Customer,
            id: stored.id,
        }
    );
    assert_eq!(stored.record.name, "Grace Hopper");
    assert_eq!(stored.record.address, "1 Navy Yard");
    assert_eq!(stored.record.phone_no, "555-0199");
    assert_eq!(stored.record.gender, "female");
    assert_eq!(stored.record.status, "active");
}

#[test]
fn add_room_reads_back_exactly_one_row() {
    let mut conn = open_db_in_memory().unwrap();
    let fields = FieldValues::new()
        .with("roomtype", "Deluxe")
        .with("roomnumber", "101");

    add_room(&mut conn, &fields).unwrap();

    let rooms = SqliteRecordRepository::new(&conn).list::<Room>().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(
        rooms[0].record,
        Room {
            room_type: "Deluxe".to_string(),
            room_number: "101".to_string(),
            status: "active".to_string(),
        }
    );
}

#[test]
fn repeated_commands_create_additional_rows() {
    let mut conn = open_db_in_memory().unwrap();
    let fields = FieldValues::new()
        .with("employeename", "Polly")
        .with("loginid", "polly")
        .with("emptype", "waitress");

    let first = add_employee(&mut conn, &fields).unwrap();
    let second = add_employee(&mut conn, &fields).unwrap();

    assert_ne!(first, second);
    assert_eq!(count::<hoteldesk_core::Employee>(&conn), 2);
}

#[test]
fn bad_dates_are_rejected_without_creating_rows() {
    let mut conn = open_db_in_memory().unwrap();
    let bad_dates = [
        "2024-07-10",
        "10/07/2024 14:00:00",
        "2024-07-10T14:00:00",
        "",
        "2024-07-1014:00:00",
        "2024- 7-10 14:00:00",
        "2024-07-10   14:00:00",
        "2024-07-10 14:00:60",
    ];

    for bad in bad_dates {
        let err = add_booking(&mut conn, &booking_fields().with("checkin", bad)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse, "booking accepted `{bad}`");

        let expense = FieldValues::new()
            .with("employeeid", "1")
            .with("expensetype", "fuel")
            .with("expensemat", "30")
            .with("expensedate", bad);
        let err = add_expense(&mut conn, &expense).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse, "expense accepted `{bad}`");

        let err = add_order(&mut conn, &order_fields("10").with("orderdate", bad)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse, "order accepted `{bad}`");
    }

    assert_eq!(count::<Booking>(&conn), 0);
    assert_eq!(count::<Expense>(&conn), 0);
    assert_eq!(count::<Order>(&conn), 0);
}

#[test]
fn booking_date_with_padding_is_rejected_but_order_date_is_trimmed() {
    let mut conn = open_db_in_memory().unwrap();

    let padded = booking_fields().with("bookdate", " 2024-07-01 09:15:00");
    assert!(matches!(
        add_booking(&mut conn, &padded),
        Err(EntryError::Parse(err)) if err.field() == "bookdate"
    ));

    add_order(&mut conn, &order_fields("19.99")).unwrap();
    assert_eq!(count::<Order>(&conn), 1);
}

#[test]
fn order_coerces_quantity_and_cost() {
    let mut conn = open_db_in_memory().unwrap();

    add_order(&mut conn, &order_fields("19.99")).unwrap();

    let orders = SqliteRecordRepository::new(&conn).list::<Order>().unwrap();
    let order = &orders[0].record;
    assert_eq!(order.quantity, 3);
    assert!((order.cost - 19.99).abs() < f64::EPSILON);
    assert_eq!(order.order_ref, "ORD-77");
    assert_eq!(order.book_ref, "5");
    assert_eq!(
        order.order_date.format("%Y-%m-%d %H:%M:%S").to_string(),
        "2024-07-11 20:00:00"
    );
}

#[test]
fn non_numeric_cost_aborts_without_row() {
    let mut conn = open_db_in_memory().unwrap();

    let err = add_order(&mut conn, &order_fields("nineteen")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.to_string().contains("--cost"));
    assert_eq!(count::<Order>(&conn), 0);
}

#[test]
fn checkout_before_checkin_is_accepted() {
    let mut conn = open_db_in_memory().unwrap();
    let fields = booking_fields()
        .with("checkin", "2024-07-12 14:00:00")
        .with("checkout", "2024-07-10 11:00:00");

    let confirmation = add_booking(&mut conn, &fields).unwrap();
    assert_eq!(confirmation.to_string(), "Booking added successfully!");

    let bookings = SqliteRecordRepository::new(&conn).list::<Booking>().unwrap();
    assert_eq!(bookings.len(), 1);
    assert!(bookings[0].record.check_out < bookings[0].record.check_in);
}

#[test]
fn booking_ids_are_stored_without_referential_checks() {
    let mut conn = open_db_in_memory().unwrap();

    add_booking(&mut conn, &booking_fields().with("customerid", "9999")).unwrap();

    let bookings = SqliteRecordRepository::new(&conn).list::<Booking>().unwrap();
    assert_eq!(bookings[0].record.customer_id, 9999);
    assert_eq!(bookings[0].record.room_id, 101);
}

#[test]
fn expense_and_room_type_store_parsed_amounts() {
    let mut conn = open_db_in_memory().unwrap();
    let expense = FieldValues::new()
        .with("employeeid", "2")
        .with("expensetype", "laundry")
        .with("expensemat", "42.50")
        .with("expensedate", "2024-06-02 10:00:00");
    let room_type = FieldValues::new()
        .with("roomtype", "Suite")
        .with("roomprice", "249.00")
        .with("status", "seasonal");

    add_expense(&mut conn, &expense).unwrap();
    add_roomtype(&mut conn, &room_type).unwrap();

    let repo = SqliteRecordRepository::new(&conn);
    let expenses = repo.list::<Expense>().unwrap();
    assert_eq!(expenses[0].record.status, "pending");
    assert!((expenses[0].record.amount - 42.5).abs() < f64::EPSILON);

    let room_types = repo.list::<RoomType>().unwrap();
    assert_eq!(room_types[0].record.status, "seasonal");
    assert!((room_types[0].record.room_price - 249.0).abs() < f64::EPSILON);
}

#[test]
fn storage_failures_surface_as_connection_errors_and_roll_back() {
    let mut conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE rooms;").unwrap();

    let fields = FieldValues::new()
        .with("roomtype", "Deluxe")
        .with("roomnumber", "101");
    let err = add_room(&mut conn, &fields).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connection);
    assert!(conn.is_autocommit(), "session left a transaction open");
}

#[test]
fn constraint_failures_are_classified_and_roll_back() {
    let mut conn = open_db_in_memory().unwrap();
    conn.execute_batch("CREATE UNIQUE INDEX rooms_number_unique ON rooms (room_number);")
        .unwrap();
    let fields = FieldValues::new()
        .with("roomtype", "Deluxe")
        .with("roomnumber", "101");

    add_room(&mut conn, &fields).unwrap();
    let err = add_room(&mut conn, &fields).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
    assert!(conn.is_autocommit());
    assert_eq!(count::<Room>(&conn), 1);
}

#[test]
fn registry_handlers_dispatch_to_their_entities() {
    let mut conn = open_db_in_memory().unwrap();
    let registry = CommandRegistry::standard().unwrap();

    let order = registry.get("add_order").unwrap();
    let confirmation = order.run(&mut conn, &order_fields("4.25")).unwrap();
    assert_eq!(confirmation.to_string(), "Order added successfully.");

    let customer = registry.get("add_customer").unwrap();
    let fields = FieldValues::new()
        .with("customername", "Manuel")
        .with("address", "Barcelona")
        .with("phoneno", "555-0100")
        .with("gender", "male")
        .with("status", "active");
    customer.run(&mut conn, &fields).unwrap();

    assert_eq!(count::<Order>(&conn), 1);
    assert_eq!(count::<Customer>(&conn), 1);
}
