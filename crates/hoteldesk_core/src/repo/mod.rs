//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Map typed entities onto their SQLite tables.
//! - Isolate SQL details from command orchestration.
//!
//! # Invariants
//! - Entity writes go through a [`session::Session`] so they commit or roll
//!   back as one unit.

pub mod record;
pub mod record_repo;
pub mod session;
