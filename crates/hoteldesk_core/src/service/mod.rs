//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate parsing and repository calls into command-level APIs.
//! - Keep the CLI decoupled from storage details.

pub mod entry_service;
