//! Record table contract test suite
//!
//! Exercises both in-memory doubles through the `RecordTable` trait, the way
//! persistence code under test sees them.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test table_contract
//!
//! # Single-slot double only
//! cargo test --test table_contract single_slot::
//! ```

#[path = "../common/mod.rs"]
mod common;

mod single_slot;
