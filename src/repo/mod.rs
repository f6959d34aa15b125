//! Repository layer: data-access contracts and SQLite implementation.
//!
//! # Responsibility
//! - Define the fixed customer/order query surface.
//! - Isolate SQL and connection handling from callers.
//!
//! # Invariants
//! - One connection per operation, released on every exit path.
//! - Every underlying failure surfaces as the single repository error kind.

pub mod customer_repo;
