//! Read models for the customer/order schema.
//!
//! # Responsibility
//! - Define the plain records returned by repository queries.
//!
//! # Invariants
//! - Records are built only from fully-populated result rows and carry no
//!   storage handles.

pub mod customer;
