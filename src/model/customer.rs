//! Customer read model.
//!
//! # Responsibility
//! - Mirror the CUSTOMER columns consumed by repository queries.
//!
//! # Invariants
//! - `customer_id` is the table's primary key and never changes for a row.
//! - Instances are plain data owned by the caller; there is no link back to
//!   the connection that produced them.

use serde::{Deserialize, Serialize};

/// Stable customer identifier (`CUSTOMER.CUSTOMER_ID`).
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CustomerId = i64;

/// One CUSTOMER row as consumed by this crate.
///
/// The table carries more columns (CITY, STATE, ZIP); queries only ever read
/// these three, so the record stays at three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Primary key.
    pub customer_id: CustomerId,
    /// Display name.
    pub name: String,
    /// First address line.
    pub address_line1: String,
}
