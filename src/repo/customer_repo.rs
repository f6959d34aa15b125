//! Customer repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Execute the five fixed queries over CUSTOMER and PURCHASE_ORDER.
//! - Map result rows into [`Customer`] records.
//! - Translate every underlying failure into [`RepoError::OperationFailed`].
//!
//! # Invariants
//! - Each operation acquires one connection from the source and drops it
//!   before returning, on success and failure alike.
//! - Parameters are always bound, never concatenated into SQL text.
//! - No operation retries; failures are reported to the caller immediately.

use crate::db::{ConnectionSource, DbError};
use crate::model::customer::{Customer, CustomerId};
use log::error;
use rusqlite::{Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const COUNT_CUSTOMERS_SQL: &str = "SELECT COUNT(*) AS NUMBER FROM CUSTOMER";
const DELETE_CUSTOMER_SQL: &str = "DELETE FROM CUSTOMER WHERE CUSTOMER_ID = ?";
const COUNT_ORDERS_SQL: &str =
    "SELECT COUNT(*) AS NUMBERORDERS FROM PURCHASE_ORDER WHERE CUSTOMER_ID = ?";
const FIND_CUSTOMER_SQL: &str = "SELECT * FROM CUSTOMER WHERE CUSTOMER_ID = ?";
const CUSTOMERS_IN_STATE_SQL: &str = "SELECT * FROM CUSTOMER WHERE STATE = ?";

pub type RepoResult<T> = Result<T, RepoError>;

/// Single application-level error for repository operations.
///
/// There is deliberately no finer error taxonomy: connection acquisition,
/// statement execution and row mapping failures all collapse into one kind.
/// The underlying failure stays reachable through `Error::source`.
#[derive(Debug)]
pub enum RepoError {
    OperationFailed(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperationFailed(err) => {
                write!(f, "customer repository operation failed: {err}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OperationFailed(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::OperationFailed(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::OperationFailed(DbError::Sqlite(value))
    }
}

/// Repository interface for the fixed customer/order queries.
///
/// Each call is one request/response round trip; the repository keeps no
/// state between invocations.
pub trait CustomerRepository {
    /// Counts all CUSTOMER rows.
    fn count_customers(&self) -> RepoResult<i64>;
    /// Deletes one customer by id; returns rows affected (0 or 1).
    fn delete_customer(&self, customer_id: CustomerId) -> RepoResult<usize>;
    /// Counts PURCHASE_ORDER rows belonging to one customer.
    fn count_orders_for_customer(&self, customer_id: CustomerId) -> RepoResult<i64>;
    /// Loads one customer by id. `None` when no row matches.
    fn find_customer(&self, customer_id: CustomerId) -> RepoResult<Option<Customer>>;
    /// Lists customers in a two-letter state, in store row order.
    fn customers_in_state(&self, state: &str) -> RepoResult<Vec<Customer>>;
}

/// SQLite-backed customer repository over a connection source.
pub struct SqliteCustomerRepository<'src, S> {
    source: &'src S,
}

impl<'src, S: ConnectionSource> SqliteCustomerRepository<'src, S> {
    pub fn new(source: &'src S) -> Self {
        Self { source }
    }

    /// Runs one operation against a freshly acquired connection.
    ///
    /// The connection is dropped before this returns on every path, and a
    /// failed operation logs one diagnostic line at the boundary.
    fn with_connection<T>(
        &self,
        event: &'static str,
        run: impl FnOnce(&Connection) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let started_at = Instant::now();
        let result = match self.source.connection() {
            Ok(conn) => run(&conn),
            Err(err) => Err(RepoError::from(err)),
        };

        if let Err(err) = &result {
            error!(
                "event={event} module=repo status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
        }

        result
    }
}

impl<S: ConnectionSource> CustomerRepository for SqliteCustomerRepository<'_, S> {
    fn count_customers(&self) -> RepoResult<i64> {
        self.with_connection("customer_count", |conn| {
            let count: i64 = conn.query_row(COUNT_CUSTOMERS_SQL, [], |row| row.get("NUMBER"))?;
            Ok(count)
        })
    }

    fn delete_customer(&self, customer_id: CustomerId) -> RepoResult<usize> {
        self.with_connection("customer_delete", |conn| {
            let deleted = conn.execute(DELETE_CUSTOMER_SQL, [customer_id])?;
            Ok(deleted)
        })
    }

    fn count_orders_for_customer(&self, customer_id: CustomerId) -> RepoResult<i64> {
        self.with_connection("customer_order_count", |conn| {
            let count: i64 = conn.query_row(COUNT_ORDERS_SQL, [customer_id], |row| {
                row.get("NUMBERORDERS")
            })?;
            Ok(count)
        })
    }

    fn find_customer(&self, customer_id: CustomerId) -> RepoResult<Option<Customer>> {
        self.with_connection("customer_find", |conn| {
            let mut stmt = conn.prepare(FIND_CUSTOMER_SQL)?;
            let mut rows = stmt.query([customer_id])?;
            if let Some(row) = rows.next()? {
                return Ok(Some(parse_customer_row(row)?));
            }
            Ok(None)
        })
    }

    fn customers_in_state(&self, state: &str) -> RepoResult<Vec<Customer>> {
        self.with_connection("customers_in_state", |conn| {
            let mut stmt = conn.prepare(CUSTOMERS_IN_STATE_SQL)?;
            let mut rows = stmt.query([state])?;
            let mut customers = Vec::new();

            while let Some(row) = rows.next()? {
                customers.push(parse_customer_row(row)?);
            }

            Ok(customers)
        })
    }
}

fn parse_customer_row(row: &Row<'_>) -> RepoResult<Customer> {
    Ok(Customer {
        customer_id: row.get("CUSTOMER_ID")?,
        name: row.get("NAME")?,
        address_line1: row.get("ADDRESSLINE1")?,
    })
}
