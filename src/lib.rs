//! Data-access layer for the CUSTOMER / PURCHASE_ORDER schema.
//! Fixed queries, one connection per call, one error kind.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{open_db, ConnectionSource, DbError, DbResult, FileSource, MemorySource};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::customer::{Customer, CustomerId};
pub use repo::customer_repo::{
    CustomerRepository, RepoError, RepoResult, SqliteCustomerRepository,
};
