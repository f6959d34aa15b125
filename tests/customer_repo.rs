use customer_db::{
    ConnectionSource, Customer, CustomerRepository, FileSource, MemorySource, RepoError,
    SqliteCustomerRepository,
};
use rusqlite::{params, Connection};
use std::error::Error;

fn insert_customer(conn: &Connection, id: i64, name: &str, address_line1: &str, state: &str) {
    conn.execute(
        "INSERT INTO CUSTOMER (CUSTOMER_ID, NAME, ADDRESSLINE1, STATE)
         VALUES (?1, ?2, ?3, ?4);",
        params![id, name, address_line1, state],
    )
    .unwrap();
}

fn insert_order(conn: &Connection, order_num: i64, customer_id: i64) {
    conn.execute(
        "INSERT INTO PURCHASE_ORDER (ORDER_NUM, CUSTOMER_ID, PRODUCT_ID, QUANTITY)
         VALUES (?1, ?2, 7, 1);",
        params![order_num, customer_id],
    )
    .unwrap();
}

#[test]
fn count_customers_on_fresh_database_is_zero() {
    let source = MemorySource::new().unwrap();
    let repo = SqliteCustomerRepository::new(&source);

    assert_eq!(repo.count_customers().unwrap(), 0);
}

#[test]
fn count_find_delete_scenario_matches_contract() {
    let source = MemorySource::new().unwrap();
    {
        let conn = source.connection().unwrap();
        insert_customer(&conn, 1, "Acme", "1 Main St", "CA");
        insert_customer(&conn, 2, "Beta", "2 Oak Ave", "NY");
    }

    let repo = SqliteCustomerRepository::new(&source);
    assert_eq!(repo.count_customers().unwrap(), 2);

    let customer = repo.find_customer(1).unwrap().unwrap();
    assert_eq!(
        customer,
        Customer {
            customer_id: 1,
            name: "Acme".to_string(),
            address_line1: "1 Main St".to_string(),
        }
    );

    assert_eq!(repo.delete_customer(2).unwrap(), 1);
    assert_eq!(repo.count_customers().unwrap(), 1);
    assert!(repo.find_customer(2).unwrap().is_none());
}

#[test]
fn delete_customer_without_match_returns_zero() {
    let source = MemorySource::new().unwrap();
    let repo = SqliteCustomerRepository::new(&source);

    assert_eq!(repo.delete_customer(42).unwrap(), 0);

    {
        let conn = source.connection().unwrap();
        insert_customer(&conn, 42, "Gamma", "3 Pine Rd", "WA");
    }
    assert_eq!(repo.delete_customer(42).unwrap(), 1);
    assert_eq!(repo.delete_customer(42).unwrap(), 0);
}

#[test]
fn deleted_customer_stops_matching_state_listing() {
    let source = MemorySource::new().unwrap();
    {
        let conn = source.connection().unwrap();
        insert_customer(&conn, 1, "Acme", "1 Main St", "CA");
        insert_customer(&conn, 3, "Delta", "4 Elm St", "CA");
    }

    let repo = SqliteCustomerRepository::new(&source);
    assert_eq!(repo.delete_customer(1).unwrap(), 1);

    let remaining = repo.customers_in_state("CA").unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].customer_id, 3);
    assert!(repo.find_customer(1).unwrap().is_none());
}

#[test]
fn customers_in_state_filters_and_preserves_row_order() {
    let source = MemorySource::new().unwrap();
    {
        let conn = source.connection().unwrap();
        insert_customer(&conn, 1, "Acme", "1 Main St", "CA");
        insert_customer(&conn, 2, "Beta", "2 Oak Ave", "NY");
        insert_customer(&conn, 3, "Delta", "4 Elm St", "CA");
    }

    let repo = SqliteCustomerRepository::new(&source);

    let california = repo.customers_in_state("CA").unwrap();
    let ids: Vec<i64> = california.iter().map(|c| c.customer_id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(california[0].name, "Acme");
    assert_eq!(california[1].address_line1, "4 Elm St");

    let new_york = repo.customers_in_state("NY").unwrap();
    assert_eq!(new_york.len(), 1);
    assert_eq!(new_york[0].customer_id, 2);

    assert!(repo.customers_in_state("TX").unwrap().is_empty());
}

#[test]
fn order_count_is_scoped_to_the_requested_customer() {
    let source = MemorySource::new().unwrap();
    {
        let conn = source.connection().unwrap();
        insert_customer(&conn, 1, "Acme", "1 Main St", "CA");
        insert_customer(&conn, 2, "Beta", "2 Oak Ave", "NY");
        insert_order(&conn, 1001, 1);
        insert_order(&conn, 1002, 1);
        insert_order(&conn, 2001, 2);
    }

    let repo = SqliteCustomerRepository::new(&source);
    assert_eq!(repo.count_orders_for_customer(1).unwrap(), 2);
    assert_eq!(repo.count_orders_for_customer(2).unwrap(), 1);
    assert_eq!(repo.count_orders_for_customer(99).unwrap(), 0);
}

#[test]
fn delete_customer_with_orders_surfaces_operation_failed() {
    let source = MemorySource::new().unwrap();
    {
        let conn = source.connection().unwrap();
        insert_customer(&conn, 1, "Acme", "1 Main St", "CA");
        insert_customer(&conn, 2, "Beta", "2 Oak Ave", "NY");
        insert_order(&conn, 1001, 1);
    }

    let repo = SqliteCustomerRepository::new(&source);
    let err = repo.delete_customer(1).unwrap_err();
    assert!(matches!(err, RepoError::OperationFailed(_)));

    // The failed delete leaves the store untouched.
    assert_eq!(repo.count_customers().unwrap(), 2);
    assert!(repo.find_customer(1).unwrap().is_some());
}

#[test]
fn unavailable_store_surfaces_operation_failed_from_every_operation() {
    let dir = tempfile::tempdir().unwrap();
    // Parent directory does not exist, so every open fails.
    let source = FileSource::new(dir.path().join("missing").join("customers.db"));
    let repo = SqliteCustomerRepository::new(&source);

    let err = repo.count_customers().unwrap_err();
    assert!(matches!(err, RepoError::OperationFailed(_)));
    assert!(err.to_string().contains("operation failed"));
    assert!(err.source().is_some());

    assert!(matches!(
        repo.delete_customer(1).unwrap_err(),
        RepoError::OperationFailed(_)
    ));
    assert!(matches!(
        repo.count_orders_for_customer(1).unwrap_err(),
        RepoError::OperationFailed(_)
    ));
    assert!(matches!(
        repo.find_customer(1).unwrap_err(),
        RepoError::OperationFailed(_)
    ));
    assert!(matches!(
        repo.customers_in_state("CA").unwrap_err(),
        RepoError::OperationFailed(_)
    ));
}

#[test]
fn memory_sources_are_isolated_from_each_other() {
    let first = MemorySource::new().unwrap();
    let second = MemorySource::new().unwrap();
    {
        let conn = first.connection().unwrap();
        insert_customer(&conn, 1, "Acme", "1 Main St", "CA");
    }

    // Data written through one acquisition is visible to later ones.
    let repo_first = SqliteCustomerRepository::new(&first);
    assert_eq!(repo_first.count_customers().unwrap(), 1);

    let repo_second = SqliteCustomerRepository::new(&second);
    assert_eq!(repo_second.count_customers().unwrap(), 0);
}

#[test]
fn file_source_sees_rows_written_through_earlier_acquisitions() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileSource::new(dir.path().join("customers.db"));
    {
        let conn = source.connection().unwrap();
        insert_customer(&conn, 1, "Acme", "1 Main St", "CA");
    }

    let repo = SqliteCustomerRepository::new(&source);
    assert_eq!(repo.count_customers().unwrap(), 1);
    assert_eq!(repo.find_customer(1).unwrap().unwrap().name, "Acme");
}
