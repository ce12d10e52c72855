//! Shared test doubles and database setup for unit tests.

use std::sync::{Arc, Mutex};

use diesel_migrations::MigrationHarness;
use order_viewer_test_utils::start_postgres;
use testcontainers::{ContainerAsync, GenericImage};

use crate::db::{create_pool, DbPool};
use crate::domain::customer::CustomerId;
use crate::domain::errors::DomainError;
use crate::domain::order::{ItemView, OrderView};
use crate::domain::ports::OrderRepository;

/// Fresh migrated database in a throwaway container.
pub async fn setup_db() -> (ContainerAsync<GenericImage>, DbPool) {
    let (container, url) = start_postgres().await;
    let pool = create_pool(&url);
    {
        let mut conn = pool.get().expect("Failed to get connection");
        conn.run_pending_migrations(crate::MIGRATIONS)
            .expect("Failed to run migrations");
    }
    (container, pool)
}

pub fn order(id: i32, customer_id: i32, items: &[(i32, &str)]) -> OrderView {
    OrderView {
        id,
        customer_id,
        items: items
            .iter()
            .map(|&(id, name)| ItemView {
                id,
                name: name.to_string(),
            })
            .collect(),
    }
}

/// Repository over a fixed set of orders that records every lookup.
pub struct InMemoryOrderRepository {
    orders: Vec<OrderView>,
    calls: Arc<Mutex<Vec<CustomerId>>>,
}

impl InMemoryOrderRepository {
    pub fn new(orders: Vec<OrderView>) -> Self {
        Self {
            orders,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<CustomerId>>> {
        Arc::clone(&self.calls)
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<OrderView>, DomainError> {
        self.calls.lock().unwrap().push(customer_id);
        Ok(self
            .orders
            .iter()
            .filter(|o| o.customer_id == customer_id.get())
            .cloned()
            .collect())
    }
}

/// Repository whose every lookup fails with the given error constructor.
pub struct FailingOrderRepository(pub fn(String) -> DomainError);

impl OrderRepository for FailingOrderRepository {
    fn find_by_customer(&self, _customer_id: CustomerId) -> Result<Vec<OrderView>, DomainError> {
        Err((self.0)("database unreachable".to_string()))
    }
}
