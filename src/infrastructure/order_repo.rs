use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::customer::CustomerId;
use crate::domain::errors::DomainError;
use crate::domain::order::{ItemView, OrderView};
use crate::domain::ports::OrderRepository;
use crate::schema::{item_orders, items, orders};

use super::models::OrderItemRow;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::result::Error::DatabaseError(..) => DomainError::Lookup(e.to_string()),
            other => DomainError::Internal(other.to_string()),
        }
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Lookup(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = orders::table
            .left_join(item_orders::table.left_join(items::table))
            .filter(orders::customer_id.eq(customer_id.get()))
            .order_by((orders::id.asc(), items::id.asc()))
            .select((
                orders::id,
                orders::customer_id,
                items::id.nullable(),
                items::name.nullable(),
            ))
            .load::<OrderItemRow>(&mut conn)?;

        Ok(assemble_orders(rows))
    }
}

/// Folds joined rows into one view per order. `rows` must be sorted by order
/// id so that all rows of an order are adjacent.
fn assemble_orders(rows: Vec<OrderItemRow>) -> Vec<OrderView> {
    let mut orders: Vec<OrderView> = Vec::new();

    for row in rows {
        if orders.last().map_or(true, |o| o.id != row.order_id) {
            orders.push(OrderView {
                id: row.order_id,
                customer_id: row.customer_id,
                items: Vec::new(),
            });
        }
        if let (Some(id), Some(name), Some(order)) = (row.item_id, row.item_name, orders.last_mut())
        {
            order.items.push(ItemView { id, name });
        }
    }

    orders
}
