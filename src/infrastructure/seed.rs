//! Fixture builders and the sample data loaded into a fresh database.

use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::schema::{customers, item_orders, items, orders};

use super::models::{
    CustomerRow, ItemOrderRow, ItemRow, NewCustomerRow, NewItemRow, NewOrderRow, OrderRow,
};

pub fn create_customer(conn: &mut PgConnection, name: &str) -> QueryResult<CustomerRow> {
    diesel::insert_into(customers::table)
        .values(&NewCustomerRow { name })
        .returning(CustomerRow::as_returning())
        .get_result(conn)
}

/// Inserts one item per name; the result keeps the order of `names`.
pub fn create_items(conn: &mut PgConnection, names: &[&str]) -> QueryResult<Vec<ItemRow>> {
    let new_items: Vec<NewItemRow> = names.iter().map(|&name| NewItemRow { name }).collect();
    diesel::insert_into(items::table)
        .values(&new_items)
        .returning(ItemRow::as_returning())
        .get_results(conn)
}

/// Creates an order for `customer_id` and links it to every id in `item_ids`.
pub fn create_order(
    conn: &mut PgConnection,
    customer_id: i32,
    item_ids: &[i32],
) -> QueryResult<OrderRow> {
    conn.transaction(|conn| {
        let order = diesel::insert_into(orders::table)
            .values(&NewOrderRow { customer_id })
            .returning(OrderRow::as_returning())
            .get_result(conn)?;

        if !item_ids.is_empty() {
            let links: Vec<ItemOrderRow> = item_ids
                .iter()
                .map(|&item_id| ItemOrderRow {
                    order_id: order.id,
                    item_id,
                })
                .collect();
            diesel::insert_into(item_orders::table)
                .values(&links)
                .execute(conn)?;
        }

        Ok(order)
    })
}

/// Loads the sample customers, items and orders unless customers already
/// exist. Returns whether anything was inserted.
pub fn seed_sample_data(conn: &mut PgConnection) -> QueryResult<bool> {
    conn.transaction(|conn| {
        let existing: i64 = customers::table.count().get_result(conn)?;
        if existing > 0 {
            log::info!("Customers table already populated ({existing} rows), skipping seed");
            return Ok(false);
        }

        let john = create_customer(conn, "John Doe")?;
        let jane = create_customer(conn, "Jane Smith")?;
        let catalog = create_items(conn, &["Laptop", "Smartphone", "Headphones"])?;
        let (laptop, smartphone, headphones) = (catalog[0].id, catalog[1].id, catalog[2].id);

        create_order(conn, john.id, &[laptop, smartphone])?;
        create_order(conn, john.id, &[])?;
        create_order(conn, jane.id, &[laptop, headphones])?;

        log::info!("Seeded sample customers, items and orders");
        Ok(true)
    })
}

#[cfg(test)]
mod tests {
    use diesel::prelude::*;

    use super::seed_sample_data;
    use crate::schema::{customers, item_orders, orders};
    use crate::testing::setup_db;

    #[tokio::test]
    async fn seeding_runs_once() {
        let (_container, pool) = setup_db().await;
        let mut conn = pool.get().expect("Failed to get connection");

        assert!(seed_sample_data(&mut conn).expect("first seed failed"));
        assert!(!seed_sample_data(&mut conn).expect("second seed failed"));

        let customer_count: i64 = customers::table.count().get_result(&mut conn).unwrap();
        let order_count: i64 = orders::table.count().get_result(&mut conn).unwrap();
        let link_count: i64 = item_orders::table.count().get_result(&mut conn).unwrap();
        assert_eq!(customer_count, 2);
        assert_eq!(order_count, 3);
        assert_eq!(link_count, 4);
    }
}
