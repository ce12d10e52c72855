use diesel::prelude::*;

use crate::schema::{customers, item_orders, items, orders};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = customers)]
pub struct NewCustomerRow<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ItemRow {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = items)]
pub struct NewItemRow<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i32,
    pub customer_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub customer_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = item_orders)]
pub struct ItemOrderRow {
    pub order_id: i32,
    pub item_id: i32,
}

/// One row of `orders LEFT JOIN item_orders LEFT JOIN items`. The item
/// columns are null for orders without any linked item.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct OrderItemRow {
    pub order_id: i32,
    pub customer_id: i32,
    pub item_id: Option<i32>,
    pub item_name: Option<String>,
}
