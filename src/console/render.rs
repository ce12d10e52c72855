use std::io::{self, Write};

use crate::domain::order::OrderView;

/// Writes `orders` as text lines, naming the customer by the identifier the
/// user typed.
pub fn render_orders<W: Write + ?Sized>(
    out: &mut W,
    customer_id: &str,
    orders: &[OrderView],
) -> io::Result<()> {
    if orders.is_empty() {
        return writeln!(out, "No orders found for the customer with ID {customer_id}.");
    }

    writeln!(out, "\nThe orders for the user with ID {customer_id} are:")?;
    for order in orders {
        writeln!(out, "Order ID: {}", order.id)?;
        for item in &order.items {
            writeln!(out, "Item: {}", item.name)?;
        }
    }
    Ok(())
}
