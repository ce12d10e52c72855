use crate::domain::customer::CustomerId;
use crate::domain::errors::DomainError;
use crate::domain::order::OrderView;
use crate::domain::ports::OrderRepository;

pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates `customer_id_input` and, only if it is a positive integer,
    /// fetches that customer's orders.
    pub fn get_orders_for_customer(
        &self,
        customer_id_input: &str,
    ) -> Result<Vec<OrderView>, DomainError> {
        let customer_id: CustomerId = customer_id_input.parse()?;
        log::debug!("Looking up orders for customer {customer_id}");

        let orders = self.repo.find_by_customer(customer_id)?;
        log::debug!("Customer {customer_id} has {} order(s)", orders.len());
        Ok(orders)
    }
}
