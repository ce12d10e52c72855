use super::customer::CustomerId;
use super::errors::DomainError;
use super::order::OrderView;

pub trait OrderRepository: Send + Sync + 'static {
    /// All orders owned by `customer_id`, each with its items, sorted by
    /// order id and then item id. Unknown customers yield an empty vector.
    fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<OrderView>, DomainError>;
}
