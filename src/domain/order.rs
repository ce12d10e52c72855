#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: i32,
    pub name: String,
}

/// An order together with the items linked to it through `item_orders`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderView {
    pub id: i32,
    pub customer_id: i32,
    pub items: Vec<ItemView>,
}
